use super::hms::{Hms, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use super::operator::Operator;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::ops::{Add, Sub};

/// A non-negative hours/minutes/seconds duration.
///
/// Fields are stored exactly as given, so `DurationValue::create(20, 0, 738)`
/// keeps `seconds == 738`. Normalization happens whenever the value is
/// rendered or combined and never touches the stored fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationValue {
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl DurationValue {
    /// Build a value from raw fields. Any negative field is rejected with
    /// [`Error::InvalidArgument`].
    pub fn create(hours: i64, minutes: i64, seconds: i64) -> Result<Self> {
        if hours < 0 || minutes < 0 || seconds < 0 {
            tracing::debug!(hours, minutes, seconds, "rejected negative duration");
            return Err(Error::negative_time());
        }

        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    pub fn hours(&self) -> i64 {
        self.hours
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn total_seconds(&self) -> i128 {
        i128::from(self.hours) * SECONDS_PER_HOUR
            + i128::from(self.minutes) * SECONDS_PER_MINUTE
            + i128::from(self.seconds)
    }

    pub fn normalized(&self) -> Hms {
        Hms::from_total_seconds(self.total_seconds())
    }

    /// Render as `HH:MM:SS`.
    pub fn to_display_string(&self) -> String {
        self.normalized().to_string()
    }

    /// Sum of both durations, rendered.
    pub fn add(&self, other: &DurationValue) -> String {
        self.combined_hms(other, Operator::Add).to_string()
    }

    /// Difference of both durations, rendered. Negative results clamp to
    /// `00:00:00`.
    pub fn subtract(&self, other: &DurationValue) -> String {
        self.combined_hms(other, Operator::Subtract).to_string()
    }

    /// Like [`add`](Self::add)/[`subtract`](Self::subtract) but keeps the
    /// result as a normalized value so it can be combined again.
    ///
    /// Hours that do not fit in `i64` saturate at `i64::MAX`; use
    /// [`combined_hms`](Self::combined_hms) for the exact result.
    pub fn combined(&self, other: &DurationValue, op: Operator) -> DurationValue {
        let hms = self.combined_hms(other, op);
        Self {
            hours: i64::try_from(hms.hours()).unwrap_or(i64::MAX),
            minutes: i64::from(hms.minutes()),
            seconds: i64::from(hms.seconds()),
        }
    }

    /// Exact normalized result of `self op other`, clamped at zero.
    pub fn combined_hms(&self, other: &DurationValue, op: Operator) -> Hms {
        let total = op.apply(self.total_seconds(), other.total_seconds());
        if total < 0 {
            tracing::warn!(
                lhs = %self,
                rhs = %other,
                total,
                "negative duration clamped to zero"
            );
        } else {
            tracing::debug!(lhs = %self, rhs = %other, op = %op, total, "combined durations");
        }
        Hms::from_total_seconds(total)
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.normalized(), f)
    }
}

impl Add for &DurationValue {
    type Output = DurationValue;

    fn add(self, rhs: &DurationValue) -> DurationValue {
        self.combined(rhs, Operator::Add)
    }
}

impl Sub for &DurationValue {
    type Output = DurationValue;

    fn sub(self, rhs: &DurationValue) -> DurationValue {
        self.combined(rhs, Operator::Subtract)
    }
}
