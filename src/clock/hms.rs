use std::fmt;
use serde::Serialize;

pub const SECONDS_PER_MINUTE: i128 = 60;
pub const SECONDS_PER_HOUR: i128 = 3600;

/// Canonical (hours, minutes, seconds) triple.
///
/// Minutes and seconds are always in `[0, 60)`. Hours are unbounded; there is
/// no day wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Hms {
    pub hours: i128,
    pub minutes: u8,
    pub seconds: u8,
}

impl Hms {
    /// Normalize a total number of seconds. Negative totals clamp to zero.
    pub fn from_total_seconds(total: i128) -> Self {
        if total < 0 {
            return Self::default();
        }

        let hours = total / SECONDS_PER_HOUR;
        let rest = total % SECONDS_PER_HOUR;

        Self {
            hours,
            minutes: (rest / SECONDS_PER_MINUTE) as u8,
            seconds: (rest % SECONDS_PER_MINUTE) as u8,
        }
    }

    pub fn hours(&self) -> i128 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn total_seconds(&self) -> i128 {
        self.hours * SECONDS_PER_HOUR
            + i128::from(self.minutes) * SECONDS_PER_MINUTE
            + i128::from(self.seconds)
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            pad_field(self.hours),
            pad_field(self.minutes),
            pad_field(self.seconds)
        )
    }
}

/// Left-pad with a single zero only when the decimal form is one character.
/// Wider fields (e.g. 100+ hours) are printed at natural width.
fn pad_field(value: impl fmt::Display) -> String {
    let digits = value.to_string();
    if digits.len() == 1 {
        format!("0{}", digits)
    } else {
        digits
    }
}
