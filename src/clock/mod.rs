//! Hours/minutes/seconds durations with normalization and clamped arithmetic.

pub mod hms;
pub mod operator;
pub mod value;

pub use hms::Hms;
pub use operator::Operator;
pub use value::DurationValue;
