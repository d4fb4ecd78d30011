use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field handed to `DurationValue::create` was rejected.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("unknown operator '{0}', expected one of: +, -, add, sub, subtract")]
    UnknownOperator(String),
}

impl Error {
    pub(crate) fn negative_time() -> Self {
        Error::InvalidArgument("time cannot be negative".to_string())
    }
}
