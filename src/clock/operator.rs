use crate::error::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How two durations are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    pub fn apply(self, lhs: i128, rhs: i128) -> i128 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" | "plus" => Ok(Operator::Add),
            "-" | "sub" | "subtract" | "minus" => Ok(Operator::Subtract),
            other => Err(Error::UnknownOperator(other.to_string())),
        }
    }
}
