pub mod clock;
pub mod commands;
pub mod config;
pub mod error;

pub use clock::{DurationValue, Hms, Operator};
pub use error::Error;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
