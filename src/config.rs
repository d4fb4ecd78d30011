use crate::OutputFormat;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    /// Default for `--format` when the flag is not given
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Validate the level as an `EnvFilter` directive
    pub fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            anyhow::bail!("Log level must not be empty");
        }
        EnvFilter::try_new(&self.level)
            .with_context(|| format!("Invalid log level '{}'", self.level))?;
        Ok(())
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        Ok(())
    }

    /// Effective log level: the `--log-level` flag if given, else the config.
    ///
    /// The flag goes through the same validation as the config value.
    pub fn log_level(&self, flag: Option<&str>) -> Result<String> {
        match flag {
            Some(level) => {
                let logging = LoggingConfig {
                    level: level.to_string(),
                };
                logging.validate().context("Invalid --log-level")?;
                Ok(logging.level)
            }
            None => Ok(self.logging.level.clone()),
        }
    }
}

pub fn default_path() -> Result<PathBuf> {
    let config_dir = home::home_dir()
        .context("Could not find home directory")?
        .join(".hms-clock");
    Ok(config_dir.join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;

    config.validate()?;
    Ok(config)
}

/// Load from `path`, or from `~/.hms-clock/config.toml` when `None`.
///
/// A missing file is not an error; defaults are used instead.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_path()?,
    };

    if !path.exists() {
        return Ok(Config::default());
    }

    load_from_path(&path)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml_string).context("Failed to write config file")?;

    Ok(())
}
