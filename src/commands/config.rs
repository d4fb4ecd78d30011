use crate::OutputFormat;
use crate::config::Config;
use anyhow::{Context, Result};

/// Effective configuration as TOML, or as one JSON object with `--format json`.
pub fn render(config: &Config, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            toml::to_string_pretty(config).context("Failed to serialize config")
        }
        OutputFormat::Json => serde_json::to_string(config).context("Failed to serialize config"),
    }
}

pub fn list(config: &Config, format: OutputFormat) -> Result<()> {
    println!("{}", render(config, format)?.trim_end());
    Ok(())
}

/// Look up a dotted key such as `logging.level`.
pub fn lookup(key: &str, config: &Config) -> Result<String> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .with_context(|| format!("Key not found: {}", part))?;
    }

    Ok(match current {
        serde_json::Value::String(s) => s.clone(),
        v => v.to_string(),
    })
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    println!("{}", lookup(key, config)?);
    Ok(())
}
