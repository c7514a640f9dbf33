//! Configuration loading for labnote.
//!
//! Reads `labnote.toml` into [`ConfigFile`] and rejects values the renderer
//! cannot draw with. Every key is optional; a missing file is not this
//! crate's concern, callers decide whether to fall back to defaults.

use labnote_error::LabnoteError;
use labnote_types::{ConfigFile, ReportConfig};
use std::path::Path;
use tracing::debug;

/// Conventional file name looked up by callers.
pub const CONFIG_FILE_NAME: &str = "labnote.toml";

/// Parse and validate a config document.
pub fn parse_config(text: &str) -> Result<ConfigFile, LabnoteError> {
    let config: ConfigFile = toml::from_str(text)?;
    validate(&config)?;
    Ok(config)
}

/// Read, parse and validate a config file.
pub fn load_config(path: &Path) -> Result<ConfigFile, LabnoteError> {
    debug!(path = %path.display(), "loading config");
    let text = std::fs::read_to_string(path)?;
    parse_config(&text)
}

/// Load `path` when it exists, otherwise return the defaults.
pub fn load_config_or_default(path: &Path) -> Result<ConfigFile, LabnoteError> {
    if path.exists() {
        load_config(path)
    } else {
        debug!(path = %path.display(), "config file not found, using defaults");
        Ok(ConfigFile::default())
    }
}

pub fn validate(config: &ConfigFile) -> Result<(), LabnoteError> {
    validate_report(&config.report)
}

fn validate_report(report: &ReportConfig) -> Result<(), LabnoteError> {
    if report.bar_scale == 0 {
        return Err(LabnoteError::InvalidConfig(
            "report.bar_scale must be at least 1".to_string(),
        ));
    }
    if report.default_magnitude == 0 {
        return Err(LabnoteError::InvalidConfig(
            "report.default_magnitude must be at least 1".to_string(),
        ));
    }
    if !(1..=100).contains(&report.percentile_step) {
        return Err(LabnoteError::InvalidConfig(format!(
            "report.percentile_step must be between 1 and 100, not {}",
            report.percentile_step
        )));
    }
    Ok(())
}
