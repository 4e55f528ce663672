//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::PlacerConfig;
use std::path::Path;

/// Name of the configuration file looked up in a run directory.
pub const CONFIG_FILE_NAME: &str = "cellplace.toml";

/// Loads and validates `cellplace.toml` from a directory.
pub fn load_config(dir: &Path) -> Result<PlacerConfig, ConfigError> {
    load_config_file(&dir.join(CONFIG_FILE_NAME))
}

/// Like [`load_config`], but a directory without `cellplace.toml` yields the
/// default configuration.
pub fn load_config_or_default(dir: &Path) -> Result<PlacerConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        load_config_file(&path)
    } else {
        Ok(PlacerConfig::default())
    }
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<PlacerConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<PlacerConfig, ConfigError> {
    let config: PlacerConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks that every annealing knob is usable.
///
/// Called after loading and again after command-line overrides are applied.
pub fn validate_config(config: &PlacerConfig) -> Result<(), ConfigError> {
    let anneal = &config.anneal;
    non_negative("anneal.initial_temperature", anneal.initial_temperature)?;
    non_negative("anneal.freezing_temperature", anneal.freezing_temperature)?;
    if !(anneal.cooling_rate > 0.0 && anneal.cooling_rate < 1.0) {
        return Err(ConfigError::ValidationError(format!(
            "anneal.cooling_rate must lie strictly between 0 and 1, got {}",
            anneal.cooling_rate
        )));
    }
    if !(anneal.moves_per_temperature.is_finite() && anneal.moves_per_temperature > 0.0) {
        return Err(ConfigError::ValidationError(format!(
            "anneal.moves_per_temperature must be positive, got {}",
            anneal.moves_per_temperature
        )));
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{field} must be finite and non-negative, got {value}"
        )))
    }
}
