//! TOML-based engine configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::dispatch::CostModel;
use crate::dispatch::cost::DEFAULT_CO2_EMISSION_FACTOR;

/// Top-level engine configuration parsed from TOML.
///
/// All fields have defaults matching the `fuel_only` preset. Load from
/// TOML with [`EngineConfig::from_toml_file`] or use
/// [`EngineConfig::fuel_only`] for the built-in default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Marginal cost model selection.
    #[serde(default)]
    pub cost: CostConfig,
    /// HTTP server binding.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Marginal cost model selection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostConfig {
    /// Cost model: `"fuel_only"` or `"with_carbon"`.
    pub model: String,
    /// CO2 emitted per MWh by gas-fired units (ton/MWh), used by `with_carbon`.
    pub co2_emission_factor: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            model: "fuel_only".to_string(),
            co2_emission_factor: DEFAULT_CO2_EMISSION_FACTOR,
        }
    }
}

/// HTTP server binding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("config error: {field} - {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"cost.model"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl EngineConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["fuel_only", "carbon"];

    /// Returns the default configuration: fuel-only ranking.
    pub fn fuel_only() -> Self {
        Self {
            cost: CostConfig::default(),
            server: ServerConfig::default(),
        }
    }

    /// Returns the carbon preset: gas units pay for their emissions.
    pub fn carbon() -> Self {
        Self {
            cost: CostConfig {
                model: "with_carbon".to_string(),
                ..CostConfig::default()
            },
            server: ServerConfig::default(),
        }
    }

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "fuel_only" => Ok(Self::fuel_only()),
            "carbon" => Ok(Self::carbon()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let c = &self.cost;

        if let Err(message) = c.model.parse::<CostModel>() {
            errors.push(ConfigError {
                field: "cost.model".into(),
                message,
            });
        }
        if !c.co2_emission_factor.is_finite() || c.co2_emission_factor < 0.0 {
            errors.push(ConfigError {
                field: "cost.co2_emission_factor".into(),
                message: "must be a finite number >= 0".into(),
            });
        }

        if self.server.host.trim().is_empty() {
            errors.push(ConfigError {
                field: "server.host".into(),
                message: "must not be empty".into(),
            });
        }

        errors
    }

    /// Builds the cost model selected by `[cost]`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `cost.model` is not a known model name.
    pub fn cost_model(&self) -> Result<CostModel, ConfigError> {
        let model = self.cost.model.parse::<CostModel>().map_err(|message| ConfigError {
            field: "cost.model".into(),
            message,
        })?;
        Ok(match model {
            CostModel::FuelOnly => CostModel::FuelOnly,
            CostModel::WithCarbon { .. } => CostModel::WithCarbon {
                co2_emission_factor: self.cost.co2_emission_factor,
            },
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::fuel_only()
    }
}
