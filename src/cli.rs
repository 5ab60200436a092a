//! Command-line arguments of the `merit-dispatch` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::EngineConfig;
use crate::dispatch::CostModel;

/// Merit-order dispatch of a generation fleet.
///
/// Prints the dispatch of a production-plan request with a summary. Can
/// also export the allocation to CSV or serve the REST API.
#[derive(Debug, Parser)]
#[command(name = "merit-dispatch", author, version, about)]
pub struct Args {
    /// Production-plan request to dispatch (JSON).
    #[arg(long, value_name = "PATH", env = "MERIT_DISPATCH_SCENARIO")]
    pub scenario: Option<PathBuf>,

    /// Engine configuration file (TOML).
    #[arg(long, value_name = "PATH", env = "MERIT_DISPATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Built-in configuration preset (`fuel_only` or `carbon`).
    #[arg(long, value_name = "NAME", conflicts_with = "config")]
    pub preset: Option<String>,

    /// Override the configured cost model (`fuel_only` or `with_carbon`).
    #[arg(long, value_name = "MODEL")]
    pub cost_model: Option<CostModel>,

    /// Export the allocation to CSV.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Print the response body as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Start the REST API server.
    #[cfg(feature = "api")]
    #[arg(long)]
    pub serve: bool,

    /// Override the configured API server port.
    #[cfg(feature = "api")]
    #[arg(long, value_name = "PORT", env = "MERIT_DISPATCH_PORT")]
    pub port: Option<u16>,
}

impl Args {
    /// Loads the configuration selected by `--config` or `--preset`,
    /// falling back to the `fuel_only` preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or parsed, or the
    /// preset is unknown.
    pub fn load_config(&self) -> Result<EngineConfig, crate::config::ConfigError> {
        let mut config = if let Some(ref path) = self.config {
            EngineConfig::from_toml_file(path)?
        } else if let Some(ref name) = self.preset {
            EngineConfig::from_preset(name)?
        } else {
            EngineConfig::fuel_only()
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// Writes command-line overrides into `config`.
    ///
    /// The emission factor always comes from the configuration, so
    /// `--cost-model with_carbon` only switches the formula.
    pub fn apply_overrides(&self, config: &mut EngineConfig) {
        if let Some(model) = self.cost_model {
            config.cost.model = model.name().to_string();
        }
        #[cfg(feature = "api")]
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }

    /// Whether the API server was requested.
    pub fn serves(&self) -> bool {
        #[cfg(feature = "api")]
        {
            self.serve
        }
        #[cfg(not(feature = "api"))]
        {
            false
        }
    }
}
