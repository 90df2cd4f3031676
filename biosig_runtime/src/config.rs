//! Configuration for simulation runs.
//!
//! Layered: compiled defaults, then an optional config file, then
//! `BIOSIG_*` environment variables (nested keys use `__`, e.g.
//! `BIOSIG_LOGGING__LEVEL=debug`). CLI flags are applied on top by the
//! binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "BIOSIG";

/// Main run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Environment name (Mars, Europa, Enceladus, Titan)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Elapsed years; mutation rate is `years / 1_000_000`
    #[serde(default = "default_years")]
    pub years: f64,

    /// Fixed seed for a reproducible run; a fresh one is drawn when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Directory for run records; records are not written when absent
    #[serde(default)]
    pub record_dir: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            years: default_years(),
            seed: None,
            record_dir: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of plain text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_environment() -> String {
    "Mars".to_string()
}

fn default_years() -> f64 {
    1_000_000.0
}

fn default_log_level() -> String {
    "info".to_string()
}

impl SimulationConfig {
    /// Load configuration from defaults, an optional file, and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&SimulationConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.environment, "Mars");
        assert_eq!(config.years, 1_000_000.0);
        assert!(config.seed.is_none());
        assert!(config.record_dir.is_none());
    }

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("create temp config");
        write!(
            file,
            r#"{{"environment": "Titan", "years": 2500000, "seed": 17, "logging": {{"level": "debug"}}}}"#
        )
        .expect("write config");

        let config = SimulationConfig::load(Some(file.path())).expect("load config");
        assert_eq!(config.environment, "Titan");
        assert_eq!(config.years, 2_500_000.0);
        assert_eq!(config.seed, Some(17));
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = SimulationConfig::load(Some(Path::new("/nonexistent/biosig.toml")));
        assert!(result.is_err());
    }
}
