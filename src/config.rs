//! Converter configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML/JSON file,
//! then `COORDS_*` environment variables. Command-line flags apply last.

use crate::error::Result;
use crate::utils::constants::{DEFAULT_PRECISION, ENV_PREFIX};
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;
use validator::Validate;

/// Rounding rules used when deriving one notation from another
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Output compatible with existing coordinate tooling: DEC precision counts
    /// significant digits of the minutes/seconds remainder, DEC to DMS rounds
    /// minutes to nearest, and nothing carries at 60
    #[default]
    Legacy,
    /// DEC precision applies to the summed value, DEC to DMS floors minutes,
    /// and rounded seconds or minutes of 60 carry into the next unit
    Exact,
}

impl ConversionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionMode::Legacy => "legacy",
            ConversionMode::Exact => "exact",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ConverterConfig {
    /// Digits used by DEC output
    #[validate(range(min = 1, max = 15))]
    pub precision: usize,

    pub mode: ConversionMode,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            mode: ConversionMode::Legacy,
        }
    }
}

impl ConverterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_mode(mut self, mode: ConversionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Load defaults, an optional config file and `COORDS_*` environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: Option<&Path>, environment: Environment) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("precision", defaults.precision as u64)?
            .set_default("mode", defaults.mode.as_str())?;

        if let Some(path) = path {
            debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        let config: ConverterConfig = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        debug!(precision = config.precision, mode = %config.mode, "Configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoordinateError;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    #[test]
    fn test_defaults() {
        let config = ConverterConfig::load_from(None, no_env()).unwrap();
        assert_eq!(config, ConverterConfig::default());
        assert_eq!(config.precision, 5);
        assert_eq!(config.mode, ConversionMode::Legacy);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "precision = 3\nmode = \"exact\"").unwrap();

        let config = ConverterConfig::load_from(Some(file.path()), no_env()).unwrap();
        assert_eq!(config.precision, 3);
        assert_eq!(config.mode, ConversionMode::Exact);
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "precision = 3").unwrap();

        let env = HashMap::from([("COORDS_PRECISION".to_string(), "7".to_string())]);
        let environment = Environment::with_prefix(ENV_PREFIX).source(Some(env));

        let config = ConverterConfig::load_from(Some(file.path()), environment).unwrap();
        assert_eq!(config.precision, 7);
        assert_eq!(config.mode, ConversionMode::Legacy);
    }

    #[test]
    fn test_rejects_out_of_range_precision() {
        let env = HashMap::from([("COORDS_PRECISION".to_string(), "0".to_string())]);
        let environment = Environment::with_prefix(ENV_PREFIX).source(Some(env));

        let err = ConverterConfig::load_from(None, environment).unwrap_err();
        assert!(matches!(err, CoordinateError::Validation(_)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().with_extension("toml");
        assert!(ConverterConfig::load_from(Some(&path), no_env()).is_err());
    }

    #[test]
    fn test_builder() {
        let config = ConverterConfig::new()
            .with_precision(2)
            .with_mode(ConversionMode::Exact);
        assert!(config.validate().is_ok());
        assert!(ConverterConfig::new().with_precision(20).validate().is_err());
    }
}
