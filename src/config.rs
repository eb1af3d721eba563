use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::parser::ParseOptions;
use crate::render::OutputFormat;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParserConfig {
    pub strip_framing: bool,
    pub sentinel: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        let options = ParseOptions::default();
        Self {
            strip_framing: options.strip_framing,
            sentinel: options.sentinel,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub outline_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            outline_width: 40,
        }
    }
}

impl ParserConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strip_framing: self.strip_framing,
            sentinel: self.sentinel.clone(),
        }
    }
}

impl Config {
    /// The defaults bundled with the binary.
    pub fn compiled_default() -> Self {
        // build.rs has already checked the file is valid TOML.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file. `Ok(None)` if the file does not exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NO_FOLLOW_UP;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_compiled_default_matches_code_defaults() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn test_default_parse_options() {
        let options = Config::default().parser.parse_options();
        assert!(options.strip_framing);
        assert_eq!(options.sentinel, NO_FOLLOW_UP);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("questions.toml");
        fs::write(&config_path, "[output]\nformat = \"json\"\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.outline_width, 40);
        assert_eq!(config.parser, ParserConfig::default());
    }

    #[test]
    fn test_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from_path(temp_dir.path().join("absent.toml")).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("questions.toml");
        fs::write(&config_path, "[parser]\nstrip_framing = \"maybe\"\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
