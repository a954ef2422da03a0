pub mod defaults;

use crate::error::{CliError, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// How the `sequence` command prints residues.
#[derive(Deserialize, ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SequenceFormat {
    /// A single line of one-letter codes.
    #[default]
    OneLetter,
    /// One three-letter residue name per line.
    ThreeLetter,
    /// One line per residue with both codes.
    Both,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSelectionConfig {
    default: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    #[serde(rename = "coordinate-precision")]
    coordinate_precision: Option<usize>,
    #[serde(rename = "sequence-format")]
    sequence_format: Option<SequenceFormat>,
}

/// The configuration file as written, with every setting optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    selection: Option<PartialSelectionConfig>,
    output: Option<PartialOutputConfig>,
}

/// Settings shared by all commands, after applying defaults.
///
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub default_selection: Option<String>,
    pub coordinate_precision: usize,
    pub sequence_format: SequenceFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_selection: None,
            coordinate_precision: defaults::DEFAULT_COORDINATE_PRECISION,
            sequence_format: SequenceFormat::default(),
        }
    }
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn resolve(self) -> Result<Config> {
        let selection = self.selection.unwrap_or_default();
        let output = self.output.unwrap_or_default();

        let coordinate_precision = output
            .coordinate_precision
            .unwrap_or(defaults::DEFAULT_COORDINATE_PRECISION);
        check_precision(coordinate_precision)?;

        let default_selection = match selection.default {
            Some(s) if s.trim().is_empty() => {
                return Err(CliError::Config(
                    "'selection.default' cannot be empty".to_string(),
                ));
            }
            other => other,
        };

        Ok(Config {
            default_selection,
            coordinate_precision,
            sequence_format: output.sequence_format.unwrap_or_default(),
        })
    }
}

impl Config {
    /// Loads the configuration file if one was given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => PartialConfig::from_file(path)?.resolve(),
            None => Ok(Self::default()),
        }
    }

    /// Picks the selection from the command line, falling back to the configured default.
    pub fn selection<'a>(&'a self, from_cli: Option<&'a str>) -> Option<&'a str> {
        from_cli.or(self.default_selection.as_deref())
    }
}

pub fn check_precision(precision: usize) -> Result<()> {
    if precision > defaults::MAX_COORDINATE_PRECISION {
        return Err(CliError::Config(format!(
            "coordinate precision must be at most {}, got {}",
            defaults::MAX_COORDINATE_PRECISION,
            precision
        )));
    }
    Ok(())
}
