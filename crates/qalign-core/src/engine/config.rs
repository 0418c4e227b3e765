use crate::core::io::pdb::ParseOptions;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Linear gap cost applied per gap column when no override is configured.
pub const DEFAULT_GAP_PENALTY: i32 = -10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("Gap penalty must be negative, got {0}")]
    NonNegativeGapPenalty(i32),
}

/// Tunable parameters of a comparison run.
///
/// The defaults reproduce the standard setup: a linear gap penalty of -10 and
/// no residue filtering. Structure-parsing policy lives here as well so one
/// value configures the whole run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareConfig {
    /// Linear (non-affine) gap cost added per gap column during alignment.
    /// Must be negative.
    pub gap_penalty: i32,
    /// Residue names dropped while parsing structure files.
    pub exclude_residues: Vec<String>,
    /// Restrict both structures to a single chain.
    pub chain: Option<char>,
    /// Drop records whose residue-name token is longer than three characters.
    pub skip_long_residue_names: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            gap_penalty: DEFAULT_GAP_PENALTY,
            exclude_residues: Vec::new(),
            chain: None,
            skip_long_residue_names: false,
        }
    }
}

impl CompareConfig {
    /// Loads and validates a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the internal consistency of the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gap_penalty >= 0 {
            return Err(ConfigError::NonNegativeGapPenalty(self.gap_penalty));
        }
        Ok(())
    }

    /// The structure-parsing policy portion of this configuration.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            chain: self.chain,
            exclude_residues: self.exclude_residues.clone(),
            skip_long_residue_names: self.skip_long_residue_names,
        }
    }
}
