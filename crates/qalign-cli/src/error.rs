use qalign::core::io::pdb::PdbError;
use qalign::core::scoring::substitution::SubstitutionError;
use qalign::engine::config::ConfigError;
use qalign::engine::error::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] EngineError),

    #[error(transparent)]
    Structure(#[from] PdbError),

    #[error(transparent)]
    Matrix(#[from] SubstitutionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Download failed for '{id}': HTTP status {status}")]
    Download {
        id: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid argument: {0}")]
    Argument(String),
}
