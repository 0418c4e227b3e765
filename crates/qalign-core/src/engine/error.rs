use thiserror::Error;

use crate::core::models::residue::ModelError;
use crate::core::scoring::substitution::SubstitutionError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Residue mapping failed: {source}")]
    Model {
        #[from]
        source: ModelError,
    },

    #[error("Substitution lookup failed: {source}")]
    Substitution {
        #[from]
        source: SubstitutionError,
    },

    #[error("Alignment covers {expected} residues but {actual} atoms were provided")]
    ResidueCountMismatch { expected: usize, actual: usize },

    #[error("Point sets differ in length: {left} vs {right}")]
    PointSetMismatch { left: usize, right: usize },

    #[error("Point sets are empty")]
    EmptyPointSet,

    #[error("SVD factorization of the cross-covariance matrix did not converge")]
    SvdConvergence,
}
