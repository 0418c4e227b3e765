use phf::{Map, phf_map};
use thiserror::Error;

static THREE_TO_ONE: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D',
    "CYS" => 'C', "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G',
    "HIS" => 'H', "ILE" => 'I', "LEU" => 'L', "LYS" => 'K',
    "MET" => 'M', "PHE" => 'F', "PRO" => 'P', "SER" => 'S',
    "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Residue name '{0}' has no single-letter code")]
    UnknownResidue(String),
}

/// Converts a three-letter residue name into its single-letter amino-acid code.
///
/// # Errors
///
/// Returns [`ModelError::UnknownResidue`] for any name outside the twenty
/// standard amino acids. A missing mapping indicates a data error in the input
/// structure, so it is surfaced rather than substituted with a placeholder.
pub fn one_letter_code(residue_name: &str) -> Result<char, ModelError> {
    THREE_TO_ONE
        .get(residue_name.trim())
        .copied()
        .ok_or_else(|| ModelError::UnknownResidue(residue_name.to_string()))
}
