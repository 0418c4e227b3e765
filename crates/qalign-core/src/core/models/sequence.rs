use super::atom::{Atom, AtomKind};
use super::residue::{ModelError, one_letter_code};

/// Derives the one-letter amino-acid sequence of an ordered atom list.
///
/// Atoms sharing a residue sequence index collapse into a single sequence
/// position; the first atom seen for each distinct index contributes the code.
///
/// # Errors
///
/// Returns [`ModelError::UnknownResidue`] if any residue name has no
/// single-letter code.
pub fn derive_sequence(atoms: &[Atom]) -> Result<String, ModelError> {
    let mut sequence = String::new();
    let mut current = None;
    for atom in atoms {
        if current != Some(atom.seq_index) {
            sequence.push(one_letter_code(&atom.residue_name)?);
            current = Some(atom.seq_index);
        }
    }
    Ok(sequence)
}

/// Extracts one alpha carbon per residue position, in input order.
///
/// The comparison pipeline operates on per-residue atom lists: position k of
/// the returned list corresponds to character k of the derived sequence.
/// Residues without an alpha carbon contribute no entry.
pub fn alpha_carbons(atoms: &[Atom]) -> Vec<Atom> {
    let mut representatives: Vec<Atom> = Vec::new();
    for atom in atoms {
        if atom.kind == AtomKind::AlphaCarbon
            && representatives.last().map(|a| a.seq_index) != Some(atom.seq_index)
        {
            representatives.push(atom.clone());
        }
    }
    representatives
}
