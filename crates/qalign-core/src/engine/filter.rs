use crate::core::models::atom::Atom;
use crate::engine::align::{Alignment, GAP};
use crate::engine::error::EngineError;

/// Extracts the atom pairs whose residues were aligned without a gap on
/// either side.
///
/// `atoms_a` and `atoms_b` are per-residue atom lists ordered by sequence
/// index, one atom per ungapped character of the corresponding aligned
/// sequence. The aligned strings are walked position by position with an
/// independent running index into each list: a gapless column appends the
/// current atom of both lists, and each index advances whenever its side is
/// not a gap. The two returned lists always have equal length, and position k
/// in each corresponds to residues the alignment judged mutually aligned.
///
/// # Errors
///
/// Returns [`EngineError::ResidueCountMismatch`] when an atom list does not
/// hold exactly one atom per ungapped character of its aligned sequence.
pub fn paired_atoms(
    alignment: &Alignment,
    atoms_a: &[Atom],
    atoms_b: &[Atom],
) -> Result<(Vec<Atom>, Vec<Atom>), EngineError> {
    check_residue_count(&alignment.aligned_a, atoms_a)?;
    check_residue_count(&alignment.aligned_b, atoms_b)?;

    let mut paired_a = Vec::new();
    let mut paired_b = Vec::new();
    let (mut next_a, mut next_b) = (0usize, 0usize);

    for (ca, cb) in alignment.aligned_a.chars().zip(alignment.aligned_b.chars()) {
        if ca != GAP && cb != GAP {
            paired_a.push(atoms_a[next_a].clone());
            paired_b.push(atoms_b[next_b].clone());
        }
        if ca != GAP {
            next_a += 1;
        }
        if cb != GAP {
            next_b += 1;
        }
    }
    Ok((paired_a, paired_b))
}

fn check_residue_count(aligned: &str, atoms: &[Atom]) -> Result<(), EngineError> {
    let expected = aligned.chars().filter(|&c| c != GAP).count();
    if expected != atoms.len() {
        return Err(EngineError::ResidueCountMismatch {
            expected,
            actual: atoms.len(),
        });
    }
    Ok(())
}
