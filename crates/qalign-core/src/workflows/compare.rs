use crate::core::io::report;
use crate::core::models::atom::Atom;
use crate::core::models::sequence::derive_sequence;
use crate::core::scoring::substitution::SubstitutionMatrix;
use crate::engine::align::{self, Alignment};
use crate::engine::config::CompareConfig;
use crate::engine::error::EngineError;
use crate::engine::filter;
use crate::engine::similarity::residue_similarity;
use crate::engine::superpose;
use nalgebra::{Matrix3, Point3};
use std::io;
use std::path::Path;
use tracing::{info, instrument};

/// Complete output of one structure comparison.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Sequence derived from the first structure.
    pub sequence_a: String,
    /// Sequence derived from the second structure.
    pub sequence_b: String,
    /// Global alignment of the two sequences.
    pub alignment: Alignment,
    /// First-structure atoms of the gaplessly aligned residue pairs, in the
    /// first structure's original frame.
    pub paired_a: Vec<Atom>,
    /// Second-structure atoms of the same residue pairs, rotated onto the
    /// first structure's frame. Element kinds and identity fields are
    /// preserved from the input records.
    pub superposed_b: Vec<Atom>,
    /// The proper rotation applied to the second structure, row-point
    /// convention.
    pub rotation: Matrix3<f64>,
    /// Root-mean-square deviation after superposition.
    pub rmsd: f64,
    /// One contact-based similarity score per aligned residue pair.
    pub scores: Vec<f64>,
}

impl Comparison {
    /// Writes the persisted result artifact for this comparison.
    pub fn write_report(&self, path: &Path) -> io::Result<()> {
        report::write_report(
            path,
            &self.alignment.aligned_a,
            &self.alignment.ribbon,
            &self.alignment.aligned_b,
            &self.scores,
        )
    }
}

/// Runs a complete comparison of two structures.
///
/// `atoms_a` and `atoms_b` hold one representative atom per residue position,
/// ordered by sequence index (see
/// [`alpha_carbons`](crate::core::models::sequence::alpha_carbons)). The run
/// derives both sequences, aligns them globally, keeps the residue pairs
/// aligned without gaps, superposes their coordinates, and scores per-residue
/// similarity over the superposed point sets.
///
/// # Errors
///
/// The first failing stage aborts the run with its error; no partial results
/// are produced.
#[instrument(skip_all, name = "comparison_workflow")]
pub fn run(
    atoms_a: &[Atom],
    atoms_b: &[Atom],
    matrix: &SubstitutionMatrix,
    config: &CompareConfig,
) -> Result<Comparison, EngineError> {
    let sequence_a = derive_sequence(atoms_a)?;
    let sequence_b = derive_sequence(atoms_b)?;
    info!(
        len_a = sequence_a.len(),
        len_b = sequence_b.len(),
        "Derived residue sequences."
    );

    let alignment = align::align(&sequence_a, &sequence_b, matrix, config.gap_penalty)?;
    info!(
        columns = alignment.len(),
        percent_identity = alignment.percent_identity,
        "Sequences aligned."
    );

    let (paired_a, paired_b) = filter::paired_atoms(&alignment, atoms_a, atoms_b)?;
    info!(pairs = paired_a.len(), "Filtered gaplessly aligned residue pairs.");

    let superposition = superpose::superpose(&coordinates(&paired_a), &coordinates(&paired_b))?;
    info!(rmsd = superposition.rmsd, "Structures superposed.");

    let superposed_b: Vec<Atom> = paired_b
        .iter()
        .zip(&superposition.superposed)
        .map(|(atom, position)| atom.with_position(*position))
        .collect();

    let scores = residue_similarity(&superposition.reference, &superposition.superposed)?;
    info!(residues = scores.len(), "Similarity scoring complete.");

    Ok(Comparison {
        sequence_a,
        sequence_b,
        alignment,
        paired_a,
        superposed_b,
        rotation: superposition.rotation,
        rmsd: superposition.rmsd,
        scores,
    })
}

fn coordinates(atoms: &[Atom]) -> Vec<Point3<f64>> {
    atoms.iter().map(|atom| atom.position).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::AtomKind;
    use nalgebra::{Rotation3, Vector3};
    use tempfile::tempdir;

    fn residue_chain(sequence: &str) -> Vec<Atom> {
        let names = |code: char| match code {
            'A' => "ALA",
            'C' => "CYS",
            'D' => "ASP",
            'E' => "GLU",
            'F' => "PHE",
            'G' => "GLY",
            _ => panic!("unexpected code in test sequence"),
        };
        sequence
            .chars()
            .enumerate()
            .map(|(i, code)| {
                Atom::new(
                    i as i32 + 1,
                    AtomKind::AlphaCarbon,
                    names(code),
                    'A',
                    i,
                    Point3::new(i as f64 * 3.8, (i as f64).sin(), (i as f64 * 0.7).cos()),
                )
            })
            .collect()
    }

    #[test]
    fn identical_structures_compare_perfectly() {
        let atoms = residue_chain("ACDEFG");
        let matrix = SubstitutionMatrix::bundled_blosum62().unwrap();
        let config = CompareConfig::default();

        let comparison = run(&atoms, &atoms, &matrix, &config).unwrap();

        assert_eq!(comparison.alignment.aligned_a, "ACDEFG");
        assert_eq!(comparison.alignment.ribbon, "||||||");
        assert_eq!(comparison.alignment.aligned_b, "ACDEFG");
        assert_eq!(comparison.alignment.percent_identity, 100.0);
        assert!(comparison.rmsd < 1e-6);
        assert_eq!(comparison.scores.len(), 6);
        for score in &comparison.scores {
            assert_eq!(*score, 1.0);
        }
    }

    #[test]
    fn rigidly_moved_copy_compares_perfectly_after_superposition() {
        let atoms_a = residue_chain("ACDEFG");
        let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), 0.8);
        let translation = Vector3::new(4.0, -1.0, 2.0);
        let atoms_b: Vec<Atom> = atoms_a
            .iter()
            .map(|atom| atom.with_position(rotation * atom.position + translation))
            .collect();
        let matrix = SubstitutionMatrix::bundled_blosum62().unwrap();

        let comparison = run(&atoms_a, &atoms_b, &matrix, &CompareConfig::default()).unwrap();

        assert_eq!(comparison.alignment.percent_identity, 100.0);
        assert!(comparison.rmsd < 1e-6);
        for score in &comparison.scores {
            assert!((score - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn superposed_atoms_preserve_element_kinds_and_identity() {
        let atoms = residue_chain("ACDEFG");
        let matrix = SubstitutionMatrix::bundled_blosum62().unwrap();
        let comparison = run(&atoms, &atoms, &matrix, &CompareConfig::default()).unwrap();

        for (superposed, original) in comparison.superposed_b.iter().zip(&atoms) {
            assert_eq!(superposed.kind, original.kind);
            assert_eq!(superposed.serial, original.serial);
            assert_eq!(superposed.residue_name, original.residue_name);
            assert_eq!(superposed.seq_index, original.seq_index);
        }
    }

    #[test]
    fn gapped_residues_are_excluded_from_superposition() {
        let atoms_a = residue_chain("ACDEFG");
        let atoms_b = residue_chain("ACDEG");
        let matrix = SubstitutionMatrix::bundled_blosum62().unwrap();

        let comparison = run(&atoms_a, &atoms_b, &matrix, &CompareConfig::default()).unwrap();

        assert_eq!(comparison.paired_a.len(), comparison.superposed_b.len());
        assert_eq!(comparison.paired_a.len(), 5);
        assert_eq!(comparison.scores.len(), 5);
    }

    #[test]
    fn unknown_residue_aborts_before_any_output() {
        let mut atoms = residue_chain("ACDEFG");
        atoms[2].residue_name = "XYZ".to_string();
        let matrix = SubstitutionMatrix::bundled_blosum62().unwrap();

        let result = run(&atoms, &atoms, &matrix, &CompareConfig::default());
        assert!(matches!(result, Err(EngineError::Model { .. })));
    }

    #[test]
    fn write_report_produces_the_four_line_artifact() {
        let atoms = residue_chain("ACDEFG");
        let matrix = SubstitutionMatrix::bundled_blosum62().unwrap();
        let comparison = run(&atoms, &atoms, &matrix, &CompareConfig::default()).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("result.txt");
        comparison.write_report(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "ACDEFG");
        assert_eq!(lines[1], "||||||");
        assert_eq!(lines[2], "ACDEFG");
        assert_eq!(lines[3], "1.00 1.00 1.00 1.00 1.00 1.00");
    }
}
