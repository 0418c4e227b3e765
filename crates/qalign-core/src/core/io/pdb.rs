use crate::core::models::atom::{Atom, AtomKind};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed ATOM record at line {line}: {message}")]
    Malformed { line: usize, message: String },
}

/// Residue-level filtering applied while parsing.
///
/// Some comparison setups drop selected residue names or restrict the input to
/// a single chain before analysis; these switches make that policy explicit.
/// All options default to off, so by default every parseable record is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOptions {
    /// Keep only records belonging to this chain.
    pub chain: Option<char>,
    /// Residue names to drop entirely (e.g. "MET").
    pub exclude_residues: Vec<String>,
    /// Drop records whose residue-name token is longer than three characters,
    /// as produced by alternate-conformation markers fused into the name.
    pub skip_long_residue_names: bool,
}

/// Parses the `ATOM` records of a structure file into an ordered atom list.
///
/// # Errors
///
/// Returns [`PdbError::Io`] when the file cannot be read and
/// [`PdbError::Malformed`] for records with missing or unparseable fields.
pub fn parse_pdb(path: &Path, options: &ParseOptions) -> Result<Vec<Atom>, PdbError> {
    let content = fs::read_to_string(path).map_err(|e| PdbError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    parse_pdb_str(&content, options)
}

/// Parses `ATOM` records from in-memory structure-file content.
///
/// Records are tokenized on whitespace: serial, atom name, residue name, chain
/// identifier, author residue number, x, y, z. Author residue numbers collapse
/// into a 0-based running sequence index that increments whenever the author
/// number changes, so downstream consumers never depend on author numbering
/// gaps. Records whose atom name is not one of the tracked element kinds are
/// skipped but still advance the residue bookkeeping.
pub fn parse_pdb_str(content: &str, options: &ParseOptions) -> Result<Vec<Atom>, PdbError> {
    let mut atoms = Vec::new();
    let mut seq_index = 0usize;
    let mut current_author: Option<(char, i64)> = None;

    for (line_index, line) in content.lines().enumerate() {
        let line_number = line_index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.first() != Some(&"ATOM") {
            continue;
        }
        if fields.len() < 9 {
            return Err(PdbError::Malformed {
                line: line_number,
                message: format!("expected at least 9 fields, found {}", fields.len()),
            });
        }

        let residue_name = fields[3];
        if options.exclude_residues.iter().any(|r| r == residue_name) {
            continue;
        }
        if options.skip_long_residue_names && residue_name.len() > 3 {
            continue;
        }

        let chain_id = parse_chain(fields[4], line_number)?;
        if options.chain.is_some_and(|c| c != chain_id) {
            continue;
        }

        let author_number: i64 = parse_field(fields[5], line_number, "residue number")?;
        match current_author {
            None => current_author = Some((chain_id, author_number)),
            Some(previous) if previous != (chain_id, author_number) => {
                seq_index += 1;
                current_author = Some((chain_id, author_number));
            }
            Some(_) => {}
        }

        let Ok(kind) = AtomKind::from_str(fields[2]) else {
            continue;
        };
        let serial: i32 = parse_field(fields[1], line_number, "serial number")?;
        let x: f64 = parse_field(fields[6], line_number, "x coordinate")?;
        let y: f64 = parse_field(fields[7], line_number, "y coordinate")?;
        let z: f64 = parse_field(fields[8], line_number, "z coordinate")?;

        atoms.push(Atom::new(
            serial,
            kind,
            residue_name,
            chain_id,
            seq_index,
            nalgebra::Point3::new(x, y, z),
        ));
    }
    Ok(atoms)
}

fn parse_chain(field: &str, line: usize) -> Result<char, PdbError> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(PdbError::Malformed {
            line,
            message: format!("invalid chain identifier: '{field}'"),
        }),
    }
}

fn parse_field<T: FromStr>(field: &str, line: usize, what: &str) -> Result<T, PdbError> {
    field.parse().map_err(|_| PdbError::Malformed {
        line,
        message: format!("invalid {what}: '{field}'"),
    })
}
