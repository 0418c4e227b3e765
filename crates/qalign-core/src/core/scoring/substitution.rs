use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

static BLOSUM62_CSV: &str = include_str!("../../../data/blosum62.csv");

#[derive(Debug, Error)]
pub enum SubstitutionError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },

    #[error("Malformed matrix cell '{value}' at row {row}, column {column}")]
    MalformedCell {
        value: String,
        row: usize,
        column: usize,
    },

    #[error("Matrix row {row} is missing its residue label")]
    MissingLabel { row: usize },

    #[error("No substitution score for residue pair '{first}'/'{second}'")]
    UnknownPair { first: char, second: char },
}

/// An immutable, symmetric substitution-scoring table over single-letter
/// amino-acid codes.
///
/// Loaded once from a CSV grid whose first row and first column carry the
/// alphabet (the standard BLOSUM layout). Both orientations of every pair are
/// stored, so lookups never depend on argument order.
#[derive(Debug, Clone)]
pub struct SubstitutionMatrix {
    scores: HashMap<(char, char), i32>,
}

impl SubstitutionMatrix {
    /// Loads a substitution matrix from a CSV file.
    pub fn load(path: &Path) -> Result<Self, SubstitutionError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| SubstitutionError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| SubstitutionError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            rows.push(record.iter().map(|s| s.trim().to_string()).collect());
        }
        Self::from_grid(&rows)
    }

    /// Loads a substitution matrix from any CSV reader.
    pub fn from_reader<R: Read>(source: R) -> Result<Self, SubstitutionError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(source);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| SubstitutionError::Csv {
                path: "<reader>".to_string(),
                source: e,
            })?;
            rows.push(record.iter().map(|s| s.trim().to_string()).collect());
        }
        Self::from_grid(&rows)
    }

    /// Returns the BLOSUM62 matrix bundled with the crate.
    pub fn bundled_blosum62() -> Result<Self, SubstitutionError> {
        Self::from_reader(BLOSUM62_CSV.as_bytes())
    }

    fn from_grid(rows: &[Vec<String>]) -> Result<Self, SubstitutionError> {
        let mut scores = HashMap::new();
        let Some((header, body)) = rows.split_first() else {
            return Ok(Self { scores });
        };

        for (i, row) in body.iter().enumerate() {
            let row_number = i + 1;
            let row_code = label_char(row.first(), row_number)?;
            for (j, cell) in row.iter().enumerate().skip(1) {
                let column_code = label_char(header.get(j), 0)?;
                let score: i32 = cell.parse().map_err(|_| SubstitutionError::MalformedCell {
                    value: cell.clone(),
                    row: row_number,
                    column: j,
                })?;
                scores.insert((row_code, column_code), score);
                scores.insert((column_code, row_code), score);
            }
        }
        Ok(Self { scores })
    }

    /// Looks up the score for a pair of single-letter codes.
    ///
    /// # Errors
    ///
    /// Returns [`SubstitutionError::UnknownPair`] when either code lies outside
    /// the loaded alphabet. An unknown pair indicates a data error in the input
    /// sequences, not a neutral substitution, so no default score is assumed.
    pub fn score(&self, first: char, second: char) -> Result<i32, SubstitutionError> {
        self.scores
            .get(&(first, second))
            .copied()
            .ok_or(SubstitutionError::UnknownPair { first, second })
    }

    /// Number of distinct ordered pairs in the table.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

fn label_char(label: Option<&String>, row: usize) -> Result<char, SubstitutionError> {
    label
        .and_then(|s| s.chars().next())
        .ok_or(SubstitutionError::MissingLabel { row })
}
