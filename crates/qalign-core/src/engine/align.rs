use crate::core::scoring::substitution::SubstitutionMatrix;
use crate::engine::error::EngineError;
use tracing::{debug, instrument};

/// Gap marker used in the gapped output sequences.
pub const GAP: char = '-';

/// A global alignment of two residue sequences.
///
/// The two gapped sequences and the match ribbon always have identical length.
/// The ribbon carries `|` where both aligned characters are equal and non-gap,
/// and a space everywhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    /// First sequence with gap markers inserted.
    pub aligned_a: String,
    /// Match ribbon between the two gapped sequences.
    pub ribbon: String,
    /// Second sequence with gap markers inserted.
    pub aligned_b: String,
    /// Percentage of alignment columns holding an exact match, in [0, 100].
    pub percent_identity: f64,
}

impl Alignment {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.ribbon.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.ribbon.is_empty()
    }
}

/// Computes the Needleman-Wunsch global alignment of two sequences.
///
/// Scoring uses the substitution matrix for diagonal moves and a linear
/// `gap_penalty` (a negative value) per gap column. During traceback, the
/// diagonal move is preferred whenever it reproduces the cell score, and a gap
/// in the second sequence is preferred over a gap in the first.
///
/// # Errors
///
/// Fails with a substitution error if either sequence contains a character
/// outside the matrix alphabet.
#[instrument(skip_all, name = "sequence_alignment", fields(len_a = seq_a.len(), len_b = seq_b.len()))]
pub fn align(
    seq_a: &str,
    seq_b: &str,
    matrix: &SubstitutionMatrix,
    gap_penalty: i32,
) -> Result<Alignment, EngineError> {
    let a: Vec<char> = seq_a.chars().collect();
    let b: Vec<char> = seq_b.chars().collect();
    let m = a.len();
    let n = b.len();

    let mut score = vec![vec![0i32; n + 1]; m + 1];
    for (i, row) in score.iter_mut().enumerate() {
        row[0] = i as i32 * gap_penalty;
    }
    for j in 0..=n {
        score[0][j] = j as i32 * gap_penalty;
    }
    for i in 1..=m {
        for j in 1..=n {
            let diagonal = score[i - 1][j - 1] + matrix.score(a[i - 1], b[j - 1])?;
            let gap_in_b = score[i - 1][j] + gap_penalty;
            let gap_in_a = score[i][j - 1] + gap_penalty;
            score[i][j] = diagonal.max(gap_in_b).max(gap_in_a);
        }
    }

    // Traceback, collected in reverse column order.
    let mut aligned_a = Vec::with_capacity(m + n);
    let mut aligned_b = Vec::with_capacity(m + n);
    let mut ribbon = Vec::with_capacity(m + n);
    let mut matches = 0usize;
    let (mut i, mut j) = (m, n);

    while i > 0 && j > 0 {
        let current = score[i][j];
        if current == score[i - 1][j - 1] + matrix.score(a[i - 1], b[j - 1])? {
            if a[i - 1] == b[j - 1] {
                matches += 1;
                ribbon.push('|');
            } else {
                ribbon.push(' ');
            }
            aligned_a.push(a[i - 1]);
            aligned_b.push(b[j - 1]);
            i -= 1;
            j -= 1;
        } else if current == score[i - 1][j] + gap_penalty {
            aligned_a.push(a[i - 1]);
            aligned_b.push(GAP);
            ribbon.push(' ');
            i -= 1;
        } else {
            aligned_a.push(GAP);
            aligned_b.push(b[j - 1]);
            ribbon.push(' ');
            j -= 1;
        }
    }
    while i > 0 {
        aligned_a.push(a[i - 1]);
        aligned_b.push(GAP);
        ribbon.push(' ');
        i -= 1;
    }
    while j > 0 {
        aligned_a.push(GAP);
        aligned_b.push(b[j - 1]);
        ribbon.push(' ');
        j -= 1;
    }

    let length = ribbon.len();
    let percent_identity = if length > 0 {
        matches as f64 / length as f64 * 100.0
    } else {
        0.0
    };
    debug!(columns = length, matches, "Traceback complete.");

    Ok(Alignment {
        aligned_a: aligned_a.iter().rev().collect(),
        ribbon: ribbon.iter().rev().collect(),
        aligned_b: aligned_b.iter().rev().collect(),
        percent_identity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_matrix() -> SubstitutionMatrix {
        // Identity pairs score 5, every mismatch -2, over the test alphabet.
        let letters: Vec<char> = "ACDEFGT".chars().collect();
        let mut csv = String::from(",");
        csv.push_str(
            &letters
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(","),
        );
        csv.push('\n');
        for &row in &letters {
            csv.push(row);
            for &column in &letters {
                csv.push_str(if row == column { ",5" } else { ",-2" });
            }
            csv.push('\n');
        }
        SubstitutionMatrix::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn identical_sequences_align_perfectly() {
        let alignment = align("ACDEFG", "ACDEFG", &toy_matrix(), -10).unwrap();
        assert_eq!(alignment.aligned_a, "ACDEFG");
        assert_eq!(alignment.aligned_b, "ACDEFG");
        assert_eq!(alignment.ribbon, "||||||");
        assert_eq!(alignment.percent_identity, 100.0);
        assert_eq!(alignment.len(), 6);
    }

    #[test]
    fn deletion_in_the_second_sequence_produces_a_gap() {
        let alignment = align("ACDG", "ACG", &toy_matrix(), -10).unwrap();
        assert_eq!(alignment.aligned_a, "ACDG");
        assert_eq!(alignment.aligned_b, "AC-G");
        assert_eq!(alignment.ribbon, "|| |");
        assert!((alignment.percent_identity - 75.0).abs() < 1e-12);
    }

    #[test]
    fn mismatch_columns_are_never_marked_as_matches() {
        let alignment = align("ACDG", "ATDG", &toy_matrix(), -10).unwrap();
        assert_eq!(alignment.aligned_a, "ACDG");
        assert_eq!(alignment.aligned_b, "ATDG");
        assert_eq!(alignment.ribbon, "| ||");
        assert!((alignment.percent_identity - 75.0).abs() < 1e-12);
    }

    #[test]
    fn gap_columns_are_never_marked_as_matches() {
        let alignment = align("AAAA", "AA", &toy_matrix(), -10).unwrap();
        assert_eq!(alignment.len(), 4);
        for (mark, (ca, cb)) in alignment
            .ribbon
            .chars()
            .zip(alignment.aligned_a.chars().zip(alignment.aligned_b.chars()))
        {
            if mark == '|' {
                assert_eq!(ca, cb);
                assert_ne!(ca, GAP);
            }
        }
        assert_eq!(alignment.ribbon.matches('|').count(), 2);
    }

    #[test]
    fn empty_first_sequence_yields_all_gaps_and_zero_identity() {
        let alignment = align("", "ACD", &toy_matrix(), -10).unwrap();
        assert_eq!(alignment.aligned_a, "---");
        assert_eq!(alignment.aligned_b, "ACD");
        assert_eq!(alignment.ribbon, "   ");
        assert_eq!(alignment.percent_identity, 0.0);
    }

    #[test]
    fn both_sequences_empty_yield_an_empty_alignment() {
        let alignment = align("", "", &toy_matrix(), -10).unwrap();
        assert!(alignment.is_empty());
        assert_eq!(alignment.percent_identity, 0.0);
    }

    #[test]
    fn character_outside_the_alphabet_is_a_hard_error() {
        let result = align("ACX", "ACD", &toy_matrix(), -10);
        assert!(matches!(result, Err(EngineError::Substitution { .. })));
    }

    #[test]
    fn all_three_outputs_share_one_length() {
        let alignment = align("ACDEF", "ADF", &toy_matrix(), -10).unwrap();
        assert_eq!(alignment.aligned_a.chars().count(), alignment.len());
        assert_eq!(alignment.aligned_b.chars().count(), alignment.len());
        assert_eq!(alignment.ribbon.chars().count(), alignment.len());
    }
}
