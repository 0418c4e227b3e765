use crate::engine::contact::ContactMap;
use crate::engine::error::EngineError;
use nalgebra::Point3;
use tracing::instrument;

/// Exponent of the sequence-separation tolerance `|i - j|^0.15`; the tolerance
/// grows slowly, making the score more forgiving for residues far apart in
/// sequence.
const SEPARATION_EXPONENT: f64 = 0.15;

/// Computes one contact-based similarity score per residue index for two
/// equal-length, already-superposed point sets.
///
/// A full contact map is built for each set; per residue i, every contact
/// outside the immediate sequence neighborhood {i-1, i, i+1} contributes
/// `exp(-Δd² / (2·|i-j|^0.15))`, where Δd is the difference of the two maps'
/// distances. The sum is normalized by the number of contributing contacts,
/// so identical structures score exactly 1.0 at every residue.
///
/// # Errors
///
/// Returns [`EngineError::PointSetMismatch`] for unequal input lengths.
#[instrument(skip_all, name = "residue_similarity", fields(residues = points_a.len()))]
pub fn residue_similarity(
    points_a: &[Point3<f64>],
    points_b: &[Point3<f64>],
) -> Result<Vec<f64>, EngineError> {
    if points_a.len() != points_b.len() {
        return Err(EngineError::PointSetMismatch {
            left: points_a.len(),
            right: points_b.len(),
        });
    }
    let map_a = ContactMap::new(points_a);
    let map_b = ContactMap::new(points_b);
    scores_from_maps(&map_a, &map_b)
}

/// Computes the per-residue scores from two pre-built contact maps of equal
/// dimension.
pub fn scores_from_maps(map_a: &ContactMap, map_b: &ContactMap) -> Result<Vec<f64>, EngineError> {
    if map_a.len() != map_b.len() {
        return Err(EngineError::PointSetMismatch {
            left: map_a.len(),
            right: map_b.len(),
        });
    }
    let n = map_a.len();
    let mut scores = Vec::with_capacity(n);

    for i in 0..n {
        // Two near-diagonal terms are excluded at the termini, three elsewhere.
        let excluded = if i == 0 || i == n - 1 { 2.0 } else { 3.0 };
        let mut sum = 0.0;
        for j in 0..n {
            if j + 1 == i || j == i || j == i + 1 {
                continue;
            }
            let separation = (i as f64 - j as f64).abs();
            let tolerance = separation.powf(SEPARATION_EXPONENT);
            let delta = map_a.get(i, j) - map_b.get(i, j);
            sum += (-(delta * delta) / (2.0 * tolerance)).exp();
        }
        scores.push(sum / (n as f64 - excluded));
    }
    Ok(scores)
}
