use crate::core::utils::geometry::centroid;
use crate::engine::error::EngineError;
use nalgebra::{DMatrix, Matrix3, Point3};
use tracing::{debug, instrument};

const SVD_EPSILON: f64 = 1.0e-12;
const SVD_MAX_ITERATIONS: usize = 256;

/// Result of superposing a mobile point set onto a reference set.
#[derive(Debug, Clone)]
pub struct Superposition {
    /// Reference set at its original centroid, unrotated.
    pub reference: Vec<Point3<f64>>,
    /// Mobile set translated back to its own centroid, then rotated onto the
    /// reference frame.
    pub superposed: Vec<Point3<f64>>,
    /// The proper rotation (determinant +1) that was applied, in the
    /// row-point convention `p' = p * R`.
    pub rotation: Matrix3<f64>,
    /// Root-mean-square deviation after optimal superposition.
    pub rmsd: f64,
}

/// Computes the rigid-body rotation that minimizes the RMSD between two
/// equal-length point sets after optimal translation, without reflection.
///
/// Both sets are centered at the origin, the cross-covariance matrix
/// `H = mobileᵗ · reference` is decomposed by SVD, and `R = U · Vᵗ`. When the
/// unconstrained optimum is a reflection (`det(U)·det(V) < 0`), the smallest
/// singular value and the corresponding column of `U` are negated first, which
/// restricts the solution to proper rotations.
///
/// # Errors
///
/// Returns [`EngineError::PointSetMismatch`] for unequal input lengths,
/// [`EngineError::EmptyPointSet`] for empty inputs, and
/// [`EngineError::SvdConvergence`] when the factorization does not converge.
#[instrument(skip_all, name = "kabsch_superposition", fields(points = reference.len()))]
pub fn superpose(
    reference: &[Point3<f64>],
    mobile: &[Point3<f64>],
) -> Result<Superposition, EngineError> {
    if reference.len() != mobile.len() {
        return Err(EngineError::PointSetMismatch {
            left: reference.len(),
            right: mobile.len(),
        });
    }
    if reference.is_empty() {
        return Err(EngineError::EmptyPointSet);
    }
    let n = reference.len();

    let center_a = centroid(reference);
    let center_b = centroid(mobile);
    let a = centered_matrix(reference, &center_a);
    let b = centered_matrix(mobile, &center_b);

    let e0: f64 = a.iter().map(|v| v * v).sum::<f64>() + b.iter().map(|v| v * v).sum::<f64>();

    let h = b.transpose() * &a;
    let svd = h
        .try_svd(true, true, SVD_EPSILON, SVD_MAX_ITERATIONS)
        .ok_or(EngineError::SvdConvergence)?;
    let mut u = svd.u.ok_or(EngineError::SvdConvergence)?;
    let v_t = svd.v_t.ok_or(EngineError::SvdConvergence)?;
    let mut singular = svd.singular_values;

    // det(Vᵗ) equals det(V), so this is the sign of det(U)·det(V).
    let d = u.determinant() * v_t.determinant();
    if d < 0.0 {
        // The unconstrained optimum is a reflection; flip the weakest mode.
        // The singular values are not guaranteed to be ordered, so the
        // smallest one is located by value.
        let mut weakest = 0;
        for k in 1..singular.len() {
            if singular[k] < singular[weakest] {
                weakest = k;
            }
        }
        singular[weakest] = -singular[weakest];
        for row in 0..u.nrows() {
            u[(row, weakest)] = -u[(row, weakest)];
        }
    }

    let singular_sum: f64 = singular.iter().sum();
    // The absolute value guards against tiny negative remainders from
    // floating-point cancellation on near-perfect fits.
    let rmsd = ((e0 - 2.0 * singular_sum).abs() / n as f64).sqrt();

    let rotation = &u * &v_t;

    // Mobile points back at their own centroid, rotated in row convention.
    let restored = DMatrix::from_fn(n, 3, |i, j| b[(i, j)] + center_b[j]);
    let rotated = &restored * &rotation;
    let superposed = (0..n)
        .map(|i| Point3::new(rotated[(i, 0)], rotated[(i, 1)], rotated[(i, 2)]))
        .collect();

    debug!(rmsd, reflection_corrected = d < 0.0, "Superposition complete.");

    Ok(Superposition {
        reference: reference.to_vec(),
        superposed,
        rotation: Matrix3::from_fn(|r, c| rotation[(r, c)]),
        rmsd,
    })
}

fn centered_matrix(points: &[Point3<f64>], center: &Point3<f64>) -> DMatrix<f64> {
    DMatrix::from_fn(points.len(), 3, |i, j| points[i][j] - center[j])
}
