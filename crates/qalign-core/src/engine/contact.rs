use crate::core::utils::geometry::distance;
use nalgebra::{DMatrix, Point3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The full pairwise residue-distance matrix of one point set.
///
/// Symmetric by construction with a zero diagonal. Each cell depends only on
/// two input coordinates, so row construction is embarrassingly parallel and
/// runs on the Rayon pool when the `parallel` feature is enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMap {
    distances: DMatrix<f64>,
}

impl ContactMap {
    /// Builds the n×n distance matrix over `points`.
    pub fn new(points: &[Point3<f64>]) -> Self {
        let n = points.len();

        #[cfg(feature = "parallel")]
        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| row_distances(points, i))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Vec<f64>> = (0..n).map(|i| row_distances(points, i)).collect();

        Self {
            distances: DMatrix::from_fn(n, n, |i, j| rows[i][j]),
        }
    }

    /// Number of residues covered by the map.
    pub fn len(&self) -> usize {
        self.distances.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.nrows() == 0
    }

    /// Distance between residues `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.distances[(i, j)]
    }
}

fn row_distances(points: &[Point3<f64>], i: usize) -> Vec<f64> {
    points.iter().map(|p| distance(&points[i], p)).collect()
}
