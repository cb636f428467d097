//! Dense validated distance matrix.

use crate::error::ShapeError;

/// A dense n×n travel-cost matrix stored in row-major order.
///
/// Costs are validated once at construction: the matrix must be square and
/// non-empty, every cost finite and non-negative, and the diagonal exactly
/// zero. Asymmetric matrices (`cost(i, j) != cost(j, i)`) are fully
/// supported. After construction the matrix is read-only.
///
/// # Examples
///
/// ```
/// use tsp_mip::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 3.0],
///     vec![4.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.get(0, 1), 3.0);
/// assert_eq!(dm.get(1, 0), 4.0);
/// assert!(!dm.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds a matrix from an explicit grid of rows, validating its shape
    /// and contents.
    ///
    /// Validation order: emptiness, squareness (every row as long as the
    /// row count), cost range (finite, `>= 0`), zero diagonal. The first
    /// offending entry is reported.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        let size = rows.len();
        if size == 0 {
            return Err(ShapeError::Empty);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(ShapeError::NotSquare {
                    rows: size,
                    row: i,
                    len: row.len(),
                });
            }
        }
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            for (j, value) in row.into_iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(ShapeError::InvalidCost {
                        row: i,
                        col: j,
                        value,
                    });
                }
                if i == j && value != 0.0 {
                    return Err(ShapeError::NonzeroDiagonal { index: i, value });
                }
                data.push(value);
            }
        }
        Ok(Self { data, size })
    }

    /// Computes a symmetric Euclidean matrix from planar coordinates.
    ///
    /// Convenience constructor for geometric instances; goes through the
    /// same validation as [`from_rows`](Self::from_rows), so non-finite
    /// coordinates are rejected as invalid costs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self, ShapeError> {
        let rows = coords
            .iter()
            .map(|&(xi, yi)| {
                coords
                    .iter()
                    .map(|&(xj, yj)| (xi - xj).hypot(yi - yj))
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Returns the travel cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
