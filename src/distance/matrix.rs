//! Dense distance matrix.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ResultExt, SolverError};

/// A dense n×n matrix of travel costs stored in row-major order.
///
/// `get(i, j)` is the cost of travelling directly from location `i` to
/// location `j`. Every entry is finite and nonnegative; symmetry is not
/// required.
///
/// # Examples
///
/// ```
/// use tourga::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 4.0],
///     vec![2.0, 4.0, 0.0],
/// ]).unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.route_distance(&[0, 1, 2, 0]), 7.0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MatrixRepr"))]
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Wire form of a [`DistanceMatrix`]; deserialized matrices go through
/// `from_rows`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MatrixRepr {
    data: Vec<f64>,
    size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<MatrixRepr> for DistanceMatrix {
    type Error = SolverError;

    fn try_from(repr: MatrixRepr) -> Result<Self> {
        if repr.size == 0 || repr.size.checked_mul(repr.size) != Some(repr.data.len()) {
            return Err(SolverError::InvalidMatrix(format!(
                "{} entries cannot form a {}x{} matrix",
                repr.data.len(),
                repr.size,
                repr.size
            )));
        }
        let rows = repr
            .data
            .chunks(repr.size)
            .map(|row| row.to_vec())
            .collect();
        Self::from_rows(rows)
    }
}

impl DistanceMatrix {
    /// Builds a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidMatrix` if there are no rows, if any row
    /// length differs from the number of rows, or if an entry is negative or
    /// not finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(SolverError::InvalidMatrix(
                "Distance matrix has no rows".to_string(),
            ));
        }

        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(SolverError::InvalidMatrix(format!(
                    "Row {} has {} entries, expected {} for a square matrix",
                    i,
                    row.len(),
                    size
                )));
            }
            for (j, value) in row.into_iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(SolverError::InvalidMatrix(format!(
                        "Entry ({}, {}) must be a finite nonnegative number, got {}",
                        i, j, value
                    )));
                }
                data.push(value);
            }
        }

        Ok(Self { data, size })
    }

    /// Reads a headerless, comma-separated square table.
    ///
    /// Row `i`, column `j` is the cost from location `i` to location `j`.
    /// Surrounding whitespace in each field is ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for (i, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = record
                .iter()
                .enumerate()
                .map(|(j, field)| {
                    field.parse::<f64>().map_err(|_| {
                        SolverError::InvalidMatrix(format!(
                            "Entry ({}, {}) is not a number: {:?}",
                            i, j, field
                        ))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            rows.push(row);
        }

        let matrix = Self::from_rows(rows)?;
        debug!(locations = matrix.size, "Loaded distance matrix");
        Ok(matrix)
    }

    /// Reads a matrix from a CSV file. See [`DistanceMatrix::from_reader`].
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open distance matrix {}", path.display()))?;
        Self::from_reader(file)
    }

    /// Computes a Euclidean distance matrix from planar coordinates.
    pub fn from_coordinates(points: &[(f64, f64)]) -> Result<Self> {
        let rows = points
            .iter()
            .map(|&(x1, y1)| {
                points
                    .iter()
                    .map(|&(x2, y2)| ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt())
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Returns the cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix, depot included.
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

    /// Sums the cost of every consecutive leg of `stops`.
    ///
    /// # Panics
    ///
    /// Panics if a stop is not a valid location index.
    pub fn route_distance(&self, stops: &[usize]) -> f64 {
        stops
            .windows(2)
            .map(|leg| self.get(leg[0], leg[1]))
            .sum()
    }
}
