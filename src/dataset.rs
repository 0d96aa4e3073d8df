use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("point {index} has {found} coordinates, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}

/// An immutable matrix of `D`-dimensional points, addressed by point index.
#[derive(Debug)]
pub struct Dataset<const D: usize> {
    points: Vec<[f64; D]>,
}

impl<const D: usize> Dataset<D> {
    #[must_use]
    pub fn new(points: Vec<[f64; D]>) -> Self {
        Dataset { points }
    }

    /// Builds a dataset from untyped rows, checking each row's dimensionality.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, DatasetError> {
        let mut points = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            if row.len() != D {
                return Err(DatasetError::DimensionMismatch {
                    index,
                    expected: D,
                    found: row.len(),
                });
            }
            let mut point = [0.0; D];
            point.copy_from_slice(row);
            points.push(point);
        }
        Ok(Dataset { points })
    }

    #[must_use]
    pub fn point(&self, index: usize) -> &[f64; D] {
        &self.points[index]
    }

    #[must_use]
    pub fn coordinate(&self, dimension: usize, index: usize) -> f64 {
        self.points[index][dimension]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Dataset, DatasetError};

    #[test]
    fn access() {
        let dataset = Dataset::new(vec![[0.0, 1.0], [2.0, 3.0]]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.point(1), &[2.0, 3.0]);
        assert_eq!(dataset.coordinate(1, 0), 1.0);
        assert_eq!(dataset.coordinate(0, 1), 2.0);
    }

    #[test]
    fn from_rows() {
        let rows = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
        let dataset = Dataset::<2>::from_rows(&rows).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.point(0), &[0.0, 1.0]);
    }

    #[test]
    fn from_rows_dimension_mismatch() {
        let rows = vec![vec![0.0, 1.0], vec![2.0]];
        let err = Dataset::<2>::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            DatasetError::DimensionMismatch {
                index: 1,
                expected: 2,
                found: 1,
            }
        );
    }
}
