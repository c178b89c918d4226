use thiserror::Error;

/// Structural problems found while building a similarity matrix
#[derive(Debug, Error, PartialEq)]
pub enum MatrixError {
    #[error("row {row} has {found} columns, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("score at ({row}, {column}) is not a finite number")]
    NonFiniteScore { row: usize, column: usize },
}

/// Square matrix of pairwise similarity scores
///
/// Cell (i, j) holds the similarity between positions i and j. Scores are
/// stored row-major in a single buffer; every value is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Builds a matrix from nested rows, checking it is square and finite
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut scores = Vec::with_capacity(size * size);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            if let Some(column) = values.iter().position(|score| !score.is_finite()) {
                return Err(MatrixError::NonFiniteScore { row, column });
            }
            scores.extend(values);
        }

        Ok(Self { size, scores })
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Scores of every position against `index`, or `None` if out of range
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.size {
            return None;
        }
        let start = index * self.size;
        Some(&self.scores[start..start + self.size])
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.row(row).and_then(|values| values.get(column).copied())
    }
}
