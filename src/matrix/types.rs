use std::fmt;

use serde::Serialize;

use crate::error::MatrixError;
use crate::pipeline::Multiplier;

/// A scalar in flight through the multiplication pipeline, tagged with the
/// matrix coordinates it came from or is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    pub row_index: usize,
    pub col_index: usize,
    pub value: i64,
}

impl Element {
    pub fn new(row_index: usize, col_index: usize, value: i64) -> Self {
        Self {
            row_index,
            col_index,
            value,
        }
    }
}

/// Dense integer matrix with a fixed shape.
///
/// The shape is validated on construction and never changes afterwards. All
/// arithmetic wraps on overflow, which keeps the result independent of the
/// order in which partial products are summed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    entries: Vec<Vec<i64>>,
}

impl Matrix {
    /// Create a zero-filled `rows` x `columns` matrix.
    pub fn new(rows: usize, columns: usize) -> Result<Self, MatrixError> {
        if rows == 0 || columns == 0 {
            return Err(MatrixError::Dimension { rows, columns });
        }

        Ok(Self {
            rows,
            columns,
            entries: vec![vec![0; columns]; rows],
        })
    }

    /// Create a matrix from explicit entries, checking them against the
    /// declared shape.
    pub fn with_entries(
        rows: usize,
        columns: usize,
        entries: Vec<Vec<i64>>,
    ) -> Result<Self, MatrixError> {
        if rows == 0 || columns == 0 {
            return Err(MatrixError::Dimension { rows, columns });
        }

        let ragged_row = entries.iter().find(|row| row.len() != columns);
        if entries.len() != rows || ragged_row.is_some() {
            return Err(MatrixError::ShapeMismatch {
                rows,
                columns,
                actual_rows: entries.len(),
                actual_columns: ragged_row
                    .or_else(|| entries.first())
                    .map_or(0, |row| row.len()),
            });
        }

        Ok(Self {
            rows,
            columns,
            entries,
        })
    }

    /// Build a matrix whose shape is inferred from the supplied rows.
    pub fn from_rows(entries: Vec<Vec<i64>>) -> Result<Self, MatrixError> {
        let rows = entries.len();
        let columns = entries.first().map_or(0, |row| row.len());
        Self::with_entries(rows, columns, entries)
    }

    /// The `size` x `size` identity matrix.
    pub fn identity(size: usize) -> Result<Self, MatrixError> {
        let mut matrix = Self::new(size, size)?;
        for (i, row) in matrix.entries.iter_mut().enumerate() {
            row[i] = 1;
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    pub fn entries(&self) -> &[Vec<i64>] {
        &self.entries
    }

    pub fn get(&self, row: usize, column: usize) -> Option<i64> {
        self.entries.get(row).and_then(|r| r.get(column)).copied()
    }

    pub(crate) fn entry_mut(&mut self, row: usize, column: usize) -> Option<&mut i64> {
        self.entries.get_mut(row).and_then(|r| r.get_mut(column))
    }

    /// Sum of the entries whose row index equals their column index.
    pub fn trace(&self) -> i64 {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, row)| row.get(i))
            .fold(0i64, |acc, value| acc.wrapping_add(*value))
    }

    /// Entrywise sum of two matrices of the same shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.rows != other.rows || self.columns != other.columns {
            return Err(MatrixError::ShapeMismatch {
                rows: self.rows,
                columns: self.columns,
                actual_rows: other.rows,
                actual_columns: other.columns,
            });
        }

        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| a.iter().zip(b).map(|(x, y)| x.wrapping_add(*y)).collect())
            .collect();

        Ok(Matrix {
            rows: self.rows,
            columns: self.columns,
            entries,
        })
    }

    /// Multiply `self` by `other` through the concurrent product pipeline,
    /// using one worker per available core.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        Multiplier::default().multiply(self, other)
    }

    /// Single-threaded product with the same shape contract as
    /// [`Matrix::multiply`].
    pub fn multiply_serial(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        check_compatible(self, other)?;
        check_contraction_bounds(self, other)?;

        let mut result = Matrix::new(self.rows, self.columns)?;
        for (i, row) in self.entries.iter().enumerate() {
            for (j, left) in row.iter().enumerate() {
                for (k, right) in other.entries[j].iter().enumerate() {
                    let cell = &mut result.entries[i][k];
                    *cell = cell.wrapping_add(left.wrapping_mul(*right));
                }
            }
        }
        Ok(result)
    }

    /// Raise the matrix to a positive integer power.
    pub fn exponentiate(&self, power: i64) -> Result<Matrix, MatrixError> {
        let multiplier = Multiplier::default();
        super::Exponentiator::new(&multiplier).raise(self, power)
    }
}

/// Check the multiplication shape contract: the left operand's rows must
/// match the right operand's columns. The product keeps the left operand's
/// shape.
pub(crate) fn check_compatible(left: &Matrix, right: &Matrix) -> Result<(), MatrixError> {
    if left.rows != right.columns {
        return Err(incompatible(left, right));
    }
    Ok(())
}

/// Check that the contraction walk stays inside both operands and the
/// result.
///
/// Every column `j` of `left` reads row `j` of `right`, and every column `k`
/// of `right` becomes column `k` of the `left`-shaped result. Operands that
/// pass [`check_compatible`] can still violate either bound when they are
/// rectangular.
pub(crate) fn check_contraction_bounds(left: &Matrix, right: &Matrix) -> Result<(), MatrixError> {
    if left.columns > right.rows || right.columns > left.columns {
        return Err(incompatible(left, right));
    }
    Ok(())
}

fn incompatible(left: &Matrix, right: &Matrix) -> MatrixError {
    MatrixError::IncompatibleDimensions {
        left_rows: left.rows,
        left_columns: left.columns,
        right_rows: right.rows,
        right_columns: right.columns,
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .entries
            .iter()
            .flatten()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(1);

        for (i, row) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:>width$}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
