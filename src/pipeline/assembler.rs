use crossbeam_channel::Receiver;

use crate::error::MatrixError;
use crate::matrix::{Element, Matrix};

/// Folds tagged partial products into a fresh result matrix.
///
/// Accumulation is wrapping integer addition, which is commutative and
/// associative, so the order in which workers deliver products never changes
/// the result.
pub struct MatrixAssembler {
    result: Matrix,
    accumulated: usize,
}

impl MatrixAssembler {
    pub fn new(rows: usize, columns: usize) -> Result<Self, MatrixError> {
        Ok(Self {
            result: Matrix::new(rows, columns)?,
            accumulated: 0,
        })
    }

    /// Add one partial product into its destination cell.
    pub fn accumulate(&mut self, element: Element) -> Result<(), MatrixError> {
        let (rows, columns) = (self.result.rows(), self.result.columns());
        let cell = self
            .result
            .entry_mut(element.row_index, element.col_index)
            .ok_or_else(|| MatrixError::Pipeline {
                message: format!(
                    "product tagged ({}, {}) is outside the {rows}x{columns} result",
                    element.row_index, element.col_index
                ),
            })?;
        *cell = cell.wrapping_add(element.value);
        self.accumulated += 1;
        Ok(())
    }

    pub fn accumulated(&self) -> usize {
        self.accumulated
    }

    /// Drain the output stream until it closes and return the finished
    /// matrix.
    pub fn assemble(mut self, output: &Receiver<Element>) -> Result<Matrix, MatrixError> {
        for element in output.iter() {
            self.accumulate(element)?;
        }
        Ok(self.result)
    }
}
