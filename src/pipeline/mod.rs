//! # Multiplication Pipeline
//!
//! Matrix multiplication as a producer/consumer pipeline. One multiply is
//! split into independent scalar products that are fanned out to a pool of
//! worker threads and fanned back in to rebuild the result.
//!
//! ```text
//!                  left stream  ┌──────────┐
//!  ┌─────────┐  ───────────────▶│ worker 0 │──┐
//!  │ Encoder │                  │ worker 1 │──┼──▶ output ──▶ ┌───────────┐
//!  └─────────┘  ───────────────▶│   ...    │──┘               │ Assembler │
//!                  right stream └──────────┘                  └───────────┘
//! ```
//!
//! ## Key Components
//!
//! - **ElementStreamEncoder**: emits matched `(left, right)` scalar pairs
//! - **ProductPipeline**: worker pool that multiplies pairs and tags products
//! - **MatrixAssembler**: sums tagged products into the result matrix
//! - **Multiplier**: wires the three together for a single multiplication
//!
//! ## Deadlock freedom
//!
//! The encoder runs on the caller's thread and finishes before the assembler
//! starts reading. Every channel is therefore sized to the exact number of
//! pairs, so no send can ever block.
//!
//! ## Example
//!
//! ```
//! use cycle_trace::matrix::Matrix;
//! use cycle_trace::pipeline::Multiplier;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
//! let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]])?;
//!
//! let product = Multiplier::new(4).multiply(&a, &b)?;
//! assert_eq!(product.entries(), &[vec![19, 22], vec![43, 50]]);
//! # Ok(())
//! # }
//! ```

mod assembler;
mod encoder;
mod workers;

pub use assembler::MatrixAssembler;
pub use encoder::ElementStreamEncoder;
pub use workers::{ProductPipeline, WorkerPool};

use crossbeam_channel::bounded;

use crate::error::MatrixError;
use crate::matrix::{Matrix, check_compatible, check_contraction_bounds};

/// Runs multiplications through a product pipeline of a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiplier {
    workers: usize,
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::new(rayon::current_num_threads())
    }
}

impl Multiplier {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(crate::constants::pipeline::MIN_WORKERS),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Multiply `left` by `right`. Blocks until every partial product has
    /// been assembled.
    ///
    /// Operands must satisfy `left.rows == right.columns`; the result has
    /// the shape of `left`. Rectangular operands whose contraction walk
    /// would leave either matrix are rejected before any worker starts.
    pub fn multiply(&self, left: &Matrix, right: &Matrix) -> Result<Matrix, MatrixError> {
        check_compatible(left, right)?;
        check_contraction_bounds(left, right)?;

        let encoder = ElementStreamEncoder::new(left, right);
        let capacity = encoder.pair_count();
        let (left_tx, left_rx) = bounded(capacity);
        let (right_tx, right_rx) = bounded(capacity);
        let (output_tx, output_rx) = bounded(capacity);

        let pool = ProductPipeline::new(self.workers, left_rx, right_rx, output_tx).spawn()?;
        let sent = encoder.encode(left_tx, right_tx)?;

        let result = MatrixAssembler::new(left.rows(), left.columns())?.assemble(&output_rx)?;
        let produced = pool.join()?;

        if produced != sent {
            return Err(MatrixError::Pipeline {
                message: format!("encoded {sent} pairs but only {produced} products arrived"),
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_worker_count_has_a_floor() {
        assert_eq!(Multiplier::new(0).workers(), 1);
        assert!(Multiplier::default().workers() >= 1);
    }

    #[test]
    fn test_result_independent_of_worker_count() {
        let a = Matrix::from_rows(vec![
            vec![1, -2, 3, 0],
            vec![4, 5, -6, 1],
            vec![7, 8, 9, 2],
            vec![0, 1, 0, 3],
        ])
        .unwrap();
        let reference = a.multiply_serial(&a).unwrap();

        for workers in [1, 2, 3, 8, 32] {
            assert_eq!(
                Multiplier::new(workers).multiply(&a, &a).unwrap(),
                reference,
                "{workers} workers"
            );
        }
    }

    #[test]
    fn test_incompatible_operands_never_start_workers() {
        let a = Matrix::new(3, 3).unwrap();
        let b = Matrix::new(2, 2).unwrap();
        assert!(matches!(
            Multiplier::new(2).multiply(&a, &b),
            Err(MatrixError::IncompatibleDimensions { .. })
        ));
    }

    #[test]
    fn test_channels_hold_every_pair_before_anyone_reads() {
        let left = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let right = Matrix::from_rows(vec![vec![1, 0], vec![0, 1], vec![2, 2]]).unwrap();
        let encoder = ElementStreamEncoder::new(&left, &right);
        let capacity = encoder.pair_count();
        assert_eq!(capacity, 2 * 3 * 2);

        let (left_tx, left_rx) = bounded(capacity);
        let (right_tx, right_rx) = bounded(capacity);

        // Encoding on this thread with no consumer must not block.
        let sent = encoder.encode(left_tx, right_tx).unwrap();

        assert_eq!(sent, capacity);
        assert_eq!(left_rx.len(), capacity);
        assert_eq!(left_rx.capacity(), Some(capacity));
        assert_eq!(right_rx.len(), capacity);
        assert_eq!(right_rx.capacity(), Some(capacity));

        let (output_tx, output_rx) = bounded(capacity);
        let pool = ProductPipeline::new(1, left_rx, right_rx, output_tx)
            .spawn()
            .unwrap();
        assert_eq!(pool.join().unwrap(), capacity);

        // Every product is buffered in the output before assembly starts.
        assert_eq!(output_rx.len(), capacity);
        assert_eq!(output_rx.capacity(), Some(capacity));
        let result = MatrixAssembler::new(left.rows(), left.columns())
            .unwrap()
            .assemble(&output_rx)
            .unwrap();
        assert_eq!(result, left.multiply_serial(&right).unwrap());
    }

    #[test]
    fn test_result_has_left_shape() {
        let left = Matrix::from_rows(vec![vec![1, 0, 2], vec![0, 1, 1]]).unwrap();
        let right = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();

        for workers in [1, 4] {
            let product = Multiplier::new(workers).multiply(&left, &right).unwrap();
            assert_eq!(
                product,
                Matrix::from_rows(vec![vec![11, 14, 0], vec![8, 10, 0]]).unwrap()
            );
        }
    }

    #[test]
    fn test_single_cell_matrices() {
        let a = Matrix::from_rows(vec![vec![-6]]).unwrap();
        let b = Matrix::from_rows(vec![vec![7]]).unwrap();
        assert_eq!(
            Multiplier::new(3).multiply(&a, &b).unwrap(),
            Matrix::from_rows(vec![vec![-42]]).unwrap()
        );
    }
}
