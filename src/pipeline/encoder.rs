use crossbeam_channel::Sender;

use crate::error::MatrixError;
use crate::matrix::{Element, Matrix};

/// Turns a pair of operands into the two lockstep element streams consumed by
/// the product workers.
///
/// For every `left[i][j]` the encoder walks row `j` of `right`, emitting
/// `(i, j, left[i][j])` on the left stream and `(j, k, right[j][k])` on the
/// right stream for each `k`. The n-th element of both streams therefore
/// always shares the contraction index `j`.
pub struct ElementStreamEncoder<'a> {
    left: &'a Matrix,
    right: &'a Matrix,
}

impl<'a> ElementStreamEncoder<'a> {
    pub fn new(left: &'a Matrix, right: &'a Matrix) -> Self {
        Self { left, right }
    }

    /// Exact number of pairs [`Self::pairs`] yields. Every channel in the
    /// pipeline is sized to this.
    pub fn pair_count(&self) -> usize {
        self.left
            .entries()
            .iter()
            .flat_map(|row| row.iter().enumerate())
            .map(|(j, _)| self.right.entries().get(j).map_or(0, |r| r.len()))
            .sum()
    }

    /// The encoded pairs in production order: row-major over `left`, then
    /// along the matching row of `right`.
    pub fn pairs(&self) -> impl Iterator<Item = (Element, Element)> + '_ {
        self.left
            .entries()
            .iter()
            .enumerate()
            .flat_map(move |(i, row)| {
                row.iter().enumerate().flat_map(move |(j, &left_value)| {
                    self.right
                        .entries()
                        .get(j)
                        .into_iter()
                        .flat_map(|r| r.iter().enumerate())
                        .map(move |(k, &right_value)| {
                            (
                                Element::new(i, j, left_value),
                                Element::new(j, k, right_value),
                            )
                        })
                })
            })
    }

    /// Push every pair onto the two input channels, then close them by
    /// dropping the senders. Returns the number of pairs sent.
    pub fn encode(
        &self,
        left_tx: Sender<Element>,
        right_tx: Sender<Element>,
    ) -> Result<usize, MatrixError> {
        let mut sent = 0;
        for (left, right) in self.pairs() {
            left_tx.send(left).map_err(|_| disconnected())?;
            right_tx.send(right).map_err(|_| disconnected())?;
            sent += 1;
        }
        Ok(sent)
    }
}

fn disconnected() -> MatrixError {
    MatrixError::Pipeline {
        message: "all product workers stopped before the input was encoded".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::unbounded;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_pair_count_is_rows_times_inner_times_columns() {
        let left = Matrix::new(2, 3).unwrap();
        let right = Matrix::new(3, 2).unwrap();
        assert_eq!(ElementStreamEncoder::new(&left, &right).pair_count(), 2 * 3 * 2);
    }

    #[test]
    fn test_pairs_share_contraction_index() {
        let left = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let right = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let encoder = ElementStreamEncoder::new(&left, &right);

        let pairs: Vec<_> = encoder.pairs().collect();
        assert_eq!(pairs.len(), encoder.pair_count());
        for (l, r) in &pairs {
            assert_eq!(l.col_index, r.row_index);
        }
    }

    #[test]
    fn test_production_order_is_row_major() {
        let left = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let right = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let encoder = ElementStreamEncoder::new(&left, &right);

        let tags: Vec<_> = encoder
            .pairs()
            .map(|(l, r)| (l.row_index, l.col_index, r.col_index))
            .collect();
        assert_eq!(
            tags,
            vec![
                (0, 0, 0),
                (0, 0, 1),
                (0, 1, 0),
                (0, 1, 1),
                (1, 0, 0),
                (1, 0, 1),
                (1, 1, 0),
                (1, 1, 1),
            ]
        );
    }

    #[test]
    fn test_encode_closes_both_streams() {
        let left = Matrix::identity(2).unwrap();
        let right = Matrix::identity(2).unwrap();
        let (left_tx, left_rx) = unbounded();
        let (right_tx, right_rx) = unbounded();

        let sent = ElementStreamEncoder::new(&left, &right)
            .encode(left_tx, right_tx)
            .unwrap();

        assert_eq!(sent, 8);
        assert_eq!(left_rx.iter().count(), 8);
        assert_eq!(right_rx.iter().count(), 8);
    }

    #[test]
    fn test_encode_fails_without_receivers() {
        let left = Matrix::identity(2).unwrap();
        let right = Matrix::identity(2).unwrap();
        let (left_tx, left_rx) = unbounded();
        let (right_tx, right_rx) = unbounded();
        drop(left_rx);
        drop(right_rx);

        let result = ElementStreamEncoder::new(&left, &right).encode(left_tx, right_tx);
        assert!(matches!(result, Err(MatrixError::Pipeline { .. })));
    }
}
