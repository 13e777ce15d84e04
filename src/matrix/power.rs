use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::pipeline::Multiplier;

/// Raises matrices to positive integer powers.
///
/// Each step left-multiplies the running result by the original matrix, so
/// `A^p` costs `p - 1` multiplications. There is no repeated squaring.
pub struct Exponentiator<'a> {
    multiplier: &'a Multiplier,
}

impl<'a> Exponentiator<'a> {
    pub fn new(multiplier: &'a Multiplier) -> Self {
        Self { multiplier }
    }

    /// Compute `base^power`.
    pub fn raise(&self, base: &Matrix, power: i64) -> Result<Matrix, MatrixError> {
        self.raise_with_progress(base, power, |_, _| {})
    }

    /// Compute `base^power`, calling `on_step(done, total)` after every
    /// multiplication.
    pub fn raise_with_progress<F>(
        &self,
        base: &Matrix,
        power: i64,
        mut on_step: F,
    ) -> Result<Matrix, MatrixError>
    where
        F: FnMut(usize, usize),
    {
        if power <= 0 {
            return Err(MatrixError::InvalidPower { power });
        }

        let steps = usize::try_from(power - 1).map_err(|_| MatrixError::InvalidPower { power })?;
        let mut current = base.clone();
        for step in 1..=steps {
            current = self.multiplier.multiply(base, &current)?;
            on_step(step, steps);
        }

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_power_of_permutation_cycles_back() {
        let rotation =
            Matrix::from_rows(vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]]).unwrap();
        let multiplier = Multiplier::new(2);

        let cubed = Exponentiator::new(&multiplier).raise(&rotation, 3).unwrap();
        assert_eq!(cubed, Matrix::identity(3).unwrap());
    }

    #[test]
    fn test_progress_reports_every_step() {
        let a = Matrix::from_rows(vec![vec![1, 1], vec![0, 1]]).unwrap();
        let multiplier = Multiplier::new(1);
        let mut seen = Vec::new();

        let result = Exponentiator::new(&multiplier)
            .raise_with_progress(&a, 4, |done, total| seen.push((done, total)))
            .unwrap();

        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
        assert_eq!(result, Matrix::from_rows(vec![vec![1, 4], vec![0, 1]]).unwrap());
    }

    #[test]
    fn test_power_one_never_multiplies() {
        let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let multiplier = Multiplier::default();
        let mut calls = 0;

        let result = Exponentiator::new(&multiplier)
            .raise_with_progress(&a, 1, |_, _| calls += 1)
            .unwrap();

        assert_eq!(calls, 0);
        assert_eq!(result, a);
    }

    #[test]
    fn test_non_square_base_fails_on_first_step() {
        let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let multiplier = Multiplier::default();

        let result = Exponentiator::new(&multiplier).raise(&a, 2);
        assert!(matches!(
            result,
            Err(MatrixError::IncompatibleDimensions { .. })
        ));
    }
}
