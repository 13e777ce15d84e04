//! Determinism of the concurrent multiplication pipeline

use cycle_trace::error::MatrixError;
use cycle_trace::matrix::Matrix;
use cycle_trace::pipeline::Multiplier;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, size: usize) -> Matrix {
    let rows = (0..size)
        .map(|_| (0..size).map(|_| rng.gen_range(-100..=100)).collect())
        .collect();
    Matrix::from_rows(rows).unwrap()
}

#[test]
fn test_repeated_multiplication_is_bit_identical() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let a = random_matrix(&mut rng, 50);
    let b = random_matrix(&mut rng, 50);
    let reference = a.multiply_serial(&b).unwrap();
    let multiplier = Multiplier::new(8);

    for run in 0..100 {
        let product = multiplier.multiply(&a, &b).unwrap();
        assert_eq!(product, reference, "run {run}");
    }
}

#[test]
fn test_worker_counts_agree_with_serial_reference() {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_matrix(&mut rng, 17);
    let b = random_matrix(&mut rng, 17);
    let reference = a.multiply_serial(&b).unwrap();

    for workers in [1, 2, 4, 16, 64] {
        assert_eq!(
            Multiplier::new(workers).multiply(&a, &b).unwrap(),
            reference,
            "{workers} workers"
        );
    }
}

#[test]
fn test_overflow_wraps_identically() {
    let big = Matrix::from_rows(vec![vec![i64::MAX, i64::MAX], vec![i64::MAX, i64::MAX]]).unwrap();
    let reference = big.multiply_serial(&big).unwrap();

    for _ in 0..10 {
        assert_eq!(Multiplier::new(4).multiply(&big, &big).unwrap(), reference);
    }
}

fn random_rectangle(rng: &mut StdRng, rows: usize, columns: usize) -> Matrix {
    let entries = (0..rows)
        .map(|_| (0..columns).map(|_| rng.gen_range(-5..=5)).collect())
        .collect();
    Matrix::from_rows(entries).unwrap()
}

#[test]
fn test_rectangular_operands_keep_left_shape() {
    let mut rng = StdRng::seed_from_u64(7);
    let wide = random_rectangle(&mut rng, 3, 6);
    let tall = random_rectangle(&mut rng, 6, 3);

    let product = Multiplier::new(3).multiply(&wide, &tall).unwrap();
    assert_eq!(product.rows(), 3);
    assert_eq!(product.columns(), 6);
    assert_eq!(product, wide.multiply_serial(&tall).unwrap());

    // Only the first three columns receive products
    for row in product.entries() {
        assert_eq!(&row[3..], &[0, 0, 0]);
    }
}

#[test]
fn test_rectangular_operands_outside_the_walk_are_rejected() {
    let mut rng = StdRng::seed_from_u64(11);
    let tall = random_rectangle(&mut rng, 6, 3);
    let wide = random_rectangle(&mut rng, 3, 6);

    assert!(matches!(
        Multiplier::new(3).multiply(&tall, &wide),
        Err(MatrixError::IncompatibleDimensions { .. })
    ));
}
