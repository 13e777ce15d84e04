//! # Matrix Module
//!
//! Dense integer matrices and the operations the cycle detector is built
//! from: trace, multiplication and integer exponentiation.
//!
//! ## Key Components
//!
//! - **Matrix**: fixed-shape container with validated construction
//! - **Element**: a scalar tagged with its matrix coordinates, used by the
//!   multiplication pipeline
//! - **Exponentiator**: raises a matrix to a positive power by repeated
//!   left-multiplication
//!
//! ## Example
//!
//! ```
//! use cycle_trace::matrix::Matrix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let a = Matrix::from_rows(vec![vec![0, 1], vec![1, 0]])?;
//!
//! let squared = a.exponentiate(2)?;
//! assert_eq!(squared, Matrix::identity(2)?);
//! assert_eq!(squared.trace(), 2);
//! # Ok(())
//! # }
//! ```

mod power;
mod types;

pub use power::Exponentiator;
pub(crate) use types::{check_compatible, check_contraction_bounds};
pub use types::{Element, Matrix};
