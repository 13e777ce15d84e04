use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Failures raised by matrix construction and arithmetic.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Both rows and columns must be greater than 0 (got {rows}x{columns})")]
    #[diagnostic(
        code(cycle_trace::dimension_error),
        help("A matrix needs at least one row and one column")
    )]
    Dimension { rows: usize, columns: usize },

    #[error(
        "Provided entries are {actual_rows}x{actual_columns} but the matrix was declared \
         {rows}x{columns}"
    )]
    #[diagnostic(
        code(cycle_trace::shape_mismatch),
        help("Every row must have exactly as many entries as the declared column count")
    )]
    ShapeMismatch {
        rows: usize,
        columns: usize,
        actual_rows: usize,
        actual_columns: usize,
    },

    #[error(
        "Matrices are not compatible for multiplication: left is {left_rows}x{left_columns}, \
         right is {right_rows}x{right_columns}"
    )]
    #[diagnostic(
        code(cycle_trace::incompatible_dimensions),
        help("The left operand's row count must equal the right operand's column count")
    )]
    IncompatibleDimensions {
        left_rows: usize,
        left_columns: usize,
        right_rows: usize,
        right_columns: usize,
    },

    #[error("Only positive non-zero powers are allowed (got {power})")]
    #[diagnostic(code(cycle_trace::invalid_power))]
    InvalidPower { power: i64 },

    #[error("Multiplication pipeline failed: {message}")]
    #[diagnostic(
        code(cycle_trace::pipeline_error),
        help("This is likely an internal error - please report it")
    )]
    Pipeline { message: String },
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid matrix data in '{file}': {reason}")]
#[diagnostic(
    code(cycle_trace::csv_parse_error),
    help("Each line must hold the same number of comma-separated integers")
)]
pub struct CsvParseError {
    pub file: String,
    pub reason: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("here")]
    pub span: Option<SourceSpan>,
}

#[derive(Error, Debug, Diagnostic)]
pub enum CycleTraceError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(cycle_trace::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    CsvParseError(Box<CsvParseError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Matrix(#[from] MatrixError),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(cycle_trace::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(cycle_trace::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(cycle_trace::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(cycle_trace::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

impl From<CsvParseError> for CycleTraceError {
    fn from(error: CsvParseError) -> Self {
        CycleTraceError::CsvParseError(Box::new(error))
    }
}
