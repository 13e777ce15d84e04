//! Loading adjacency matrices from comma-separated text

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use rayon::prelude::*;

use crate::error::{CsvParseError, CycleTraceError};
use crate::matrix::Matrix;

/// A matrix read from CSV text: one row per line, integers separated by
/// commas. Blank lines are skipped and fields may carry surrounding
/// whitespace or double quotes.
#[derive(Debug, Clone)]
pub struct AdjacencyCsv {
    matrix: Matrix,
}

/// A non-blank line and where it starts in the source text.
struct SourceLine<'a> {
    offset: usize,
    text: &'a str,
}

struct FieldError {
    span: SourceSpan,
    reason: String,
}

impl AdjacencyCsv {
    pub fn parse_file(path: &Path) -> Result<Self, CycleTraceError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CycleTraceError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&path.display().to_string(), &content)
    }

    pub fn parse_str(name: &str, content: &str) -> Result<Self, CycleTraceError> {
        let lines = source_lines(content);

        let rows: Vec<Vec<i64>> = lines
            .par_iter()
            .map(parse_line)
            .collect::<Result<_, FieldError>>()
            .map_err(|e| csv_error(name, content, e))?;

        let expected = rows.first().map_or(0, Vec::len);
        let ragged = lines
            .iter()
            .zip(&rows)
            .find(|(_, row)| row.len() != expected);
        if let Some((line, row)) = ragged {
            let error = FieldError {
                span: SourceSpan::new(line.offset.into(), line.text.len()),
                reason: format!("expected {expected} fields but found {}", row.len()),
            };
            return Err(csv_error(name, content, error));
        }

        let matrix = Matrix::from_rows(rows)?;
        Ok(Self { matrix })
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Only square matrices describe a graph; anything else deserves a
    /// warning.
    pub fn is_square(&self) -> bool {
        self.matrix.is_square()
    }
}

fn source_lines(content: &str) -> Vec<SourceLine<'_>> {
    let mut offset = 0;
    let mut lines = Vec::new();
    for raw in content.split_inclusive('\n') {
        let text = raw.trim_end_matches(['\n', '\r']);
        if !text.trim().is_empty() {
            lines.push(SourceLine { offset, text });
        }
        offset += raw.len();
    }
    lines
}

fn parse_line(line: &SourceLine<'_>) -> Result<Vec<i64>, FieldError> {
    let mut offset = line.offset;
    let mut values = Vec::new();
    for field in line.text.split(',') {
        let (start, text) = unquote(field);
        let value = text.parse::<i64>().map_err(|_| FieldError {
            span: SourceSpan::new((offset + start).into(), text.len()),
            reason: format!("'{text}' is not an integer"),
        })?;
        values.push(value);
        offset += field.len() + 1;
    }
    Ok(values)
}

/// The field's content without surrounding whitespace or one pair of double
/// quotes, and its offset within the field.
fn unquote(field: &str) -> (usize, &str) {
    let trimmed = field.trim();
    let start = field.len() - field.trim_start().len();
    match trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => (start + 1, inner),
        None => (start, trimmed),
    }
}

fn csv_error(name: &str, content: &str, error: FieldError) -> CycleTraceError {
    CsvParseError {
        file: name.to_string(),
        reason: error.reason,
        source_code: NamedSource::new(name, content.to_string()),
        span: Some(error.span),
    }
    .into()
}
