//! Check command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::error::CycleTraceError;

/// Configuration for the check command
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// CSV file holding the adjacency matrix (None = nothing to do)
    pub path: Option<PathBuf>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Number of product workers in the multiplication pipeline
    pub workers: usize,
    /// Include A^n and the nodes on closed walks in the report
    pub show_walks: bool,
    /// Whether to exit with error code if the graph is cyclic
    pub error_on_cycles: bool,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    path: Option<Option<PathBuf>>,
    format: Option<OutputFormat>,
    workers: Option<usize>,
    show_walks: Option<bool>,
    error_on_cycles: Option<bool>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: Option<PathBuf>) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_show_walks(mut self, show_walks: bool) -> Self {
        self.show_walks = Some(show_walks);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }
}

fn missing(field: &str) -> CycleTraceError {
    CycleTraceError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl crate::common::ConfigBuilder for CheckConfigBuilder {
    type Config = CheckConfig;

    fn build(self) -> Result<Self::Config, CycleTraceError> {
        let workers = self.workers.ok_or_else(|| missing("workers"))?;
        if workers == 0 {
            return Err(CycleTraceError::ConfigurationError {
                message: "At least one product worker is required".to_string(),
            });
        }

        Ok(CheckConfig {
            path: self.path.ok_or_else(|| missing("path"))?,
            format: self.format.ok_or_else(|| missing("format"))?,
            workers,
            show_walks: self.show_walks.ok_or_else(|| missing("show_walks"))?,
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing("error_on_cycles"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_builder_requires_every_field() {
        let result = CheckConfig::builder()
            .with_path(None)
            .with_format(OutputFormat::Json)
            .with_workers(2)
            .build();

        match result {
            Err(CycleTraceError::ConfigurationError { message }) => {
                assert_eq!(message, "Missing required field: show_walks");
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        let result = CheckConfig::builder()
            .with_path(None)
            .with_format(OutputFormat::Human)
            .with_workers(0)
            .with_show_walks(false)
            .with_error_on_cycles(false)
            .build();

        assert!(matches!(
            result,
            Err(CycleTraceError::ConfigurationError { .. })
        ));
    }
}
