//! Graph command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::error::CycleTraceError;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub path: Option<PathBuf>,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
    pub workers: usize,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    path: Option<Option<PathBuf>>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_cycles: Option<bool>,
    workers: Option<usize>,
}

impl GraphOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: Option<PathBuf>) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }
}

impl crate::common::ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, CycleTraceError> {
        let missing = |field: &str| CycleTraceError::ConfigurationError {
            message: format!("Missing required field: {field}"),
        };

        let workers = self.workers.ok_or_else(|| missing("workers"))?;
        if workers == 0 {
            return Err(CycleTraceError::ConfigurationError {
                message: "At least one product worker is required".to_string(),
            });
        }

        Ok(GraphOptions {
            path: self.path.ok_or_else(|| missing("path"))?,
            format: self.format.ok_or_else(|| missing("format"))?,
            output: self.output.ok_or_else(|| missing("output"))?,
            highlight_cycles: self
                .highlight_cycles
                .ok_or_else(|| missing("highlight_cycles"))?,
            workers,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::common::ConfigBuilder;

    fn complete() -> GraphOptionsBuilder {
        GraphOptions::builder()
            .with_path(Some(PathBuf::from("graph.csv")))
            .with_format(GraphFormat::Dot)
            .with_output(None)
            .with_highlight_cycles(true)
    }

    #[test]
    fn test_build_graph_options() {
        let options = complete().with_workers(3).build().unwrap();

        assert_eq!(options.path, Some(PathBuf::from("graph.csv")));
        assert_eq!(options.format, GraphFormat::Dot);
        assert!(options.output.is_none());
        assert!(options.highlight_cycles);
        assert_eq!(options.workers, 3);
    }

    #[test]
    fn test_missing_workers() {
        match complete().build() {
            Err(CycleTraceError::ConfigurationError { message }) => {
                assert_eq!(message, "Missing required field: workers");
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        assert!(complete().with_workers(0).build().is_err());
    }
}
