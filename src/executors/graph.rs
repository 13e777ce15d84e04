//! Graph command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::GraphOptions;
use crate::detector::CycleDetector;
use crate::executors::{CommandExecutor, load_matrix};
use crate::graph::{AdjacencyGraphBuilder, GraphRenderer};

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let Some(path) = config.path.as_deref() else {
            return Ok(());
        };

        eprintln!(
            "{} Generating {} graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let adjacency = load_matrix(path, None)?;

        // Exponentiate only when highlighting is requested
        let cyclic_nodes = if config.highlight_cycles {
            let mut detector = CycleDetector::with_workers(config.workers);
            detector
                .detect_cycles(&adjacency)
                .wrap_err("Failed to detect cycles")?;
            detector.cyclic_nodes()
        } else {
            Vec::new()
        };

        let mut builder = AdjacencyGraphBuilder::new();
        let graph = builder.build_from_matrix(&adjacency);
        let renderer = GraphRenderer::new(config.highlight_cycles);

        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        match config.format {
            GraphFormat::Ascii => renderer
                .render_ascii(graph, &cyclic_nodes, output_writer.as_mut())
                .wrap_err("Failed to render ASCII graph")?,
            GraphFormat::Mermaid => renderer
                .render_mermaid(graph, &cyclic_nodes, output_writer.as_mut())
                .wrap_err("Failed to render Mermaid graph")?,
            GraphFormat::Dot => renderer
                .render_dot(graph, &cyclic_nodes, output_writer.as_mut())
                .wrap_err("Failed to render DOT graph")?,
        }

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush graph output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
