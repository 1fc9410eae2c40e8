//! Implementation of `repgraph longest <file> --graph ID [--directed]`.
//!
//! Prints every path tied for the maximum length, one per line, as
//! `0 -> 1 -> 2`. Undirected search is diameter-style and reports a path
//! and its reverse once; directed search requires an acyclic graph.
//!
//! Output (JSON mode): `{"graph", "directed", "length", "paths"}`.
//!
//! Exit codes: 0 = success, 1 = unknown graph or directed cycle,
//! 2 = input error.
use repgraph_core::{Corpus, GraphId, NodeId};
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{path_display, write_json};

#[derive(Debug, Serialize)]
struct LongestReport<'a> {
    graph: &'a GraphId,
    directed: bool,
    length: usize,
    paths: Vec<Vec<NodeId>>,
}

/// Runs the `longest` command.
///
/// # Errors
///
/// - [`CliError::GraphNotFound`] if `graph` is not in `corpus`.
/// - [`CliError::AnalysisFailed`] if `directed` is set and the graph has a
///   directed cycle.
pub fn run(
    corpus: &Corpus,
    graph: &str,
    directed: bool,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let id = GraphId::from(graph);
    let g = corpus.graph(&id)?;
    let paths = g
        .longest_paths(directed)
        .map_err(|source| CliError::AnalysisFailed {
            graph: id.to_string(),
            source,
        })?;

    let report = LongestReport {
        graph: &id,
        directed,
        length: paths.first().map_or(0, Vec::len),
        paths,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &report),
        OutputFormat::Json => write_json(&mut out, &report),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, report: &LongestReport<'_>) -> std::io::Result<()> {
    for path in &report.paths {
        writeln!(w, "{}", path_display(path))?;
    }
    Ok(())
}
