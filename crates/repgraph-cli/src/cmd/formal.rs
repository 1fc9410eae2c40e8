//! Implementation of `repgraph formal <file> --graph ID [--planar]
//! [--directed] [--connected]`.
//!
//! Runs the selected tests on one graph. Longest paths are always reported,
//! directed when `--directed` is passed. Tests that were not requested are
//! left out of the output.
//!
//! Exit codes: 0 = success, 1 = unknown graph, empty graph with
//! `--connected`, or directed cycle with `--directed`; 2 = input error.
use repgraph_core::{Corpus, FormalTestReport, FormalTests, GraphId};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{Style, path_display, write_json};

/// Runs the `formal` command.
///
/// # Errors
///
/// - [`CliError::GraphNotFound`] if `graph` is not in `corpus`.
/// - [`CliError::AnalysisFailed`] if a requested test's precondition fails.
pub fn run(
    corpus: &Corpus,
    graph: &str,
    tests: FormalTests,
    format: &OutputFormat,
    style: Style,
) -> Result<(), CliError> {
    let report = corpus.formal_tests(&GraphId::from(graph), tests)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &report, style),
        OutputFormat::Json => write_json(&mut out, &report),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn print_human<W: std::io::Write>(
    w: &mut W,
    report: &FormalTestReport,
    style: Style,
) -> std::io::Result<()> {
    writeln!(w, "graph:     {}", report.graph)?;
    if let Some(planar) = report.planar {
        writeln!(w, "planar:    {}", style.verdict(planar, true))?;
    }
    for (a, b) in report.crossing_pairs.iter().flatten() {
        writeln!(w, "  crossing edges {a} and {b}")?;
    }
    if let Some(connected) = report.connected {
        writeln!(w, "connected: {}", style.verdict(connected, true))?;
    }
    let kind = if report.directed { "directed" } else { "undirected" };
    writeln!(w, "longest ({kind}):")?;
    for path in &report.longest_paths {
        writeln!(w, "  {}", path_display(path))?;
    }
    Ok(())
}
