//! Implementation of `repgraph analyze <file> [--graph ID]`.
//!
//! Runs every structural predicate on each graph of the corpus (or on the one
//! graph named by `--graph`) and prints one summary per graph.
//!
//! Output (human mode): tab-separated table with columns `ID`, `NODES`,
//! `EDGES`, `TOKENS`, `CONNECTED`, `U-CYCLE`, `D-CYCLE`, `PLANAR`,
//! `DANGLING`, `LONGEST-U`, `LONGEST-D`. A directed longest path on a cyclic
//! graph shows as `-`.
//! Output (JSON mode): an array of summary objects.
//!
//! Exit codes: 0 = success, 1 = unknown graph id, 2 = input error.
use repgraph_core::{Corpus, GraphId, GraphSummary};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{Style, write_json};

/// Runs the `analyze` command.
///
/// # Errors
///
/// - [`CliError::GraphNotFound`] if `graph` names a graph not in `corpus`.
/// - [`CliError::IoError`] if writing to stdout fails.
pub fn run(
    corpus: &Corpus,
    graph: Option<&str>,
    format: &OutputFormat,
    style: Style,
) -> Result<(), CliError> {
    let summaries: Vec<GraphSummary> = match graph {
        Some(id) => vec![GraphSummary::of(corpus.graph(&GraphId::from(id))?)],
        None => corpus.iter().map(GraphSummary::of).collect(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &summaries, style),
        OutputFormat::Json => write_json(&mut out, &summaries),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn print_human<W: std::io::Write>(
    w: &mut W,
    summaries: &[GraphSummary],
    style: Style,
) -> std::io::Result<()> {
    writeln!(
        w,
        "ID\tNODES\tEDGES\tTOKENS\tCONNECTED\tU-CYCLE\tD-CYCLE\tPLANAR\tDANGLING\tLONGEST-U\tLONGEST-D"
    )?;
    for s in summaries {
        let longest_directed = s
            .longest_directed
            .map_or_else(|| "-".to_owned(), |n| n.to_string());
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            s.id,
            s.nodes,
            s.edges,
            s.tokens,
            style.verdict(s.connected, true),
            style.verdict(s.undirected_cycle, false),
            style.verdict(s.directed_cycle, false),
            style.verdict(s.planar, true),
            s.dangling_edges,
            s.longest_undirected,
            longest_directed,
        )?;
    }
    Ok(())
}
