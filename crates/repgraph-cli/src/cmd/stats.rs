//! Implementation of `repgraph stats <file>`.
//!
//! Prints corpus totals, per-graph means, and the share of graphs with each
//! structural property. Human mode prints one `key: value` line per figure;
//! JSON mode prints the statistics object.
use repgraph_core::{Corpus, CorpusStats};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::write_json;

/// Runs the `stats` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if writing to stdout fails.
pub fn run(corpus: &Corpus, format: &OutputFormat) -> Result<(), CliError> {
    let stats = corpus.stats();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => write_json(&mut out, &stats),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, s: &CorpusStats) -> std::io::Result<()> {
    writeln!(w, "graphs:                 {}", s.graphs)?;
    writeln!(w, "nodes:                  {} (mean {:.2})", s.nodes, s.mean_nodes)?;
    writeln!(w, "edges:                  {} (mean {:.2})", s.edges, s.mean_edges)?;
    writeln!(w, "tokens:                 {} (mean {:.2})", s.tokens, s.mean_tokens)?;
    writeln!(w, "directed cyclic:        {:.2}%", s.directed_cyclic_pct)?;
    writeln!(w, "undirected cyclic:      {:.2}%", s.undirected_cyclic_pct)?;
    writeln!(w, "disconnected:           {:.2}%", s.disconnected_pct)?;
    writeln!(w, "crossing:               {:.2}%", s.crossing_pct)?;
    writeln!(w, "with dangling edges:    {}", s.graphs_with_dangling_edges)?;
    Ok(())
}
