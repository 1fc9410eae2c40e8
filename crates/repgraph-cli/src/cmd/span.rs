//! Implementation of `repgraph span <file> --graph ID FROM END`.
//!
//! Prints the token forms at positions `FROM..=END` joined by single spaces.
//! JSON mode prints `{"graph", "from", "end", "text", "tokens"}`.
//!
//! Exit codes: 0 = success, 1 = unknown graph or span out of range,
//! 2 = input error.
use repgraph_core::{Corpus, GraphId, Token, render_span};
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::write_json;

#[derive(Debug, Serialize)]
struct SpanReport<'a> {
    graph: &'a GraphId,
    from: usize,
    end: usize,
    text: String,
    tokens: &'a [Token],
}

/// Runs the `span` command.
///
/// # Errors
///
/// - [`CliError::GraphNotFound`] if `graph` is not in `corpus`.
/// - [`CliError::AnalysisFailed`] if `from > end` or `end` is past the last
///   token.
pub fn run(
    corpus: &Corpus,
    graph: &str,
    from: usize,
    end: usize,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let id = GraphId::from(graph);
    let tokens = corpus
        .graph(&id)?
        .token_span(from, end)
        .map_err(|source| CliError::AnalysisFailed {
            graph: id.to_string(),
            source,
        })?;

    let report = SpanReport {
        graph: &id,
        from,
        end,
        text: render_span(tokens),
        tokens,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            use std::io::Write as _;
            writeln!(out, "{}", report.text)
        }
        OutputFormat::Json => write_json(&mut out, &report),
    }
    .map_err(|e| CliError::stdout(&e))
}
