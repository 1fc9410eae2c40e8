//! Writes a Medium-tier corpus to disk as JSON Lines.
//!
//! The file lands at `target/bench-fixtures/corpus.jsonl` and is meant for
//! timing the `repgraph` binary end to end.

use std::error::Error;
use std::fs;

use repgraph_bench::{SizeTier, corpus_fixture_path, generate_corpus};
use repgraph_core::to_json_lines;

fn main() -> Result<(), Box<dyn Error>> {
    let path = corpus_fixture_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    eprintln!("Generating Medium tier corpus...");
    let corpus = generate_corpus(&SizeTier::Medium.config(42));
    let stats = corpus.stats();
    eprintln!(
        "Generated {} graphs, {} nodes, {} edges",
        stats.graphs, stats.nodes, stats.edges
    );

    eprintln!("Writing JSON Lines to {}...", path.display());
    let text = to_json_lines(&corpus)?;
    fs::write(&path, &text)?;
    eprintln!("{:.1} MB", text.len() as f64 / (1024.0 * 1024.0));

    Ok(())
}
