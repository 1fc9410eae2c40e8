//! Sentence graph generator and benchmark utilities for repgraph.
//!
//! This crate provides deterministic generation of MRP-shaped corpora for
//! benchmarking and property-based testing of `repgraph-core`.

use std::path::PathBuf;

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_corpus, generate_sentence};

/// Returns the path where the generated JSON Lines corpus is stored on disk.
///
/// The file lives under `target/bench-fixtures/corpus.jsonl` so it is
/// gitignored and shared between the generator binary and CLI timing runs.
pub fn corpus_fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("target")
        .join("bench-fixtures")
        .join("corpus.jsonl")
}
