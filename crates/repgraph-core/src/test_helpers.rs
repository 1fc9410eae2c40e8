//! Shared test helper functions for constructing test fixtures.
//!
//! This module is compiled only in test builds. Integration tests in
//! `crates/repgraph-core/tests/` define their own local helpers because they
//! link against the non-test library build where this module is not
//! available.
#![allow(clippy::expect_used)]

use crate::graph::SentenceGraph;
use crate::structures::{Anchor, Edge, Node, Token};

/// Node `id` labeled `n{id}`, anchored to the single token at position `id`.
pub fn node(id: u32) -> Node {
    Node::new(id, format!("n{id}"), vec![Anchor::at(id as usize)])
}

/// Node `id` with the given label, anchored at `position`.
pub fn labeled(id: u32, label: &str, position: usize) -> Node {
    Node::new(id, label, vec![Anchor::at(position)])
}

/// Edge `source → target` labeled `ARG1`.
pub fn edge(source: u32, target: u32) -> Edge {
    Edge::new(source, target, "ARG1")
}

/// Tokens `t0 t1 … t{n-1}`.
pub fn tokens(n: usize) -> Vec<Token> {
    (0..n).map(|i| Token::new(i, format!("t{i}"))).collect()
}

/// Graph over `ids` (each anchored at its own id) with the given edges and
/// one token per position up to the largest id.
pub fn graph(ids: &[u32], edges: &[(u32, u32)]) -> SentenceGraph {
    let token_count = ids.iter().max().map_or(0, |&m| m as usize + 1);
    SentenceGraph::new(
        "test",
        ids.iter().map(|&id| node(id)).collect(),
        edges.iter().map(|&(s, t)| edge(s, t)).collect(),
    )
    .expect("test graph ids are unique")
    .with_tokens(tokens(token_count))
}

/// Directed chain `0 → 1 → … → n-1`.
pub fn chain(n: u32) -> SentenceGraph {
    let ids: Vec<u32> = (0..n).collect();
    let edges: Vec<(u32, u32)> = (1..n).map(|i| (i - 1, i)).collect();
    graph(&ids, &edges)
}
