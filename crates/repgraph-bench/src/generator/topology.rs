//! Graph shape for generated sentences.
//!
//! Nodes are laid out in a hidden topological order, then given shuffled
//! ids. Every tree and reentrant edge points forward in that order, which
//! keeps the graph acyclic; an injected cycle reverses one tree edge.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use repgraph_core::{Anchor, Edge, Node, NodeId, SentenceGraph, Token};

use super::{GeneratorConfig, vocabulary};

fn edge(rng: &mut StdRng, source: NodeId, target: NodeId) -> Edge {
    let (label, post_label) = vocabulary::edge_labels(rng);
    Edge::new(source, target, label).with_post_label(post_label)
}

/// Builds one graph of `n` nodes (`n >= 1`).
pub fn build_sentence(
    config: &GeneratorConfig,
    rng: &mut StdRng,
    index: usize,
    n: usize,
) -> SentenceGraph {
    let mut ids: Vec<NodeId> = (0u32..).take(n).map(NodeId).collect();
    ids.shuffle(rng);

    let token_count = n + n / 3 + 1;
    let tokens: Vec<Token> = (0..token_count)
        .map(|i| Token::new(i, vocabulary::form(rng)))
        .collect();

    let anchored = config.anchored_fraction.clamp(0.0, 1.0);
    let nodes: Vec<Node> = ids
        .iter()
        .map(|&id| {
            let anchors = if rng.gen_bool(anchored) {
                let from = rng.gen_range(0..token_count);
                let end = (from + rng.gen_range(0..=1)).min(token_count - 1);
                vec![Anchor::new(from, end)]
            } else {
                Vec::new()
            };
            Node::new(id, vocabulary::node_label(rng), anchors)
        })
        .collect();

    let mut parents: Vec<usize> = Vec::with_capacity(n);
    let mut edges: Vec<Edge> = Vec::with_capacity(n * 2);
    for child in 1..n {
        let parent = rng.gen_range(0..child);
        parents.push(parent);
        edges.push(edge(rng, ids[parent], ids[child]));
    }

    if n >= 2 {
        let reentrant = (n as f64 * config.reentrancy.max(0.0)).round() as usize;
        for _ in 0..reentrant {
            let a = rng.gen_range(0..n - 1);
            let b = rng.gen_range(a + 1..n);
            edges.push(edge(rng, ids[a], ids[b]));
        }

        if rng.gen_bool(config.cycle_probability.clamp(0.0, 1.0)) {
            let child = rng.gen_range(1..n);
            let parent = parents[child - 1];
            edges.push(edge(rng, ids[child], ids[parent]));
        }
    }

    if rng.gen_bool(config.dangling_probability.clamp(0.0, 1.0)) {
        let source = ids[rng.gen_range(0..n)];
        edges.push(edge(rng, source, NodeId(n as u32 + 1)));
    }

    let input = tokens
        .iter()
        .map(|t| t.form.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    SentenceGraph::new(format!("{index:08}"), nodes, edges)
        .unwrap_or_else(|_| unreachable!("node ids are a permutation of 0..n"))
        .with_source("generated")
        .with_input(input)
        .with_tokens(tokens)
        .with_tops(vec![ids[0]])
}
