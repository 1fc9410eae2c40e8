//! Integration tests: load the shared fixture corpora and check their
//! structure and analyses end to end.
#![allow(clippy::expect_used)]

use std::path::PathBuf;

use repgraph_core::{
    AnalysisError, Corpus, GraphId, NodeId, TransportError, parse_corpus, render_span,
    to_json_lines,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .canonicalize()
        .expect("fixtures directory should exist")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path).expect("fixture file should be readable")
}

fn load(name: &str) -> Corpus {
    parse_corpus(&read_fixture(name)).expect("fixture should parse as a corpus")
}

fn id(s: &str) -> GraphId {
    GraphId::from(s)
}

fn ids(raw: &[u32]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId).collect()
}

#[test]
fn json_lines_fixture_loads_every_graph() {
    let corpus = load("corpus.jsonl");
    let names: Vec<&str> = corpus.ids().map(GraphId::as_str).collect();
    assert_eq!(names, vec!["chain", "crossing", "cycle", "dangling", "split"]);
}

#[test]
fn json_array_fixture_loads() {
    let corpus = load("corpus.json");
    assert_eq!(corpus.len(), 2);
    let empty = corpus.get(&id("empty")).expect("empty graph present");
    assert_eq!(empty.node_count(), 0);
    assert!(empty.tops().is_empty(), "null tops read as empty");
}

#[test]
fn both_encodings_agree_on_shared_graph() {
    let lines = load("corpus.jsonl");
    let array = load("corpus.json");
    assert_eq!(lines.get(&id("chain")), array.get(&id("chain")));
}

#[test]
fn malformed_fixture_reports_its_line() {
    let err = parse_corpus(&read_fixture("malformed.jsonl")).expect_err("second line is cut");
    assert!(
        matches!(err, TransportError::Parse { line: 2, .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn corpus_survives_json_lines_round_trip() {
    let corpus = load("corpus.jsonl");
    let text = to_json_lines(&corpus).expect("serializes");
    assert_eq!(text.lines().count(), corpus.len());
    let back = parse_corpus(&text).expect("reparses");
    assert_eq!(back, corpus);
}

#[test]
fn chain_fixture_analyses() {
    let corpus = load("corpus.jsonl");
    let g = corpus.get(&id("chain")).expect("present");

    assert!(g.is_connected(NodeId(0)).expect("non-empty"));
    assert!(!g.has_undirected_cycle());
    assert!(!g.has_directed_cycle());
    assert!(g.is_planar_by_crossing());
    assert!(!g.has_dangling_edge());

    let directed = g.longest_paths(true).expect("acyclic");
    assert_eq!(directed, vec![ids(&[0, 1]), ids(&[2, 1])]);

    let undirected = g.longest_paths(false).expect("undirected");
    assert_eq!(undirected, vec![ids(&[2, 1, 0])]);

    assert_eq!(g.node_text(NodeId(2)).expect("anchored"), "barked .");
    assert_eq!(render_span(g.token_span(0, 1).expect("in range")), "The dog");
}

#[test]
fn cycle_fixture_rejects_directed_longest_path() {
    let corpus = load("corpus.jsonl");
    let g = corpus.get(&id("cycle")).expect("present");
    assert!(g.has_directed_cycle());
    assert!(g.has_undirected_cycle());
    assert_eq!(g.longest_paths(true), Err(AnalysisError::DirectedCycle));
}

#[test]
fn split_fixture_is_disconnected_but_planar() {
    let corpus = load("corpus.jsonl");
    let g = corpus.get(&id("split")).expect("present");
    assert!(!g.is_connected_any().expect("non-empty"));
    assert!(g.is_planar_by_crossing());
    let reordered = g.reordered_by_anchor();
    assert_eq!(
        reordered.node(NodeId(3)).map(|n| n.label.as_str()),
        Some("udef_q"),
        "unanchored node takes the last rank"
    );
}

#[test]
fn crossing_fixture_reports_the_pair() {
    let corpus = load("corpus.jsonl");
    let g = corpus.get(&id("crossing")).expect("present");
    assert_eq!(g.crossing_pairs(), vec![(0, 1)]);
    assert!(g.is_connected_any().expect("non-empty"));
}

#[test]
fn dangling_fixture_is_flagged() {
    let corpus = load("corpus.jsonl");
    let g = corpus.get(&id("dangling")).expect("present");
    assert!(g.has_dangling_edge());
    assert!(g.is_connected_any().expect("non-empty"));
    assert!(!g.reordered_by_anchor().has_dangling_edge());
}

#[test]
fn fixture_corpus_statistics() {
    let stats = load("corpus.jsonl").stats();
    assert_eq!(stats.graphs, 5);
    assert_eq!(stats.nodes, 16);
    assert_eq!(stats.edges, 12);
    assert_eq!(stats.tokens, 17);
    assert!((stats.mean_nodes - 3.2).abs() < 1e-9);
    for pct in [
        stats.directed_cyclic_pct,
        stats.undirected_cyclic_pct,
        stats.disconnected_pct,
        stats.crossing_pct,
    ] {
        assert!((pct - 20.0).abs() < 1e-9, "expected 20%, got {pct}");
    }
    assert_eq!(stats.graphs_with_dangling_edges, 1);
}
