//! Integration tests for `repgraph search` and `repgraph compare`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the compiled `repgraph` binary.
fn repgraph_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("repgraph");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path.to_str().expect("utf-8 path").to_owned()
}

fn repgraph(args: &[&str]) -> Output {
    Command::new(repgraph_bin())
        .args(args)
        .arg("--no-color")
        .output()
        .expect("run repgraph")
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).expect("stdout is utf-8")
}

#[test]
fn search_by_label() {
    let out = repgraph(&["search", &fixture("corpus.jsonl"), "--label", "_dog_n_1"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "chain\nsplit\n");
}

#[test]
fn search_requires_every_label() {
    let out = repgraph(&[
        "search",
        &fixture("corpus.jsonl"),
        "--label",
        "_the_q",
        "--label",
        "_cat_n_1",
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "split\n");
}

#[test]
fn search_by_node_set() {
    let out = repgraph(&[
        "search",
        &fixture("corpus.jsonl"),
        "--graph",
        "chain",
        "--node",
        "0",
        "--node",
        "1",
        "-f",
        "json",
    ]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["labels"], serde_json::json!(["_the_q", "_dog_n_1"]));
    assert_eq!(value["graphs"], serde_json::json!(["chain", "split"]));
}

#[test]
fn search_unknown_node_exits_1() {
    let out = repgraph(&[
        "search",
        &fixture("corpus.jsonl"),
        "--graph",
        "chain",
        "--node",
        "9",
    ]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn search_no_match_exits_1() {
    let out = repgraph(&["search", &fixture("corpus.jsonl"), "--label", "_fish_n_1"]);
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("no results"), "stderr: {err}");
}

#[test]
fn search_without_query_exits_2() {
    let out = repgraph(&["search", &fixture("corpus.jsonl")]);
    assert_eq!(out.status.code(), Some(2), "clap usage errors exit 2");
}

#[test]
fn compare_reports_shared_vocabulary() {
    let out = repgraph(&["compare", &fixture("corpus.jsonl"), "chain", "split"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("similar nodes:   0, 1"), "stdout: {text}");
    assert!(text.contains("unmatched nodes: 2"), "stdout: {text}");
    assert!(text.contains("similar edges:   0-BV->1"), "stdout: {text}");
    assert!(text.contains("unmatched edges: 2-ARG1->1"), "stdout: {text}");
}

#[test]
fn compare_unknown_graph_exits_1() {
    let out = repgraph(&["compare", &fixture("corpus.jsonl"), "chain", "nope"]);
    assert_eq!(out.status.code(), Some(1));
}
