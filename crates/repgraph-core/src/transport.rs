/// JSON transport for sentence graphs.
///
/// Graphs use the MRP interchange shape (`id`, `source`, `input`, `tops`,
/// `nodes`, `edges`, `tokens`). A corpus file is either a JSON array of
/// graphs or JSON Lines with one graph per line; the first non-whitespace
/// byte decides which. Blank lines in JSON Lines input are skipped, and
/// every parse error reports the 1-based line and column of the fault in the
/// whole input.
use std::fmt;

use crate::corpus::Corpus;
use crate::graph::SentenceGraph;
use crate::newtypes::GraphId;

/// Errors raised while reading or writing graphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The input is not valid JSON, or does not have the graph shape.
    Parse {
        /// 1-based line of the fault.
        line: usize,
        /// 1-based column of the fault.
        column: usize,
        /// Description from the JSON parser.
        detail: String,
    },
    /// Two graphs in one corpus share an id.
    DuplicateGraphId {
        /// The repeated id.
        id: GraphId,
        /// 1-based record number (array element or non-blank line) of the
        /// second occurrence.
        record: usize,
    },
    /// A graph could not be serialized.
    Serialize(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Parse {
                line,
                column,
                detail,
            } => write!(f, "parse error at line {line}, column {column}: {detail}"),
            TransportError::DuplicateGraphId { id, record } => {
                write!(f, "duplicate graph id \"{id}\" in record {record}")
            }
            TransportError::Serialize(detail) => write!(f, "serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for TransportError {}

impl TransportError {
    fn parse(err: &serde_json::Error, line_offset: usize) -> Self {
        TransportError::Parse {
            line: err.line() + line_offset,
            column: err.column(),
            detail: err.to_string(),
        }
    }
}

/// Parses a single graph from a JSON object.
///
/// # Errors
///
/// Returns [`TransportError::Parse`] for malformed JSON, a missing `id`, or
/// duplicate node ids.
pub fn parse_graph(input: &str) -> Result<SentenceGraph, TransportError> {
    serde_json::from_str(input).map_err(|e| TransportError::parse(&e, 0))
}

/// Parses a corpus from a JSON array or from JSON Lines.
///
/// # Errors
///
/// Returns [`TransportError::Parse`] for the first record that fails to
/// parse and [`TransportError::DuplicateGraphId`] if an id repeats.
pub fn parse_corpus(input: &str) -> Result<Corpus, TransportError> {
    let graphs = if input.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<SentenceGraph>>(input)
            .map_err(|e| TransportError::parse(&e, 0))?
    } else {
        parse_json_lines(input)?
    };

    let mut corpus = Corpus::new();
    for (record, graph) in (1usize..).zip(graphs) {
        let id = graph.id().clone();
        if corpus.insert(graph).is_some() {
            return Err(TransportError::DuplicateGraphId { id, record });
        }
    }

    tracing::debug!(graphs = corpus.len(), "corpus parsed");
    Ok(corpus)
}

fn parse_json_lines(input: &str) -> Result<Vec<SentenceGraph>, TransportError> {
    let mut graphs = Vec::new();
    for (offset, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        // serde_json counts lines from 1 within the slice it was given.
        let graph = serde_json::from_str(line).map_err(|e| TransportError::parse(&e, offset))?;
        graphs.push(graph);
    }
    Ok(graphs)
}

/// Serializes one graph as a compact single-line JSON object.
///
/// # Errors
///
/// Returns [`TransportError::Serialize`] if serialization fails.
pub fn to_json(graph: &SentenceGraph) -> Result<String, TransportError> {
    serde_json::to_string(graph).map_err(|e| TransportError::Serialize(e.to_string()))
}

/// Serializes every graph of `corpus` in id order, one per line, each line
/// terminated by `\n`.
///
/// # Errors
///
/// Returns [`TransportError::Serialize`] if any graph fails to serialize.
pub fn to_json_lines(corpus: &Corpus) -> Result<String, TransportError> {
    let mut out = String::new();
    for graph in corpus.iter() {
        out.push_str(&to_json(graph)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::newtypes::NodeId;

    const PIERRE: &str = r#"{"id":"20001001","source":"wsj","input":"Pierre Vinken left.","tops":[2],"nodes":[{"id":0,"label":"proper_q","anchors":[{"from":0,"end":1}]},{"id":1,"label":"named","anchors":[{"from":0,"end":1}]},{"id":2,"label":"_leave_v_1","anchors":[{"from":2,"end":2}]}],"edges":[{"source":0,"target":1,"label":"BV"},{"source":2,"target":1,"label":"ARG1","postLabel":"NEQ"}],"tokens":[{"index":0,"form":"Pierre"},{"index":1,"form":"Vinken"},{"index":2,"form":"left."}]}"#;

    fn line(id: &str, edges: &str) -> String {
        format!(
            r#"{{"id":"{id}","nodes":[{{"id":0,"label":"a","anchors":null}},{{"id":1,"label":"b","anchors":null}}],"edges":{edges}}}"#
        )
    }

    #[test]
    fn parses_full_mrp_graph() {
        let g = parse_graph(PIERRE).expect("valid graph");
        assert_eq!(g.id().as_str(), "20001001");
        assert_eq!(g.source(), "wsj");
        assert_eq!(g.input(), "Pierre Vinken left.");
        assert_eq!(g.tops(), &[NodeId(2)]);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edges()[1].post_label, "NEQ");
        assert_eq!(g.token_count(), 3);
        assert_eq!(g.node_text(NodeId(1)).expect("anchored"), "Pierre Vinken");
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let g = parse_graph(r#"{"id":"x","nodes":null}"#).expect("valid graph");
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.tops().is_empty());
    }

    #[test]
    fn duplicate_node_ids_fail_to_parse() {
        let input = r#"{"id":"x","nodes":[{"id":1},{"id":1}]}"#;
        let err = parse_graph(input).expect_err("duplicate node");
        assert!(err.to_string().contains("duplicate node id: 1"), "{err}");
    }

    #[test]
    fn graph_round_trips_through_json() {
        let g = parse_graph(PIERRE).expect("valid graph");
        let back = parse_graph(&to_json(&g).expect("serialize")).expect("reparse");
        assert_eq!(g, back);
    }

    #[test]
    fn json_lines_skip_blank_lines() {
        let input = format!("{}\n\n   \n{}\n", line("a", "[]"), line("b", "[]"));
        let corpus = parse_corpus(&input).expect("valid corpus");
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn json_array_corpus() {
        let input = format!("  [\n{},\n{}\n]", line("a", "[]"), line("b", "[]"));
        let corpus = parse_corpus(&input).expect("valid corpus");
        let ids: Vec<&str> = corpus.ids().map(GraphId::as_str).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn json_lines_error_reports_absolute_line() {
        let input = format!("{}\n\n{{\"id\": \"c\", \"nodes\": [oops]}}\n", line("a", "[]"));
        let err = parse_corpus(&input).expect_err("bad third line");
        assert!(
            matches!(err, TransportError::Parse { line: 3, column, .. } if column > 0),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn duplicate_graph_ids_are_rejected() {
        let input = format!("{}\n{}\n", line("a", "[]"), line("a", "[]"));
        let err = parse_corpus(&input).expect_err("duplicate graph");
        assert_eq!(
            err,
            TransportError::DuplicateGraphId {
                id: GraphId::from("a"),
                record: 2
            }
        );
    }

    #[test]
    fn json_lines_output_is_one_graph_per_line() {
        let input = format!(
            "{}\n{}\n",
            line("b", r#"[{"source":0,"target":1,"label":"ARG1"}]"#),
            line("a", "[]")
        );
        let corpus = parse_corpus(&input).expect("valid corpus");
        let out = to_json_lines(&corpus).expect("serialize");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#""id":"a""#), "id order: {}", lines[0]);
        let again = parse_corpus(&out).expect("reparse");
        assert_eq!(again, corpus);
    }

    #[test]
    fn empty_input_is_an_empty_corpus() {
        assert!(parse_corpus("").expect("empty").is_empty());
        assert!(parse_corpus("[]").expect("empty array").is_empty());
    }
}
