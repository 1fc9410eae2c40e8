/// Per-graph analysis bundles.
///
/// [`GraphSummary`] runs every predicate on one graph and never fails: a
/// precondition violation becomes a neutral value (an empty graph counts as
/// connected; a cyclic graph has no directed longest path length).
/// [`FormalTestReport`] runs a caller-selected subset and surfaces
/// precondition violations as errors.
use serde::Serialize;

use crate::graph::{AnalysisError, SentenceGraph};
use crate::newtypes::{GraphId, NodeId};

/// Structural facts about one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// Graph id.
    pub id: GraphId,
    /// Number of nodes.
    pub nodes: usize,
    /// Number of edges, dangling ones included.
    pub edges: usize,
    /// Number of tokens.
    pub tokens: usize,
    /// Undirected connectivity; `true` for a graph with no nodes.
    pub connected: bool,
    /// Whether an undirected cycle exists.
    pub undirected_cycle: bool,
    /// Whether a directed cycle exists.
    pub directed_cycle: bool,
    /// Whether no two edges cross in anchor order.
    pub planar: bool,
    /// Number of edges with an unresolvable endpoint.
    pub dangling_edges: usize,
    /// Node count of the diameter-style undirected longest path (0 when
    /// there is none).
    pub longest_undirected: usize,
    /// Node count of the directed longest path; `None` when the graph has a
    /// directed cycle.
    pub longest_directed: Option<usize>,
}

impl GraphSummary {
    /// Summarizes `graph`.
    pub fn of(graph: &SentenceGraph) -> Self {
        let connected = match graph.is_connected_any() {
            Ok(connected) => connected,
            Err(AnalysisError::EmptyGraph) => true,
            Err(
                err @ (AnalysisError::UnknownNode(_)
                | AnalysisError::SpanOutOfRange { .. }
                | AnalysisError::DirectedCycle),
            ) => {
                tracing::warn!(graph = %graph.id(), error = %err, "connectivity test failed");
                false
            }
        };

        Self {
            id: graph.id().clone(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            tokens: graph.token_count(),
            connected,
            undirected_cycle: graph.has_undirected_cycle(),
            directed_cycle: graph.has_directed_cycle(),
            planar: graph.is_planar_by_crossing(),
            dangling_edges: graph.dangling_edges().count(),
            longest_undirected: longest_len(graph, false).unwrap_or(0),
            longest_directed: longest_len(graph, true),
        }
    }
}

fn longest_len(graph: &SentenceGraph, directed: bool) -> Option<usize> {
    let paths = graph.longest_paths(directed).ok()?;
    Some(paths.first().map_or(0, Vec::len))
}

/// Which analyses [`crate::Corpus::formal_tests`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormalTests {
    /// Run the crossing test.
    pub planar: bool,
    /// Compute directed rather than undirected longest paths.
    pub directed: bool,
    /// Run the connectivity test from the lowest node id.
    pub connected: bool,
}

/// Results of a [`FormalTests`] run. Skipped tests are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormalTestReport {
    /// Graph the tests ran on.
    pub graph: GraphId,
    /// Crossing-test verdict.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planar: Option<bool>,
    /// Positions of crossing edge pairs, when the crossing test ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossing_pairs: Option<Vec<(usize, usize)>>,
    /// Whether the longest paths below are directed.
    pub directed: bool,
    /// Every tied longest path.
    pub longest_paths: Vec<Vec<NodeId>>,
    /// Connectivity verdict.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
}

impl FormalTestReport {
    /// Runs `tests` on `graph`. Longest paths are always computed.
    ///
    /// # Errors
    ///
    /// Propagates [`AnalysisError`] from the connectivity test and the
    /// directed longest-path search.
    pub fn run(graph: &SentenceGraph, tests: FormalTests) -> Result<Self, AnalysisError> {
        let crossing_pairs = tests.planar.then(|| graph.crossing_pairs());
        let connected = if tests.connected {
            Some(graph.is_connected_any()?)
        } else {
            None
        };

        Ok(Self {
            graph: graph.id().clone(),
            planar: crossing_pairs.as_ref().map(Vec::is_empty),
            crossing_pairs,
            directed: tests.directed,
            longest_paths: graph.longest_paths(tests.directed)?,
            connected,
        })
    }
}
