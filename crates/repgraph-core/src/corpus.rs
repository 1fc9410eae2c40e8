/// An owned repository of sentence graphs keyed by graph id.
///
/// The corpus is a plain value: callers create it (usually through
/// [`crate::transport::parse_corpus`]) and pass it to whatever needs it.
/// Besides storage it answers corpus-level queries:
///
/// - [`Corpus::search_labels`] / [`Corpus::search_node_set`]: which graphs
///   contain every label of a query set;
/// - [`Corpus::compare`]: node and edge overlap between two graphs;
/// - [`Corpus::stats`]: aggregate counts and structural percentages;
/// - [`Corpus::formal_tests`]: the per-graph analyses bundled as one report.
pub mod report;
pub mod stats;

pub use report::{FormalTestReport, FormalTests, GraphSummary};
pub use stats::CorpusStats;

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use serde::Serialize;

use crate::graph::{AnalysisError, SentenceGraph};
use crate::newtypes::{GraphId, NodeId};
use crate::structures::Edge;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised by corpus lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// No graph with this id is stored.
    UnknownGraph(GraphId),
    /// The graph exists but has no node with this id.
    UnknownNode {
        /// Graph that was searched.
        graph: GraphId,
        /// Missing node.
        node: NodeId,
    },
    /// An analysis run on behalf of a corpus query failed.
    Analysis {
        /// Graph the analysis ran on.
        graph: GraphId,
        /// Underlying failure.
        source: AnalysisError,
    },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::UnknownGraph(id) => write!(f, "graph not found: {id}"),
            CorpusError::UnknownNode { graph, node } => {
                write!(f, "node {node} not found in graph {graph}")
            }
            CorpusError::Analysis { graph, source } => write!(f, "graph {graph}: {source}"),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::Analysis { source, .. } => Some(source),
            CorpusError::UnknownGraph(_) | CorpusError::UnknownNode { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Comparison result
// ---------------------------------------------------------------------------

/// Overlap between two graphs, seen from the first.
///
/// Nodes match on label; edges match on `(label, postLabel)`. Endpoints are
/// not compared, so the result measures shared vocabulary rather than
/// structural isomorphism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphComparison {
    /// First graph.
    pub left: GraphId,
    /// Second graph.
    pub right: GraphId,
    /// Nodes of `left` whose label occurs in `right`, in id order.
    pub similar_nodes: Vec<NodeId>,
    /// Nodes of `left` whose label does not occur in `right`.
    pub unmatched_nodes: Vec<NodeId>,
    /// Edges of `left` with a same-labelled edge in `right`, in edge order.
    pub similar_edges: Vec<Edge>,
    /// Edges of `left` with no same-labelled edge in `right`.
    pub unmatched_edges: Vec<Edge>,
}

// ---------------------------------------------------------------------------
// Corpus
// ---------------------------------------------------------------------------

/// Sentence graphs keyed by id, iterated in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    graphs: BTreeMap<GraphId, SentenceGraph>,
}

impl Corpus {
    /// Creates an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `graph`, returning the graph it replaced if the id was taken.
    pub fn insert(&mut self, graph: SentenceGraph) -> Option<SentenceGraph> {
        self.graphs.insert(graph.id().clone(), graph)
    }

    /// Looks up a graph by id.
    pub fn get(&self, id: &GraphId) -> Option<&SentenceGraph> {
        self.graphs.get(id)
    }

    /// Looks up a graph by id, failing with [`CorpusError::UnknownGraph`].
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::UnknownGraph`] if no graph has this id.
    pub fn graph(&self, id: &GraphId) -> Result<&SentenceGraph, CorpusError> {
        self.graphs
            .get(id)
            .ok_or_else(|| CorpusError::UnknownGraph(id.clone()))
    }

    /// Removes and returns a graph.
    pub fn remove(&mut self, id: &GraphId) -> Option<SentenceGraph> {
        self.graphs.remove(id)
    }

    /// Number of graphs.
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Returns `true` if the corpus holds no graphs.
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Graphs in id order.
    pub fn iter(&self) -> impl Iterator<Item = &SentenceGraph> + '_ {
        self.graphs.values()
    }

    /// Graph ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &GraphId> + '_ {
        self.graphs.keys()
    }

    /// Ids of the graphs whose node labels include every label in `labels`.
    ///
    /// An empty query matches every graph.
    pub fn search_labels<S: AsRef<str>>(&self, labels: &[S]) -> Vec<GraphId> {
        let wanted: BTreeSet<&str> = labels.iter().map(AsRef::as_ref).collect();
        let found: Vec<GraphId> = self
            .graphs
            .values()
            .filter(|graph| {
                let present: HashSet<&str> =
                    graph.nodes().values().map(|n| n.label.as_str()).collect();
                wanted.iter().all(|label| present.contains(label))
            })
            .map(|graph| graph.id().clone())
            .collect();

        tracing::debug!(
            labels = wanted.len(),
            matches = found.len(),
            "label search finished"
        );
        found
    }

    /// Resolves the labels of `nodes` in graph `graph`, then runs
    /// [`Corpus::search_labels`] with them.
    ///
    /// The source graph always matches its own label set.
    ///
    /// # Errors
    ///
    /// - [`CorpusError::UnknownGraph`] if `graph` is not stored.
    /// - [`CorpusError::UnknownNode`] for the first id in `nodes` that does not
    ///   exist in that graph.
    pub fn search_node_set(
        &self,
        graph: &GraphId,
        nodes: &[NodeId],
    ) -> Result<Vec<GraphId>, CorpusError> {
        let source = self.graph(graph)?;
        let mut labels: Vec<&str> = Vec::with_capacity(nodes.len());
        for &id in nodes {
            let node = source.node(id).ok_or_else(|| CorpusError::UnknownNode {
                graph: graph.clone(),
                node: id,
            })?;
            if !labels.contains(&node.label.as_str()) {
                labels.push(&node.label);
            }
        }
        Ok(self.search_labels(labels.as_slice()))
    }

    /// Compares graph `left` against graph `right`.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::UnknownGraph`] if either graph is missing.
    pub fn compare(&self, left: &GraphId, right: &GraphId) -> Result<GraphComparison, CorpusError> {
        let a = self.graph(left)?;
        let b = self.graph(right)?;

        let labels_b: HashSet<&str> = b.nodes().values().map(|n| n.label.as_str()).collect();
        let (similar, unmatched): (Vec<_>, Vec<_>) = a
            .nodes()
            .values()
            .partition(|n| labels_b.contains(n.label.as_str()));

        let edge_keys_b: HashSet<(&str, &str)> = b
            .edges()
            .iter()
            .map(|e| (e.label.as_str(), e.post_label.as_str()))
            .collect();
        let (similar_edges, unmatched_edges): (Vec<&Edge>, Vec<&Edge>) = a
            .edges()
            .iter()
            .partition(|e| edge_keys_b.contains(&(e.label.as_str(), e.post_label.as_str())));

        Ok(GraphComparison {
            left: left.clone(),
            right: right.clone(),
            similar_nodes: similar.iter().map(|n| n.id).collect(),
            unmatched_nodes: unmatched.iter().map(|n| n.id).collect(),
            similar_edges: similar_edges.into_iter().cloned().collect(),
            unmatched_edges: unmatched_edges.into_iter().cloned().collect(),
        })
    }

    /// Runs the selected analyses on one graph.
    ///
    /// # Errors
    ///
    /// - [`CorpusError::UnknownGraph`] if `id` is not stored.
    /// - [`CorpusError::Analysis`] if an analysis precondition fails (an
    ///   empty graph for the connectivity test, or a directed cycle for
    ///   directed longest paths).
    pub fn formal_tests(
        &self,
        id: &GraphId,
        tests: FormalTests,
    ) -> Result<FormalTestReport, CorpusError> {
        let graph = self.graph(id)?;
        FormalTestReport::run(graph, tests).map_err(|source| CorpusError::Analysis {
            graph: id.clone(),
            source,
        })
    }

    /// Aggregates counts and structural percentages over every graph.
    pub fn stats(&self) -> CorpusStats {
        CorpusStats::collect(self.graphs.values().map(GraphSummary::of))
    }
}

impl FromIterator<SentenceGraph> for Corpus {
    /// Later graphs replace earlier ones with the same id.
    fn from_iter<I: IntoIterator<Item = SentenceGraph>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for graph in iter {
            corpus.insert(graph);
        }
        corpus
    }
}
