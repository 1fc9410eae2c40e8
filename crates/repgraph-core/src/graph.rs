/// The sentence graph and its structural analyses.
///
/// [`SentenceGraph`] owns the entities of one annotated sentence (nodes keyed
/// by id, tokens, edges, tops) and exposes every analysis as a method. The
/// analyses live in submodules, each adding an `impl SentenceGraph` block:
///
/// - [`neighbors`]: the derived [`NeighborIndex`] and edge lookup by
///   adjacency.
/// - [`connectivity`]: undirected reachability test.
/// - [`cycles`]: undirected and directed cycle predicates.
/// - [`longest`]: diameter-style and DAG longest paths.
/// - [`crossing`]: linear-order crossing test and anchor reordering.
/// - [`span`]: token span extraction and rendering.
///
/// # Neighbor index lifecycle
///
/// Neighbor-dependent analyses read a [`NeighborIndex`] that is built from the
/// edge list the first time it is needed and cached in a [`OnceCell`]. Every
/// mutation that can change adjacency goes through `&mut self` methods that
/// drop the cache, so the index can never go stale. The `OnceCell` also makes
/// the graph `!Sync`: analyzing one instance from several threads requires an
/// external lock, while distinct instances are fully independent.
pub mod connectivity;
pub mod crossing;
pub mod cycles;
pub mod longest;
pub mod neighbors;
pub mod span;

pub use neighbors::NeighborIndex;

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::newtypes::{GraphId, NodeId};
use crate::structures::{Edge, Node, Token};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while assembling a [`SentenceGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two nodes share the same id.
    DuplicateNodeId(NodeId),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::DuplicateNodeId(id) => write!(f, "duplicate node id: {id}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Precondition violations reported by the analysis methods.
///
/// Dangling edges are deliberately absent: they are a structural property
/// queried through [`SentenceGraph::has_dangling_edge`], never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The analysis needs at least one node.
    EmptyGraph,
    /// A node id passed to the analysis does not exist in the graph.
    UnknownNode(NodeId),
    /// A token span is inverted or reaches past the last token.
    SpanOutOfRange {
        /// Requested first position.
        from: usize,
        /// Requested last position (inclusive).
        end: usize,
        /// Number of tokens in the graph.
        len: usize,
    },
    /// Directed longest paths were requested on a graph with a directed
    /// cycle, where DAG relaxation has no meaningful answer.
    DirectedCycle,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptyGraph => write!(f, "graph has no nodes"),
            AnalysisError::UnknownNode(id) => write!(f, "node not found: {id}"),
            AnalysisError::SpanOutOfRange { from, end, len } => write!(
                f,
                "token span {from}..={end} is out of range for {len} tokens"
            ),
            AnalysisError::DirectedCycle => write!(
                f,
                "graph contains a directed cycle; directed longest path is undefined"
            ),
        }
    }
}

impl std::error::Error for AnalysisError {}

// ---------------------------------------------------------------------------
// SentenceGraph
// ---------------------------------------------------------------------------

/// One annotated sentence: concept nodes anchored to tokens, joined by
/// labeled edges.
///
/// Construct with [`SentenceGraph::new`] and the `with_*` builders, or
/// deserialize from the MRP JSON shape (see [`crate::transport`]). On the wire
/// the nodes are an ordered list; in memory they are keyed by id, and
/// iteration is always in ascending id order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GraphRecord", into = "GraphRecord")]
pub struct SentenceGraph {
    id: GraphId,
    source: String,
    input: String,
    nodes: BTreeMap<NodeId, Node>,
    tokens: Vec<Token>,
    edges: Vec<Edge>,
    tops: Vec<NodeId>,
    index: OnceCell<NeighborIndex>,
}

impl SentenceGraph {
    /// Creates a graph from its nodes and edges.
    ///
    /// Edges may reference ids with no matching node; only duplicate node ids
    /// are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNodeId`] if two nodes share an id.
    pub fn new(
        id: impl Into<GraphId>,
        nodes: Vec<Node>,
        edges: Vec<Edge>,
    ) -> Result<Self, GraphError> {
        let mut keyed = BTreeMap::new();
        for node in nodes {
            match keyed.entry(node.id) {
                Entry::Vacant(slot) => {
                    slot.insert(node);
                }
                Entry::Occupied(existing) => {
                    return Err(GraphError::DuplicateNodeId(*existing.key()));
                }
            }
        }
        Ok(Self::from_parts(id.into(), keyed, edges))
    }

    /// Assembles a graph from an already id-keyed node map.
    pub(crate) fn from_parts(
        id: GraphId,
        nodes: BTreeMap<NodeId, Node>,
        edges: Vec<Edge>,
    ) -> Self {
        Self {
            id,
            source: String::new(),
            input: String::new(),
            nodes,
            tokens: Vec::new(),
            edges,
            tops: Vec::new(),
            index: OnceCell::new(),
        }
    }

    /// Sets the provenance tag (e.g. `"wsj"`).
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets the raw input sentence.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    /// Sets the token sequence.
    #[must_use]
    pub fn with_tokens(mut self, tokens: Vec<Token>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Sets the designated root ("top") node ids.
    #[must_use]
    pub fn with_tops(mut self, tops: Vec<NodeId>) -> Self {
        self.tops = tops;
        self
    }

    /// Graph identifier.
    pub fn id(&self) -> &GraphId {
        &self.id
    }

    /// Provenance tag.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Raw input sentence.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Nodes keyed by id.
    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Tokens in sentence order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Edges in input order, duplicates and dangling entries included.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Designated root node ids.
    pub fn tops(&self) -> &[NodeId] {
        &self.tops
    }

    /// Appends an edge and drops the cached neighbor index.
    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
        self.invalidate_neighbor_index();
    }

    /// Inserts a node and drops the cached neighbor index.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNodeId`] if the id is already taken; the
    /// graph is left unchanged.
    pub fn insert_node(&mut self, node: Node) -> Result<(), GraphError> {
        match self.nodes.entry(node.id) {
            Entry::Occupied(existing) => Err(GraphError::DuplicateNodeId(*existing.key())),
            Entry::Vacant(slot) => {
                slot.insert(node);
                self.invalidate_neighbor_index();
                Ok(())
            }
        }
    }

    /// Drops the cached neighbor index; the next analysis rebuilds it.
    pub fn invalidate_neighbor_index(&mut self) {
        self.index.take();
    }

    /// Returns `true` if any edge references a source or target id that has
    /// no node in this graph.
    pub fn has_dangling_edge(&self) -> bool {
        self.dangling_edges().next().is_some()
    }

    /// Iterates over the edges whose source or target does not resolve.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(|e| {
            !self.nodes.contains_key(&e.source) || !self.nodes.contains_key(&e.target)
        })
    }
}

impl PartialEq for SentenceGraph {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.source == other.source
            && self.input == other.input
            && self.nodes == other.nodes
            && self.tokens == other.tokens
            && self.edges == other.edges
            && self.tops == other.tops
    }
}

impl Eq for SentenceGraph {}

// ---------------------------------------------------------------------------
// Wire representation
// ---------------------------------------------------------------------------

/// On-wire shape of a graph: nodes as an ordered list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GraphRecord {
    id: GraphId,
    #[serde(default)]
    source: String,
    #[serde(default)]
    input: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::deserialize_null_default")]
    tops: Vec<NodeId>,
    #[serde(default, deserialize_with = "crate::serde_helpers::deserialize_null_default")]
    nodes: Vec<Node>,
    #[serde(default, deserialize_with = "crate::serde_helpers::deserialize_null_default")]
    edges: Vec<Edge>,
    #[serde(default, deserialize_with = "crate::serde_helpers::deserialize_null_default")]
    tokens: Vec<Token>,
}

impl TryFrom<GraphRecord> for SentenceGraph {
    type Error = GraphError;

    fn try_from(record: GraphRecord) -> Result<Self, Self::Error> {
        Ok(SentenceGraph::new(record.id, record.nodes, record.edges)?
            .with_source(record.source)
            .with_input(record.input)
            .with_tokens(record.tokens)
            .with_tops(record.tops))
    }
}

impl From<SentenceGraph> for GraphRecord {
    fn from(graph: SentenceGraph) -> Self {
        GraphRecord {
            id: graph.id,
            source: graph.source,
            input: graph.input,
            tops: graph.tops,
            nodes: graph.nodes.into_values().collect(),
            edges: graph.edges,
            tokens: graph.tokens,
        }
    }
}
