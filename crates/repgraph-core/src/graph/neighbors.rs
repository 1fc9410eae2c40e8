/// Derived adjacency for a [`SentenceGraph`].
///
/// The index is an arena: every node gets a dense slot (ascending id order),
/// and adjacency is stored as slot lists. Two relations are recorded per
/// edge `s → t`:
///
/// - `t` is a *directed* neighbor of `s` (successor);
/// - `s` is an *undirected* neighbor of `t` (predecessor).
///
/// The undirected list holds reverse links only, not a symmetric closure.
/// Analyses that need bidirectional reachability walk the combined list
/// (directed followed by undirected), which visits every incident edge
/// exactly once from each endpoint. Parallel lists record the position in
/// [`SentenceGraph::edges`] of the edge realizing each link.
///
/// Edges with an unresolvable endpoint are skipped; they stay visible through
/// [`SentenceGraph::dangling_edges`].
use std::collections::HashMap;

use crate::graph::SentenceGraph;
use crate::newtypes::NodeId;
use crate::structures::Edge;

/// Slot-based directed and reverse adjacency, built once per graph.
#[derive(Debug, Clone, Default)]
pub struct NeighborIndex {
    ids: Vec<NodeId>,
    slots: HashMap<NodeId, usize>,
    directed: Vec<Vec<usize>>,
    undirected: Vec<Vec<usize>>,
    directed_edges: Vec<Vec<usize>>,
    undirected_edges: Vec<Vec<usize>>,
}

impl NeighborIndex {
    /// Builds the index for `node_ids` (in slot order) over `edges`.
    pub fn build(node_ids: impl IntoIterator<Item = NodeId>, edges: &[Edge]) -> Self {
        let ids: Vec<NodeId> = node_ids.into_iter().collect();
        let slots: HashMap<NodeId, usize> =
            ids.iter().enumerate().map(|(slot, &id)| (id, slot)).collect();

        let n = ids.len();
        let mut directed = vec![Vec::new(); n];
        let mut undirected = vec![Vec::new(); n];
        let mut directed_edges = vec![Vec::new(); n];
        let mut undirected_edges = vec![Vec::new(); n];

        let mut skipped = 0usize;
        for (position, edge) in edges.iter().enumerate() {
            let (Some(&s), Some(&t)) = (slots.get(&edge.source), slots.get(&edge.target)) else {
                skipped += 1;
                continue;
            };
            directed[s].push(t);
            directed_edges[s].push(position);
            undirected[t].push(s);
            undirected_edges[t].push(position);
        }

        tracing::debug!(
            nodes = n,
            edges = edges.len(),
            skipped,
            "built neighbor index"
        );

        Self {
            ids,
            slots,
            directed,
            undirected,
            directed_edges,
            undirected_edges,
        }
    }

    /// Number of slots (nodes).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the index covers no nodes.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Slot of node `id`, if it exists.
    pub fn slot(&self, id: NodeId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    /// Node id stored at `slot`.
    ///
    /// `slot` must come from this index.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below [`NeighborIndex::len`].
    pub fn id(&self, slot: usize) -> NodeId {
        self.ids[slot]
    }

    /// Successor slots of `slot`, one entry per outgoing edge.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below [`NeighborIndex::len`].
    pub fn directed(&self, slot: usize) -> &[usize] {
        &self.directed[slot]
    }

    /// Predecessor slots of `slot`, one entry per incoming edge.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below [`NeighborIndex::len`].
    pub fn undirected(&self, slot: usize) -> &[usize] {
        &self.undirected[slot]
    }

    /// Directed neighbors followed by undirected neighbors.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below [`NeighborIndex::len`].
    pub fn combined(&self, slot: usize) -> impl Iterator<Item = usize> + '_ {
        self.directed[slot]
            .iter()
            .chain(self.undirected[slot].iter())
            .copied()
    }

    /// Edge positions parallel to [`NeighborIndex::directed`].
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below [`NeighborIndex::len`].
    pub fn directed_edges(&self, slot: usize) -> &[usize] {
        &self.directed_edges[slot]
    }

    /// Edge positions parallel to [`NeighborIndex::undirected`].
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below [`NeighborIndex::len`].
    pub fn undirected_edges(&self, slot: usize) -> &[usize] {
        &self.undirected_edges[slot]
    }

    /// Successor ids of node `id`; empty for unknown ids.
    pub fn successors(&self, id: NodeId) -> Vec<NodeId> {
        self.slot(id)
            .map(|s| self.directed[s].iter().map(|&t| self.ids[t]).collect())
            .unwrap_or_default()
    }

    /// Predecessor ids of node `id`; empty for unknown ids.
    pub fn predecessors(&self, id: NodeId) -> Vec<NodeId> {
        self.slot(id)
            .map(|s| self.undirected[s].iter().map(|&t| self.ids[t]).collect())
            .unwrap_or_default()
    }

    /// Breadth-first search over combined neighbors from `start`.
    ///
    /// Returns per-slot hop distance (`None` when unreachable) and the slot
    /// each node was first discovered from.
    pub(crate) fn bfs(&self, start: usize) -> (Vec<Option<usize>>, Vec<Option<usize>>) {
        let n = self.len();
        let mut dist: Vec<Option<usize>> = vec![None; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut queue = std::collections::VecDeque::new();

        dist[start] = Some(0);
        queue.push_back((start, 0usize));

        while let Some((current, d)) = queue.pop_front() {
            for neighbor in self.combined(current) {
                if dist[neighbor].is_none() {
                    dist[neighbor] = Some(d + 1);
                    prev[neighbor] = Some(current);
                    queue.push_back((neighbor, d + 1));
                }
            }
        }

        (dist, prev)
    }
}

impl SentenceGraph {
    /// Builds a fresh neighbor index from the current nodes and edges.
    ///
    /// Does not touch the cached index used by the analysis methods.
    pub fn build_neighbor_index(&self) -> NeighborIndex {
        NeighborIndex::build(self.nodes.keys().copied(), &self.edges)
    }

    /// Returns the cached neighbor index, building it on first use.
    pub fn neighbor_index(&self) -> &NeighborIndex {
        self.index.get_or_init(|| {
            tracing::debug!(graph = %self.id, "materializing neighbor index");
            self.build_neighbor_index()
        })
    }

    /// Finds an edge joining `a` and `b` in either direction.
    ///
    /// Outgoing edges of `a` are preferred over incoming ones; among several
    /// parallel edges the first in edge-list order wins.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        let index = self.neighbor_index();
        let a_slot = index.slot(a)?;
        let b_slot = index.slot(b)?;

        let outgoing = index
            .directed(a_slot)
            .iter()
            .zip(index.directed_edges(a_slot))
            .find(|&(&t, _)| t == b_slot);
        let incoming = || {
            index
                .undirected(a_slot)
                .iter()
                .zip(index.undirected_edges(a_slot))
                .find(|&(&s, _)| s == b_slot)
        };

        outgoing
            .or_else(incoming)
            .and_then(|(_, &position)| self.edges.get(position))
    }
}
