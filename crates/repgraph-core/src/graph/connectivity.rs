/// Undirected connectivity test.
///
/// Every edge is treated as bidirectional: the breadth-first search walks the
/// combined (directed + reverse) neighbor lists of the [`NeighborIndex`], so a
/// graph is connected when all nodes are reachable from the start ignoring
/// edge direction.
///
/// [`NeighborIndex`]: crate::graph::NeighborIndex
use crate::graph::{AnalysisError, SentenceGraph};
use crate::newtypes::NodeId;

impl SentenceGraph {
    /// Returns `true` if every node is reachable from `start` when edges are
    /// followed in both directions.
    ///
    /// A graph with exactly one node is connected whatever `start` is. A start
    /// node with no incident edges in a larger graph gives `false`.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::EmptyGraph`] if the graph has no nodes.
    /// - [`AnalysisError::UnknownNode`] if `start` is not a node of a graph
    ///   with two or more nodes.
    pub fn is_connected(&self, start: NodeId) -> Result<bool, AnalysisError> {
        match self.node_count() {
            0 => return Err(AnalysisError::EmptyGraph),
            1 => return Ok(true),
            _ => {}
        }

        let index = self.neighbor_index();
        let start_slot = index.slot(start).ok_or(AnalysisError::UnknownNode(start))?;

        if index.combined(start_slot).next().is_none() {
            return Ok(false);
        }

        let (dist, _) = index.bfs(start_slot);
        let visited = dist.iter().filter(|d| d.is_some()).count();
        Ok(visited == index.len())
    }

    /// [`SentenceGraph::is_connected`] started from the lowest node id.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyGraph`] if the graph has no nodes.
    pub fn is_connected_any(&self) -> Result<bool, AnalysisError> {
        let start = *self
            .nodes
            .keys()
            .next()
            .ok_or(AnalysisError::EmptyGraph)?;
        self.is_connected(start)
    }
}
