/// Linear-order crossing test.
///
/// Nodes are laid out on a line in sentence order (first-anchor `from`,
/// stable on ties, unanchored nodes last by id) and every edge becomes an
/// arc over that line. Two arcs cross when exactly one endpoint of one lies
/// strictly inside the other: `lo(e) < lo(o) < hi(e) < hi(o)`. Arcs sharing
/// an endpoint, nested arcs and self loops never cross.
///
/// A graph with no crossing pair is "planar" in this restricted sense only;
/// general graph planarity is a different (and harder) question.
use std::collections::{BTreeMap, HashMap};

use crate::graph::SentenceGraph;
use crate::newtypes::NodeId;
use crate::structures::{Edge, Node};

impl SentenceGraph {
    /// Returns `true` if no two edges cross in the anchor order.
    pub fn is_planar_by_crossing(&self) -> bool {
        self.crossing_pairs().is_empty()
    }

    /// Positions (in [`SentenceGraph::edges`]) of every crossing edge pair,
    /// each as `(earlier, later)`. Dangling edges are ignored.
    pub fn crossing_pairs(&self) -> Vec<(usize, usize)> {
        let rank = self.anchor_ranks();
        let arcs: Vec<(usize, usize, usize)> = self
            .edges
            .iter()
            .enumerate()
            .filter_map(|(position, edge)| {
                let s = *rank.get(&edge.source)?;
                let t = *rank.get(&edge.target)?;
                Some((position, s.min(t), s.max(t)))
            })
            .collect();

        let mut pairs = Vec::new();
        for (i, &(pe, lo_e, hi_e)) in arcs.iter().enumerate() {
            for &(po, lo_o, hi_o) in &arcs[i + 1..] {
                let crosses = (lo_e < lo_o && lo_o < hi_e && hi_e < hi_o)
                    || (lo_o < lo_e && lo_e < hi_o && hi_o < hi_e);
                if crosses {
                    pairs.push((pe, po));
                }
            }
        }

        tracing::debug!(
            graph = %self.id,
            arcs = arcs.len(),
            crossings = pairs.len(),
            "crossing test finished"
        );
        pairs
    }

    /// Returns a copy of the graph whose node ids are their rank in anchor
    /// order.
    ///
    /// Edges keep their labels and are remapped to the new ids; dangling
    /// edges are dropped. Tops are remapped (unresolvable tops dropped).
    /// Tokens, input and source are carried over unchanged.
    pub fn reordered_by_anchor(&self) -> SentenceGraph {
        let order = self.anchor_order();
        let mut remap: HashMap<NodeId, NodeId> = HashMap::with_capacity(order.len());
        let mut nodes: BTreeMap<NodeId, Node> = BTreeMap::new();
        for (rank, node) in (0u32..).zip(order) {
            let id = NodeId(rank);
            remap.insert(node.id, id);
            nodes.insert(id, Node::new(id, node.label.clone(), node.anchors.clone()));
        }

        let edges: Vec<Edge> = self
            .edges
            .iter()
            .filter_map(|edge| {
                Some(Edge {
                    source: *remap.get(&edge.source)?,
                    target: *remap.get(&edge.target)?,
                    label: edge.label.clone(),
                    post_label: edge.post_label.clone(),
                })
            })
            .collect();

        let tops: Vec<NodeId> = self
            .tops
            .iter()
            .filter_map(|top| remap.get(top).copied())
            .collect();

        SentenceGraph::from_parts(self.id.clone(), nodes, edges)
            .with_source(self.source.clone())
            .with_input(self.input.clone())
            .with_tokens(self.tokens.clone())
            .with_tops(tops)
    }

    /// Nodes sorted by first-anchor `from`; unanchored nodes last.
    fn anchor_order(&self) -> Vec<&Node> {
        // BTreeMap order plus a stable sort keeps ties in id order.
        let mut order: Vec<&Node> = self.nodes.values().collect();
        order.sort_by_key(|node| (node.position().is_none(), node.position()));
        order
    }

    fn anchor_ranks(&self) -> HashMap<NodeId, usize> {
        self.anchor_order()
            .into_iter()
            .enumerate()
            .map(|(rank, node)| (node.id, rank))
            .collect()
    }
}
