use serde::{Deserialize, Serialize};

use crate::newtypes::NodeId;

/// A labeled relation between two nodes.
///
/// `source` and `target` are not required to resolve to nodes of the owning
/// graph; see [`crate::SentenceGraph::has_dangling_edge`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Id of the node the edge leaves.
    pub source: NodeId,
    /// Id of the node the edge enters.
    pub target: NodeId,
    /// Relation label (e.g. `ARG1`, `BV`).
    #[serde(default)]
    pub label: String,
    /// Secondary label, e.g. the `EQ`/`NEQ` scope annotation in EDS/DM.
    #[serde(default, rename = "postLabel")]
    pub post_label: String,
}

impl Edge {
    /// Creates an edge with an empty post-label.
    pub fn new(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
            post_label: String::new(),
        }
    }

    /// Builder-style setter for [`Edge::post_label`].
    #[must_use]
    pub fn with_post_label(mut self, post_label: impl Into<String>) -> Self {
        self.post_label = post_label.into();
        self
    }
}
