use serde::{Deserialize, Serialize};

use crate::newtypes::NodeId;

/// Inclusive token range `[from, end]` aligning a node to the sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    /// First token position covered by the anchor.
    pub from: usize,
    /// Last token position covered by the anchor.
    pub end: usize,
}

impl Anchor {
    /// Creates an anchor covering `from..=end`.
    pub fn new(from: usize, end: usize) -> Self {
        Self { from, end }
    }

    /// Anchor covering a single token.
    pub fn at(position: usize) -> Self {
        Self::new(position, position)
    }
}

/// A concept node of a sentence graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier, unique within the owning graph.
    pub id: NodeId,

    /// Concept label (e.g. `_dog_n_1`, `udef_q`).
    #[serde(default)]
    pub label: String,

    /// Token alignments. Unaligned nodes have an empty list; JSON `null`
    /// deserializes to empty.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::deserialize_null_default"
    )]
    pub anchors: Vec<Anchor>,
}

impl Node {
    /// Creates a node with the given id, label and anchors.
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>, anchors: Vec<Anchor>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            anchors,
        }
    }

    /// Linear position key: the `from` of the first anchor, if any.
    pub fn position(&self) -> Option<usize> {
        self.anchors.first().map(|a| a.from)
    }
}
