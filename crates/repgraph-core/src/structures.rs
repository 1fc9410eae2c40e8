/// Token, Anchor, Node, and Edge structs for the sentence-graph data model.
///
/// Field names follow the MRP interchange format so that corpus files
/// deserialize without a mapping layer:
///
/// - nodes carry `id`, `label` and `anchors` (`null` for unaligned nodes);
/// - edges carry `source`, `target`, `label` and the secondary `postLabel`;
/// - tokens carry `index` and `form`, plus optional `lemma` / `carg`.
///
/// Nothing here knows about adjacency. Derived neighbor lists live in
/// [`crate::graph::NeighborIndex`], owned separately from the entities.
mod edge;
mod node;
mod token;

pub use edge::Edge;
pub use node::{Anchor, Node};
pub use token::{Token, render_span};
