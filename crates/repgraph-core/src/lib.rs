#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod corpus;
pub mod graph;
pub mod newtypes;
pub mod serde_helpers;
pub mod structures;
pub mod transport;

#[cfg(test)]
mod test_helpers;

pub use corpus::{
    Corpus, CorpusError, CorpusStats, FormalTestReport, FormalTests, GraphComparison,
    GraphSummary,
};
pub use graph::{AnalysisError, GraphError, NeighborIndex, SentenceGraph};
pub use newtypes::{GraphId, NodeId};
pub use structures::{Anchor, Edge, Node, Token, render_span};
pub use transport::{TransportError, parse_corpus, parse_graph, to_json, to_json_lines};

/// Returns the current version of the repgraph-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
