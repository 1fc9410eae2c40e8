//! Implementation of `repgraph search <file> (--label L... | --graph ID
//! --node N...)`.
//!
//! Lists the ids of the graphs whose node labels include every requested
//! label. With `--graph`/`--node` the labels are taken from the named nodes
//! of that graph, which therefore always matches itself.
//!
//! Output (human mode): one graph id per line.
//! Output (JSON mode): `{"labels", "graphs"}`.
//!
//! Exit codes: 0 = at least one match, 1 = no match or unknown graph/node,
//! 2 = input error.
use repgraph_core::{Corpus, GraphId, NodeId};
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::write_json;

/// Where the query labels come from.
#[derive(Debug)]
pub enum Query<'a> {
    /// Labels given directly.
    Labels(&'a [String]),
    /// Labels of these nodes in this graph.
    NodeSet {
        /// Source graph id.
        graph: &'a str,
        /// Node ids within the source graph.
        nodes: &'a [u32],
    },
}

#[derive(Debug, Serialize)]
struct SearchReport {
    labels: Vec<String>,
    graphs: Vec<GraphId>,
}

/// Runs the `search` command.
///
/// # Errors
///
/// - [`CliError::GraphNotFound`] / [`CliError::NodeNotFound`] if a node-set
///   query names something absent.
/// - [`CliError::NoResults`] if no graph matches.
pub fn run(corpus: &Corpus, query: Query<'_>, format: &OutputFormat) -> Result<(), CliError> {
    let (labels, graphs) = match query {
        Query::Labels(labels) => (labels.to_vec(), corpus.search_labels(labels)),
        Query::NodeSet { graph, nodes } => {
            let id = GraphId::from(graph);
            let ids: Vec<NodeId> = nodes.iter().copied().map(NodeId).collect();
            let graphs = corpus.search_node_set(&id, &ids)?;
            let source = corpus.graph(&id)?;
            let mut labels: Vec<String> = Vec::new();
            for node in ids.iter().filter_map(|&n| source.node(n)) {
                if !labels.contains(&node.label) {
                    labels.push(node.label.clone());
                }
            }
            (labels, graphs)
        }
    };

    if graphs.is_empty() {
        return Err(CliError::NoResults {
            detail: format!("no graph contains every label of [{}]", labels.join(", ")),
        });
    }

    let report = SearchReport { labels, graphs };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &report),
        OutputFormat::Json => write_json(&mut out, &report),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, report: &SearchReport) -> std::io::Result<()> {
    for id in &report.graphs {
        writeln!(w, "{id}")?;
    }
    Ok(())
}
