use serde::Serialize;

use crate::corpus::GraphSummary;

/// Corpus-wide counts, means and structural percentages.
///
/// Means and percentages are rounded to two decimals. An empty corpus
/// reports zero for all of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorpusStats {
    /// Number of graphs.
    pub graphs: usize,
    /// Total nodes over all graphs.
    pub nodes: usize,
    /// Total edges over all graphs.
    pub edges: usize,
    /// Total tokens over all graphs.
    pub tokens: usize,
    /// Mean nodes per graph.
    pub mean_nodes: f64,
    /// Mean edges per graph.
    pub mean_edges: f64,
    /// Mean tokens per graph.
    pub mean_tokens: f64,
    /// Percentage of graphs with a directed cycle.
    pub directed_cyclic_pct: f64,
    /// Percentage of graphs with an undirected cycle.
    pub undirected_cyclic_pct: f64,
    /// Percentage of graphs that are not connected.
    pub disconnected_pct: f64,
    /// Percentage of graphs with at least one crossing edge pair.
    pub crossing_pct: f64,
    /// Number of graphs with at least one dangling edge.
    pub graphs_with_dangling_edges: usize,
}

impl CorpusStats {
    /// Folds per-graph summaries into corpus totals.
    pub fn collect(summaries: impl IntoIterator<Item = GraphSummary>) -> Self {
        let mut stats = CorpusStats::default();
        let mut directed_cyclic = 0usize;
        let mut undirected_cyclic = 0usize;
        let mut disconnected = 0usize;
        let mut crossing = 0usize;

        for summary in summaries {
            stats.graphs += 1;
            stats.nodes += summary.nodes;
            stats.edges += summary.edges;
            stats.tokens += summary.tokens;
            directed_cyclic += usize::from(summary.directed_cycle);
            undirected_cyclic += usize::from(summary.undirected_cycle);
            disconnected += usize::from(!summary.connected);
            crossing += usize::from(!summary.planar);
            stats.graphs_with_dangling_edges += usize::from(summary.dangling_edges > 0);
        }

        if stats.graphs == 0 {
            return stats;
        }

        let n = stats.graphs as f64;
        stats.mean_nodes = round2(stats.nodes as f64 / n);
        stats.mean_edges = round2(stats.edges as f64 / n);
        stats.mean_tokens = round2(stats.tokens as f64 / n);
        stats.directed_cyclic_pct = percent(directed_cyclic, n);
        stats.undirected_cyclic_pct = percent(undirected_cyclic, n);
        stats.disconnected_pct = percent(disconnected, n);
        stats.crossing_pct = percent(crossing, n);

        tracing::debug!(graphs = stats.graphs, "corpus statistics collected");
        stats
    }
}

fn percent(count: usize, total: f64) -> f64 {
    round2(count as f64 * 100.0 / total)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
