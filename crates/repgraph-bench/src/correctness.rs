//! Post-analysis invariant checkers for correctness validation.
//!
//! Each checker recomputes a result independently (with `petgraph` or by
//! brute force) and returns a description of the first disagreement.

use std::collections::{HashMap, HashSet};

use petgraph::algo::{
    connected_components, dijkstra, is_cyclic_directed, is_cyclic_undirected, toposort,
};
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use repgraph_core::{NodeId, SentenceGraph, render_span};

/// A sentence graph copied into `petgraph` form, dangling edges dropped.
pub struct Mirror {
    /// Directed copy.
    pub directed: DiGraph<NodeId, ()>,
    /// Undirected copy.
    pub undirected: UnGraph<NodeId, ()>,
    /// Node id to petgraph index (same in both copies).
    pub index: HashMap<NodeId, NodeIndex>,
}

impl Mirror {
    /// Builds both copies of `graph`.
    pub fn of(graph: &SentenceGraph) -> Self {
        let mut directed = DiGraph::with_capacity(graph.node_count(), graph.edge_count());
        let mut undirected = UnGraph::with_capacity(graph.node_count(), graph.edge_count());
        let mut index = HashMap::with_capacity(graph.node_count());
        for &id in graph.nodes().keys() {
            let ix = directed.add_node(id);
            undirected.add_node(id);
            index.insert(id, ix);
        }
        for edge in graph.edges() {
            if let (Some(&s), Some(&t)) = (index.get(&edge.source), index.get(&edge.target)) {
                directed.add_edge(s, t, ());
                undirected.add_edge(s, t, ());
            }
        }
        Self {
            directed,
            undirected,
            index,
        }
    }
}

/// Verifies every resolved edge is listed in the neighbor index, and that
/// list sizes add up to the resolved edge count.
pub fn check_neighbor_index(graph: &SentenceGraph) -> Result<(), String> {
    let index = graph.neighbor_index();
    if index.len() != graph.node_count() {
        return Err(format!(
            "index covers {} nodes, graph has {}",
            index.len(),
            graph.node_count()
        ));
    }
    let resolved = graph.edge_count() - graph.dangling_edges().count();
    let directed_total: usize = (0..index.len()).map(|s| index.directed(s).len()).sum();
    if directed_total != resolved {
        return Err(format!(
            "directed lists hold {directed_total} entries, expected {resolved}"
        ));
    }
    for edge in graph.edges() {
        let (Some(s), Some(t)) = (index.slot(edge.source), index.slot(edge.target)) else {
            continue;
        };
        if !index.directed(s).contains(&t) {
            return Err(format!("{} -> {} missing from directed list", edge.source, edge.target));
        }
        if !index.undirected(t).contains(&s) {
            return Err(format!("{} <- {} missing from reverse list", edge.target, edge.source));
        }
    }
    Ok(())
}

/// Verifies both cycle predicates and connectivity against `petgraph`.
pub fn check_structure(graph: &SentenceGraph, mirror: &Mirror) -> Result<(), String> {
    let undirected = is_cyclic_undirected(&mirror.undirected);
    if graph.has_undirected_cycle() != undirected {
        return Err(format!("undirected cycle: expected {undirected}"));
    }
    let directed = is_cyclic_directed(&mirror.directed);
    if graph.has_directed_cycle() != directed {
        return Err(format!("directed cycle: expected {directed}"));
    }
    if graph.node_count() > 0 {
        let connected = connected_components(&mirror.undirected) == 1;
        let got = graph
            .is_connected_any()
            .map_err(|e| format!("connectivity failed: {e}"))?;
        if got != connected {
            return Err(format!("connected: expected {connected}"));
        }
    }
    Ok(())
}

/// Verifies directed longest paths on an acyclic graph: every path follows
/// real edges, all have the length of the DAG optimum, and none repeats.
pub fn check_directed_longest(graph: &SentenceGraph, mirror: &Mirror) -> Result<(), String> {
    let paths = graph
        .longest_paths(true)
        .map_err(|e| format!("directed longest failed: {e}"))?;
    if graph.edge_count() < 2 {
        return Ok(());
    }

    let order = toposort(&mirror.directed, None).map_err(|_| "mirror is cyclic".to_owned())?;
    let mut best = vec![1usize; mirror.directed.node_count()];
    for &ix in &order {
        for next in mirror.directed.neighbors(ix) {
            best[next.index()] = best[next.index()].max(best[ix.index()] + 1);
        }
    }
    let expected = best.into_iter().max().unwrap_or(0);

    check_paths(graph, mirror, &paths, true)?;
    match paths.first() {
        Some(p) if p.len() == expected => Ok(()),
        Some(p) => Err(format!("longest path has {} nodes, expected {expected}", p.len())),
        None => Err("no directed longest path reported".to_owned()),
    }
}

/// Verifies undirected longest paths: each is a shortest path between its
/// endpoints, all share one length, and no path appears with its reverse.
pub fn check_undirected_longest(graph: &SentenceGraph, mirror: &Mirror) -> Result<(), String> {
    let paths = graph
        .longest_paths(false)
        .map_err(|e| format!("undirected longest failed: {e}"))?;
    if graph.edge_count() < 2 {
        return Ok(());
    }
    check_paths(graph, mirror, &paths, false)?;

    let seen: HashSet<&Vec<NodeId>> = paths.iter().collect();
    for path in &paths {
        let reversed: Vec<NodeId> = path.iter().rev().copied().collect();
        if reversed != *path && seen.contains(&reversed) {
            return Err(format!("path {path:?} reported in both directions"));
        }
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            return Err("empty path".to_owned());
        };
        let (Some(&from), Some(&to)) = (mirror.index.get(first), mirror.index.get(last)) else {
            return Err("path endpoint not in graph".to_owned());
        };
        let distances = dijkstra(&mirror.undirected, from, Some(to), |_| 1usize);
        if distances.get(&to) != Some(&(path.len() - 1)) {
            return Err(format!("path {path:?} is not a shortest path"));
        }
    }
    Ok(())
}

fn check_paths(
    graph: &SentenceGraph,
    mirror: &Mirror,
    paths: &[Vec<NodeId>],
    directed: bool,
) -> Result<(), String> {
    let distinct: HashSet<&Vec<NodeId>> = paths.iter().collect();
    if distinct.len() != paths.len() {
        return Err("duplicate paths".to_owned());
    }
    let len = paths.first().map_or(0, Vec::len);
    for path in paths {
        if path.len() != len {
            return Err(format!("path {path:?} differs in length from the first"));
        }
        for pair in path.windows(2) {
            let (Some(&a), Some(&b)) = (mirror.index.get(&pair[0]), mirror.index.get(&pair[1]))
            else {
                return Err(format!("path {path:?} leaves {}", graph.id()));
            };
            let linked = if directed {
                mirror.directed.contains_edge(a, b)
            } else {
                mirror.undirected.contains_edge(a, b)
            };
            if !linked {
                return Err(format!("no edge between {} and {}", pair[0], pair[1]));
            }
        }
    }
    Ok(())
}

/// Verifies the crossing test by brute force over the anchor-reordered
/// graph, where node ids are positions.
pub fn check_crossing(graph: &SentenceGraph) -> Result<(), String> {
    let reordered = graph.reordered_by_anchor();
    let spans: Vec<(u32, u32)> = reordered
        .edges()
        .iter()
        .map(|e| (e.source.0.min(e.target.0), e.source.0.max(e.target.0)))
        .collect();

    let mut expected = 0usize;
    for (i, &(a, b)) in spans.iter().enumerate() {
        for &(c, d) in &spans[i + 1..] {
            if (a < c && c < b && b < d) || (c < a && a < d && d < b) {
                expected += 1;
            }
        }
    }

    let pairs = graph.crossing_pairs();
    if pairs.len() != expected {
        return Err(format!("{} crossing pairs, expected {expected}", pairs.len()));
    }
    if graph.is_planar_by_crossing() != pairs.is_empty() {
        return Err("planarity verdict disagrees with crossing pairs".to_owned());
    }
    if reordered.is_planar_by_crossing() != graph.is_planar_by_crossing() {
        return Err("reordering changed the planarity verdict".to_owned());
    }
    Ok(())
}

/// Verifies the full token span renders every token form in order.
pub fn check_full_span(graph: &SentenceGraph) -> Result<(), String> {
    let Some(last) = graph.token_count().checked_sub(1) else {
        return Ok(());
    };
    let span = graph
        .token_span(0, last)
        .map_err(|e| format!("full span failed: {e}"))?;
    let expected = graph
        .tokens()
        .iter()
        .map(|t| t.form.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    if render_span(span) != expected {
        return Err("full span does not match token forms".to_owned());
    }
    Ok(())
}

/// Runs every checker applicable to `graph`.
pub fn check_all(graph: &SentenceGraph) -> Result<(), String> {
    let mirror = Mirror::of(graph);
    let tag = |e: String| format!("{}: {e}", graph.id());
    check_neighbor_index(graph).map_err(tag)?;
    check_structure(graph, &mirror).map_err(tag)?;
    if !graph.has_directed_cycle() {
        check_directed_longest(graph, &mirror).map_err(tag)?;
    }
    check_undirected_longest(graph, &mirror).map_err(tag)?;
    check_crossing(graph).map_err(tag)?;
    check_full_span(graph).map_err(tag)
}
