#![allow(clippy::expect_used)]

use std::collections::HashSet;

use super::*;
use crate::test_helpers::{chain, graph};

fn ids(raw: &[u32]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId).collect()
}

fn directed(g: &SentenceGraph) -> Vec<Vec<NodeId>> {
    g.longest_paths(true).expect("acyclic graph")
}

fn undirected(g: &SentenceGraph) -> Vec<Vec<NodeId>> {
    g.longest_paths(false).expect("undirected never fails")
}

/// Node count of the longest directed simple path, by exhaustive DFS.
fn brute_force_directed(g: &SentenceGraph) -> usize {
    fn walk(g: &SentenceGraph, at: NodeId, on_path: &mut HashSet<NodeId>) -> usize {
        let mut best = on_path.len();
        for next in g.neighbor_index().successors(at) {
            if on_path.insert(next) {
                best = best.max(walk(g, next, on_path));
                on_path.remove(&next);
            }
        }
        best
    }

    g.nodes()
        .keys()
        .map(|&start| walk(g, start, &mut HashSet::from([start])))
        .max()
        .unwrap_or(0)
}

/// Every consecutive pair in `path` must be joined by an edge (either
/// direction when `directed` is false).
fn assert_walkable(g: &SentenceGraph, path: &[NodeId], directed: bool) {
    for pair in path.windows(2) {
        let index = g.neighbor_index();
        let forward = index.successors(pair[0]).contains(&pair[1]);
        let backward = index.predecessors(pair[0]).contains(&pair[1]);
        assert!(
            forward || (!directed && backward),
            "{:?} -> {:?} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

// ---------------------------------------------------------------------------
// Degenerate cases
// ---------------------------------------------------------------------------

#[test]
fn no_edges_gives_no_paths() {
    let g = graph(&[0, 1, 2], &[]);
    assert!(directed(&g).is_empty());
    assert!(undirected(&g).is_empty());
}

#[test]
fn no_nodes_gives_no_paths() {
    let g = graph(&[], &[(0, 1), (1, 2)]);
    assert!(directed(&g).is_empty());
}

#[test]
fn single_edge_is_the_path_for_both_flags() {
    let g = graph(&[5, 9], &[(5, 9)]);
    assert_eq!(directed(&g), vec![ids(&[5, 9])]);
    assert_eq!(undirected(&g), vec![ids(&[5, 9])]);
}

#[test]
fn single_edge_keeps_its_direction() {
    let g = graph(&[5, 9], &[(9, 5)]);
    assert_eq!(undirected(&g), vec![ids(&[9, 5])]);
}

// ---------------------------------------------------------------------------
// Directed
// ---------------------------------------------------------------------------

#[test]
fn chain_of_three_is_one_path() {
    let g = chain(3);
    assert_eq!(directed(&g), vec![ids(&[0, 1, 2])]);
    assert!(!g.has_directed_cycle());
    assert!(g.is_connected(NodeId(0)).expect("non-empty"));
}

#[test]
fn diamond_reports_one_predecessor_chain() {
    let g = graph(&[0, 1, 2, 3], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    let paths = directed(&g);
    // Only one predecessor is recorded per node, so the tie surfaces as a
    // single path ending at 3.
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), 3);
    assert_eq!(paths[0][0], NodeId(0));
    assert_eq!(paths[0][2], NodeId(3));
}

#[test]
fn fork_reports_every_tied_end() {
    // 0 -> 1 -> 2 and 0 -> 3 -> 4: two distinct ends at depth two.
    let g = graph(&[0, 1, 2, 3, 4], &[(0, 1), (1, 2), (0, 3), (3, 4)]);
    let paths: HashSet<Vec<NodeId>> = directed(&g).into_iter().collect();
    let expected: HashSet<Vec<NodeId>> = [ids(&[0, 1, 2]), ids(&[0, 3, 4])].into_iter().collect();
    assert_eq!(paths, expected);
}

#[test]
fn later_start_can_win() {
    // Node 0 only reaches 1; the longest path starts at 2.
    let g = graph(&[0, 1, 2, 3, 4], &[(0, 1), (2, 3), (3, 4), (4, 1)]);
    assert_eq!(directed(&g), vec![ids(&[2, 3, 4, 1])]);
}

#[test]
fn ties_across_components_are_kept() {
    let g = graph(&[0, 1, 2, 3], &[(0, 1), (2, 3)]);
    let paths: HashSet<Vec<NodeId>> = directed(&g).into_iter().collect();
    let expected: HashSet<Vec<NodeId>> = [ids(&[0, 1]), ids(&[2, 3])].into_iter().collect();
    assert_eq!(paths, expected);
}

#[test]
fn directed_cycle_is_rejected() {
    let g = graph(&[0, 1, 2], &[(0, 1), (1, 2), (2, 0)]);
    assert_eq!(g.longest_paths(true), Err(AnalysisError::DirectedCycle));
    assert!(g.longest_paths(false).is_ok());
}

#[test]
fn dag_matches_brute_force() {
    let cases: &[(&[u32], &[(u32, u32)])] = &[
        (&[0, 1, 2, 3], &[(0, 1), (0, 2), (1, 3), (2, 3), (0, 3)]),
        (
            &[0, 1, 2, 3, 4, 5],
            &[(5, 0), (0, 1), (1, 2), (5, 3), (3, 2), (2, 4)],
        ),
        (&[0, 1, 2, 3, 4], &[(4, 3), (3, 2), (2, 1), (1, 0), (4, 0)]),
        (&[0, 1, 2, 3], &[(0, 1), (2, 3), (1, 9)]),
    ];
    for &(nodes, edges) in cases {
        let g = graph(nodes, edges);
        let paths = directed(&g);
        let expected = brute_force_directed(&g);
        for path in &paths {
            assert_eq!(path.len(), expected, "graph {edges:?}: path {path:?}");
            assert_walkable(&g, path, true);
        }
    }
}

// ---------------------------------------------------------------------------
// Undirected
// ---------------------------------------------------------------------------

#[test]
fn undirected_chain_finds_diameter_once() {
    let g = chain(4);
    let paths = undirected(&g);
    assert_eq!(paths.len(), 1, "a path and its reverse are one path: {paths:?}");
    let path = &paths[0];
    assert_eq!(path.len(), 4);
    let ends: HashSet<NodeId> = [path[0], path[3]].into_iter().collect();
    assert_eq!(ends, [NodeId(0), NodeId(3)].into_iter().collect());
}

#[test]
fn undirected_ignores_edge_direction() {
    // 0 -> 1 <- 2 <- 3: directed longest is 3 nodes, undirected is 4.
    let g = graph(&[0, 1, 2, 3], &[(0, 1), (2, 1), (3, 2)]);
    let paths = undirected(&g);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), 4);
    assert_walkable(&g, &paths[0], false);
    assert_eq!(directed(&g)[0].len(), 3);
}

#[test]
fn undirected_star_reports_each_leaf_pair_once() {
    // Hub 0 with leaves 1, 2, 3: three diameter paths of three nodes.
    let g = graph(&[0, 1, 2, 3], &[(0, 1), (0, 2), (0, 3)]);
    let paths = undirected(&g);
    assert_eq!(paths.len(), 3, "{paths:?}");
    let mut pairs: HashSet<(NodeId, NodeId)> = HashSet::new();
    for path in &paths {
        assert_eq!(path.len(), 3);
        assert_eq!(path[1], NodeId(0));
        let (a, b) = (path[0].min(path[2]), path[0].max(path[2]));
        assert!(pairs.insert((a, b)), "pair {a:?}-{b:?} reported twice");
    }
}

#[test]
fn undirected_disconnected_takes_the_larger_component() {
    let g = graph(&[0, 1, 2, 3, 4, 5], &[(0, 1), (2, 3), (3, 4), (4, 5)]);
    let paths = undirected(&g);
    assert_eq!(paths.len(), 1, "{paths:?}");
    assert_eq!(paths[0].len(), 4);
    assert!(!paths[0].contains(&NodeId(0)));
}

#[test]
fn undirected_disconnected_deduplicates_reverse_paths() {
    // Two equal components; each diameter is found from both of its ends.
    let g = graph(&[0, 1, 2, 3, 4, 5], &[(0, 1), (1, 2), (3, 4), (4, 5)]);
    let paths = undirected(&g);
    assert_eq!(paths.len(), 2, "{paths:?}");
    for path in &paths {
        let reversed: Vec<NodeId> = path.iter().rev().copied().collect();
        assert!(!paths.contains(&reversed) || reversed == *path);
    }
}

#[test]
fn undirected_cycle_gives_shortest_path_lower_bound() {
    // Square 0-1-2-3-0: the longest simple path has 4 nodes, the diameter
    // approximation reports 3.
    let g = graph(&[0, 1, 2, 3], &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    let paths = undirected(&g);
    assert!(!paths.is_empty());
    for path in &paths {
        assert_eq!(path.len(), 3);
        assert_walkable(&g, path, false);
    }
}

#[test]
fn undirected_on_tree_is_exact() {
    //        0
    //      / | \
    //     1  2  3
    //    /       \
    //   4         5
    //  /
    // 6
    let g = graph(
        &[0, 1, 2, 3, 4, 5, 6],
        &[(0, 1), (0, 2), (0, 3), (1, 4), (3, 5), (4, 6)],
    );
    let paths = undirected(&g);
    assert_eq!(paths.len(), 1, "{paths:?}");
    assert_eq!(paths[0].len(), 6);
    let ends: HashSet<NodeId> = [paths[0][0], paths[0][5]].into_iter().collect();
    assert_eq!(ends, [NodeId(5), NodeId(6)].into_iter().collect());
}
