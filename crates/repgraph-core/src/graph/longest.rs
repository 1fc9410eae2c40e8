/// Longest-path search in two flavours.
///
/// Both return every path tied for the maximum length, each as node ids
/// ordered start → end.
///
/// # Undirected (diameter-style)
///
/// Edges are walked in both directions and distances are breadth-first hop
/// counts, so the result is the longest *shortest* path:
///
/// - connected graph: BFS from the lowest node id, then BFS again from each
///   farthest node found (two-pass eccentricity search);
/// - disconnected graph: BFS from every node.
///
/// This is exact on trees. On graphs with undirected cycles it is a lower
/// bound on the true longest simple path, which is NP-hard in general. A path
/// and its reverse are reported once.
///
/// # Directed (DAG)
///
/// Nodes are put in topological order by depth-first post-order, then for
/// each start node distances are relaxed in that order with
/// `dist[t] = max(dist[t], dist[s] + 1)`. Starts already lying on an
/// accumulated longest path are skipped: in a DAG any path from such a node
/// extends backwards into a strictly longer one. Graphs with a directed cycle
/// are rejected with [`AnalysisError::DirectedCycle`].
use std::collections::HashSet;

use crate::graph::{AnalysisError, NeighborIndex, SentenceGraph};
use crate::newtypes::NodeId;

impl SentenceGraph {
    /// Returns all longest paths, directed (`directed = true`) or
    /// diameter-style undirected.
    ///
    /// A graph with no nodes or no edges yields no paths. A graph with exactly
    /// one edge yields that edge's endpoints as the only path, whichever flag
    /// is passed and whether or not the endpoints exist.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DirectedCycle`] when `directed` is set and the
    /// graph has a directed cycle (callers unsure of their input can check
    /// [`SentenceGraph::has_directed_cycle`] first).
    pub fn longest_paths(&self, directed: bool) -> Result<Vec<Vec<NodeId>>, AnalysisError> {
        if self.nodes.is_empty() || self.edges.is_empty() {
            return Ok(Vec::new());
        }
        if let [only] = self.edges.as_slice() {
            return Ok(vec![vec![only.source, only.target]]);
        }

        let index = self.neighbor_index();
        let paths = if directed {
            if self.has_directed_cycle() {
                return Err(AnalysisError::DirectedCycle);
            }
            directed_longest(index)
        } else {
            undirected_longest(index)
        };

        tracing::debug!(
            graph = %self.id,
            directed,
            found = paths.len(),
            length = paths.first().map_or(0, Vec::len),
            "longest path search finished"
        );

        Ok(paths
            .into_iter()
            .map(|path| path.into_iter().map(|slot| index.id(slot)).collect())
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tie accumulator
// ---------------------------------------------------------------------------

/// Collects the paths tied for the greatest node count seen so far.
struct Longest {
    paths: Vec<Vec<usize>>,
    seen: HashSet<Vec<usize>>,
    fold_reverse: bool,
}

impl Longest {
    fn new(fold_reverse: bool) -> Self {
        Self {
            paths: Vec::new(),
            seen: HashSet::new(),
            fold_reverse,
        }
    }

    fn len(&self) -> usize {
        self.paths.first().map_or(0, Vec::len)
    }

    /// Offers a batch of equal-length paths from one search. Returns `true`
    /// if the batch is at least as long as the current best.
    fn offer(&mut self, batch: Vec<Vec<usize>>) -> bool {
        let Some(batch_len) = batch.first().map(Vec::len) else {
            return false;
        };
        if batch_len < self.len() {
            return false;
        }
        if batch_len > self.len() {
            self.paths.clear();
            self.seen.clear();
        }
        for path in batch {
            let key = self.key(&path);
            if self.seen.insert(key) {
                self.paths.push(path);
            }
        }
        true
    }

    /// Dedup key: the path itself, or the smaller of it and its reverse.
    fn key(&self, path: &[usize]) -> Vec<usize> {
        let forward = path.to_vec();
        if !self.fold_reverse {
            return forward;
        }
        let reversed: Vec<usize> = path.iter().rev().copied().collect();
        forward.min(reversed)
    }
}

// ---------------------------------------------------------------------------
// Undirected
// ---------------------------------------------------------------------------

fn undirected_longest(index: &NeighborIndex) -> Vec<Vec<usize>> {
    let mut best = Longest::new(true);
    let reference = 0;

    let (dist, _) = index.bfs(reference);
    let connected = dist.iter().all(Option::is_some);

    if connected {
        let mut expanded: HashSet<usize> = HashSet::new();
        for first in farthest_paths(index, reference) {
            let Some(&far) = first.last() else { continue };
            if expanded.insert(far) {
                best.offer(farthest_paths(index, far));
            }
        }
    } else {
        for start in 0..index.len() {
            best.offer(farthest_paths(index, start));
        }
    }

    best.paths
}

/// BFS from `start`; one path per node at the maximum hop distance.
fn farthest_paths(index: &NeighborIndex, start: usize) -> Vec<Vec<usize>> {
    if index.combined(start).next().is_none() {
        return Vec::new();
    }
    let (dist, prev) = index.bfs(start);
    trace_back(&dist, &prev, start)
}

// ---------------------------------------------------------------------------
// Directed
// ---------------------------------------------------------------------------

fn directed_longest(index: &NeighborIndex) -> Vec<Vec<usize>> {
    let order = topological_order(index);
    let mut best = Longest::new(false);
    let mut covered = vec![false; index.len()];

    for start in 0..index.len() {
        if covered[start] {
            continue;
        }
        let batch = dag_paths_from(index, &order, start);
        let marks: Vec<usize> = batch.iter().flatten().copied().collect();
        if best.offer(batch) {
            for slot in marks {
                covered[slot] = true;
            }
        }
    }

    best.paths
}

/// Longest directed paths from `start`, relaxing in topological `order`.
fn dag_paths_from(index: &NeighborIndex, order: &[usize], start: usize) -> Vec<Vec<usize>> {
    if index.directed(start).is_empty() {
        return Vec::new();
    }

    let n = index.len();
    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    dist[start] = Some(0);

    for &u in order {
        let Some(du) = dist[u] else { continue };
        for &v in index.directed(u) {
            if dist[v].is_none_or(|dv| dv < du + 1) {
                dist[v] = Some(du + 1);
                prev[v] = Some(u);
            }
        }
    }

    trace_back(&dist, &prev, start)
}

/// Reverse depth-first post-order over directed neighbors, rooted at every
/// unvisited slot in ascending order.
fn topological_order(index: &NeighborIndex) -> Vec<usize> {
    let n = index.len();
    let mut visited = vec![false; n];
    let mut post = Vec::with_capacity(n);

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let (node, next) = *frame;
            match index.directed(node).get(next) {
                Some(&child) => {
                    frame.1 += 1;
                    if !visited[child] {
                        visited[child] = true;
                        stack.push((child, 0));
                    }
                }
                None => {
                    post.push(node);
                    stack.pop();
                }
            }
        }
    }

    post.reverse();
    post
}

// ---------------------------------------------------------------------------
// Path reconstruction
// ---------------------------------------------------------------------------

/// Walks predecessors back from every node at the maximum distance and
/// returns each path reading `start → end`. Empty when nothing beyond
/// `start` was reached.
fn trace_back(dist: &[Option<usize>], prev: &[Option<usize>], start: usize) -> Vec<Vec<usize>> {
    let Some(max) = dist.iter().flatten().copied().max() else {
        return Vec::new();
    };
    if max == 0 {
        return Vec::new();
    }

    dist.iter()
        .enumerate()
        .filter(|&(_, d)| *d == Some(max))
        .map(|(end, _)| {
            let mut path = vec![end];
            let mut current = end;
            while current != start {
                match prev[current] {
                    Some(p) => {
                        path.push(p);
                        current = p;
                    }
                    None => break,
                }
            }
            path.reverse();
            path
        })
        .collect()
}

#[cfg(test)]
mod tests;
