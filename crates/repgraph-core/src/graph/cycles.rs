/// Cycle predicates for sentence graphs.
///
/// Both predicates run an explicit-stack depth-first search over the
/// [`NeighborIndex`], so their depth is bounded by heap, not by the call
/// stack.
///
/// # Undirected cycles
///
/// The search walks combined neighbor lists and remembers the slot each node
/// was entered from. Meeting an already-visited neighbor that is not that
/// parent closes a cycle, and the search returns at once from whatever depth
/// it is at. Because every edge appears once in each endpoint's combined
/// list, parallel edges, opposite edges (`a → b`, `b → a`) and self loops
/// all count as cycles.
///
/// # Directed cycles
///
/// Classic white/gray/black colouring over directed neighbor lists only: an
/// edge into a gray node (one still on the stack) is a back edge.
///
/// [`NeighborIndex`]: crate::graph::NeighborIndex
use crate::graph::{NeighborIndex, SentenceGraph};

impl SentenceGraph {
    /// Returns `true` if the graph, with edge direction ignored, contains a
    /// cycle.
    pub fn has_undirected_cycle(&self) -> bool {
        let index = self.neighbor_index();
        let mut visited = vec![false; index.len()];

        for root in 0..index.len() {
            if !visited[root] && undirected_cycle_from(index, root, &mut visited) {
                return true;
            }
        }
        false
    }

    /// Returns `true` if following edges in their direction can return to a
    /// node already on the path.
    pub fn has_directed_cycle(&self) -> bool {
        let index = self.neighbor_index();
        let mut colour = vec![Colour::White; index.len()];

        for root in 0..index.len() {
            if colour[root] == Colour::White && directed_cycle_from(index, root, &mut colour) {
                return true;
            }
        }
        false
    }
}

/// Depth-first search of one component, carrying the parent slot.
///
/// Each stack frame is `(node, parent, next combined-neighbor position)`.
fn undirected_cycle_from(index: &NeighborIndex, root: usize, visited: &mut [bool]) -> bool {
    let mut stack: Vec<(usize, Option<usize>, usize)> = vec![(root, None, 0)];
    visited[root] = true;

    while let Some(frame) = stack.last_mut() {
        let (node, parent, next) = *frame;
        let Some(child) = index.combined(node).nth(next) else {
            stack.pop();
            continue;
        };
        frame.2 += 1;

        if !visited[child] {
            visited[child] = true;
            stack.push((child, Some(node), 0));
        } else if Some(child) != parent {
            return true;
        }
    }
    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Colour {
    White,
    Gray,
    Black,
}

/// Three-colour depth-first search from `root` over directed neighbors.
fn directed_cycle_from(index: &NeighborIndex, root: usize, colour: &mut [Colour]) -> bool {
    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
    colour[root] = Colour::Gray;

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        let Some(&child) = index.directed(node).get(next) else {
            colour[node] = Colour::Black;
            stack.pop();
            continue;
        };
        frame.1 += 1;

        match colour[child] {
            Colour::Gray => return true,
            Colour::White => {
                colour[child] = Colour::Gray;
                stack.push((child, 0));
            }
            Colour::Black => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::{chain, graph};

    // -----------------------------------------------------------------------
    // Undirected
    // -----------------------------------------------------------------------

    #[test]
    fn tree_has_no_undirected_cycle() {
        //      0
        //     / \
        //    1   2
        //   / \
        //  3   4
        let g = graph(&[0, 1, 2, 3, 4], &[(0, 1), (0, 2), (1, 3), (1, 4)]);
        assert!(!g.has_undirected_cycle());
    }

    #[test]
    fn converging_edges_form_undirected_cycle() {
        // 0 -> 1, 0 -> 2, 1 -> 2: acyclic as a digraph, a triangle undirected.
        let g = graph(&[0, 1, 2], &[(0, 1), (0, 2), (1, 2)]);
        assert!(g.has_undirected_cycle());
        assert!(!g.has_directed_cycle());
    }

    /// Regression: the cycle closes four hops below the root, so the result
    /// must travel up through every level of the search.
    #[test]
    fn deep_cycle_is_reported_from_the_root() {
        // 0 - 1 - 2 - 3 - 4 - 5 - 3 (cycle 3-4-5 hanging off a long tail)
        let g = graph(
            &[0, 1, 2, 3, 4, 5],
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 3)],
        );
        assert!(g.has_undirected_cycle());
    }

    #[test]
    fn cycle_in_second_component_is_found() {
        let g = graph(&[0, 1, 2, 3, 4], &[(0, 1), (2, 3), (3, 4), (4, 2)]);
        assert!(g.has_undirected_cycle());
    }

    #[test]
    fn parallel_edges_form_undirected_cycle() {
        let g = graph(&[0, 1], &[(0, 1), (0, 1)]);
        assert!(g.has_undirected_cycle());
    }

    #[test]
    fn opposite_edges_form_undirected_cycle() {
        let g = graph(&[0, 1], &[(0, 1), (1, 0)]);
        assert!(g.has_undirected_cycle());
        assert!(g.has_directed_cycle());
    }

    #[test]
    fn self_loop_is_a_cycle_both_ways() {
        let g = graph(&[0, 1], &[(0, 1), (1, 1)]);
        assert!(g.has_undirected_cycle());
        assert!(g.has_directed_cycle());
    }

    #[test]
    fn edgeless_and_empty_graphs_are_acyclic() {
        assert!(!graph(&[], &[]).has_undirected_cycle());
        assert!(!graph(&[0, 1, 2], &[]).has_undirected_cycle());
        assert!(!graph(&[], &[]).has_directed_cycle());
    }

    #[test]
    fn dangling_edges_cannot_close_a_cycle() {
        // 0 -> 1 -> 9 -> 0 would be a cycle if node 9 existed.
        let g = graph(&[0, 1], &[(0, 1), (1, 9), (9, 0)]);
        assert!(!g.has_undirected_cycle());
        assert!(!g.has_directed_cycle());
    }

    // -----------------------------------------------------------------------
    // Directed
    // -----------------------------------------------------------------------

    #[test]
    fn chain_has_no_directed_cycle() {
        assert!(!chain(5).has_directed_cycle());
    }

    #[test]
    fn triangle_has_directed_cycle() {
        let g = graph(&[0, 1, 2], &[(0, 1), (1, 2), (2, 0)]);
        assert!(g.has_directed_cycle());
    }

    #[test]
    fn diamond_has_no_directed_cycle() {
        // Both branches reach 3; the second visit sees a black node.
        let g = graph(&[0, 1, 2, 3], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert!(!g.has_directed_cycle());
    }

    #[test]
    fn cycle_reachable_only_from_later_root_is_found() {
        // Root 0 is a sink; the cycle 2 -> 3 -> 2 is found from root 1.
        let g = graph(&[0, 1, 2, 3], &[(1, 0), (1, 2), (2, 3), (3, 2)]);
        assert!(g.has_directed_cycle());
    }

    #[test]
    fn long_chain_does_not_exhaust_the_stack() {
        let g = chain(50_000);
        assert!(!g.has_directed_cycle());
        assert!(!g.has_undirected_cycle());
    }
}
