use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;
use serde::{Deserialize, Serialize};

use crate::{AlgoGraph, Error, Result, Step, Steps};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphAlgorithm {
    #[default]
    Bfs,
    Dfs,
    Dijkstra,
}

impl GraphAlgorithm {
    pub const ALL: [GraphAlgorithm; 3] = [
        GraphAlgorithm::Bfs,
        GraphAlgorithm::Dfs,
        GraphAlgorithm::Dijkstra,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GraphAlgorithm::Bfs => "BFS",
            GraphAlgorithm::Dfs => "DFS",
            GraphAlgorithm::Dijkstra => "Dijkstra",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GraphAlgorithm::Bfs => {
                "Breadth-First Search traverses the graph level by level, visiting all neighbors \
                 of a node before moving to the next level."
            }
            GraphAlgorithm::Dfs => {
                "Depth-First Search explores as far as possible along each branch before \
                 backtracking."
            }
            GraphAlgorithm::Dijkstra => {
                "Dijkstra's algorithm finds shortest paths from the start node in a graph with \
                 non-negative edge weights using a priority queue ordered by distance."
            }
        }
    }

    /// Produces the traversal steps starting from `start`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNode`] when `start` is not part of `g`.
    pub fn steps(self, g: &AlgoGraph, start: NodeIndex) -> Result<Steps> {
        if g.node(start).is_none() {
            return Err(Error::UnknownNode(format!("#{}", start.index())));
        }

        let mut out = Vec::new();
        match self {
            GraphAlgorithm::Bfs => bfs(g, start, &mut out),
            GraphAlgorithm::Dfs => dfs(g, start, &mut HashSet::new(), &mut out),
            GraphAlgorithm::Dijkstra => dijkstra(g, start, &mut out),
        }

        Ok(Steps::new(out))
    }
}

fn bfs(g: &AlgoGraph, start: NodeIndex, out: &mut Vec<Step>) {
    let mut discovered = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        out.push(Step::Visit {
            node: current,
            distance: None,
        });

        for (edge, next, _) in g.neighbors(current) {
            if discovered.insert(next) {
                out.push(Step::ExploreEdge {
                    from: current,
                    to: next,
                    edge,
                });
                queue.push_back(next);
            }
        }
    }
}

fn dfs(g: &AlgoGraph, current: NodeIndex, visited: &mut HashSet<NodeIndex>, out: &mut Vec<Step>) {
    if !visited.insert(current) {
        return;
    }
    out.push(Step::Visit {
        node: current,
        distance: None,
    });

    for (edge, next, _) in g.neighbors(current) {
        if visited.contains(&next) {
            continue;
        }
        out.push(Step::ExploreEdge {
            from: current,
            to: next,
            edge,
        });
        dfs(g, next, visited, out);
    }
}

/// Stale queue entries are never removed; they are skipped once their node is
/// finalized.
fn dijkstra(g: &AlgoGraph, start: NodeIndex, out: &mut Vec<Step>) {
    let mut dist: HashMap<NodeIndex, u32> = HashMap::from([(start, 0)]);
    let mut finalized = HashSet::new();

    // insertion counter breaks distance ties in favour of older entries
    let mut seq = 0u64;
    let mut queue = BinaryHeap::from([Reverse((0u32, seq, start))]);

    while let Some(Reverse((d, _, current))) = queue.pop() {
        if !finalized.insert(current) {
            continue;
        }
        out.push(Step::Visit {
            node: current,
            distance: Some(d),
        });

        for (edge, next, weight) in g.neighbors(current) {
            out.push(Step::ExploreEdge {
                from: current,
                to: next,
                edge,
            });

            let candidate = d + weight;
            if dist.get(&next).map_or(true, |&known| candidate < known) {
                dist.insert(next, candidate);
                out.push(Step::Relax {
                    node: next,
                    via: current,
                    distance: candidate,
                });
                seq += 1;
                queue.push(Reverse((candidate, seq, next)));
            }
        }
    }
}

/// Visit order recorded in a step sequence.
pub fn visit_order(steps: &Steps) -> Vec<NodeIndex> {
    steps
        .iter()
        .filter_map(|s| match s {
            Step::Visit { node, .. } => Some(*node),
            _ => None,
        })
        .collect()
}

/// Final distances recorded by the visit steps of a Dijkstra run.
pub fn final_distances(steps: &Steps) -> HashMap<NodeIndex, u32> {
    steps
        .iter()
        .filter_map(|s| match s {
            Step::Visit {
                node,
                distance: Some(d),
            } => Some((*node, *d)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::Circular;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn labels(g: &AlgoGraph, order: &[NodeIndex]) -> Vec<String> {
        order.iter().map(|n| g.label(*n).to_string()).collect()
    }

    fn cycle() -> AlgoGraph {
        AlgoGraph::from_edges(
            &["A", "B", "C", "D"],
            &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)],
        )
    }

    /// Exhaustive shortest path over simple paths, fine for a handful of nodes.
    fn brute_force(g: &AlgoGraph, start: NodeIndex) -> HashMap<NodeIndex, u32> {
        fn walk(
            g: &AlgoGraph,
            at: NodeIndex,
            cost: u32,
            on_path: &mut HashSet<NodeIndex>,
            best: &mut HashMap<NodeIndex, u32>,
        ) {
            let entry = best.entry(at).or_insert(u32::MAX);
            *entry = (*entry).min(cost);
            for (_, next, w) in g.neighbors(at) {
                if on_path.insert(next) {
                    walk(g, next, cost + w, on_path, best);
                    on_path.remove(&next);
                }
            }
        }

        let mut best = HashMap::new();
        let mut on_path = HashSet::from([start]);
        walk(g, start, 0, &mut on_path, &mut best);
        best
    }

    #[test]
    fn dijkstra_on_unit_cycle() {
        let g = cycle();
        let a = g.node_by_label("A").unwrap();
        let steps = GraphAlgorithm::Dijkstra.steps(&g, a).unwrap();
        let dist = final_distances(&steps);
        let by_label: HashMap<_, _> = dist
            .iter()
            .map(|(n, d)| (g.label(*n).to_string(), *d))
            .collect();
        assert_eq!(by_label["A"], 0);
        assert_eq!(by_label["B"], 1);
        assert_eq!(by_label["C"], 2);
        assert_eq!(by_label["D"], 1);
    }

    #[test]
    fn bfs_order_on_cycle() {
        let g = cycle();
        let a = g.node_by_label("A").unwrap();
        let steps = GraphAlgorithm::Bfs.steps(&g, a).unwrap();
        assert_eq!(labels(&g, &visit_order(&steps)), vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn dfs_order_on_cycle() {
        let g = cycle();
        let a = g.node_by_label("A").unwrap();
        let steps = GraphAlgorithm::Dfs.steps(&g, a).unwrap();
        assert_eq!(labels(&g, &visit_order(&steps)), vec!["A", "B", "C", "D"]);
        // the closing edge D-A is never explored, A is already visited
        let explored = steps
            .iter()
            .filter(|s| matches!(s, Step::ExploreEdge { .. }))
            .count();
        assert_eq!(explored, 3);
    }

    #[test]
    fn traversals_visit_reachable_nodes_once() {
        let mut rng = StdRng::seed_from_u64(21);
        for count in 4..=12 {
            let g = AlgoGraph::generate(&mut rng, count, &Circular::default());
            for (start, _) in g.nodes_iter() {
                for algorithm in GraphAlgorithm::ALL {
                    let order = visit_order(&algorithm.steps(&g, start).unwrap());
                    let unique: HashSet<_> = order.iter().copied().collect();
                    assert_eq!(unique.len(), order.len(), "{}", algorithm.name());
                    // generated graphs are connected through the ring edges
                    assert_eq!(order.len(), count, "{}", algorithm.name());
                    assert_eq!(order[0], start);
                }
            }
        }
    }

    #[test]
    fn unreachable_nodes_are_not_visited() {
        let g = AlgoGraph::from_edges(&["A", "B", "C", "D"], &[(0, 1, 2), (2, 3, 5)]);
        let a = g.node_by_label("A").unwrap();
        for algorithm in GraphAlgorithm::ALL {
            let order = visit_order(&algorithm.steps(&g, a).unwrap());
            assert_eq!(labels(&g, &order), vec!["A", "B"]);
        }
    }

    #[test]
    fn dijkstra_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(99);
        for count in 4..=6 {
            for _ in 0..10 {
                let g = AlgoGraph::generate(&mut rng, count, &Circular::default());
                for (start, _) in g.nodes_iter() {
                    let steps = GraphAlgorithm::Dijkstra.steps(&g, start).unwrap();
                    assert_eq!(final_distances(&steps), brute_force(&g, start));
                }
            }
        }
    }

    #[test]
    fn dijkstra_tolerates_stale_entries() {
        // A-C is expensive and relaxed first, A-B-C later improves it
        let g = AlgoGraph::from_edges(&["A", "B", "C"], &[(0, 2, 9), (0, 1, 1), (1, 2, 1)]);
        let a = g.node_by_label("A").unwrap();
        let c = g.node_by_label("C").unwrap();
        let steps = GraphAlgorithm::Dijkstra.steps(&g, a).unwrap();

        let relaxations: Vec<u32> = steps
            .iter()
            .filter_map(|s| match s {
                Step::Relax { node, distance, .. } if *node == c => Some(*distance),
                _ => None,
            })
            .collect();
        assert_eq!(relaxations, vec![9, 2]);

        let visits_of_c = visit_order(&steps).iter().filter(|n| **n == c).count();
        assert_eq!(visits_of_c, 1);
        assert_eq!(final_distances(&steps)[&c], 2);
    }

    #[test]
    fn unknown_start_is_rejected() {
        let g = cycle();
        let err = GraphAlgorithm::Bfs.steps(&g, NodeIndex::new(42)).unwrap_err();
        assert!(matches!(err, Error::UnknownNode(_)));
    }

    #[test]
    fn same_graph_same_steps() {
        let g = AlgoGraph::generate(&mut StdRng::seed_from_u64(4), 9, &Circular::default());
        let a = g.node_by_label("A").unwrap();
        for algorithm in GraphAlgorithm::ALL {
            assert_eq!(algorithm.steps(&g, a), algorithm.steps(&g, a));
        }
    }
}
