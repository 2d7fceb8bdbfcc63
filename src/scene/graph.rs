use std::collections::{BTreeMap, HashSet};

use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use super::{Outcome, Scene};
use crate::{AlgoGraph, Step};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeFlags {
    pub visited: bool,
    /// Node visited by the step on screen.
    pub current: bool,
    pub start: bool,
}

/// Traversal state over an [`AlgoGraph`].
///
/// Keeps a copy of the node labels so narration does not need the graph.
#[derive(Debug, Clone, Default)]
pub struct GraphScene {
    labels: BTreeMap<NodeIndex, String>,
    flags: BTreeMap<NodeIndex, NodeFlags>,
    active_edges: HashSet<EdgeIndex>,
    current_edge: Option<EdgeIndex>,
    /// Distances of visited nodes, no longer subject to change.
    finalized: BTreeMap<NodeIndex, u32>,
    /// Best distance found so far, including nodes not yet visited.
    tentative: BTreeMap<NodeIndex, u32>,
    visited_order: Vec<NodeIndex>,
    narration: String,
}

impl GraphScene {
    pub fn new(g: &AlgoGraph, start: NodeIndex) -> Self {
        let labels = g
            .nodes_iter()
            .map(|(idx, n)| (idx, n.label.clone()))
            .collect();
        let flags = g
            .nodes_iter()
            .map(|(idx, _)| {
                (
                    idx,
                    NodeFlags {
                        start: idx == start,
                        ..Default::default()
                    },
                )
            })
            .collect();

        Self {
            labels,
            flags,
            ..Default::default()
        }
    }

    pub fn node_flags(&self, idx: NodeIndex) -> NodeFlags {
        self.flags.get(&idx).copied().unwrap_or_default()
    }

    pub fn is_edge_active(&self, idx: EdgeIndex) -> bool {
        self.active_edges.contains(&idx)
    }

    pub fn current_edge(&self) -> Option<EdgeIndex> {
        self.current_edge
    }

    /// Distance of `idx` once it was visited.
    pub fn distance(&self, idx: NodeIndex) -> Option<u32> {
        self.finalized.get(&idx).copied()
    }

    pub fn tentative_distance(&self, idx: NodeIndex) -> Option<u32> {
        self.tentative.get(&idx).copied()
    }

    pub fn visited_order(&self) -> &[NodeIndex] {
        &self.visited_order
    }

    /// Visited labels joined with arrows, e.g. `A → B → D`.
    pub fn visited_path(&self) -> String {
        self.visited_order
            .iter()
            .map(|n| self.label(*n))
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Label and best known distance for every node, `None` meaning not yet
    /// reached. Empty until a step reported a distance.
    pub fn distance_table(&self) -> Vec<(String, Option<u32>)> {
        if self.tentative.is_empty() {
            return Vec::new();
        }
        self.labels
            .iter()
            .map(|(idx, label)| (label.clone(), self.tentative_distance(*idx)))
            .collect()
    }

    fn label(&self, idx: NodeIndex) -> &str {
        self.labels.get(&idx).map_or("?", String::as_str)
    }

    fn clear_current(&mut self) {
        for f in self.flags.values_mut() {
            f.current = false;
        }
        self.current_edge = None;
    }
}

impl Scene for GraphScene {
    fn apply(&mut self, step: &Step) {
        match *step {
            Step::Visit { node, distance } => {
                self.clear_current();
                let Some(f) = self.flags.get_mut(&node) else {
                    return;
                };
                f.visited = true;
                f.current = true;
                self.visited_order.push(node);

                self.narration = match distance {
                    Some(d) => {
                        self.finalized.insert(node, d);
                        self.tentative.insert(node, d);
                        format!("Visiting node {} (distance: {d})", self.label(node))
                    }
                    None => format!("Visiting node {}", self.label(node)),
                };
            }
            Step::ExploreEdge { from, to, edge } => {
                self.active_edges.insert(edge);
                self.current_edge = Some(edge);
                self.narration = format!(
                    "Exploring edge from {} to {}",
                    self.label(from),
                    self.label(to)
                );
            }
            Step::Relax {
                node,
                via,
                distance,
            } => {
                self.tentative.insert(node, distance);
                self.narration = format!(
                    "Found shorter path to {} through {}. New distance: {distance}",
                    self.label(node),
                    self.label(via)
                );
            }
            _ => {}
        }
    }

    fn clear_transient(&mut self) {
        self.clear_current();
    }

    fn outcome(&self) -> Outcome {
        Outcome::Traversed {
            visited: self.visited_order.len(),
        }
    }

    fn narration(&self) -> &str {
        &self.narration
    }

    fn set_narration(&mut self, text: String) {
        self.narration = text;
    }
}
