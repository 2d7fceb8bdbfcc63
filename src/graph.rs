use egui::Pos2;
use petgraph::{
    stable_graph::{EdgeIndex, NodeIndex, StableGraph},
    visit::{EdgeRef, IntoEdgeReferences, IntoNodeReferences},
    Undirected,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::layouts::Circular;

pub const MIN_WEIGHT: u32 = 1;
pub const MAX_WEIGHT: u32 = 9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
    pub location: Pos2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    pub weight: u32,
}

type StableGraphType = StableGraph<NodeData, EdgeData, Undirected>;

/// Weighted graph the traversal algorithms run on.
///
/// Wraps [`petgraph::stable_graph::StableGraph`]. Edges are stored once and
/// traversed in both directions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlgoGraph {
    g: StableGraphType,
}

impl AlgoGraph {
    /// Builds the irregular connected graph the visualizer uses: node `i`
    /// links to its successor, to the node two steps away and, on a coin
    /// flip, to one more random node. Weights are uniform in `1..=9`.
    pub fn generate<R: Rng>(rng: &mut R, count: usize, layout: &Circular) -> Self {
        let mut g = Self::default();
        let nodes: Vec<NodeIndex> = (0..count)
            .map(|i| g.add_node(node_label(i), layout.position(i, count)))
            .collect();

        for i in 0..count {
            let next = (i + 1) % count;
            let after_next = (i + 2) % count;

            g.add_edge(nodes[i], nodes[next], random_weight(rng));
            g.add_edge(nodes[i], nodes[after_next], random_weight(rng));

            if rng.random_bool(0.5) {
                let candidates: Vec<usize> = (0..count)
                    .filter(|&j| j != i && j != next && j != after_next)
                    .collect();
                if candidates.is_empty() {
                    continue;
                }
                let j = candidates[rng.random_range(0..candidates.len())];
                g.add_edge(nodes[i], nodes[j], random_weight(rng));
            }
        }

        g
    }

    /// Builds a graph from labels and `(from, to, weight)` triples that index
    /// into `labels`. Nodes are placed with the default circular layout.
    pub fn from_edges(labels: &[&str], edges: &[(usize, usize, u32)]) -> Self {
        let layout = Circular::default();
        let mut g = Self::default();
        let nodes: Vec<NodeIndex> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| g.add_node((*label).to_string(), layout.position(i, labels.len())))
            .collect();
        for &(from, to, weight) in edges {
            g.add_edge(nodes[from], nodes[to], weight);
        }
        g
    }

    pub fn add_node(&mut self, label: String, location: Pos2) -> NodeIndex {
        self.g.add_node(NodeData { label, location })
    }

    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, weight: u32) -> EdgeIndex {
        self.g.add_edge(from, to, EdgeData { weight })
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&NodeData> {
        self.g.node_weight(idx)
    }

    pub fn node_mut(&mut self, idx: NodeIndex) -> Option<&mut NodeData> {
        self.g.node_weight_mut(idx)
    }

    pub fn label(&self, idx: NodeIndex) -> &str {
        self.node(idx).map_or("?", |n| n.label.as_str())
    }

    pub fn node_by_label(&self, label: &str) -> Option<NodeIndex> {
        self.g
            .node_references()
            .find(|(_, n)| n.label == label)
            .map(|(idx, _)| idx)
    }

    /// Incident edges of `idx` as `(edge, neighbor, weight)` in the order the
    /// edges were added.
    pub fn neighbors(&self, idx: NodeIndex) -> Vec<(EdgeIndex, NodeIndex, u32)> {
        let mut res: Vec<_> = self
            .g
            .edges(idx)
            .map(|e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                (e.id(), other, e.weight().weight)
            })
            .collect();
        // petgraph walks adjacency lists newest first
        res.sort_by_key(|(e, _, _)| e.index());
        res
    }

    pub fn nodes_iter(&self) -> impl Iterator<Item = (NodeIndex, &NodeData)> {
        self.g.node_references()
    }

    pub fn edges_iter(&self) -> impl Iterator<Item = (EdgeIndex, NodeIndex, NodeIndex, &EdgeData)> {
        self.g
            .edge_references()
            .map(|e| (e.id(), e.source(), e.target(), e.weight()))
    }

    pub fn node_count(&self) -> usize {
        self.g.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.g.edge_count()
    }
}

/// `A`, `B`, ... `Z`, then `A1`, `B1`, ... for larger graphs.
pub fn node_label(i: usize) -> String {
    let letter = char::from(b'A' + (i % 26) as u8);
    match i / 26 {
        0 => letter.to_string(),
        round => format!("{letter}{round}"),
    }
}

fn random_weight<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(MIN_WEIGHT..=MAX_WEIGHT)
}
