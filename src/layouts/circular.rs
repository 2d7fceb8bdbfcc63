use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::AlgoGraph;

/// Circular layout arranges nodes evenly on a circle in insertion order.
///
/// The first node sits at `start_angle` (radians, `0` points right) and the
/// rest follow clockwise in screen coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circular {
    center: Pos2,
    radius: f32,
    start_angle: f32,
}

impl Default for Circular {
    fn default() -> Self {
        Self {
            center: Pos2::new(300., 200.),
            radius: 150.,
            start_angle: 0.,
        }
    }
}

impl Circular {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center(mut self, center: Pos2) -> Self {
        self.center = center;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_start_angle(mut self, angle: f32) -> Self {
        self.start_angle = angle;
        self
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Location of the `i`-th of `count` nodes.
    pub fn position(&self, i: usize, count: usize) -> Pos2 {
        if count == 0 {
            return self.center;
        }
        let angle = self.start_angle + (i as f32) * std::f32::consts::TAU / (count as f32);
        self.center + self.radius * Vec2::angled(angle)
    }

    pub fn positions(&self, count: usize) -> Vec<Pos2> {
        (0..count).map(|i| self.position(i, count)).collect()
    }

    /// Moves every node of `g` onto the circle.
    pub fn apply(&self, g: &mut AlgoGraph) {
        let count = g.node_count();
        let indices: Vec<_> = g.nodes_iter().map(|(idx, _)| idx).collect();
        for (i, idx) in indices.into_iter().enumerate() {
            if let Some(node) = g.node_mut(idx) {
                node.location = self.position(i, count);
            }
        }
    }
}
