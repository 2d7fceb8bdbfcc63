use egui::Color32;

use crate::{BarFlags, NodeFlags};

/// Colours and sizes used when laying out a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub bar: Color32,
    pub bar_compared: Color32,
    pub bar_selected: Color32,
    pub bar_sorted: Color32,
    pub bar_probed: Color32,
    pub bar_found: Color32,

    pub node: Color32,
    pub node_visited: Color32,
    pub node_current: Color32,
    pub node_start_outline: Color32,
    pub edge: Color32,
    pub edge_active: Color32,
    pub text: Color32,

    pub node_radius: f32,
    pub edge_width: f32,
    pub font_size: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bar: Color32::from_rgb(0x4a, 0xde, 0x80),
            bar_compared: Color32::from_rgb(0xef, 0x44, 0x44),
            bar_selected: Color32::from_rgb(0xfa, 0xcc, 0x15),
            bar_sorted: Color32::from_rgb(0x60, 0xa5, 0xfa),
            bar_probed: Color32::from_rgb(0xfb, 0x92, 0x3c),
            bar_found: Color32::from_rgb(0x10, 0xb9, 0x81),

            node: Color32::from_rgb(0x94, 0xa3, 0xb8),
            node_visited: Color32::from_rgb(0x60, 0xa5, 0xfa),
            node_current: Color32::from_rgb(0xfa, 0xcc, 0x15),
            node_start_outline: Color32::from_rgb(0xef, 0x44, 0x44),
            edge: Color32::from_rgb(0x64, 0x74, 0x8b),
            edge_active: Color32::from_rgb(0xf9, 0x73, 0x16),
            text: Color32::WHITE,

            node_radius: 20.,
            edge_width: 2.,
            font_size: 12.,
        }
    }
}

impl Palette {
    pub fn with_node_radius(mut self, radius: f32) -> Self {
        self.node_radius = radius;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn bar_color(&self, flags: BarFlags) -> Color32 {
        if flags.found {
            self.bar_found
        } else if flags.probed {
            self.bar_probed
        } else if flags.compared {
            self.bar_compared
        } else if flags.selected {
            self.bar_selected
        } else if flags.sorted {
            self.bar_sorted
        } else {
            self.bar
        }
    }

    pub fn node_color(&self, flags: NodeFlags) -> Color32 {
        if flags.current {
            self.node_current
        } else if flags.visited {
            self.node_visited
        } else {
            self.node
        }
    }
}
