mod bars;
mod graph;
mod painter;
mod style;

use egui::{Color32, Pos2, Rect, Stroke};

pub use self::bars::bars;
pub use self::graph::graph;
pub use self::painter::paint;
pub use self::style::Palette;

/// Backend-independent drawing instruction produced from a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        rect: Rect,
        fill: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
        stroke: Stroke,
    },
    Line {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    /// Text centered on `pos`.
    Text {
        pos: Pos2,
        text: String,
        size: f32,
        color: Color32,
    },
}
