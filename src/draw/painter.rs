use egui::{
    epaint::{CircleShape, RectShape},
    Align2, CornerRadius, FontId, Painter, Shape,
};

use super::Primitive;

/// Maps primitives onto egui shapes, in order.
pub fn paint(painter: &Painter, prims: &[Primitive]) {
    for prim in prims {
        match prim {
            Primitive::Rect { rect, fill } => {
                painter.add(Shape::Rect(RectShape::filled(
                    *rect,
                    CornerRadius::ZERO,
                    *fill,
                )));
            }
            Primitive::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                painter.add(CircleShape {
                    center: *center,
                    radius: *radius,
                    fill: *fill,
                    stroke: *stroke,
                });
            }
            Primitive::Line { from, to, stroke } => {
                painter.add(Shape::line_segment([*from, *to], *stroke));
            }
            Primitive::Text {
                pos,
                text,
                size,
                color,
            } => {
                painter.text(
                    *pos,
                    Align2::CENTER_CENTER,
                    text,
                    FontId::proportional(*size),
                    *color,
                );
            }
        }
    }
}
