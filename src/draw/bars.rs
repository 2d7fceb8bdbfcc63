use egui::{Pos2, Rect};

use super::{Palette, Primitive};
use crate::ArrayScene;

pub const MIN_BAR_WIDTH: f32 = 5.;

/// Room above the tallest bar for its value label.
const LABEL_SPACE: f32 = 16.;
const GAP: f32 = 1.;

/// Lays out one bar per value along the bottom of `area`, heights relative
/// to the largest magnitude. Each bar is followed by its value label.
pub fn bars(scene: &ArrayScene, area: Rect, palette: &Palette) -> Vec<Primitive> {
    let n = scene.len();
    if n == 0 {
        return Vec::new();
    }

    let width = (area.width() / n as f32).max(MIN_BAR_WIDTH);
    let max = scene
        .values()
        .iter()
        .map(|v| v.unsigned_abs())
        .max()
        .unwrap_or(1)
        .max(1) as f32;
    let usable = (area.height() - LABEL_SPACE).max(0.);

    let mut res = Vec::with_capacity(2 * n);
    for (i, (value, flags)) in scene.values().iter().zip(scene.flags()).enumerate() {
        let height = (value.unsigned_abs() as f32 / max * usable).max(1.);
        let left = area.left() + i as f32 * width;
        let rect = Rect::from_min_max(
            Pos2::new(left + GAP, area.bottom() - height),
            Pos2::new(left + width - GAP, area.bottom()),
        );

        res.push(Primitive::Rect {
            rect,
            fill: palette.bar_color(*flags),
        });
        res.push(Primitive::Text {
            pos: Pos2::new(rect.center().x, rect.top() - LABEL_SPACE / 2.),
            text: value.to_string(),
            size: palette.font_size.min(width),
            color: palette.text,
        });
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scene, Step};

    fn rects(prims: &[Primitive]) -> Vec<Rect> {
        prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn widths_split_area() {
        let area = Rect::from_min_size(Pos2::ZERO, egui::vec2(400., 216.));
        let scene = ArrayScene::new(vec![100, 50, 25, 100]);
        let r = rects(&bars(&scene, area, &Palette::default()));
        assert_eq!(r.len(), 4);
        assert_eq!(r[1].left(), 100. + GAP);
        assert_eq!(r[0].height(), 200.);
        assert_eq!(r[1].height(), 100.);
        assert_eq!(r[2].height(), 50.);
        assert!(r.iter().all(|b| b.bottom() == 216.));
    }

    #[test]
    fn narrow_area_keeps_min_width() {
        let area = Rect::from_min_size(Pos2::ZERO, egui::vec2(100., 100.));
        let scene = ArrayScene::new(vec![1; 100]);
        let r = rects(&bars(&scene, area, &Palette::default()));
        assert_eq!(r[1].left() - r[0].left(), MIN_BAR_WIDTH);
    }

    #[test]
    fn colours_follow_flags_and_labels_follow_values() {
        let area = Rect::from_min_size(Pos2::ZERO, egui::vec2(300., 100.));
        let palette = Palette::default();
        let mut scene = ArrayScene::new(vec![5, 3, 8]);
        scene.apply(&Step::Compare { i: 0, j: 1 });
        let prims = bars(&scene, area, &palette);

        let fills: Vec<_> = prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect { fill, .. } => Some(*fill),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![palette.bar_compared, palette.bar_selected, palette.bar]);

        let labels: Vec<_> = prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["5", "3", "8"]);
    }

    #[test]
    fn empty_scene_draws_nothing() {
        let area = Rect::from_min_size(Pos2::ZERO, egui::vec2(300., 100.));
        assert!(bars(&ArrayScene::default(), area, &Palette::default()).is_empty());
    }
}
