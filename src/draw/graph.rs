use egui::{Pos2, Rect, Stroke, Vec2};

use super::{Palette, Primitive};
use crate::{AlgoGraph, GraphScene};

/// Lays out edges first, then nodes on top of them. Node locations are
/// canvas coordinates offset by the top left corner of `area`.
pub fn graph(g: &AlgoGraph, scene: &GraphScene, area: Rect, palette: &Palette) -> Vec<Primitive> {
    let offset = area.min.to_vec2();
    let mut res = Vec::with_capacity(2 * g.edge_count() + 3 * g.node_count());

    for (idx, from, to, data) in g.edges_iter() {
        let (Some(a), Some(b)) = (g.node(from), g.node(to)) else {
            continue;
        };
        let (from, to) = (a.location + offset, b.location + offset);

        let stroke = if scene.current_edge() == Some(idx) {
            Stroke::new(palette.edge_width * 2., palette.edge_active)
        } else if scene.is_edge_active(idx) {
            Stroke::new(palette.edge_width, palette.edge_active)
        } else {
            Stroke::new(palette.edge_width, palette.edge)
        };
        res.push(Primitive::Line { from, to, stroke });
        res.push(Primitive::Text {
            pos: midpoint(from, to),
            text: data.weight.to_string(),
            size: palette.font_size,
            color: palette.text,
        });
    }

    for (idx, node) in g.nodes_iter() {
        let center = node.location + offset;
        let flags = scene.node_flags(idx);
        let stroke = if flags.start {
            Stroke::new(3., palette.node_start_outline)
        } else {
            Stroke::NONE
        };

        res.push(Primitive::Circle {
            center,
            radius: palette.node_radius,
            fill: palette.node_color(flags),
            stroke,
        });
        res.push(Primitive::Text {
            pos: center,
            text: node.label.clone(),
            size: palette.font_size,
            color: palette.text,
        });
        if let Some(d) = scene.distance(idx) {
            res.push(Primitive::Text {
                pos: center + Vec2::new(0., palette.node_radius + palette.font_size),
                text: format!("d={d}"),
                size: palette.font_size,
                color: palette.text,
            });
        }
    }

    res
}

fn midpoint(a: Pos2, b: Pos2) -> Pos2 {
    a + (b - a) / 2.
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphAlgorithm, Scene, Step};

    fn path() -> AlgoGraph {
        AlgoGraph::from_edges(&["A", "B", "C"], &[(0, 1, 3), (1, 2, 4)])
    }

    fn count(prims: &[Primitive], pred: impl Fn(&Primitive) -> bool) -> usize {
        prims.iter().filter(|p| pred(p)).count()
    }

    #[test]
    fn idle_graph() {
        let g = path();
        let a = g.node_by_label("A").unwrap();
        let scene = GraphScene::new(&g, a);
        let palette = Palette::default();
        let prims = graph(&g, &scene, Rect::from_min_size(Pos2::ZERO, Vec2::splat(600.)), &palette);

        assert_eq!(count(&prims, |p| matches!(p, Primitive::Line { .. })), 2);
        assert_eq!(count(&prims, |p| matches!(p, Primitive::Circle { .. })), 3);
        // two weights, three labels, no distances yet
        assert_eq!(count(&prims, |p| matches!(p, Primitive::Text { .. })), 5);

        let outlined = count(&prims, |p| {
            matches!(p, Primitive::Circle { stroke, .. } if stroke.color == palette.node_start_outline)
        });
        assert_eq!(outlined, 1);
    }

    #[test]
    fn traversed_graph_highlights_and_distances() {
        let g = path();
        let a = g.node_by_label("A").unwrap();
        let mut scene = GraphScene::new(&g, a);
        for step in &GraphAlgorithm::Dijkstra.steps(&g, a).unwrap() {
            scene.apply(step);
        }
        scene.clear_transient();

        let palette = Palette::default();
        let area = Rect::from_min_size(Pos2::new(10., 20.), Vec2::splat(600.));
        let prims = graph(&g, &scene, area, &palette);

        let active = count(&prims, |p| {
            matches!(p, Primitive::Line { stroke, .. } if stroke.color == palette.edge_active)
        });
        assert_eq!(active, 2);

        let visited = count(&prims, |p| {
            matches!(p, Primitive::Circle { fill, .. } if *fill == palette.node_visited)
        });
        assert_eq!(visited, 3);

        let distances: Vec<_> = prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } if text.starts_with("d=") => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(distances, vec!["d=0", "d=3", "d=7"]);

        let a_loc = g.node(a).unwrap().location;
        assert!(prims.iter().any(|p| matches!(
            p,
            Primitive::Circle { center, .. } if *center == a_loc + Vec2::new(10., 20.)
        )));
    }

    #[test]
    fn tentative_distances_are_not_drawn() {
        let g = AlgoGraph::from_edges(&["A", "B", "C"], &[(0, 2, 9), (0, 1, 1), (1, 2, 1)]);
        let a = g.node_by_label("A").unwrap();
        let c = g.node_by_label("C").unwrap();
        let mut scene = GraphScene::new(&g, a);
        scene.apply(&Step::Visit {
            node: a,
            distance: Some(0),
        });
        scene.apply(&Step::Relax {
            node: c,
            via: a,
            distance: 9,
        });
        assert!(!scene.node_flags(c).visited);
        assert_eq!(scene.tentative_distance(c), Some(9));

        let prims = graph(&g, &scene, Rect::from_min_size(Pos2::ZERO, Vec2::splat(600.)), &Palette::default());
        let distances: Vec<_> = prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } if text.starts_with("d=") => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(distances, vec!["d=0"]);
    }
}
