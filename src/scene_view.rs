use egui::{Response, Sense, Ui, Vec2, Widget};

use crate::{
    draw::{self, Palette},
    AlgoGraph, ArrayScene, GraphScene,
};

enum Target<'a> {
    Array(&'a ArrayScene),
    Graph(&'a AlgoGraph, &'a GraphScene),
}

/// Widget painting a scene into the space it is given.
///
/// ```ignore
/// ui.add(SceneView::array(session.sorting_scene()));
/// ```
pub struct SceneView<'a> {
    target: Target<'a>,
    palette: Palette,
    size: Option<Vec2>,
}

impl<'a> SceneView<'a> {
    pub fn array(scene: &'a ArrayScene) -> Self {
        Self::new(Target::Array(scene))
    }

    pub fn graph(g: &'a AlgoGraph, scene: &'a GraphScene) -> Self {
        Self::new(Target::Graph(g, scene))
    }

    fn new(target: Target<'a>) -> Self {
        Self {
            target,
            palette: Palette::default(),
            size: None,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Defaults to all available space.
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }
}

impl Widget for SceneView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = self.size.unwrap_or_else(|| ui.available_size());
        let (resp, painter) = ui.allocate_painter(size, Sense::hover());

        let prims = match self.target {
            Target::Array(scene) => draw::bars(scene, resp.rect, &self.palette),
            Target::Graph(g, scene) => draw::graph(g, scene, resp.rect, &self.palette),
        };
        draw::paint(&painter, &prims);

        resp
    }
}
