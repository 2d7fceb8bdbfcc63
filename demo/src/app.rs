use egui::{CentralPanel, ComboBox, Context, ScrollArea, SidePanel, Slider, TopBottomPanel, Ui};
use egui_algoviz::{
    GraphAlgorithm, Page, SceneView, SearchAlgorithm, Session, Settings, SortAlgorithm, Status,
    UserAction, ARRAY_SIZE, DELAY_MS, NODE_COUNT,
};
use instant::Instant;

pub struct App {
    session: Session,
    actions: Vec<UserAction>,

    custom_array: String,
    target: String,

    settings_loaded: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: Session::new(Settings::default()),
            actions: Vec::new(),
            custom_array: String::new(),
            target: String::new(),
            settings_loaded: false,
        }
    }

    pub fn update(&mut self, ctx: &Context) {
        let now = Instant::now();
        if let Some(summary) = self.session.tick(now) {
            log::info!("{} steps, {}", summary.applied, summary.outcome);
        }

        SidePanel::left("controls")
            .default_width(260.)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| self.controls(ui));
            });

        TopBottomPanel::bottom("narration").show(ctx, |ui| self.narration(ui));

        CentralPanel::default().show(ctx, |ui| {
            if !self.settings_loaded {
                self.session = Session::new(Settings::load(ui));
                self.settings_loaded = true;
            }

            let view = match self.session.page() {
                Page::Sorting => SceneView::array(self.session.sorting_scene()),
                Page::Searching => SceneView::array(self.session.searching_scene()),
                Page::Graph => SceneView::graph(self.session.graph(), self.session.traversal_scene()),
            };
            ui.add(view);

            self.session.settings().clone().save(ui);
        });

        for action in std::mem::take(&mut self.actions) {
            if let Err(err) = self.session.on_action(action) {
                log::warn!("{err}");
            }
        }

        if let Some(after) = self.session.repaint_after(now) {
            ctx.request_repaint_after(after);
        }
    }

    fn controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            for page in Page::ALL {
                if ui
                    .selectable_label(self.session.page() == page, page.name())
                    .clicked()
                {
                    self.actions.push(UserAction::SelectPage(page));
                }
            }
        });
        ui.separator();

        match self.session.page() {
            Page::Sorting => self.sorting_controls(ui),
            Page::Searching => self.searching_controls(ui),
            Page::Graph => self.graph_controls(ui),
        }

        ui.separator();
        self.playback_controls(ui);
    }

    fn sorting_controls(&mut self, ui: &mut Ui) {
        let mut selected = self.session.sort_algorithm();
        ComboBox::from_label("Algorithm")
            .selected_text(selected.name())
            .show_ui(ui, |ui| {
                for algorithm in SortAlgorithm::ALL {
                    ui.selectable_value(&mut selected, algorithm, algorithm.name());
                }
            });
        if selected != self.session.sort_algorithm() {
            self.actions.push(UserAction::SelectSort(selected));
        }

        let mut size = self.session.settings().array.size;
        if ui
            .add(Slider::new(&mut size, ARRAY_SIZE).text("array size"))
            .changed()
        {
            self.actions.push(UserAction::SetArraySize(size));
        }

        self.array_input(ui);
    }

    fn searching_controls(&mut self, ui: &mut Ui) {
        let mut selected = self.session.search_algorithm();
        ComboBox::from_label("Algorithm")
            .selected_text(selected.name())
            .show_ui(ui, |ui| {
                for algorithm in SearchAlgorithm::ALL {
                    ui.selectable_value(&mut selected, algorithm, algorithm.name());
                }
            });
        if selected != self.session.search_algorithm() {
            self.actions.push(UserAction::SelectSearch(selected));
        }

        ui.horizontal(|ui| {
            ui.label("target");
            if ui.text_edit_singleline(&mut self.target).changed() {
                self.actions.push(UserAction::SetTarget(self.target.clone()));
            }
        });
        if let Some(target) = self.session.target() {
            ui.label(format!("searching for {target}"));
        }

        self.array_input(ui);
    }

    fn graph_controls(&mut self, ui: &mut Ui) {
        let mut selected = self.session.graph_algorithm();
        ComboBox::from_label("Algorithm")
            .selected_text(selected.name())
            .show_ui(ui, |ui| {
                for algorithm in GraphAlgorithm::ALL {
                    ui.selectable_value(&mut selected, algorithm, algorithm.name());
                }
            });
        if selected != self.session.graph_algorithm() {
            self.actions.push(UserAction::SelectGraph(selected));
        }
        ui.label(selected.description());

        let labels: Vec<String> = self
            .session
            .graph()
            .nodes_iter()
            .map(|(_, n)| n.label.clone())
            .collect();
        let mut start = self.session.start_label().to_string();
        ComboBox::from_label("Start node")
            .selected_text(start.as_str())
            .show_ui(ui, |ui| {
                for label in labels {
                    let text = label.clone();
                    ui.selectable_value(&mut start, label, text);
                }
            });
        if start != self.session.start_label() {
            self.actions.push(UserAction::SetStartNode(start));
        }

        let mut count = self.session.settings().graph.node_count;
        if ui
            .add(Slider::new(&mut count, NODE_COUNT).text("nodes"))
            .changed()
        {
            self.actions.push(UserAction::SetNodeCount(count));
        }
        if ui.button("Generate New Graph").clicked() {
            self.actions.push(UserAction::RegenerateGraph);
        }
    }

    fn array_input(&mut self, ui: &mut Ui) {
        if ui.button("Generate New Array").clicked() {
            self.actions.push(UserAction::GenerateArray);
        }
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.custom_array)
                .on_hover_text("comma separated integers");
            if ui.button("Use").clicked() {
                self.actions
                    .push(UserAction::UseCustomArray(self.custom_array.clone()));
            }
        });
    }

    fn playback_controls(&mut self, ui: &mut Ui) {
        let mut delay = self.session.delay().as_millis() as u64;
        if ui
            .add(Slider::new(&mut delay, DELAY_MS).text("delay, ms"))
            .changed()
        {
            self.actions.push(UserAction::SetDelay(delay));
        }

        ui.horizontal(|ui| {
            let running = self.session.is_running();
            if ui.add_enabled(!running, egui::Button::new("Start")).clicked() {
                self.actions.push(UserAction::Start);
            }
            let pause = match self.session.status() {
                Status::Paused => "Resume",
                _ => "Pause",
            };
            if ui.add_enabled(running, egui::Button::new(pause)).clicked() {
                self.actions.push(UserAction::TogglePause);
            }
            if ui.add_enabled(running, egui::Button::new("Cancel")).clicked() {
                self.actions.push(UserAction::Cancel);
            }
            if ui.add_enabled(!running, egui::Button::new("Reset")).clicked() {
                self.actions.push(UserAction::Reset);
            }
        });
    }

    fn narration(&self, ui: &mut Ui) {
        ui.label(self.session.narration());
        if let Some(result) = self.session.result() {
            ui.strong(result);
        }

        if self.session.page() != Page::Graph {
            return;
        }
        let scene = self.session.traversal_scene();
        if !scene.visited_order().is_empty() {
            ui.label(format!("Visited: {}", scene.visited_path()));
        }
        let table = scene.distance_table();
        if !table.is_empty() {
            ui.horizontal_wrapped(|ui| {
                for (label, distance) in table {
                    match distance {
                        Some(d) => ui.label(format!("{label}: {d}")),
                        None => ui.label(format!("{label}: ∞")),
                    };
                }
            });
        }
    }
}
