use std::time::Duration;

use instant::Instant;
use petgraph::stable_graph::NodeIndex;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    collection::{parse_target, parse_values, random_sorted_values, random_values},
    settings::{clamp_delay, clamp_usize, NODE_COUNT},
    AlgoGraph, ArrayScene, Error, GraphAlgorithm, GraphScene, PlaybackHandle, Player, Result,
    Scene, SearchAlgorithm, Settings, SortAlgorithm, Status, Steps, Summary,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Sorting,
    Searching,
    Graph,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Sorting, Page::Searching, Page::Graph];

    pub fn name(self) -> &'static str {
        match self {
            Page::Sorting => "Sorting",
            Page::Searching => "Searching",
            Page::Graph => "Graph",
        }
    }
}

/// Everything a user can ask a [`Session`] to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserAction {
    SelectPage(Page),
    SetArraySize(usize),
    GenerateArray,
    UseCustomArray(String),
    SetTarget(String),
    SelectSort(SortAlgorithm),
    SelectSearch(SearchAlgorithm),
    SelectGraph(GraphAlgorithm),
    SetStartNode(String),
    SetNodeCount(usize),
    RegenerateGraph,
    Reset,
    SetDelay(u64),
    Start,
    TogglePause,
    Cancel,
}

/// State behind the three visualizer pages.
///
/// One [`Player`] is shared by all pages, so at most one playback is active
/// at a time. Input that cannot be used is ignored and the previous state is
/// kept.
#[derive(Debug)]
pub struct Session {
    page: Page,
    settings: Settings,
    rng: StdRng,

    sort_input: Vec<i64>,
    sort_algorithm: SortAlgorithm,
    sorting: ArrayScene,

    search_input: Vec<i64>,
    search_algorithm: SearchAlgorithm,
    target: Option<i64>,
    searching: ArrayScene,

    graph: AlgoGraph,
    start: NodeIndex,
    graph_algorithm: GraphAlgorithm,
    traversal: GraphScene,

    player: Player,
    playing: Option<Page>,
    result: Option<String>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, StdRng::from_rng(&mut rand::rng()))
    }

    /// Deterministic session, same seed same arrays and graphs.
    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: Settings, rng: StdRng) -> Self {
        let settings = settings.clamped();
        let player = Player::new().with_poll(settings.playback.poll());
        let mut session = Self {
            page: Page::default(),
            settings,
            rng,
            sort_input: Vec::new(),
            sort_algorithm: SortAlgorithm::default(),
            sorting: ArrayScene::default(),
            search_input: Vec::new(),
            search_algorithm: SearchAlgorithm::default(),
            target: None,
            searching: ArrayScene::default(),
            graph: AlgoGraph::default(),
            start: NodeIndex::default(),
            graph_algorithm: GraphAlgorithm::default(),
            traversal: GraphScene::default(),
            player,
            playing: None,
            result: None,
        };
        session.generate_sort_input();
        session.generate_search_input();
        session.generate_graph();
        session
    }

    /// Applies a user action.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyRunning`] for [`UserAction::Start`] while a playback
    /// is active, [`Error::UnknownNode`] when the start node vanished from
    /// the graph.
    pub fn on_action(&mut self, action: UserAction) -> Result<()> {
        log::debug!("action {action:?} on {} page", self.page.name());

        match action {
            UserAction::SelectPage(page) => {
                self.stop();
                if self.page != page {
                    self.result = None;
                }
                self.page = page;
            }
            UserAction::SetArraySize(size) => {
                self.stop();
                self.settings.array = self.settings.array.clone().with_size(size);
                self.generate_sort_input();
            }
            UserAction::GenerateArray => {
                self.stop();
                match self.page {
                    Page::Sorting => self.generate_sort_input(),
                    Page::Searching => self.generate_search_input(),
                    Page::Graph => self.generate_graph(),
                }
            }
            UserAction::UseCustomArray(text) => {
                if self.ignored_while_running("custom array") {
                    return Ok(());
                }
                match parse_values(&text) {
                    Ok(values) => self.use_values(values),
                    Err(err) => log::debug!("keeping current array: {err}"),
                }
            }
            UserAction::SetTarget(text) => match parse_target(&text) {
                Ok(target) => self.target = Some(target),
                Err(err) => log::debug!("keeping current target: {err}"),
            },
            UserAction::SelectSort(algorithm) => {
                if !self.ignored_while_running("sort selection") {
                    self.sort_algorithm = algorithm;
                    self.reset_page(Page::Sorting);
                }
            }
            UserAction::SelectSearch(algorithm) => {
                if !self.ignored_while_running("search selection") {
                    self.search_algorithm = algorithm;
                    self.reset_page(Page::Searching);
                }
            }
            UserAction::SelectGraph(algorithm) => {
                if !self.ignored_while_running("graph algorithm selection") {
                    self.graph_algorithm = algorithm;
                    self.reset_page(Page::Graph);
                }
            }
            UserAction::SetStartNode(label) => {
                if self.ignored_while_running("start node") {
                    return Ok(());
                }
                match self.graph.node_by_label(&label) {
                    Some(idx) => {
                        self.start = idx;
                        self.reset_page(Page::Graph);
                    }
                    None => log::debug!("{}", Error::UnknownNode(label)),
                }
            }
            UserAction::SetNodeCount(count) => {
                self.stop();
                self.settings.graph.node_count = clamp_usize(count, &NODE_COUNT);
                self.generate_graph();
            }
            UserAction::RegenerateGraph => {
                self.stop();
                self.generate_graph();
            }
            UserAction::Reset => {
                if !self.ignored_while_running("reset") {
                    self.reset_page(self.page);
                }
            }
            UserAction::SetDelay(ms) => {
                let ms = clamp_delay(ms);
                let playback = &mut self.settings.playback;
                match self.page {
                    Page::Sorting => playback.sort_delay_ms = ms,
                    Page::Searching => *playback.search_delay_slot(self.search_algorithm) = ms,
                    Page::Graph => playback.graph_delay_ms = ms,
                }
            }
            UserAction::Start => self.start()?,
            UserAction::TogglePause => {
                if self.player.is_active() {
                    self.player.toggle_pause();
                }
            }
            UserAction::Cancel => self.stop(),
        }

        Ok(())
    }

    /// Advances the active playback. Returns the summary on the frame it
    /// completes.
    pub fn tick(&mut self, now: Instant) -> Option<Summary> {
        let page = self.playing?;
        let scene: &mut dyn Scene = match page {
            Page::Sorting => &mut self.sorting,
            Page::Searching => &mut self.searching,
            Page::Graph => &mut self.traversal,
        };

        let summary = self.player.update(now, scene);
        self.settle(page, summary)
    }

    /// Applies all remaining steps of the active playback at once.
    pub fn finish(&mut self) -> Option<Summary> {
        let page = self.playing?;
        self.player.resume();
        let scene: &mut dyn Scene = match page {
            Page::Sorting => &mut self.sorting,
            Page::Searching => &mut self.searching,
            Page::Graph => &mut self.traversal,
        };
        let summary = self.player.play_to_end(scene);
        self.settle(page, summary)
    }

    pub fn repaint_after(&self, now: Instant) -> Option<Duration> {
        self.playing.and(self.player.repaint_after(now))
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn status(&self) -> Status {
        self.player.status()
    }

    pub fn is_running(&self) -> bool {
        self.player.is_active()
    }

    /// Flags of the current playback, for steering it from elsewhere.
    pub fn handle(&self) -> PlaybackHandle {
        self.player.handle()
    }

    pub fn sort_algorithm(&self) -> SortAlgorithm {
        self.sort_algorithm
    }

    pub fn search_algorithm(&self) -> SearchAlgorithm {
        self.search_algorithm
    }

    pub fn graph_algorithm(&self) -> GraphAlgorithm {
        self.graph_algorithm
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn sorting_scene(&self) -> &ArrayScene {
        &self.sorting
    }

    pub fn searching_scene(&self) -> &ArrayScene {
        &self.searching
    }

    pub fn traversal_scene(&self) -> &GraphScene {
        &self.traversal
    }

    pub fn graph(&self) -> &AlgoGraph {
        &self.graph
    }

    pub fn start_node(&self) -> NodeIndex {
        self.start
    }

    pub fn start_label(&self) -> &str {
        self.graph.label(self.start)
    }

    /// Narration of the current page.
    pub fn narration(&self) -> &str {
        match self.page {
            Page::Sorting => self.sorting.narration(),
            Page::Searching => self.searching.narration(),
            Page::Graph => self.traversal.narration(),
        }
    }

    /// Result string of the last completed playback.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Delay the next start on the current page will use.
    pub fn delay(&self) -> Duration {
        let playback = &self.settings.playback;
        match self.page {
            Page::Sorting => playback.sort_delay(),
            Page::Searching => playback.search_delay(self.search_algorithm),
            Page::Graph => playback.graph_delay(),
        }
    }

    fn start(&mut self) -> Result<()> {
        if self.player.is_active() {
            log::warn!("start ignored, playback already active");
            return Err(Error::AlreadyRunning);
        }

        let page = self.page;
        let steps = match page {
            Page::Sorting => self.sort_algorithm.steps(&self.sort_input),
            Page::Searching => {
                let Some(target) = self.target else {
                    log::debug!("no search target, nothing to start");
                    return Ok(());
                };
                self.search_algorithm.steps(&self.search_input, target)
            }
            Page::Graph => self.graph_algorithm.steps(&self.graph, self.start)?,
        };

        self.reset_page(page);
        self.begin(page, steps)
    }

    fn begin(&mut self, page: Page, steps: Steps) -> Result<()> {
        log::info!(
            "{} page: starting {} with {} steps",
            page.name(),
            self.algorithm_name(page),
            steps.len()
        );
        self.player.start(steps, self.delay())?;
        self.playing = Some(page);
        Ok(())
    }

    /// Cancels the active playback right away instead of on the next tick.
    fn stop(&mut self) {
        if !self.player.is_active() {
            return;
        }
        self.player.cancel();
        self.tick(Instant::now());
    }

    fn settle(&mut self, page: Page, summary: Option<Summary>) -> Option<Summary> {
        match (summary, self.player.status()) {
            (Some(summary), _) => {
                let text = self.completion_text(page, &summary);
                self.scene_mut(page).set_narration(text);
                self.result = Some(summary.outcome.to_string());
                self.playing = None;
                Some(summary)
            }
            (None, Status::Cancelled) => {
                self.playing = None;
                None
            }
            _ => None,
        }
    }

    fn ignored_while_running(&self, what: &str) -> bool {
        let running = self.player.is_active();
        if running {
            log::debug!("{what} ignored while a playback is active");
        }
        running
    }

    fn use_values(&mut self, values: Vec<i64>) {
        match self.page {
            Page::Sorting => {
                self.sort_input = values;
                self.reset_page(Page::Sorting);
            }
            Page::Searching => {
                let mut values = values;
                values.sort_unstable();
                self.search_input = values;
                self.reset_page(Page::Searching);
            }
            Page::Graph => log::debug!("custom arrays do not apply to the graph page"),
        }
    }

    fn generate_sort_input(&mut self) {
        let array = &self.settings.array;
        self.sort_input = random_values(&mut self.rng, array.size, array.values.clone());
        self.reset_page(Page::Sorting);
    }

    fn generate_search_input(&mut self) {
        let array = &self.settings.array;
        self.search_input =
            random_sorted_values(&mut self.rng, array.search_size, array.search_values.clone());
        self.reset_page(Page::Searching);
    }

    fn generate_graph(&mut self) {
        let settings = &self.settings.graph;
        self.graph = AlgoGraph::generate(&mut self.rng, settings.node_count, &settings.layout);
        self.start = self
            .graph
            .nodes_iter()
            .next()
            .map_or_else(NodeIndex::default, |(idx, _)| idx);
        self.reset_page(Page::Graph);
    }

    fn reset_page(&mut self, page: Page) {
        match page {
            Page::Sorting => self.sorting = ArrayScene::new(self.sort_input.clone()),
            Page::Searching => self.searching = ArrayScene::new(self.search_input.clone()),
            Page::Graph => self.traversal = GraphScene::new(&self.graph, self.start),
        }
        if self.page == page {
            self.result = None;
        }
    }

    fn scene_mut(&mut self, page: Page) -> &mut dyn Scene {
        match page {
            Page::Sorting => &mut self.sorting,
            Page::Searching => &mut self.searching,
            Page::Graph => &mut self.traversal,
        }
    }

    fn algorithm_name(&self, page: Page) -> &'static str {
        match page {
            Page::Sorting => self.sort_algorithm.name(),
            Page::Searching => self.search_algorithm.name(),
            Page::Graph => self.graph_algorithm.name(),
        }
    }

    fn completion_text(&self, page: Page, summary: &Summary) -> String {
        let name = self.algorithm_name(page);
        match page {
            Page::Sorting => format!("{name} complete in {} steps.", summary.applied),
            Page::Searching => format!("{name} finished: {}.", summary.outcome),
            Page::Graph => format!(
                "{name} traversal complete! {}: {}",
                summary.outcome,
                self.traversal.visited_path()
            ),
        }
    }
}
