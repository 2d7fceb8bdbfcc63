mod algorithms;
mod collection;
mod error;
mod graph;
mod player;
mod scene;
mod scene_view;
mod session;
mod settings;
mod step;

pub mod draw;
pub mod layouts;

pub use self::algorithms::{
    final_distances, visit_order, GraphAlgorithm, SearchAlgorithm, SortAlgorithm,
};
pub use self::collection::{
    is_sorted, parse_target, parse_values, random_sorted_values, random_values,
};
pub use self::error::{Error, Result};
pub use self::graph::{node_label, AlgoGraph, EdgeData, NodeData, MAX_WEIGHT, MIN_WEIGHT};
pub use self::player::{
    PlaybackHandle, Player, Sleeper, Status, Summary, ThreadSleeper, DEFAULT_POLL,
};
pub use self::scene::{ArrayScene, BarFlags, GraphScene, NodeFlags, Outcome, Scene};
pub use self::scene_view::SceneView;
pub use self::session::{Page, Session, UserAction};
pub use self::settings::{
    Settings, SettingsArray, SettingsGraph, SettingsPlayback, ARRAY_SIZE, DELAY_MS, NODE_COUNT,
};
pub use self::step::{Step, Steps};
