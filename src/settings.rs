use std::ops::RangeInclusive;
use std::time::Duration;

use egui::Id;
use serde::{Deserialize, Serialize};

use crate::layouts::Circular;
use crate::SearchAlgorithm;

const KEY: &str = "egui_algoviz_settings";

pub const ARRAY_SIZE: RangeInclusive<usize> = 5..=100;
pub const NODE_COUNT: RangeInclusive<usize> = 4..=12;
pub const DELAY_MS: RangeInclusive<u64> = 10..=2000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsArray {
    /// Number of bars on the sorting page, kept in [`ARRAY_SIZE`].
    pub size: usize,

    /// Value range of generated sorting input.
    pub values: RangeInclusive<i64>,

    /// The searching page always works on this many sorted values.
    pub search_size: usize,

    /// Value range of generated search input.
    pub search_values: RangeInclusive<i64>,
}

impl Default for SettingsArray {
    fn default() -> Self {
        Self {
            size: 20,
            values: 1..=100,
            search_size: 20,
            search_values: 0..=99,
        }
    }
}

impl SettingsArray {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = clamp_usize(size, &ARRAY_SIZE);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsGraph {
    /// Kept in [`NODE_COUNT`].
    pub node_count: usize,

    pub layout: Circular,
}

impl Default for SettingsGraph {
    fn default() -> Self {
        Self {
            node_count: 7,
            layout: Circular::default(),
        }
    }
}

impl SettingsGraph {
    pub fn with_node_count(mut self, count: usize) -> Self {
        self.node_count = clamp_usize(count, &NODE_COUNT);
        self
    }

    pub fn with_layout(mut self, layout: Circular) -> Self {
        self.layout = layout;
        self
    }
}

/// Delays between steps, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPlayback {
    pub sort_delay_ms: u64,
    pub linear_search_delay_ms: u64,
    pub search_delay_ms: u64,
    pub graph_delay_ms: u64,

    /// How often a paused playback checks whether it was resumed.
    pub poll_ms: u64,
}

impl Default for SettingsPlayback {
    fn default() -> Self {
        Self {
            sort_delay_ms: 200,
            linear_search_delay_ms: 300,
            search_delay_ms: 500,
            graph_delay_ms: 600,
            poll_ms: 50,
        }
    }
}

impl SettingsPlayback {
    pub fn sort_delay(&self) -> Duration {
        Duration::from_millis(self.sort_delay_ms)
    }

    pub fn search_delay(&self, algorithm: SearchAlgorithm) -> Duration {
        let ms = match algorithm {
            SearchAlgorithm::Linear => self.linear_search_delay_ms,
            _ => self.search_delay_ms,
        };
        Duration::from_millis(ms)
    }

    pub fn graph_delay(&self) -> Duration {
        Duration::from_millis(self.graph_delay_ms)
    }

    pub fn poll(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }

    /// Delay slot used by `algorithm`, for in-place updates.
    pub fn search_delay_slot(&mut self, algorithm: SearchAlgorithm) -> &mut u64 {
        match algorithm {
            SearchAlgorithm::Linear => &mut self.linear_search_delay_ms,
            _ => &mut self.search_delay_ms,
        }
    }
}

/// Everything a session can be configured with. Persisted across frames
/// and, with egui persistence enabled, across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub array: SettingsArray,
    pub graph: SettingsGraph,
    pub playback: SettingsPlayback,
}

impl Settings {
    pub fn with_array(mut self, array: SettingsArray) -> Self {
        self.array = array;
        self
    }

    pub fn with_graph(mut self, graph: SettingsGraph) -> Self {
        self.graph = graph;
        self
    }

    pub fn with_playback(mut self, playback: SettingsPlayback) -> Self {
        self.playback = playback;
        self
    }

    /// Brings every field back into its allowed range. Empty value ranges
    /// fall back to the defaults.
    pub fn clamped(mut self) -> Self {
        let defaults = SettingsArray::default();
        let array = &mut self.array;
        array.size = clamp_usize(array.size, &ARRAY_SIZE);
        array.search_size = clamp_usize(array.search_size, &ARRAY_SIZE);
        if array.values.is_empty() {
            array.values = defaults.values;
        }
        if array.search_values.is_empty() {
            array.search_values = defaults.search_values;
        }

        self.graph.node_count = clamp_usize(self.graph.node_count, &NODE_COUNT);

        let playback = &mut self.playback;
        for ms in [
            &mut playback.sort_delay_ms,
            &mut playback.linear_search_delay_ms,
            &mut playback.search_delay_ms,
            &mut playback.graph_delay_ms,
        ] {
            *ms = clamp_delay(*ms);
        }
        playback.poll_ms = playback.poll_ms.max(1);

        self
    }

    /// Persisted settings, clamped, or the defaults when none were saved.
    pub fn load(ui: &egui::Ui) -> Self {
        ui.data_mut(|data| data.get_persisted::<Settings>(Id::new(KEY)).unwrap_or_default())
            .clamped()
    }

    pub fn save(self, ui: &mut egui::Ui) {
        ui.data_mut(|data| {
            data.insert_persisted(Id::new(KEY), self);
        });
    }
}

pub fn clamp_delay(ms: u64) -> u64 {
    ms.clamp(*DELAY_MS.start(), *DELAY_MS.end())
}

pub fn clamp_usize(v: usize, range: &RangeInclusive<usize>) -> usize {
    v.clamp(*range.start(), *range.end())
}
