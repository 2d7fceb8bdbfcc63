mod array;
mod graph;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Step;

pub use array::{ArrayScene, BarFlags};
pub use graph::{GraphScene, NodeFlags};

/// Presented state a [`crate::Player`] mutates and the draw layer reads.
///
/// Steps a scene does not understand are ignored, so one step type can drive
/// every scene.
pub trait Scene {
    /// Applies a single step. Must leave the scene consistent on return.
    fn apply(&mut self, step: &Step);

    /// Drops highlights that only make sense while a step is on screen.
    fn clear_transient(&mut self);

    /// Result of the steps applied so far.
    fn outcome(&self) -> Outcome;

    fn narration(&self) -> &str;

    fn set_narration(&mut self, text: String);
}

/// Terminal result of a playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Sorted,
    Found(usize),
    NotFound,
    Traversed { visited: usize },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sorted => write!(f, "Sorted"),
            Outcome::Found(index) => write!(f, "Found at index {index}"),
            Outcome::NotFound => write!(f, "Not Found"),
            Outcome::Traversed { visited } => write!(f, "Visited {visited} nodes"),
        }
    }
}
