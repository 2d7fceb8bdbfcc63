use serde::{Deserialize, Serialize};

use super::{Outcome, Scene};
use crate::Step;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarFlags {
    /// Left side of the current comparison or a slot being written.
    pub compared: bool,
    /// Right side of the current comparison, e.g. the running minimum.
    pub selected: bool,
    pub sorted: bool,
    pub probed: bool,
    pub found: bool,
}

impl BarFlags {
    fn clear_transient(&mut self) {
        self.compared = false;
        self.selected = false;
        self.probed = false;
    }
}

/// Bars of a sorting or searching run.
///
/// Sorts that shift values through `Write` steps leave a duplicate on screen
/// until the held value is written back. When a run stops in that window,
/// [`Scene::clear_transient`] puts the input back so the bars always show a
/// permutation of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArrayScene {
    values: Vec<i64>,
    #[serde(skip)]
    origin: Vec<i64>,
    flags: Vec<BarFlags>,
    bounds: Option<(usize, usize)>,
    verdict: Option<Outcome>,
    narration: String,
}

impl ArrayScene {
    pub fn new(values: Vec<i64>) -> Self {
        let flags = vec![BarFlags::default(); values.len()];
        Self {
            origin: values.clone(),
            values,
            flags,
            ..Default::default()
        }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn flags(&self) -> &[BarFlags] {
        &self.flags
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current search bounds, inclusive.
    pub fn bounds(&self) -> Option<(usize, usize)> {
        self.bounds
    }

    /// `Found at index N` / `Not Found` once a search finished.
    pub fn result(&self) -> Option<String> {
        self.verdict.map(|v| v.to_string())
    }

    fn value(&self, idx: usize) -> String {
        self.values
            .get(idx)
            .map_or_else(|| "?".to_string(), ToString::to_string)
    }

    fn clear_all_transient(&mut self) {
        self.flags.iter_mut().for_each(BarFlags::clear_transient);
    }

    fn is_permutation_of_origin(&self) -> bool {
        let mut current = self.values.clone();
        let mut origin = self.origin.clone();
        current.sort_unstable();
        origin.sort_unstable();
        current == origin
    }
}

impl Scene for ArrayScene {
    fn apply(&mut self, step: &Step) {
        let n = self.values.len();
        match *step {
            Step::Compare { i, j } if i < n && j < n => {
                self.clear_all_transient();
                self.flags[i].compared = true;
                self.flags[j].selected = true;
                self.narration = format!(
                    "Comparing index {i} ({}) with index {j} ({})",
                    self.values[i], self.values[j]
                );
            }
            Step::Swap { i, j } if i < n && j < n => {
                self.values.swap(i, j);
                self.narration = format!(
                    "Swapping index {i} and index {j}, now {} and {}",
                    self.values[i], self.values[j]
                );
            }
            Step::Write { index, value } if index < n => {
                self.values[index] = value;
                self.flags[index].compared = true;
                self.narration = format!("Writing {value} to index {index}");
            }
            Step::Settle { index } if index < n => {
                self.clear_all_transient();
                self.flags[index].sorted = true;
                self.narration = format!("Index {index} holds its final value {}", self.values[index]);
            }
            Step::Probe { index, low, high } if index < n => {
                self.clear_all_transient();
                self.flags[index].probed = true;
                self.narration = match (low, high) {
                    (Some(low), Some(high)) => {
                        self.bounds = Some((low, high));
                        format!(
                            "Checking index {index} (low = {low}, high = {high}), value: {}",
                            self.value(index)
                        )
                    }
                    _ => format!("Checking index {index}, value: {}", self.value(index)),
                };
            }
            Step::Found { index } if index < n => {
                self.clear_all_transient();
                self.flags[index].found = true;
                self.verdict = Some(Outcome::Found(index));
                self.narration = format!("Target found at index {index}.");
            }
            Step::NotFound => {
                self.clear_all_transient();
                self.verdict = Some(Outcome::NotFound);
                self.narration = "Target not found.".to_string();
            }
            _ => {}
        }
    }

    fn clear_transient(&mut self) {
        self.clear_all_transient();
        self.bounds = None;

        if self.origin.len() == self.values.len() && !self.is_permutation_of_origin() {
            log::debug!("stopped mid write, restoring input");
            self.values.clone_from(&self.origin);
            for f in &mut self.flags {
                f.sorted = false;
            }
        }
    }

    fn outcome(&self) -> Outcome {
        self.verdict.unwrap_or(Outcome::Sorted)
    }

    fn narration(&self) -> &str {
        &self.narration
    }

    fn set_narration(&mut self, text: String) {
        self.narration = text;
    }
}
