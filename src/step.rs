use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use serde::{Deserialize, Serialize};

/// One atomic algorithmic event. Steps carry data only; what a step looks like
/// on screen is decided by the [`crate::Scene`] that applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Two slots are compared.
    Compare { i: usize, j: usize },
    /// Two slots exchange their values.
    Swap { i: usize, j: usize },
    /// A value is committed into a slot.
    Write { index: usize, value: i64 },
    /// The slot holds its final sorted value.
    Settle { index: usize },

    /// A search examines a slot. Bounds are present for the algorithms that
    /// narrow a range.
    Probe {
        index: usize,
        low: Option<usize>,
        high: Option<usize>,
    },
    Found { index: usize },
    NotFound,

    /// A node is visited. Dijkstra finalizes the node with its distance.
    Visit {
        node: NodeIndex,
        distance: Option<u32>,
    },
    ExploreEdge {
        from: NodeIndex,
        to: NodeIndex,
        edge: EdgeIndex,
    },
    /// A shorter tentative distance to `node` was found through `via`.
    Relax {
        node: NodeIndex,
        via: NodeIndex,
        distance: u32,
    },
}

impl Step {
    pub fn is_comparison(&self) -> bool {
        matches!(self, Step::Compare { .. })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Found { .. } | Step::NotFound)
    }
}

/// Finite, restartable step sequence produced by an algorithm.
///
/// Iterating twice yields the same steps in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Steps(Vec<Step>);

impl Steps {
    pub fn new(steps: Vec<Step>) -> Self {
        Self(steps)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.0.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&Step> {
        self.0.get(idx)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.0.last()
    }

    /// Number of key comparisons the algorithm performed.
    pub fn comparisons(&self) -> usize {
        self.0.iter().filter(|s| s.is_comparison()).count()
    }

    pub fn as_slice(&self) -> &[Step] {
        &self.0
    }
}

impl From<Vec<Step>> for Steps {
    fn from(steps: Vec<Step>) -> Self {
        Self(steps)
    }
}

impl<'a> IntoIterator for &'a Steps {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Steps {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_compare() {
        let step = Step::Compare { i: 0, j: 1 };
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"Compare":{"i":0,"j":1}}"#);

        let step: Step = serde_json::from_str(&json).unwrap();
        assert_eq!(step, Step::Compare { i: 0, j: 1 });
    }

    #[test]
    fn contract_not_found() {
        let json = serde_json::to_string(&Step::NotFound).unwrap();
        assert_eq!(json, r#""NotFound""#);
    }

    #[test]
    fn contract_probe() {
        let step = Step::Probe {
            index: 2,
            low: Some(0),
            high: None,
        };
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"Probe":{"index":2,"low":0,"high":null}}"#);
    }

    #[test]
    fn steps_are_restartable() {
        let steps = Steps::new(vec![
            Step::Compare { i: 0, j: 1 },
            Step::Swap { i: 0, j: 1 },
            Step::Settle { index: 1 },
        ]);
        let first: Vec<_> = steps.iter().copied().collect();
        let second: Vec<_> = steps.iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(steps.comparisons(), 1);
    }
}
