use serde::{Deserialize, Serialize};

use crate::{Step, Steps};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    #[default]
    Linear,
    Binary,
    Jump,
    Exponential,
    Interpolation,
    Fibonacci,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 6] = [
        SearchAlgorithm::Linear,
        SearchAlgorithm::Binary,
        SearchAlgorithm::Jump,
        SearchAlgorithm::Exponential,
        SearchAlgorithm::Interpolation,
        SearchAlgorithm::Fibonacci,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "Linear Search",
            SearchAlgorithm::Binary => "Binary Search",
            SearchAlgorithm::Jump => "Jump Search",
            SearchAlgorithm::Exponential => "Exponential Search",
            SearchAlgorithm::Interpolation => "Interpolation Search",
            SearchAlgorithm::Fibonacci => "Fibonacci Search",
        }
    }

    /// Only linear search works on unordered input.
    pub fn requires_sorted_input(self) -> bool {
        !matches!(self, SearchAlgorithm::Linear)
    }

    /// Produces one [`Step::Probe`] per examined slot followed by exactly one
    /// [`Step::Found`] or [`Step::NotFound`].
    pub fn steps(self, values: &[i64], target: i64) -> Steps {
        let mut out = Vec::new();

        let found = match self {
            SearchAlgorithm::Linear => linear(values, target, &mut out),
            SearchAlgorithm::Binary => {
                binary_in_range(values, target, 0, values.len(), &mut out)
            }
            SearchAlgorithm::Jump => jump(values, target, &mut out),
            SearchAlgorithm::Exponential => exponential(values, target, &mut out),
            SearchAlgorithm::Interpolation => interpolation(values, target, &mut out),
            SearchAlgorithm::Fibonacci => fibonacci(values, target, &mut out),
        };

        out.push(match found {
            Some(index) => Step::Found { index },
            None => Step::NotFound,
        });

        Steps::new(out)
    }
}

fn probe(out: &mut Vec<Step>, index: usize, low: usize, high: usize) {
    out.push(Step::Probe {
        index,
        low: Some(low),
        high: Some(high),
    });
}

fn linear(a: &[i64], target: i64, out: &mut Vec<Step>) -> Option<usize> {
    for (index, value) in a.iter().enumerate() {
        out.push(Step::Probe {
            index,
            low: None,
            high: None,
        });
        if *value == target {
            return Some(index);
        }
    }
    None
}

/// Binary search over the half open range `[lo, hi)`.
fn binary_in_range(
    a: &[i64],
    target: i64,
    mut lo: usize,
    mut hi: usize,
    out: &mut Vec<Step>,
) -> Option<usize> {
    while lo < hi {
        let mid = lo + (hi - lo - 1) / 2;
        probe(out, mid, lo, hi - 1);
        match a[mid].cmp(&target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => lo = mid + 1,
            std::cmp::Ordering::Greater => hi = mid,
        }
    }
    None
}

fn jump(a: &[i64], target: i64, out: &mut Vec<Step>) -> Option<usize> {
    let n = a.len();
    if n == 0 {
        return None;
    }

    let block = ((n as f64).sqrt() as usize).max(1);
    let mut prev = 0;
    let mut curr = block.min(n) - 1;
    probe(out, curr, prev, curr);

    while a[curr] < target {
        prev = curr + 1;
        if prev >= n {
            return None;
        }
        curr = (curr + block).min(n - 1);
        probe(out, curr, prev, curr);
    }

    for i in prev..=curr {
        probe(out, i, prev, curr);
        if a[i] == target {
            return Some(i);
        }
        if a[i] > target {
            break;
        }
    }
    None
}

fn exponential(a: &[i64], target: i64, out: &mut Vec<Step>) -> Option<usize> {
    let n = a.len();
    if n == 0 {
        return None;
    }

    probe(out, 0, 0, 0);
    if a[0] == target {
        return Some(0);
    }

    let mut bound = 1;
    while bound < n {
        probe(out, bound, bound / 2, bound);
        if a[bound] > target {
            break;
        }
        bound *= 2;
    }

    binary_in_range(a, target, bound / 2, (bound + 1).min(n), out)
}

fn interpolation(a: &[i64], target: i64, out: &mut Vec<Step>) -> Option<usize> {
    if a.is_empty() {
        return None;
    }

    let (mut low, mut high) = (0, a.len() - 1);
    while low <= high && target >= a[low] && target <= a[high] {
        if a[high] == a[low] {
            // zero width value range, the probe formula would divide by zero
            probe(out, low, low, high);
            return (a[low] == target).then_some(low);
        }

        let span = i128::from(a[high]) - i128::from(a[low]);
        let offset = (i128::from(target) - i128::from(a[low])) * (high - low) as i128 / span;
        let pos = low + offset as usize;
        probe(out, pos, low, high);

        match a[pos].cmp(&target) {
            std::cmp::Ordering::Equal => return Some(pos),
            std::cmp::Ordering::Less => low = pos + 1,
            std::cmp::Ordering::Greater => {
                if pos == 0 {
                    return None;
                }
                high = pos - 1;
            }
        }
    }
    None
}

fn fibonacci(a: &[i64], target: i64, out: &mut Vec<Step>) -> Option<usize> {
    let n = a.len();
    if n == 0 {
        return None;
    }

    let (mut fib2, mut fib1) = (0usize, 1usize);
    let mut fib = fib2 + fib1;
    while fib < n {
        fib2 = fib1;
        fib1 = fib;
        fib = fib2 + fib1;
    }

    // index of the last slot known to hold a value below the target
    let mut offset: Option<usize> = None;
    let start = |offset: Option<usize>| offset.map_or(0, |o| o + 1);

    while fib > 1 {
        let low = start(offset);
        let i = (low + fib2).saturating_sub(1).min(n - 1);
        probe(out, i, low.min(i), (low + fib - 1).min(n - 1));

        match a[i].cmp(&target) {
            std::cmp::Ordering::Less => {
                fib = fib1;
                fib1 = fib2;
                fib2 = fib - fib1;
                offset = Some(i);
            }
            std::cmp::Ordering::Greater => {
                fib = fib2;
                fib1 -= fib2;
                fib2 = fib - fib1;
            }
            std::cmp::Ordering::Equal => return Some(i),
        }
    }

    let last = start(offset);
    if fib1 == 1 && last < n {
        probe(out, last, last, last);
        if a[last] == target {
            return Some(last);
        }
    }
    None
}
