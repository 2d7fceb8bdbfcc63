use serde::{Deserialize, Serialize};

use crate::{Step, Steps};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortAlgorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Merge => "Merge Sort",
        }
    }

    /// Produces the steps the algorithm performs on `values`. The input is not
    /// modified; replaying the steps on a copy yields the sorted collection.
    pub fn steps(self, values: &[i64]) -> Steps {
        let mut a = values.to_vec();
        let mut out = Vec::new();

        match self {
            SortAlgorithm::Bubble => bubble(&mut a, &mut out),
            SortAlgorithm::Selection => selection(&mut a, &mut out),
            SortAlgorithm::Insertion => insertion(&mut a, &mut out),
            SortAlgorithm::Merge => merge_sort(&mut a, &mut out),
        }

        Steps::new(out)
    }
}

fn bubble(a: &mut [i64], out: &mut Vec<Step>) {
    let n = a.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            out.push(Step::Compare { i: j, j: j + 1 });
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                out.push(Step::Swap { i: j, j: j + 1 });
            }
        }
        out.push(Step::Settle { index: n - i - 1 });
    }
}

fn selection(a: &mut [i64], out: &mut Vec<Step>) {
    let n = a.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            out.push(Step::Compare { i: j, j: min_idx });
            if a[j] < a[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            a.swap(i, min_idx);
            out.push(Step::Swap { i, j: min_idx });
        }
        out.push(Step::Settle { index: i });
    }
}

fn insertion(a: &mut [i64], out: &mut Vec<Step>) {
    let n = a.len();
    for i in 1..n {
        let key = a[i];
        // slot the key will be written to
        let mut hole = i;
        while hole > 0 {
            let j = hole - 1;
            out.push(Step::Compare { i: j, j: hole });
            if a[j] <= key {
                break;
            }
            a[hole] = a[j];
            out.push(Step::Write {
                index: hole,
                value: a[j],
            });
            hole = j;
        }
        a[hole] = key;
        out.push(Step::Write {
            index: hole,
            value: key,
        });
    }

    out.extend((0..n).map(|index| Step::Settle { index }));
}

fn merge_sort(a: &mut [i64], out: &mut Vec<Step>) {
    let n = a.len();
    sort_range(a, 0, n, out);
    out.extend((0..n).map(|index| Step::Settle { index }));
}

fn sort_range(a: &mut [i64], lo: usize, hi: usize, out: &mut Vec<Step>) {
    if hi - lo <= 1 {
        return;
    }

    let mid = lo + (hi - lo) / 2;
    sort_range(a, lo, mid, out);
    sort_range(a, mid, hi, out);
    merge(a, lo, mid, hi, out);
}

fn merge(a: &mut [i64], lo: usize, mid: usize, hi: usize, out: &mut Vec<Step>) {
    let left = a[lo..mid].to_vec();
    let right = a[mid..hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        out.push(Step::Compare {
            i: lo + i,
            j: mid + j,
        });
        // ties go left, which keeps the sort stable
        let value = if left[i] <= right[j] {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        a[k] = value;
        out.push(Step::Write { index: k, value });
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        a[k] = value;
        out.push(Step::Write { index: k, value });
        k += 1;
    }
}
