use std::ops::RangeInclusive;

use rand::Rng;

use crate::{Error, Result};

/// Generates `len` values uniformly from `range`.
pub fn random_values<R: Rng>(
    rng: &mut R,
    len: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(range.clone())).collect()
}

/// Same as [`random_values`] but sorted ascending, ready for the searches that
/// need ordered input.
pub fn random_sorted_values<R: Rng>(
    rng: &mut R,
    len: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    let mut values = random_values(rng, len, range);
    values.sort_unstable();
    values
}

/// Parses a comma separated list of integers. Tokens that are not integers are
/// dropped; an input without a single integer is rejected.
pub fn parse_values(text: &str) -> Result<Vec<i64>> {
    let values: Vec<i64> = text
        .split(',')
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .collect();

    if values.is_empty() {
        return Err(Error::InvalidInput(text.to_string()));
    }

    Ok(values)
}

pub fn parse_target(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidInput(text.to_string()))
}

pub fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
