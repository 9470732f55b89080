use std::{collections::BTreeMap, fmt::Display};

use itertools::Itertools;

/// Number of clause lines seen for every spaces-per-line value. Keys are kept in ascending order
/// so the histogram can be rendered directly.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SpaceHistogram(BTreeMap<usize, u64>);

impl SpaceHistogram {
    pub fn new() -> Self {
        SpaceHistogram(BTreeMap::new())
    }

    /// Count one more line with the given number of spaces.
    pub fn record(&mut self, spaces: usize) {
        *self.0.entry(spaces).or_insert(0) += 1;
    }

    /// Total number of recorded lines.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(spaces, count)` pairs by ascending spaces.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.0.iter().map(|(&spaces, &count)| (spaces, count))
    }
}

impl Display for SpaceHistogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|(spaces, count)| format!("{}:{}", spaces, count))
                .join(" ")
        )
    }
}
