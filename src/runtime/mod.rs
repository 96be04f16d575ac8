pub mod normalize;
pub mod tokenizer;
pub mod word_count;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

pub use normalize::{CaseFold, WordFilter};
pub use word_count::*;

/// Occurrence counts keyed by normalized word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<String, u64>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`, starting at 1.
    pub fn add(&mut self, word: String) {
        *self.counts.entry(word).or_insert(0) += 1;
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of accepted tokens, i.e. the sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries ordered by count descending, then by word.
    pub fn ranked(self) -> Vec<RankedEntry> {
        let mut entries: Vec<RankedEntry> = self
            .counts
            .into_iter()
            .map(|(word, count)| RankedEntry { word, count })
            .collect();
        entries.sort();
        entries
    }
}

impl Extend<String> for WordCounts {
    fn extend<I: IntoIterator<Item = String>>(&mut self, words: I) {
        for word in words {
            self.add(word);
        }
    }
}

/// A word and its count, as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Runtime defines the map/reduce/sort steps applied to the input
pub trait Runtime {
    /// Turn a single line of input into zero or more normalized words
    fn map(&self, line: &str) -> Vec<String>;

    /// Fold the words of one line into the running counts
    fn reduce(&self, counts: &mut WordCounts, words: Vec<String>) {
        counts.extend(words);
    }

    /// Order the final counts for output
    fn sort(&self, counts: WordCounts) -> Vec<RankedEntry> {
        counts.ranked()
    }
}
