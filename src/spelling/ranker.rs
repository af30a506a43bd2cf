//! Top-K selection of fuzzy-search candidates.

use std::cmp::Ordering;

use crate::spelling::search::CandidateMap;

/// A candidate word with its corpus frequency.
///
/// Suggestions order best-first: higher frequency sorts before lower, and
/// equal frequencies fall back to ascending lexical order of the word so that
/// rankings never depend on hash iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedSuggestion {
    /// The suggested word.
    pub word: String,
    /// Frequency of the word in the corpus.
    pub frequency: u32,
}

impl RankedSuggestion {
    /// Create a new suggestion.
    pub fn new(word: String, frequency: u32) -> Self {
        RankedSuggestion { word, frequency }
    }
}

impl Ord for RankedSuggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for RankedSuggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Order every candidate best-first.
pub fn rank(candidates: &CandidateMap) -> Vec<RankedSuggestion> {
    let mut ranked: Vec<RankedSuggestion> = candidates
        .iter()
        .map(|(word, &frequency)| RankedSuggestion::new(word.clone(), frequency))
        .collect();
    ranked.sort_unstable();
    ranked
}

/// The `k` best candidates, best first.
///
/// Returns fewer than `k` words when there are fewer candidates.
pub fn top_k(candidates: &CandidateMap, k: usize) -> Vec<String> {
    if k == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let mut ranked = rank(candidates);
    ranked.truncate(k);

    ranked.into_iter().map(|suggestion| suggestion.word).collect()
}
