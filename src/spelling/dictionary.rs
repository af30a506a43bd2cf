//! Dictionary facade: exact membership and ranked corrections.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SpellConfig;
use crate::error::{Result, SpellError};
use crate::spelling::ranker::top_k;
use crate::spelling::search::{CandidateMap, FuzzySearch, NoTrace, SearchTrace};
use crate::spelling::trie::TrieStore;

/// Outcome of checking one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "suggestions", rename_all = "snake_case")]
pub enum CheckResult {
    /// The query is a corpus word.
    Correct,
    /// The query is not a corpus word; best corrections first, possibly none.
    Misspelled(Vec<String>),
}

impl CheckResult {
    /// Whether the query was found as a word.
    pub fn is_correct(&self) -> bool {
        matches!(self, CheckResult::Correct)
    }

    /// Suggested corrections; empty for a correct query.
    pub fn suggestions(&self) -> &[String] {
        match self {
            CheckResult::Correct => &[],
            CheckResult::Misspelled(suggestions) => suggestions,
        }
    }
}

/// Validated per-query limits.
///
/// This is where caller input is checked; the dictionary itself trusts the
/// values it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    max_edits: usize,
    max_suggestions: usize,
}

impl CheckOptions {
    /// Accept `max_edits` only up to `ceiling`.
    pub fn new(max_edits: usize, max_suggestions: usize, ceiling: usize) -> Result<Self> {
        if max_edits > ceiling {
            return Err(SpellError::invalid_argument(format!(
                "max_edits {max_edits} exceeds the allowed maximum of {ceiling}"
            )));
        }
        Ok(CheckOptions {
            max_edits,
            max_suggestions,
        })
    }

    /// Convert signed limits coming from an outer layer, rejecting negatives.
    pub fn from_signed(max_edits: i64, max_suggestions: i64, ceiling: usize) -> Result<Self> {
        let max_edits = usize::try_from(max_edits).map_err(|_| {
            SpellError::invalid_argument(format!("max_edits must not be negative, got {max_edits}"))
        })?;
        let max_suggestions = usize::try_from(max_suggestions).map_err(|_| {
            SpellError::invalid_argument(format!(
                "max_suggestions must not be negative, got {max_suggestions}"
            ))
        })?;
        Self::new(max_edits, max_suggestions, ceiling)
    }

    /// Limits taken from a configuration.
    pub fn from_config(config: &SpellConfig) -> Result<Self> {
        Self::new(
            config.max_edits,
            config.max_suggestions,
            config.max_edit_ceiling,
        )
    }

    /// Edit budget per query.
    pub fn max_edits(&self) -> usize {
        self.max_edits
    }

    /// Suggestions per misspelled query.
    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }
}

/// A read-only word list answering spelling queries.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    store: TrieStore,
}

impl Dictionary {
    /// Build a dictionary from already-normalized words, one entry per
    /// occurrence.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let store: TrieStore = words.into_iter().collect();
        debug!(
            "Built dictionary: {} distinct words, {} nodes",
            store.word_count(),
            store.node_count()
        );
        Dictionary { store }
    }

    /// The underlying prefix tree.
    pub fn store(&self) -> &TrieStore {
        &self.store
    }

    /// Whether `word` is a corpus word.
    pub fn contains(&self, word: &str) -> bool {
        self.store
            .lookup_exact(word)
            .is_some_and(|node| self.store.is_word(node))
    }

    /// Corpus frequency of `word`.
    pub fn frequency(&self, word: &str) -> u32 {
        self.store.frequency(word)
    }

    /// Every word within `max_edits` of `query`, with frequencies.
    pub fn suggest_all(&self, query: &str, max_edits: usize) -> CandidateMap {
        FuzzySearch::new(&self.store).candidates(query, max_edits)
    }

    /// Check `query`, proposing up to `max_suggestions` corrections within
    /// `max_edits` edits when it is not a word.
    pub fn check(&self, query: &str, max_edits: usize, max_suggestions: usize) -> CheckResult {
        self.check_traced(query, max_edits, max_suggestions, &mut NoTrace)
    }

    /// Check `query` with validated limits.
    pub fn check_with(&self, query: &str, options: &CheckOptions) -> CheckResult {
        self.check(query, options.max_edits, options.max_suggestions)
    }

    /// Same as [`check`](Self::check), reporting search steps to `trace`.
    pub fn check_traced(
        &self,
        query: &str,
        max_edits: usize,
        max_suggestions: usize,
        trace: &mut dyn SearchTrace,
    ) -> CheckResult {
        if self.contains(query) {
            return CheckResult::Correct;
        }

        let candidates =
            FuzzySearch::new(&self.store).candidates_traced(query, max_edits, trace);
        debug!(
            "{:?}: {} candidates within {} edits",
            query,
            candidates.len(),
            max_edits
        );

        CheckResult::Misspelled(top_k(&candidates, max_suggestions))
    }
}
