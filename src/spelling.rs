//! Spelling correction over a corpus of words.
//!
//! A [`Dictionary`] stores the corpus in a prefix tree with per-word
//! frequencies. Queries that are not corpus words are matched against the
//! tree with a bounded edit-distance search, and the candidates are ranked by
//! frequency.

pub mod batch;
pub mod corpus;
pub mod dictionary;
pub mod ranker;
pub mod search;
pub mod trie;

// Re-export commonly used types
pub use batch::{BatchChecker, QueryReport};
pub use corpus::{CorpusFormat, load_dictionary, read_words};
pub use dictionary::{CheckOptions, CheckResult, Dictionary};
pub use ranker::{RankedSuggestion, rank, top_k};
pub use search::{CandidateMap, EditKind, FuzzySearch, LogTrace, NoTrace, SearchTrace, TraceStep};
pub use trie::{NodeId, TrieNode, TrieStore};
