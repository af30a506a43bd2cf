//! # spellcorrect
//!
//! A trie-backed spelling correction engine.
//!
//! ## Features
//!
//! - Prefix-tree corpus storage with per-word frequencies
//! - Bounded edit-distance search (insertion, deletion, transposition, substitution)
//! - Frequency-ranked suggestions with deterministic tie-breaking
//! - Ordered parallel batch checking
//!
//! ```
//! use spellcorrect::spelling::{CheckResult, Dictionary};
//!
//! let dictionary = Dictionary::build(["hello", "word", "world", "word"]);
//! assert_eq!(dictionary.check("word", 2, 1), CheckResult::Correct);
//! assert_eq!(
//!     dictionary.check("worldd", 2, 1),
//!     CheckResult::Misspelled(vec!["word".to_string()])
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
