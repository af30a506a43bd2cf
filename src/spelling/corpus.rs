//! Reading corpus words from files and streams.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Result, SpellError};
use crate::spelling::dictionary::Dictionary;

/// How a corpus is split into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusFormat {
    /// One word per line, taken as written. Blank lines are skipped.
    #[default]
    Lines,
    /// Running text, split on Unicode word boundaries and lowercased.
    Text,
}

/// Collect the words of a corpus in order, one entry per occurrence.
///
/// A corpus without a single word is rejected.
pub fn read_words<R: BufRead>(reader: R, format: CorpusFormat) -> Result<Vec<String>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        match format {
            CorpusFormat::Lines => {
                let word = line.trim();
                if !word.is_empty() {
                    words.push(word.to_string());
                }
            }
            CorpusFormat::Text => {
                words.extend(line.unicode_words().map(|word| word.to_lowercase()));
            }
        }
    }

    if words.is_empty() {
        return Err(SpellError::corpus("corpus contains no words"));
    }

    Ok(words)
}

/// Build a dictionary from the corpus file at `path`.
pub fn load_dictionary<P: AsRef<Path>>(path: P, format: CorpusFormat) -> Result<Dictionary> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let words = read_words(BufReader::new(file), format)?;

    let dictionary = Dictionary::build(&words);
    info!(
        "Loaded {} words ({} distinct) from {}",
        words.len(),
        dictionary.store().word_count(),
        path.display()
    );

    Ok(dictionary)
}
