//! Vocabulary extraction from the auxiliary files: the stopword list and the
//! `word,definition` dictionary.

use anyhow::{Context, Result};
use dashmap::{DashMap, DashSet};
use parking_lot::Mutex;
use std::path::Path;
use tracing::{debug, warn};

use crate::scan::{scan, Strategy};
use crate::tokenizer::{split_record, split_words};
use crate::{DictionaryMap, WordSet};

/// A dictionary line that could not be read as a record and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    pub line: usize,
    pub reason: &'static str,
}

#[derive(Debug, Default)]
pub struct Dictionary {
    pub definitions: DictionaryMap,
    /// Skipped lines, ascending by line number.
    pub malformed: Vec<MalformedLine>,
}

impl Dictionary {
    pub fn vocabulary(&self) -> WordSet {
        self.definitions.keys().cloned().collect()
    }

    pub fn definition(&self, word: &str) -> Option<&str> {
        self.definitions.get(word).map(String::as_str)
    }
}

pub fn extract_stopwords(path: &Path) -> Result<WordSet> {
    extract_stopwords_with(path, Strategy::FanOut)
}

/// Collect every whitespace-separated token of the file, lowercased.
pub fn extract_stopwords_with(path: &Path, strategy: Strategy) -> Result<WordSet> {
    let words: DashSet<String> = DashSet::new();
    let lines = scan(path, strategy, |_, line| {
        for w in split_words(line) {
            words.insert(w);
        }
    })
    .context("extracting stopwords")?;
    debug!(lines, words = words.len(), path = %path.display(), "stopwords extracted");
    Ok(words.into_iter().collect())
}

pub fn extract_dictionary(path: &Path) -> Result<Dictionary> {
    extract_dictionary_with(path, Strategy::FanOut)
}

/// Read `word,definition` records. Only the first comma separates the key;
/// the rest of the line is the definition, kept verbatim.
///
/// When two lines share a key, whichever task inserts last wins.
pub fn extract_dictionary_with(path: &Path, strategy: Strategy) -> Result<Dictionary> {
    let definitions: DashMap<String, String> = DashMap::new();
    let malformed = Mutex::new(Vec::new());
    let lines = scan(path, strategy, |line_no, line| {
        if line.trim().is_empty() {
            return;
        }
        let reason = match split_record(line) {
            Some((key, _)) if key.is_empty() => "empty word",
            Some((key, definition)) => {
                definitions.insert(key, definition.to_string());
                return;
            }
            None => "missing comma",
        };
        warn!(line = line_no, reason, path = %path.display(), "skipping dictionary line");
        malformed.lock().push(MalformedLine { line: line_no, reason });
    })
    .context("extracting dictionary")?;

    let mut malformed = malformed.into_inner();
    malformed.sort_by_key(|m| m.line);
    debug!(lines, words = definitions.len(), skipped = malformed.len(), "dictionary extracted");
    Ok(Dictionary {
        definitions: definitions.into_iter().collect(),
        malformed,
    })
}
