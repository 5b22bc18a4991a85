use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::error::{AcronymError, Result};

/// An immutable word list plus an O(1) membership set over the same words.
///
/// Built once per load and shared by reference across searches.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    set: HashSet<String>,
}

impl Dictionary {
    /// Build a normalized dictionary: trimmed, lowercased, letters only,
    /// deduplicated with the first occurrence kept in place.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        let mut kept = Vec::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            let word = word.to_ascii_lowercase();
            if set.insert(word.clone()) {
                kept.push(word);
            }
        }
        Self { words: kept, set }
    }

    /// Take the words exactly as given. Duplicates stay duplicated and show
    /// up as duplicate result rows.
    pub fn from_raw(words: Vec<String>) -> Self {
        let set = words.iter().cloned().collect();
        Self { words, set }
    }

    /// Load a newline-separated word list.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AcronymError::dictionary_read(path, e))?;
        let dictionary = Self::from_words(content.lines());
        debug!(
            path = %path.display(),
            words = dictionary.len(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
