//! Passphrase word list.
//!
//! The list is an external, read-only collaborator. Its length is a hard
//! precondition of the sampler: with exactly 58,110 entries a 16-bit draw is
//! accepted with probability 58110/65536, and any other length would skew
//! the distribution, so [`WordList`] refuses to exist with another length.

use std::collections::HashSet;
use std::path::Path;

use crate::entropy::{next_u16, EntropySource};
use crate::error::{Result, ScramblError};

/// Required number of entries in the word list.
pub const WORD_COUNT: usize = 58_110;

/// A validated list of exactly [`WORD_COUNT`] unique words.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl WordList {
    /// Build a list from owned words.
    ///
    /// # Errors
    ///
    /// Returns `ScramblError::InvalidWordList` if the list does not contain
    /// exactly [`WORD_COUNT`] unique, non-empty words.
    pub fn new(words: Vec<String>) -> Result<Self> {
        if words.len() != WORD_COUNT {
            return Err(ScramblError::InvalidWordList(format!(
                "expected {} words, found {}",
                WORD_COUNT,
                words.len()
            )));
        }
        if words.iter().any(|w| w.is_empty() || w.contains(char::is_whitespace)) {
            return Err(ScramblError::InvalidWordList(
                "words must be non-empty and contain no whitespace".to_string(),
            ));
        }
        let lookup: HashSet<String> = words.iter().cloned().collect();
        if lookup.len() != words.len() {
            return Err(ScramblError::InvalidWordList(format!(
                "expected {} unique words, found {}",
                WORD_COUNT,
                lookup.len()
            )));
        }
        Ok(Self { words, lookup })
    }

    /// Parse a newline-separated list. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self::new(words)
    }

    /// Load a newline-separated list from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ScramblError::InvalidWordList(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let list = Self::parse(&text)?;
        tracing::debug!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Pick one word uniformly at random by rejection sampling.
    ///
    /// Draws 16-bit values until one falls below the list length.
    pub fn select_word(&self, source: &mut dyn EntropySource) -> Result<&str> {
        if self.words.len() != WORD_COUNT {
            return Err(ScramblError::InvalidWordList(format!(
                "expected {} words, found {}",
                WORD_COUNT,
                self.words.len()
            )));
        }
        loop {
            let draw = usize::from(next_u16(source)?);
            if let Some(word) = self.words.get(draw) {
                return Ok(word);
            }
            tracing::trace!(draw, "rejected out-of-range draw");
        }
    }
}
