//! Passphrase generation and validation.
//!
//! A passphrase is [`PASSPHRASE_WORDS`] words drawn independently from the
//! [`WordList`] and joined by single spaces.
//!
//! # Limitations
//!
//! Validation only counts recognized words. It does not look at entropy,
//! order or repetition, so `"it it it it it it it"` passes when `it` is on
//! the list. Generated passphrases are the only ones with the intended
//! strength.

use crate::entropy::EntropySource;
use crate::error::{Result, ScramblError};
use crate::words::WordList;

/// Number of words in a generated passphrase, and the minimum number of
/// recognized words for a typed one.
pub const PASSPHRASE_WORDS: usize = 7;

/// Generate a fresh passphrase of [`PASSPHRASE_WORDS`] random words.
///
/// # Errors
///
/// Returns `ScramblError::EntropyUnavailable` if the source fails.
pub fn generate_passphrase(words: &WordList, source: &mut dyn EntropySource) -> Result<String> {
    let mut picked = Vec::with_capacity(PASSPHRASE_WORDS);
    for _ in 0..PASSPHRASE_WORDS {
        picked.push(words.select_word(source)?);
    }
    Ok(picked.join(" "))
}

/// Count the space-separated tokens that appear in the word list.
///
/// Whitespace inside a token (tabs, newlines) is stripped before lookup.
/// Duplicates count every time.
pub fn count_recognized_words(words: &WordList, passphrase: &str) -> usize {
    passphrase
        .split(' ')
        .map(|token| token.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|token| words.contains(token))
        .count()
}

/// Validate that a typed passphrase has enough recognized words.
///
/// # Errors
///
/// Returns `ScramblError::InvalidInput` when fewer than
/// [`PASSPHRASE_WORDS`] tokens are on the list.
pub fn validate_passphrase(words: &WordList, passphrase: &str) -> Result<()> {
    let found = count_recognized_words(words, passphrase);
    if found < PASSPHRASE_WORDS {
        tracing::debug!(found, "passphrase rejected");
        return Err(ScramblError::InvalidInput(format!(
            "Passphrase must contain at least {} listed words (found {})",
            PASSPHRASE_WORDS, found
        )));
    }
    Ok(())
}
