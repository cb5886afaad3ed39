//! Text encodings for pasting envelopes and keys.
//!
//! Envelopes travel as base64: wrapped at 64 characters for display, or
//! URL-safe and unbroken inside links. Decoding accepts either alphabet and
//! ignores whitespace. Base58 is reserved for tagged public keys.

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;

use crate::error::{Result, ScramblError};

/// Input bytes per displayed base64 line.
pub const LINE_BYTES: usize = 48;

/// Characters per displayed base64 line.
pub const LINE_CHARS: usize = 64;

fn is_lenient_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '+' | '/')
}

/// Remove all whitespace.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Map URL-safe base64 characters to the standard alphabet.
pub fn to_standard_alphabet(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '_' => '/',
            '-' => '+',
            other => other,
        })
        .collect()
}

/// Map standard base64 characters to the URL-safe alphabet.
pub fn to_url_safe_alphabet(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '/' => '_',
            '+' => '-',
            other => other,
        })
        .collect()
}

/// Encode bytes as standard base64, one line per 48 input bytes.
///
/// Every line, including the last, ends with `\n`.
pub fn encode_base64_lines(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() / 3 * 4 + bytes.len() / LINE_BYTES + 4);
    for chunk in bytes.chunks(LINE_BYTES) {
        out.push_str(&STANDARD.encode(chunk));
        out.push('\n');
    }
    out
}

/// Encode bytes as URL-safe base64 without line breaks.
pub fn encode_base64_url(bytes: &[u8]) -> String {
    URL_SAFE.encode(bytes)
}

/// Decode base64 in either alphabet, ignoring whitespace.
///
/// # Errors
///
/// Returns `ScramblError::InvalidEncoding` if the text is not base64.
pub fn decode_base64_lenient(text: &str) -> Result<Vec<u8>> {
    let normalized = to_standard_alphabet(&strip_whitespace(text));
    STANDARD.decode(normalized.as_bytes()).map_err(|e| {
        tracing::debug!(error = %e, "base64 decode failed");
        ScramblError::InvalidEncoding(e.to_string())
    })
}

/// Cheap structural check before a real decode.
///
/// Accepts when every whitespace-separated line is a multiple of 64
/// characters long and uses only base64 characters from either alphabet.
/// Padding (`=`) is never produced for envelopes and is not accepted.
pub fn is_lenient_base64(text: &str) -> bool {
    text.split_whitespace()
        .all(|line| line.len() % LINE_CHARS == 0 && line.chars().all(is_lenient_char))
}

/// Break text into lines of `width` characters, each ending with `\n`.
pub fn wrap_lines(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + text.len() / width.max(1) + 1);
    for line in chars.chunks(width.max(1)) {
        out.extend(line.iter());
        out.push('\n');
    }
    out
}

/// Encode bytes as base58 (Bitcoin alphabet).
pub fn encode_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode base58 (Bitcoin alphabet).
///
/// # Errors
///
/// Returns `ScramblError::InvalidEncoding` on characters outside the
/// alphabet.
pub fn decode_base58(text: &str) -> Result<Vec<u8>> {
    bs58::decode(text)
        .into_vec()
        .map_err(|e| ScramblError::InvalidEncoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_wrap_every_48_bytes() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(96).collect();
        let text = encode_base64_lines(&bytes);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.len() == LINE_CHARS));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_short_final_line() {
        let text = encode_base64_lines(&[1u8; 50]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "AQE=");
    }

    #[test]
    fn test_url_safe_has_no_breaks_or_standard_chars() {
        let bytes = [0xfbu8, 0xff, 0xbf].repeat(40);
        let text = encode_base64_url(&bytes);
        assert!(!text.contains('\n'));
        assert!(!text.contains('+') && !text.contains('/'));
        assert!(text.contains('-') || text.contains('_'));
    }

    #[test]
    fn test_decode_accepts_both_alphabets_and_whitespace() {
        let bytes = [0xfbu8, 0xff, 0xbf].repeat(32);
        let standard = encode_base64_lines(&bytes);
        let url = encode_base64_url(&bytes);
        assert_eq!(decode_base64_lenient(&standard).unwrap(), bytes);
        assert_eq!(decode_base64_lenient(&url).unwrap(), bytes);
        assert_eq!(decode_base64_lenient(&format!("  {}\n\t", url)).unwrap(), bytes);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_base64_lenient("not base64!"),
            Err(ScramblError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_lenient_accepts_full_lines() {
        let line = "A".repeat(64);
        assert!(is_lenient_base64(&line));
        assert!(is_lenient_base64(&format!("{}\n{}\n", line, "-_+/".repeat(32))));
        assert!(is_lenient_base64(&"a".repeat(128)));
        assert!(is_lenient_base64(""));
    }

    #[test]
    fn test_lenient_rejects_short_line() {
        assert!(!is_lenient_base64(&"A".repeat(63)));
        assert!(!is_lenient_base64(&format!("{}\n{}", "A".repeat(64), "A".repeat(63))));
    }

    #[test]
    fn test_lenient_rejects_foreign_characters() {
        let mut line = "A".repeat(63);
        line.push('!');
        assert!(!is_lenient_base64(&line));
        let mut padded = "A".repeat(62);
        padded.push_str("==");
        assert!(!is_lenient_base64(&padded));
    }

    #[test]
    fn test_wrap_lines() {
        assert_eq!(wrap_lines("abcdef", 4), "abcd\nef\n");
        assert_eq!(wrap_lines("", 4), "");
    }

    #[test]
    fn test_alphabet_mapping() {
        assert_eq!(to_url_safe_alphabet("a+b/c"), "a-b_c");
        assert_eq!(to_standard_alphabet("a-b_c"), "a+b/c");
    }

    #[test]
    fn test_base58_alphabet() {
        let text = encode_base58(&[0, 0, 1, 2, 3]);
        assert!(text.starts_with("11"));
        assert_eq!(decode_base58(&text).unwrap(), vec![0, 0, 1, 2, 3]);
        assert!(decode_base58("0OIl").is_err());
    }
}
