//! Checksummed base58 public keys.
//!
//! A tagged key is `[tag] ‖ public key`, base58 (Bitcoin alphabet) encoded,
//! where `tag = SHA-512(public key)[0] & 0x7F`. The tag is not a security
//! measure; it catches typos and truncation in pasted keys.

use crypto_box::PublicKey;
use sha2::{Digest, Sha512};

use super::key::KEY_LENGTH;
use crate::error::{Result, ScramblError};
use crate::transport::{decode_base58, encode_base58};

/// Shortest possible encoding of 33 bytes that is accepted.
pub const MIN_TAGGED_LENGTH: usize = 33;

/// Longest possible encoding of 33 bytes.
pub const MAX_TAGGED_LENGTH: usize = 45;

const TAGGED_BYTES: usize = KEY_LENGTH + 1;

fn checksum(key: &[u8]) -> u8 {
    Sha512::digest(key)[0] & 0x7f
}

fn is_base58(text: &str) -> bool {
    text.bytes()
        .all(|b| b.is_ascii_alphanumeric() && !matches!(b, b'0' | b'O' | b'I' | b'l'))
}

/// Encode a public key as a tagged base58 string.
pub fn encode_tagged_key(key: &PublicKey) -> String {
    let mut tagged = [0u8; TAGGED_BYTES];
    tagged[0] = checksum(key.as_bytes());
    tagged[1..].copy_from_slice(key.as_bytes());
    encode_base58(&tagged)
}

/// Validate a tagged base58 string and return the public key it carries.
///
/// Length and alphabet are checked before any decoding is attempted.
///
/// # Errors
///
/// Returns `ScramblError::InvalidKey` on bad length, bad characters, wrong
/// decoded size or checksum mismatch.
pub fn decode_tagged_key(text: &str) -> Result<PublicKey> {
    if text.len() < MIN_TAGGED_LENGTH || text.len() > MAX_TAGGED_LENGTH {
        return Err(ScramblError::InvalidKey(format!(
            "expected {} to {} characters, got {}",
            MIN_TAGGED_LENGTH,
            MAX_TAGGED_LENGTH,
            text.len()
        )));
    }
    if !is_base58(text) {
        return Err(ScramblError::InvalidKey(
            "contains characters outside the base58 alphabet".to_string(),
        ));
    }
    let bytes = decode_base58(text).map_err(|e| ScramblError::InvalidKey(e.to_string()))?;
    if bytes.len() != TAGGED_BYTES {
        return Err(ScramblError::InvalidKey(format!(
            "expected {} decoded bytes, got {}",
            TAGGED_BYTES,
            bytes.len()
        )));
    }
    if checksum(&bytes[1..]) != bytes[0] {
        return Err(ScramblError::InvalidKey("checksum mismatch".to_string()));
    }
    let mut key = [0u8; KEY_LENGTH];
    key.copy_from_slice(&bytes[1..]);
    Ok(PublicKey::from(key))
}

/// Whether `text` is a valid tagged key.
pub fn is_valid_tagged_key(text: &str) -> bool {
    decode_tagged_key(text).is_ok()
}
