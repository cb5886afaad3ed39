//! Length-hiding message padding.
//!
//! A padded message is `u32 LE length ‖ message ‖ zero filler`. The filler
//! is sized so the finished envelope (32-byte ephemeral key, 16-byte tag,
//! padded message) lands exactly on a bucket of `48 * 2^n` bytes. 48 bytes
//! base64-encode to one 64-character line, so envelopes always fill whole
//! lines.

use crate::error::{Result, ScramblError};

/// Smallest bucket; every bucket is this times a power of two.
pub const BASE_BUCKET: usize = 48;

/// Bytes the envelope adds around the padded message (ephemeral key + tag).
pub const ENVELOPE_OVERHEAD: usize = 32 + 16;

/// Size of the little-endian length prefix.
pub const LENGTH_PREFIX: usize = 4;

/// Total fixed overhead counted against the bucket.
pub const PADDING_OVERHEAD: usize = ENVELOPE_OVERHEAD + LENGTH_PREFIX;

/// Smallest bucket that holds a message of `message_len` bytes plus overhead.
pub fn bucket_size(message_len: usize) -> Option<usize> {
    let total = message_len.checked_add(PADDING_OVERHEAD)?;
    let mut bucket = BASE_BUCKET;
    while bucket < total {
        bucket = bucket.checked_mul(2)?;
    }
    Some(bucket)
}

/// Pad a message up to its bucket.
///
/// The result is `bucket - ENVELOPE_OVERHEAD` bytes long.
///
/// # Errors
///
/// Returns `ScramblError::InvalidInput` if the length does not fit the
/// 32-bit prefix.
pub fn pad(message: &[u8]) -> Result<Vec<u8>> {
    let prefix = u32::try_from(message.len()).map_err(|_| {
        ScramblError::InvalidInput(format!("Message too long ({} bytes)", message.len()))
    })?;
    let bucket = bucket_size(message.len()).ok_or_else(|| {
        ScramblError::InvalidInput(format!("Message too long ({} bytes)", message.len()))
    })?;
    tracing::trace!(len = message.len(), bucket, "padding message");

    let mut padded = Vec::with_capacity(bucket - ENVELOPE_OVERHEAD);
    padded.extend_from_slice(&prefix.to_le_bytes());
    padded.extend_from_slice(message);
    padded.resize(bucket - ENVELOPE_OVERHEAD, 0);
    Ok(padded)
}

/// Strip padding and return the original message.
///
/// Bytes after the declared length are ignored.
///
/// # Errors
///
/// Returns `ScramblError::Unreadable` if the buffer is shorter than the
/// prefix or than the length it declares.
pub fn unpad(padded: &[u8]) -> Result<&[u8]> {
    if padded.len() < LENGTH_PREFIX {
        return Err(ScramblError::Unreadable);
    }
    let (prefix, rest) = padded.split_at(LENGTH_PREFIX);
    let mut len_bytes = [0u8; LENGTH_PREFIX];
    len_bytes.copy_from_slice(prefix);
    let len = usize::try_from(u32::from_le_bytes(len_bytes)).map_err(|_| ScramblError::Unreadable)?;
    rest.get(..len).ok_or(ScramblError::Unreadable)
}
