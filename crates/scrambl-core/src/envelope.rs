//! Authenticated envelopes.
//!
//! An envelope is `ephemeral public key ‖ crypto_box(padded message)`,
//! sealed with Curve25519-XSalsa20-Poly1305 under an all-zero nonce.
//!
//! The fixed nonce is only sound because every [`seal`] call creates its own
//! ephemeral key pair, making each (ephemeral secret, recipient public) pair
//! unique. The ephemeral secret never leaves [`seal`] and is zeroized before
//! it returns. Do not add an API that accepts a caller-provided sender key.

use crypto_box::aead::{Aead, Nonce};
use crypto_box::{PublicKey, SalsaBox, SecretKey};
use zeroize::Zeroizing;

use crate::crypto::KEY_LENGTH;
use crate::entropy::EntropySource;
use crate::error::{Result, ScramblError};
use crate::padding::{pad, unpad};
use crate::transport::{decode_base64_lenient, encode_base64_lines};

fn zero_nonce() -> Nonce<SalsaBox> {
    Nonce::<SalsaBox>::default()
}

/// Seal a message to a recipient public key.
///
/// # Errors
///
/// Returns `ScramblError::EntropyUnavailable` if no ephemeral key can be
/// generated, or `ScramblError::InvalidInput` if the message is too long.
pub fn seal(
    plaintext: &str,
    recipient: &PublicKey,
    source: &mut dyn EntropySource,
) -> Result<Vec<u8>> {
    let mut ephemeral_bytes = Zeroizing::new([0u8; KEY_LENGTH]);
    source.fill(&mut ephemeral_bytes[..])?;
    let ephemeral_secret = SecretKey::from(*ephemeral_bytes);
    let ephemeral_public = ephemeral_secret.public_key();

    let padded = Zeroizing::new(pad(plaintext.as_bytes())?);
    let sealed = SalsaBox::new(recipient, &ephemeral_secret)
        .encrypt(&zero_nonce(), padded.as_slice())
        .map_err(|e| ScramblError::InvalidInput(format!("Encryption failed: {}", e)))?;

    let mut envelope = Vec::with_capacity(KEY_LENGTH + sealed.len());
    envelope.extend_from_slice(ephemeral_public.as_bytes());
    envelope.extend_from_slice(&sealed);
    tracing::debug!(len = envelope.len(), "sealed envelope");
    Ok(envelope)
}

/// Seal raw bytes, which must be UTF-8 text.
///
/// # Errors
///
/// Returns `ScramblError::InvalidInput` if the bytes are not UTF-8, plus
/// the errors of [`seal`].
pub fn seal_bytes(
    plaintext: &[u8],
    recipient: &PublicKey,
    source: &mut dyn EntropySource,
) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(plaintext)
        .map_err(|_| ScramblError::InvalidInput("Message is not valid UTF-8".to_string()))?;
    seal(text, recipient, source)
}

/// Open an envelope with the receiver's secret key.
///
/// # Errors
///
/// Returns `ScramblError::Unreadable` for every failure: short input,
/// authentication failure, bad padding or non-UTF-8 content.
pub fn open(envelope: &[u8], secret: &SecretKey) -> Result<String> {
    if envelope.len() < KEY_LENGTH {
        return Err(ScramblError::Unreadable);
    }
    let (sender, sealed) = envelope.split_at(KEY_LENGTH);
    let mut sender_bytes = [0u8; KEY_LENGTH];
    sender_bytes.copy_from_slice(sender);
    let sender = PublicKey::from(sender_bytes);

    let padded = Zeroizing::new(
        SalsaBox::new(&sender, secret)
            .decrypt(&zero_nonce(), sealed)
            .map_err(|_| ScramblError::Unreadable)?,
    );
    let message = unpad(&padded)?;
    String::from_utf8(message.to_vec()).map_err(|_| ScramblError::Unreadable)
}

/// Seal a message and render it as base64 lines of 64 characters.
pub fn seal_text(
    plaintext: &str,
    recipient: &PublicKey,
    source: &mut dyn EntropySource,
) -> Result<String> {
    let envelope = seal(plaintext, recipient, source)?;
    Ok(encode_base64_lines(&envelope))
}

/// Decode base64 text (either alphabet, any whitespace) and open it.
///
/// # Errors
///
/// Returns `ScramblError::Unreadable` for every failure.
pub fn open_text(text: &str, secret: &SecretKey) -> Result<String> {
    let envelope = decode_base64_lenient(text).map_err(|_| ScramblError::Unreadable)?;
    open(&envelope, secret)
}
