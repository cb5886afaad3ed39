//! Deterministic key pair derivation.
//!
//! The secret key is the first 32 bytes of SHA-512 over the UTF-8
//! passphrase; the public key follows from the Curve25519 base point
//! multiplication done by `crypto_box`. No salt and no randomness are
//! involved, so the same passphrase yields the same key pair on any device.

use crypto_box::{PublicKey, SecretKey};
use sha2::{Digest, Sha512};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Result, ScramblError};

/// Length of public and secret keys in bytes.
pub const KEY_LENGTH: usize = 32;

/// A box key pair derived from a passphrase.
///
/// The secret half is zeroized when dropped (by `crypto_box::SecretKey`).
#[derive(Clone)]
pub struct KeyPair {
    public: PublicKey,
    secret: SecretKey,
}

impl KeyPair {
    pub(crate) fn from_secret_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        let secret = SecretKey::from(bytes);
        let public = secret.public_key();
        Self { public, secret }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Get a reference to the secret key.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for opening envelopes.
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        // The public key is a function of the secret, comparing it suffices.
        self.public == other.public
    }
}

impl Eq for KeyPair {}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public.as_bytes())
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Derive a key pair from a passphrase.
///
/// # Examples
///
/// ```
/// use scrambl_core::crypto::derive_keypair;
///
/// let a = derive_keypair("alpha bravo charlie delta echo foxtrot golf");
/// let b = derive_keypair("alpha bravo charlie delta echo foxtrot golf");
/// assert_eq!(a, b);
/// ```
pub fn derive_keypair(passphrase: &str) -> KeyPair {
    let mut digest = Sha512::digest(passphrase.as_bytes());
    let mut secret = Zeroizing::new([0u8; KEY_LENGTH]);
    secret.copy_from_slice(&digest[..KEY_LENGTH]);
    digest.as_mut_slice().zeroize();
    KeyPair::from_secret_bytes(*secret)
}

/// Derive a key pair from raw passphrase bytes.
///
/// # Errors
///
/// Returns `ScramblError::InvalidInput` if the bytes are not UTF-8.
pub fn derive_keypair_from_bytes(passphrase: &[u8]) -> Result<KeyPair> {
    let text = std::str::from_utf8(passphrase)
        .map_err(|_| ScramblError::InvalidInput("Passphrase is not valid UTF-8".to_string()))?;
    Ok(derive_keypair(text))
}
