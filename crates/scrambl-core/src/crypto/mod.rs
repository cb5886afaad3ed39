//! Key material for scrambl.
//!
//! - **Key derivation**: SHA-512 of the passphrase seeds a Curve25519 box
//!   key pair (`crypto_box`)
//! - **Tagged keys**: public keys with a one-byte checksum, base58 encoded
//! - **Passphrases**: seven words sampled from the word list
//!
//! ## Threat Model
//!
//! We defend against:
//! - Reading of envelopes and links by anyone but the key owner
//! - Typos and truncation in copied keys
//!
//! We do NOT defend against:
//! - Weak, hand-picked passphrases (validation only counts listed words)
//! - Compromised OS / keylogger

pub mod key;
pub mod passphrase;
pub mod tagged;

pub use crypto_box::{PublicKey, SecretKey};
pub use key::{derive_keypair, derive_keypair_from_bytes, KeyPair, KEY_LENGTH};
pub use passphrase::{
    count_recognized_words, generate_passphrase, validate_passphrase, PASSPHRASE_WORDS,
};
pub use tagged::{decode_tagged_key, encode_tagged_key, is_valid_tagged_key};
