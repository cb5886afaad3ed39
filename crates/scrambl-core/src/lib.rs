//! # Scrambl Core
//!
//! Core library for Scrambl - passphrase-derived public-key encryption of
//! short text messages, shared as copy-pasteable text and links.
//!
//! This crate holds all key, envelope and link logic independent of any
//! user interface.
//!
//! ## Architecture
//!
//! - **words**: the 58,110-word list and uniform word sampling
//! - **crypto**: passphrases, key derivation, checksummed tagged keys
//! - **padding**: length-hiding bucket padding
//! - **envelope**: sealing and opening messages
//! - **transport**: base64 and base58 text encodings
//! - **link**: write-links and read-links
//! - **session**: per-user key pair and memoized pipelines
//! - **contacts**: read-only contact book

pub mod contacts;
pub mod crypto;
pub mod entropy;
pub mod envelope;
pub mod error;
pub mod link;
pub mod padding;
pub mod session;
pub mod transport;
pub mod words;

pub use contacts::{Contact, ContactBook};
pub use crypto::{KeyPair, PublicKey, SecretKey};
pub use entropy::{EntropySource, OsEntropy};
pub use error::{Result, ScramblError};
pub use link::{Link, ReadLink, Recipient, WriteLink, WriteLinkFormat, DEFAULT_BASE_URL};
pub use session::{Session, SessionState};
pub use words::{WordList, WORD_COUNT};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
