//! Error types for scrambl core operations.
//!
//! Input, validation and authentication problems are kept coarse on purpose:
//! a caller renders one neutral placeholder for all of them. Only
//! [`ScramblError::EntropyUnavailable`] is fatal.

use thiserror::Error;

/// Result type alias for scrambl operations.
pub type Result<T> = std::result::Result<T, ScramblError>;

/// Core error type for scrambl operations.
#[derive(Debug, Error)]
pub enum ScramblError {
    /// Invalid user input (passphrase, plaintext, recipient)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Word list does not have the required shape
    #[error("Invalid word list: {0}")]
    InvalidWordList(String),

    /// Tagged public key failed length, alphabet or checksum validation
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Malformed base64 transport text
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// URL does not carry a usable key or envelope
    #[error("Invalid link: {0}")]
    InvalidLink(String),

    /// Envelope could not be opened.
    ///
    /// Covers decoding, authentication, unpadding and UTF-8 failures alike so
    /// the reason is never revealed.
    #[error("Message could not be decrypted")]
    Unreadable,

    /// No cryptographically secure randomness is available
    #[error("Secure randomness unavailable: {0}")]
    EntropyUnavailable(String),

    /// Contact book could not be read
    #[error("Contacts error: {0}")]
    Contacts(String),
}

impl ScramblError {
    /// Whether the error disables the whole feature rather than one call.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ScramblError::EntropyUnavailable(_))
    }
}

impl From<std::io::Error> for ScramblError {
    fn from(err: std::io::Error) -> Self {
        ScramblError::Contacts(err.to_string())
    }
}

impl From<serde_json::Error> for ScramblError {
    fn from(err: serde_json::Error) -> Self {
        ScramblError::Contacts(err.to_string())
    }
}
