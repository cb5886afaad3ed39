//! Per-user session state.
//!
//! A [`Session`] owns the derived key pair and one size-1 memo per pipeline
//! (encrypt, decrypt). Input events that repeat the previous input get the
//! previous output back instead of a new envelope. Nothing here is shared
//! between sessions.
//!
//! A session whose entropy source fails is disabled as a whole: every
//! operation reports [`ScramblError::EntropyUnavailable`] from then on.

use crate::crypto::{
    decode_tagged_key, derive_keypair, encode_tagged_key, generate_passphrase,
    validate_passphrase, KeyPair, KEY_LENGTH,
};
use crate::entropy::{EntropySource, OsEntropy};
use crate::envelope::{open_text, seal_text};
use crate::error::{Result, ScramblError};
use crate::link::{write_link, Recipient};
use crate::transport::{is_lenient_base64, strip_whitespace};
use crate::words::WordList;

/// Remembers the single most recent input/output pair.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        match &self.entry {
            Some((stored, value)) if stored == key => Some(value),
            _ => None,
        }
    }

    /// Replace whatever was remembered.
    pub fn store(&mut self, key: K, value: V) {
        self.entry = Some((key, value));
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// Return the remembered value for `key`, or compute and remember it.
    ///
    /// Failures are not remembered.
    pub fn get_or_try_insert_with<F>(&mut self, key: K, compute: F) -> Result<V>
    where
        F: FnOnce(&K) -> Result<V>,
    {
        if let Some(value) = self.get(&key) {
            tracing::trace!("memo hit");
            return Ok(value.clone());
        }
        let value = compute(&key)?;
        self.store(key, value.clone());
        Ok(value)
    }
}

/// Whether secure randomness was available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Enabled,
    Disabled(String),
}

type EncryptInput = ([u8; KEY_LENGTH], String);

/// One user's keys and memos.
pub struct Session<E: EntropySource = OsEntropy> {
    entropy: E,
    state: SessionState,
    keypair: Option<KeyPair>,
    encrypt_memo: Memo<EncryptInput, String>,
    decrypt_memo: Memo<String, String>,
}

impl Session<OsEntropy> {
    /// Start a session backed by the OS random source.
    pub fn start() -> Self {
        Self::with_entropy(OsEntropy)
    }
}

impl<E: EntropySource> Session<E> {
    /// Start a session, probing the entropy source once.
    pub fn with_entropy(mut entropy: E) -> Self {
        let state = match entropy.probe() {
            Ok(()) => SessionState::Enabled,
            Err(err) => {
                tracing::warn!(error = %err, "secure randomness unavailable, session disabled");
                SessionState::Disabled(err.to_string())
            }
        };
        Self {
            entropy,
            state,
            keypair: None,
            encrypt_memo: Memo::new(),
            decrypt_memo: Memo::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn ensure_enabled(&self) -> Result<()> {
        match &self.state {
            SessionState::Enabled => Ok(()),
            SessionState::Disabled(reason) => Err(ScramblError::EntropyUnavailable(reason.clone())),
        }
    }

    fn record<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            if err.is_fatal() {
                tracing::warn!(error = %err, "disabling session");
                self.state = SessionState::Disabled(err.to_string());
            }
        }
        result
    }

    /// Generate a fresh passphrase.
    pub fn generate_passphrase(&mut self, words: &WordList) -> Result<String> {
        self.ensure_enabled()?;
        let result = generate_passphrase(words, &mut self.entropy);
        self.record(result)
    }

    /// Validate a passphrase and derive this session's key pair from it.
    ///
    /// Replacing the key pair forgets the previous decryption.
    pub fn unlock(&mut self, words: &WordList, passphrase: &str) -> Result<&KeyPair> {
        self.ensure_enabled()?;
        validate_passphrase(words, passphrase)?;
        self.decrypt_memo.clear();
        Ok(&*self.keypair.insert(derive_keypair(passphrase)))
    }

    pub fn keypair(&self) -> Option<&KeyPair> {
        self.keypair.as_ref()
    }

    fn unlocked(&self) -> Result<&KeyPair> {
        self.keypair
            .as_ref()
            .ok_or_else(|| ScramblError::InvalidInput("No passphrase entered yet".to_string()))
    }

    /// This session's public key as a tagged string.
    pub fn tagged_key(&self) -> Result<String> {
        Ok(encode_tagged_key(self.unlocked()?.public_key()))
    }

    /// This session's write-link.
    pub fn write_link(&self, base_url: &str, recipient: Option<&Recipient>) -> Result<String> {
        Ok(write_link(base_url, self.unlocked()?.public_key(), recipient))
    }

    /// Encrypt to a pasted tagged key.
    ///
    /// Surrounding whitespace on the key is ignored. An empty message gives
    /// no envelope. Repeating the previous (key, message) returns the
    /// previous envelope.
    pub fn encrypt(&mut self, recipient: &str, plaintext: &str) -> Result<String> {
        self.ensure_enabled()?;
        let key = decode_tagged_key(recipient.trim())?;
        if plaintext.is_empty() {
            return Err(ScramblError::InvalidInput("Message is empty".to_string()));
        }
        let input = (*key.as_bytes(), plaintext.to_string());
        let entropy = &mut self.entropy;
        let result = self
            .encrypt_memo
            .get_or_try_insert_with(input, |_| seal_text(plaintext, &key, entropy));
        self.record(result)
    }

    /// Decrypt pasted envelope text with this session's key.
    ///
    /// Text that fails the lenient base64 check is not decoded at all.
    /// Every failure is reported as `ScramblError::Unreadable`.
    pub fn decrypt(&mut self, text: &str) -> Result<String> {
        self.ensure_enabled()?;
        let keypair = self
            .keypair
            .as_ref()
            .ok_or_else(|| ScramblError::InvalidInput("No passphrase entered yet".to_string()))?;
        if strip_whitespace(text).is_empty() || !is_lenient_base64(text) {
            return Err(ScramblError::Unreadable);
        }
        let secret = keypair.secret_key();
        self.decrypt_memo
            .get_or_try_insert_with(text.to_string(), |text| open_text(text, secret))
    }
}

impl<E: EntropySource> std::fmt::Debug for Session<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("keypair", &self.keypair)
            .finish_non_exhaustive()
    }
}
