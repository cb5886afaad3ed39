//! Read-only contact book.
//!
//! A contact book is a JSON array of `{"key": "<tagged key>", "recipient":
//! "<address>"}` records. Records whose key does not validate are skipped
//! with a warning so one bad entry does not hide the rest.

use std::path::Path;

use crypto_box::PublicKey;
use serde::{Deserialize, Serialize};

use crate::crypto::decode_tagged_key;
use crate::error::Result;
use crate::link::Recipient;

#[derive(Debug, Deserialize)]
struct ContactRecord {
    key: String,
    #[serde(default)]
    recipient: String,
}

/// A contact whose key passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    #[serde(skip)]
    pub key: PublicKey,
    #[serde(rename = "key")]
    pub tagged: String,
    pub recipient: Option<Recipient>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// Parse a contact book from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ScramblError::Contacts` if the text is not a JSON array of
    /// records. Individual invalid keys are not errors.
    pub fn parse(json: &str) -> Result<Self> {
        let records: Vec<ContactRecord> = serde_json::from_str(json)?;
        let mut contacts = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let tagged = record.key.trim().to_string();
            match decode_tagged_key(&tagged) {
                Ok(key) => contacts.push(Contact {
                    key,
                    tagged,
                    recipient: Recipient::infer(&record.recipient),
                }),
                Err(e) => tracing::warn!(index, error = %e, "skipping contact with invalid key"),
            }
        }
        Ok(Self { contacts })
    }

    /// Load a contact book from disk. A missing file is an empty book.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no contact book");
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        let book = Self::parse(&json)?;
        tracing::debug!(path = %path.display(), contacts = book.len(), "loaded contact book");
        Ok(book)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Find a contact by recipient address.
    pub fn find(&self, address: &str) -> Option<&Contact> {
        let address = address.trim();
        let handle = address.strip_prefix('@').unwrap_or(address);
        self.contacts.iter().find(|c| {
            c.recipient
                .as_ref()
                .is_some_and(|r| r.address().eq_ignore_ascii_case(handle))
        })
    }
}
