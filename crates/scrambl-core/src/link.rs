//! Shareable links.
//!
//! Three URL shapes are understood:
//!
//! - `<base>/write/<tagged key>[/email/<enc>|/tweet/<enc>]`
//! - `<base>/write/<tagged key>?v=1[&email=<enc>][&twitter=<enc>]` (legacy)
//! - `<base>/read/<url-safe base64 envelope>`
//!
//! Both write-link formats are built and parsed; neither is preferred when
//! reading.

use std::collections::HashMap;

use crypto_box::{PublicKey, SecretKey};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::crypto::{decode_tagged_key, encode_tagged_key};
use crate::envelope::open_text;
use crate::error::{Result, ScramblError};
use crate::transport::{
    encode_base64_url, is_lenient_base64, strip_whitespace, to_url_safe_alphabet, wrap_lines,
    LINE_CHARS,
};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://scrambl.is";

const WRITE_SEGMENT: &str = "/write/";
const READ_SEGMENT: &str = "/read/";
const EMAIL_SEGMENT: &str = "/email/";
const TWEET_SEGMENT: &str = "/tweet/";
const LEGACY_VERSION: &str = "1";

/// Characters `encodeURIComponent` leaves alone are unreserved here too.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn encode_email(value: &str) -> String {
    encode_component(value).replace("%40", "@")
}

fn decode_component(value: &str) -> Result<String> {
    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| ScramblError::InvalidLink("recipient is not valid UTF-8".to_string()))
}

fn join(base_url: &str, segment: &str, tail: &str) -> String {
    format!("{}{}{}", base_url.trim_end_matches('/'), segment, tail)
}

/// Who a write-link owner can be reached at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "address", rename_all = "snake_case")]
pub enum Recipient {
    Email(String),
    Twitter(String),
}

impl Recipient {
    /// Infer the kind from an address.
    ///
    /// An `@` anywhere but the first character means e-mail; anything else
    /// is a twitter handle, stored without its leading `@`. Blank input gives
    /// `None`.
    pub fn infer(address: &str) -> Option<Self> {
        let address = address.trim();
        if address.is_empty() {
            return None;
        }
        match address.find('@') {
            Some(index) if index > 0 => Some(Recipient::Email(address.to_string())),
            _ => {
                let handle = address.strip_prefix('@').unwrap_or(address);
                if handle.is_empty() {
                    None
                } else {
                    Some(Recipient::Twitter(handle.to_string()))
                }
            }
        }
    }

    pub fn address(&self) -> &str {
        match self {
            Recipient::Email(address) | Recipient::Twitter(address) => address,
        }
    }

    fn segment(&self) -> String {
        match self {
            Recipient::Email(address) => format!("{}{}", EMAIL_SEGMENT, encode_email(address)),
            Recipient::Twitter(handle) => format!("{}{}", TWEET_SEGMENT, encode_component(handle)),
        }
    }
}

/// How a write-link encodes its recipient hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteLinkFormat {
    /// `/email/...` or `/tweet/...` path segment
    Path,
    /// `?v=1&email=...&twitter=...` query string
    Query,
}

/// A validated write-link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteLink {
    pub key: PublicKey,
    /// The tagged key exactly as it appeared in the URL.
    pub tagged: String,
    /// Path links carry at most one recipient; legacy links may carry both.
    pub recipients: Vec<Recipient>,
    pub format: WriteLinkFormat,
}

/// A read-link whose payload passed the lenient base64 check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadLink {
    /// Envelope text re-wrapped into 64-character lines.
    pub ciphertext: String,
}

impl ReadLink {
    /// Open the carried envelope.
    pub fn open(&self, secret: &SecretKey) -> Result<String> {
        open_text(&self.ciphertext, secret)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    Write(WriteLink),
    Read(ReadLink),
}

/// Build a path-form write-link.
pub fn write_link(base_url: &str, key: &PublicKey, recipient: Option<&Recipient>) -> String {
    let mut url = join(base_url, WRITE_SEGMENT, &encode_tagged_key(key));
    if let Some(recipient) = recipient {
        url.push_str(&recipient.segment());
    }
    url
}

/// Build a legacy query-form write-link.
///
/// Blank values are left out. A leading `@` on the twitter handle is dropped.
pub fn legacy_write_link(
    base_url: &str,
    key: &PublicKey,
    email: Option<&str>,
    twitter: Option<&str>,
) -> String {
    let mut url = join(base_url, WRITE_SEGMENT, &encode_tagged_key(key));
    url.push_str("?v=");
    url.push_str(LEGACY_VERSION);
    if let Some(email) = email.map(str::trim).filter(|e| !e.is_empty()) {
        url.push_str("&email=");
        url.push_str(&encode_email(email));
    }
    if let Some(handle) = twitter
        .map(str::trim)
        .map(|t| t.strip_prefix('@').unwrap_or(t))
        .filter(|t| !t.is_empty())
    {
        url.push_str("&twitter=");
        url.push_str(&encode_component(handle));
    }
    url
}

/// Build a read-link from envelope bytes.
pub fn read_link(base_url: &str, envelope: &[u8]) -> String {
    join(base_url, READ_SEGMENT, &encode_base64_url(envelope))
}

/// Build a read-link from already encoded envelope text.
///
/// Whitespace is removed and the text switched to the URL-safe alphabet.
pub fn read_link_from_text(base_url: &str, text: &str) -> String {
    join(
        base_url,
        READ_SEGMENT,
        &to_url_safe_alphabet(&strip_whitespace(text)),
    )
}

/// Parse `a=b&c=d`, percent-decoding keys and values. Later keys win.
fn parse_query(query: &str) -> Result<HashMap<String, String>> {
    let mut params = HashMap::new();
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key.is_empty() {
            continue;
        }
        params.insert(decode_component(key)?, decode_component(value)?);
    }
    Ok(params)
}

fn validated_key(tagged: &str) -> Result<PublicKey> {
    decode_tagged_key(tagged).map_err(|e| {
        tracing::debug!(error = %e, "write-link key rejected");
        ScramblError::InvalidLink(format!("key is not valid ({})", e))
    })
}

/// Parse a write-link in either format.
///
/// The last `/write/` marks the key. In path form, whichever of `/email/`
/// or `/tweet/` comes first ends the key and starts the recipient.
///
/// # Errors
///
/// Returns `ScramblError::InvalidLink` if there is no `/write/` segment, the
/// key fails validation, or the recipient is not valid percent-encoded UTF-8.
pub fn parse_write_link(url: &str) -> Result<WriteLink> {
    let start = url
        .rfind(WRITE_SEGMENT)
        .ok_or_else(|| ScramblError::InvalidLink("no /write/ segment".to_string()))?;
    let rest = &url[start + WRITE_SEGMENT.len()..];

    let delimiter = [
        rest.find(EMAIL_SEGMENT).map(|i| (i, EMAIL_SEGMENT)),
        rest.find(TWEET_SEGMENT).map(|i| (i, TWEET_SEGMENT)),
    ]
    .into_iter()
    .flatten()
    .min_by_key(|(index, _)| *index);

    if let Some((index, segment)) = delimiter {
        let tagged = &rest[..index];
        let key = validated_key(tagged)?;
        let address = decode_component(&rest[index + segment.len()..])?;
        let recipients = if address.is_empty() {
            Vec::new()
        } else if segment == EMAIL_SEGMENT {
            vec![Recipient::Email(address)]
        } else {
            vec![Recipient::Twitter(address)]
        };
        return Ok(WriteLink {
            key,
            tagged: tagged.to_string(),
            recipients,
            format: WriteLinkFormat::Path,
        });
    }

    if let Some((tagged, query)) = rest.split_once('?') {
        let key = validated_key(tagged)?;
        let params = parse_query(query)?;
        let mut recipients = Vec::new();
        if let Some(email) = params.get("email").filter(|v| !v.is_empty()) {
            recipients.push(Recipient::Email(email.clone()));
        }
        if let Some(handle) = params.get("twitter").filter(|v| !v.is_empty()) {
            recipients.push(Recipient::Twitter(handle.clone()));
        }
        return Ok(WriteLink {
            key,
            tagged: tagged.to_string(),
            recipients,
            format: WriteLinkFormat::Query,
        });
    }

    Ok(WriteLink {
        key: validated_key(rest)?,
        tagged: rest.to_string(),
        recipients: Vec::new(),
        format: WriteLinkFormat::Path,
    })
}

/// Parse a read-link.
///
/// # Errors
///
/// Returns `ScramblError::InvalidLink` if there is no `/read/` segment after
/// the first character or the payload fails the lenient base64 check.
pub fn parse_read_link(url: &str) -> Result<ReadLink> {
    let start = url
        .rfind(READ_SEGMENT)
        .filter(|&index| index > 0)
        .ok_or_else(|| ScramblError::InvalidLink("no /read/ segment".to_string()))?;
    let payload = &url[start + READ_SEGMENT.len()..];
    if payload.is_empty() || !is_lenient_base64(payload) {
        return Err(ScramblError::InvalidLink(
            "payload is not a plausible envelope".to_string(),
        ));
    }
    Ok(ReadLink {
        ciphertext: wrap_lines(payload, LINE_CHARS),
    })
}

/// Parse any link, going by whichever of `/write/` or `/read/` comes last.
pub fn parse_link(url: &str) -> Result<Link> {
    match (url.rfind(WRITE_SEGMENT), url.rfind(READ_SEGMENT)) {
        (Some(write), Some(read)) if read > write => parse_read_link(url).map(Link::Read),
        (Some(_), _) => parse_write_link(url).map(Link::Write),
        (None, Some(_)) => parse_read_link(url).map(Link::Read),
        (None, None) => Err(ScramblError::InvalidLink(
            "not a write or read link".to_string(),
        )),
    }
}
