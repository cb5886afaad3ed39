use std::path::Path;

use zeroize::Zeroizing;

use scrambl_core::crypto::is_valid_tagged_key;
use scrambl_core::link::{parse_write_link, read_link_from_text};
use scrambl_core::ContactBook;

use crate::cli::EncryptArgs;
use crate::config::Settings;
use crate::errors::CliError;
use crate::helpers::{read_input, started_session};

/// Turn `--to` into a tagged key.
///
/// Accepts a write-link, a bare tagged key, or the address of a contact.
fn resolve_recipient(to: &str, contacts_path: &Path) -> anyhow::Result<String> {
    let to = to.trim();
    if to.contains("/write/") {
        return Ok(parse_write_link(to)?.tagged);
    }
    if is_valid_tagged_key(to) {
        return Ok(to.to_string());
    }
    let book = ContactBook::load(contacts_path)?;
    if let Some(contact) = book.find(to) {
        tracing::debug!("recipient resolved from contact book");
        return Ok(contact.tagged.clone());
    }
    Err(CliError::invalid_input(format!(
        "\"{}\" is not a valid key, write-link or known contact\nHint: Check the key for typos or run `scrambl check-key <KEY>`.",
        to
    ))
    .into())
}

pub fn handle_encrypt(settings: &Settings, args: &EncryptArgs) -> anyhow::Result<()> {
    let tagged = resolve_recipient(&args.to, &settings.contacts_path)?;
    let plaintext = Zeroizing::new(read_input(args.message.as_deref(), "message")?);

    let mut session = started_session()?;
    let text = session.encrypt(&tagged, &plaintext)?;

    if args.link {
        println!("{}", read_link_from_text(&settings.base_url, &text));
    } else {
        print!("{}", text);
    }
    Ok(())
}
