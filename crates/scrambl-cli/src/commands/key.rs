use scrambl_core::link::legacy_write_link;
use scrambl_core::Recipient;

use crate::cli::KeyArgs;
use crate::config::Settings;
use crate::errors::CliError;
use crate::helpers::{load_words, unlocked_session};

/// Recipient hint for a path-form link, from `--email` or `--tweet`.
fn recipient(args: &KeyArgs) -> Option<Recipient> {
    if let Some(email) = args.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
        return Some(Recipient::Email(email.to_string()));
    }
    args.tweet
        .as_deref()
        .map(str::trim)
        .map(|t| t.strip_prefix('@').unwrap_or(t))
        .filter(|t| !t.is_empty())
        .map(|t| Recipient::Twitter(t.to_string()))
}

pub fn handle_key(settings: &Settings, args: &KeyArgs) -> anyhow::Result<()> {
    let words = load_words(&settings.words_path)?;
    let session = unlocked_session(&words)?;

    let wants_link = args.link || args.legacy || args.email.is_some() || args.tweet.is_some();
    if !wants_link {
        println!("{}", session.tagged_key()?);
        return Ok(());
    }

    let url = if args.legacy {
        let keypair = session
            .keypair()
            .ok_or_else(|| CliError::invalid_input("No passphrase entered"))?;
        legacy_write_link(
            &settings.base_url,
            keypair.public_key(),
            args.email.as_deref(),
            args.tweet.as_deref(),
        )
    } else {
        session.write_link(&settings.base_url, recipient(args).as_ref())?
    };
    println!("{}", url);
    Ok(())
}
