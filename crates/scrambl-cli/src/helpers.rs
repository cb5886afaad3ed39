//! Input helpers for the CLI.

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use dialoguer::Password;
use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use scrambl_core::{Session, WordList};

use crate::constants::env;
use crate::errors::CliError;

/// Prompt for the passphrase, or read it from SCRAMBL_PASSPHRASE.
///
/// The passphrase is used exactly as typed; surrounding spaces change the key.
pub fn prompt_passphrase() -> anyhow::Result<SecretString> {
    if let Ok(value) = std::env::var(env::PASSPHRASE) {
        let value = Zeroizing::new(value);
        if !value.trim().is_empty() {
            return Ok(SecretString::from(value.as_str().to_owned()));
        }
    }
    if !io::stdin().is_terminal() {
        return Err(CliError::invalid_input(format!(
            "No passphrase provided and no TTY available. Set {}.",
            env::PASSPHRASE
        ))
        .into());
    }
    let value = Zeroizing::new(
        Password::new()
            .with_prompt("Passphrase")
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))?,
    );
    Ok(SecretString::from(value.as_str().to_owned()))
}

/// Take text from a flag, or read all of stdin.
///
/// One trailing newline from stdin is dropped.
pub fn read_input(flag: Option<&str>, what: &str) -> anyhow::Result<String> {
    if let Some(value) = flag {
        return Ok(value.to_string());
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    let text = buffer
        .strip_suffix("\r\n")
        .or_else(|| buffer.strip_suffix('\n'))
        .unwrap_or(&buffer);
    if text.is_empty() {
        return Err(CliError::invalid_input(format!("No {} provided on stdin", what)).into());
    }
    Ok(text.to_string())
}

/// Load the word list, reporting a missing file with a hint.
pub fn load_words(path: &Path) -> anyhow::Result<WordList> {
    if !path.exists() {
        return Err(CliError::not_found(
            format!("Word list not found at {}", path.display()),
            format!(
                "Hint: Pass --words <PATH>, set {} or add [words] path to the config file.",
                env::WORDS
            ),
        )
        .into());
    }
    Ok(WordList::load(path)?)
}

/// Start a session and unlock it with the user's passphrase.
pub fn unlocked_session(words: &WordList) -> anyhow::Result<Session> {
    let mut session = started_session()?;
    let passphrase = prompt_passphrase()?;
    session.unlock(words, passphrase.expose_secret())?;
    Ok(session)
}

/// Start a session, failing if secure randomness is unavailable.
pub fn started_session() -> anyhow::Result<Session> {
    let session = Session::start();
    if let scrambl_core::SessionState::Disabled(reason) = session.state() {
        return Err(scrambl_core::ScramblError::EntropyUnavailable(reason.clone()).into());
    }
    Ok(session)
}
