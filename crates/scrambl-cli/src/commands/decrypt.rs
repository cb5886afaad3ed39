use zeroize::Zeroizing;

use scrambl_core::link::parse_read_link;
use scrambl_core::ScramblError;

use crate::cli::DecryptArgs;
use crate::config::Settings;
use crate::helpers::{load_words, read_input, unlocked_session};

/// Envelope text from a read-link or pasted base64.
///
/// A broken read-link fails the same way a bad envelope does.
fn envelope_text(input: &str) -> Result<String, ScramblError> {
    let input = input.trim();
    if input.contains("/read/") {
        return parse_read_link(input)
            .map(|link| link.ciphertext)
            .map_err(|_| ScramblError::Unreadable);
    }
    Ok(input.to_string())
}

pub fn handle_decrypt(settings: &Settings, args: &DecryptArgs) -> anyhow::Result<()> {
    let input = read_input(args.input.as_deref(), "message")?;
    let words = load_words(&settings.words_path)?;
    let mut session = unlocked_session(&words)?;

    let ciphertext = envelope_text(&input)?;
    let plaintext = Zeroizing::new(session.decrypt(&ciphertext)?);
    println!("{}", plaintext.as_str());
    Ok(())
}
