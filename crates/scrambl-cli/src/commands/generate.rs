use zeroize::Zeroizing;

use crate::cli::Cli;
use crate::config::Settings;
use crate::helpers::{load_words, started_session};
use crate::ui::{hint, UiContext};

pub fn handle_generate(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let words = load_words(&settings.words_path)?;
    let mut session = started_session()?;
    let passphrase = Zeroizing::new(session.generate_passphrase(&words)?);

    println!("{}", passphrase.as_str());
    if !cli.quiet {
        eprintln!(
            "{}",
            hint(
                &UiContext::for_stderr(),
                "Anyone with this passphrase can read your messages. Keep it secret."
            )
        );
    }
    Ok(())
}
