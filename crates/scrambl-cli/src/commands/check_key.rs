use scrambl_core::crypto::decode_tagged_key;

use crate::cli::{CheckKeyArgs, Cli};
use crate::errors::CliError;
use crate::ui::{badge, Badge, UiContext};

pub fn handle_check_key(cli: &Cli, args: &CheckKeyArgs) -> anyhow::Result<()> {
    decode_tagged_key(args.key.trim()).map_err(|e| {
        CliError::invalid_input(format!(
            "{}\nHint: Copy the whole key again; a single changed character makes it invalid.",
            e
        ))
    })?;
    if !cli.quiet {
        println!("{}", badge(&UiContext::for_stdout(), Badge::Ok, "Key is valid"));
    }
    Ok(())
}
