//! Scrambl CLI - passphrase-derived public-key encryption for short messages
//!
//! This is the command-line interface for Scrambl. It is a thin adapter over
//! `scrambl-core`: every operation lives in the library.

mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod ui;

use clap::Parser;
use scrambl_core::VERSION;

use crate::cli::{Cli, Commands, ConfigSubcommand};
use crate::commands::{check_key, contacts, decrypt, encrypt, generate, inspect, key, misc};
use crate::config::Settings;
use crate::errors::{exit_code, split_hint};
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        let message = format!("{}", e);
        let (text, hint) = split_hint(&message);
        print_error(&UiContext::for_stderr(), text, hint);
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Completions need no settings, so they work without HOME.
    if let Some(Commands::Completions(args)) = &cli.command {
        return misc::handle_completions(args);
    }

    let settings = Settings::resolve(cli)?;
    match &cli.command {
        Some(Commands::Generate) => generate::handle_generate(cli, &settings)?,
        Some(Commands::Key(args)) => key::handle_key(&settings, args)?,
        Some(Commands::Encrypt(args)) => encrypt::handle_encrypt(&settings, args)?,
        Some(Commands::Decrypt(args)) => decrypt::handle_decrypt(&settings, args)?,
        Some(Commands::Inspect(args)) => inspect::handle_inspect(args)?,
        Some(Commands::Contacts(args)) => contacts::handle_contacts(cli, &settings, args)?,
        Some(Commands::CheckKey(args)) => check_key::handle_check_key(cli, args)?,
        Some(Commands::Config(args)) => match &args.command {
            ConfigSubcommand::Init(init_args) => {
                commands::config::handle_init(cli, &settings, init_args)?
            }
            ConfigSubcommand::Show => commands::config::handle_show(&settings)?,
        },
        Some(Commands::Completions(_)) => {}
        None => {
            println!("Scrambl v{}", VERSION);
            println!("\nQuickstart:");
            println!("  scrambl generate");
            println!("  scrambl key --link");
            println!("  scrambl encrypt --to <KEY or LINK> --message \"Hello\"");
            println!("  scrambl decrypt < message.txt");
            println!("\nRun `scrambl --help` for full usage.");
        }
    }

    Ok(())
}
