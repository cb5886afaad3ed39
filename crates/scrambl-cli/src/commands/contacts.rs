use scrambl_core::{ContactBook, Recipient};

use crate::cli::{Cli, ContactsArgs};
use crate::config::Settings;
use crate::ui::{table, UiContext};

fn rows(book: &ContactBook) -> Vec<Vec<String>> {
    book.iter()
        .map(|contact| {
            let (kind, address) = match &contact.recipient {
                Some(Recipient::Email(address)) => ("email", address.as_str()),
                Some(Recipient::Twitter(handle)) => ("twitter", handle.as_str()),
                None => ("-", "-"),
            };
            vec![address.to_string(), kind.to_string(), contact.tagged.clone()]
        })
        .collect()
}

pub fn handle_contacts(cli: &Cli, settings: &Settings, args: &ContactsArgs) -> anyhow::Result<()> {
    let book = ContactBook::load(&settings.contacts_path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&book)?);
        return Ok(());
    }
    if book.is_empty() {
        if !cli.quiet {
            eprintln!("No contacts in {}", settings.contacts_path.display());
        }
        return Ok(());
    }
    let ctx = UiContext::for_stdout();
    println!("{}", table(&ctx, &["Recipient", "Kind", "Key"], &rows(&book)));
    Ok(())
}
