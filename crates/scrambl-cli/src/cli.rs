use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use scrambl_core::VERSION;

/// Scrambl - passphrase-derived public-key encryption for short messages
#[derive(Parser)]
#[command(name = "scrambl")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the word list (one word per line, 58110 words)
    #[arg(long, global = true, env = "SCRAMBL_WORDS", value_name = "PATH")]
    pub words: Option<PathBuf>,

    /// Base URL for write-links and read-links
    #[arg(long, global = true, env = "SCRAMBL_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Path to the contact book (JSON)
    #[arg(long, global = true, env = "SCRAMBL_CONTACTS", value_name = "PATH")]
    pub contacts: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, global = true, env = "SCRAMBL_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

/// Arguments for the `key` command
#[derive(Args)]
pub struct KeyArgs {
    /// Print a write-link that names this e-mail address
    #[arg(long, value_name = "ADDR", conflicts_with = "tweet")]
    pub email: Option<String>,

    /// Print a write-link that names this twitter handle
    #[arg(long, value_name = "HANDLE")]
    pub tweet: Option<String>,

    /// Use the query-string link format (?v=1&email=...&twitter=...)
    #[arg(long)]
    pub legacy: bool,

    /// Print a write-link instead of the bare key
    #[arg(long)]
    pub link: bool,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Recipient: tagged key, write-link, or contact address
    #[arg(long, value_name = "RECIPIENT")]
    pub to: String,

    /// Message text (overrides stdin)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Print a read-link instead of base64 text
    #[arg(long)]
    pub link: bool,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Read-link or base64 envelope text (overrides stdin)
    #[arg(short, long)]
    pub input: Option<String>,
}

/// Arguments for the `inspect` command
#[derive(Args)]
pub struct InspectArgs {
    /// Write-link or read-link
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `contacts` command
#[derive(Args)]
pub struct ContactsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check-key` command
#[derive(Args)]
pub struct CheckKeyArgs {
    /// Tagged public key
    #[arg(value_name = "KEY")]
    pub key: String,
}

/// Arguments for the `config` command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Write a config file with default values
    Init(ConfigInitArgs),

    /// Print the effective configuration
    Show,
}

/// Arguments for the `config init` command
#[derive(Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a fresh 7-word passphrase
    Generate,

    /// Print your tagged public key or write-link
    Key(KeyArgs),

    /// Encrypt a message to someone's key
    Encrypt(EncryptArgs),

    /// Decrypt a message sent to your key
    Decrypt(DecryptArgs),

    /// Show what a write-link or read-link carries
    Inspect(InspectArgs),

    /// List the contact book
    Contacts(ContactsArgs),

    /// Validate a tagged public key
    CheckKey(CheckKeyArgs),

    /// Manage the config file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
