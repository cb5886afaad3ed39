//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (word list, config).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input (passphrase, key, link, arguments).
    pub const INVALID_INPUT: i32 = 4;

    /// Message could not be decrypted.
    pub const UNREADABLE: i32 = 5;

    /// No secure randomness on this system.
    pub const ENTROPY_UNAVAILABLE: i32 = 6;
}

/// Environment variables read by the CLI.
pub mod env {
    pub const PASSPHRASE: &str = "SCRAMBL_PASSPHRASE";
    pub const CONFIG: &str = "SCRAMBL_CONFIG";
    pub const WORDS: &str = "SCRAMBL_WORDS";
    pub const BASE_URL: &str = "SCRAMBL_BASE_URL";
    pub const CONTACTS: &str = "SCRAMBL_CONTACTS";
    pub const LOG: &str = "SCRAMBL_LOG";
}

/// Application directory name under the XDG base directories.
pub const APP_DIR: &str = "scrambl";
