//! Command handlers, one module per subcommand.

pub mod check_key;
pub mod config;
pub mod contacts;
pub mod decrypt;
pub mod encrypt;
pub mod generate;
pub mod inspect;
pub mod key;
pub mod misc;
