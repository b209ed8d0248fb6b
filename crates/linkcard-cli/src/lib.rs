//! LinkCard command-line host
//!
//! Drives the profile store against a JSON file on disk and stands in for
//! the page UI: renders the card as text, guards link clicks, copies the
//! page URL to the desktop clipboard.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod notify;
pub mod render;

pub use cli::{build_cli, DEFAULT_STORE_FILE};
pub use clipboard::SystemClipboard;
pub use commands::{run, Status};
pub use config::{CliConfig, CliConfigError};
pub use notify::ConsoleNotifier;
