//! Configuration management for the TNC7 language server.
//!
//! Handles:
//! - Command-line argument parsing
//! - Target language id selection

use anyhow::{Result, bail};
use clap::Parser;

/// Language id editors assign to TNC7 macro/program files
pub const DEFAULT_LANGUAGE_ID: &str = "tnc7h";

/// Command-line arguments for the TNC7 language server
#[derive(Debug, Parser)]
#[command(name = "tnc7-ls")]
#[command(about = "Language server for HEIDENHAIN TNC7 macro files")]
#[command(version)]
pub struct Args {
    /// Language id of the documents to serve
    #[arg(
        long,
        default_value = DEFAULT_LANGUAGE_ID,
        help = "Language id handled by hover, formatting and renumbering"
    )]
    pub language_id: String,

    /// Log level for the language server
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Documents with this language id are renumbered and hovered
    pub language_id: String,
    /// Log level, used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language_id: DEFAULT_LANGUAGE_ID.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let language_id = args.language_id.trim().to_string();
        if language_id.is_empty() {
            bail!("--language-id must not be empty");
        }

        Ok(Config {
            language_id,
            log_level: args.log_level,
        })
    }

    /// Whether a document with this language id is a TNC7 file
    pub fn targets(&self, language_id: &str) -> bool {
        self.language_id == language_id
    }
}
