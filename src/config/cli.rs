//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// discord-webhooks: post, edit and delete messages through a Discord webhook
#[derive(Debug, Parser)]
#[command(name = "discord-webhooks")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Webhook URL, including its token
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for discord-webhooks
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Execute the webhook and print the new message id
    Post(PostArgs),

    /// Edit a message sent by the webhook (application-owned webhooks only)
    Edit(EditArgs),

    /// Delete a message sent by the webhook
    Delete {
        /// Id of the message to delete
        message_id: String,

        /// Thread containing the message
        #[arg(long = "thread-id")]
        thread_id: Option<String>,
    },

    /// Print the webhook's metadata as JSON
    Info,

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "discord-webhooks.toml")]
        output: PathBuf,
    },
}

/// Arguments for `post`.
#[derive(Debug, Default, Args)]
pub struct PostArgs {
    /// Message text
    #[arg(long)]
    pub content: Option<String>,

    /// Display name override
    #[arg(long)]
    pub username: Option<String>,

    /// Avatar URL override
    #[arg(long = "avatar-url")]
    pub avatar_url: Option<String>,

    /// Send as text-to-speech
    #[arg(long)]
    pub tts: bool,

    /// Start a forum thread with this name
    #[arg(long = "thread-name")]
    pub thread_name: Option<String>,

    /// Post into an existing thread
    #[arg(long = "thread-id")]
    pub thread_id: Option<String>,

    /// TOML file describing the message (content, embeds, mentions)
    #[arg(long, value_name = "FILE")]
    pub message: Option<PathBuf>,

    /// Attach a file (can be specified multiple times)
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,
}

/// Arguments for `edit`.
#[derive(Debug, Default, Args)]
pub struct EditArgs {
    /// Id of the message to edit
    pub message_id: String,

    /// Replacement text
    #[arg(long)]
    pub content: Option<String>,

    /// TOML file describing the replacement (content, embeds, mentions)
    #[arg(long, value_name = "FILE")]
    pub message: Option<PathBuf>,

    /// Thread containing the message
    #[arg(long = "thread-id")]
    pub thread_id: Option<String>,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
