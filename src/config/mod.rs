//! Configuration layer for the `discord-webhooks` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Message composition from flags and TOML message files ([`compose_post`], [`compose_edit`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The same rule applies to messages: flags such as `--content` override the
//! corresponding field of a `--message` file.

mod cli;
pub mod defaults;
mod error;
mod message;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, EditArgs, PostArgs};
pub use error::{ConfigError, field};
pub use message::{
    compose_edit, compose_post, load_edit, load_message, read_attachment, thread_params,
};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, redact_token, write_default_config};
