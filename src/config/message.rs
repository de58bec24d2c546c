//! Message composition from CLI arguments, message files and attachments.
//!
//! A message file is TOML with the same field names as the JSON body:
//!
//! ```toml
//! content = "Deploy finished"
//! username = "ci"
//!
//! [[embeds]]
//! title = "build #42"
//! color = 0x5865F2
//! image = { url = "attachment://report.png" }
//!
//! [[embeds.fields]]
//! name = "branch"
//! value = "main"
//! inline = true
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::model::{File, Message, MessageEdit, QueryParams};

use super::ConfigError;
use super::cli::{EditArgs, PostArgs};

/// Loads a [`Message`] from a TOML message file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid message.
pub fn load_message(path: &Path) -> Result<Message, ConfigError> {
    load_toml(path)
}

/// Loads a [`MessageEdit`] from a TOML message file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid edit.
pub fn load_edit(path: &Path) -> Result<MessageEdit, ConfigError> {
    load_toml(path)
}

/// Reads a file from disk as an attachment named after its base name.
///
/// # Errors
///
/// Returns an error if the path has no file name or cannot be read.
pub fn read_attachment(path: &Path) -> Result<File, ConfigError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| ConfigError::AttachmentName {
            path: path.to_path_buf(),
        })?;

    let data = std::fs::read(path).map_err(|e| ConfigError::AttachmentRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(File::new(name, data))
}

/// Builds the message for `post`.
///
/// Starts from the message file if one is given, then applies CLI flags
/// on top and appends attachments in argument order.
///
/// # Errors
///
/// Returns an error if a file cannot be loaded, or if the result has
/// nothing to display.
pub fn compose_post(args: &PostArgs) -> Result<Message, ConfigError> {
    let mut message = match args.message {
        Some(ref path) => load_message(path)?,
        None => Message::new(),
    };

    if let Some(ref content) = args.content {
        message.content.clone_from(content);
    }
    if let Some(ref username) = args.username {
        message.username.clone_from(username);
    }
    if let Some(ref avatar_url) = args.avatar_url {
        message.avatar_url.clone_from(avatar_url);
    }
    if let Some(ref thread_name) = args.thread_name {
        message.thread_name.clone_from(thread_name);
    }
    message.tts |= args.tts;

    for path in &args.files {
        message.files.push(read_attachment(path)?);
    }

    message.query_params = thread_params(args.thread_id.as_deref());

    if message.is_empty() {
        return Err(ConfigError::EmptyMessage);
    }

    Ok(message)
}

/// Builds the edit payload for `edit`.
///
/// # Errors
///
/// Returns an error if the message file cannot be loaded.
pub fn compose_edit(args: &EditArgs) -> Result<MessageEdit, ConfigError> {
    let mut edit = match args.message {
        Some(ref path) => load_edit(path)?,
        None => MessageEdit::new(),
    };

    if let Some(ref content) = args.content {
        edit.content.clone_from(content);
    }

    Ok(edit)
}

/// Query parameters for an optional thread id.
#[must_use]
pub fn thread_params(thread_id: Option<&str>) -> Option<QueryParams> {
    thread_id.map(QueryParams::thread)
}

fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::MessageRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::MessageParse {
        path: path.to_path_buf(),
        source: e,
    })
}
