//! Records describing webhook messages, embeds and webhook metadata.
//!
//! This module provides:
//! - Outgoing messages ([`Message`], [`MessageEdit`]) and their attachments ([`File`])
//! - Rich embeds ([`Embed`] and its nested objects)
//! - Query parameters appended to webhook URLs ([`QueryParams`])
//! - The webhook metadata snapshot returned by the endpoint ([`WebhookInfo`])
//!
//! # Serialization
//!
//! Field names and omission rules match the webhook wire format. Plain text
//! fields are left out of the JSON body when empty, booleans when `false` and
//! integers when zero. `Option` fields are left out only when `None`, so
//! `Some(vec![])` is sent as `[]` (which clears embeds on edit).

mod embed;
mod info;
mod message;


pub use embed::{
    Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedProvider, EmbedThumbnail,
    EmbedVideo, rgb,
};
pub use info::{WebhookInfo, WebhookType};
pub use message::{AllowedMentions, File, MentionType, Message, MessageEdit, QueryParams};

/// Serde predicate for omit-when-false booleans.
#[allow(clippy::trivially_copy_pass_by_ref)] // serde passes fields by reference
const fn is_false(value: &bool) -> bool {
    !*value
}

/// Serde predicate for omit-when-zero integers.
#[allow(clippy::trivially_copy_pass_by_ref)] // serde passes fields by reference
const fn is_zero(value: &u32) -> bool {
    *value == 0
}
