//! discord-webhooks: a client for Discord-style incoming webhooks
//!
//! Builds message payloads (content, embeds, attachments), sends them to a
//! webhook URL, and edits, deletes or inspects what was sent. The transport
//! is injected through [`webhook::HttpClient`].

pub mod config;
pub mod model;
pub mod webhook;
