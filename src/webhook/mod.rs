//! Webhook layer: request encoding, transport and response interpretation.
//!
//! This module provides:
//! - Webhook operations ([`Webhook`]): post, edit, delete, info
//! - Request body encoding ([`encode_message`], [`encode_json`], [`EncodedBody`])
//! - Query string construction ([`build_query`])
//! - HTTP request/response types ([`HttpRequest`], [`HttpResponse`])
//! - The transport abstraction ([`HttpClient`]) and its reqwest implementation ([`ReqwestClient`])
//! - Error types ([`WebhookError`], [`HttpError`], [`EncodeError`])

mod api;
mod client;
mod encode;
mod error;
mod http;
mod query;
mod response;

#[cfg(test)]
mod encode_tests;
#[cfg(test)]
mod query_tests;

pub use api::Webhook;
pub use client::ReqwestClient;
pub use encode::{EncodedBody, encode_json, encode_message};
pub use error::{EncodeError, HttpError, WebhookError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use query::build_query;
