//! Webhook metadata returned by the endpoint.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Read-only snapshot of a webhook, as returned by `GET <webhook url>`.
///
/// The token-authenticated endpoint omits the `user` object. Fields the
/// endpoint may send as `null` are `Option`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookInfo {
    /// Webhook id
    pub id: String,

    /// Webhook kind
    #[serde(rename = "type")]
    pub kind: WebhookType,

    /// Guild the webhook belongs to
    #[serde(default)]
    pub guild_id: Option<String>,

    /// Channel the webhook posts into
    #[serde(default)]
    pub channel_id: Option<String>,

    /// Default display name
    #[serde(default)]
    pub name: Option<String>,

    /// Default avatar hash
    #[serde(default)]
    pub avatar: Option<String>,

    /// Secure token (incoming webhooks only)
    #[serde(default)]
    pub token: Option<String>,

    /// Execution URL (incoming webhooks only)
    #[serde(default)]
    pub url: Option<String>,

    /// Owning application (application-owned webhooks only)
    #[serde(default)]
    pub application_id: Option<String>,
}

impl WebhookInfo {
    /// Returns true if messages sent through this webhook can be edited.
    #[must_use]
    pub const fn supports_edit(&self) -> bool {
        matches!(self.kind, WebhookType::Application)
    }
}

/// Webhook kinds, serialized as their integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum WebhookType {
    /// Posts messages to a channel with a token
    Incoming = 1,
    /// Internal webhook used by channel following
    ChannelFollower = 2,
    /// Used with interactions
    Application = 3,
}

impl std::fmt::Display for WebhookType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Incoming => "incoming",
            Self::ChannelFollower => "channel-follower",
            Self::Application => "application",
        };
        f.write_str(name)
    }
}
