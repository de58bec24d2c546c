//! Outgoing message records.

use serde::{Deserialize, Serialize};

use super::Embed;

/// A message to execute through a webhook.
///
/// `files` and `query_params` are never part of the JSON body: attachments
/// switch the request to `multipart/form-data`, and query parameters are
/// appended to the URL.
///
/// # Example
///
/// ```
/// use discord_webhooks::model::{Embed, File, Message};
///
/// let message = Message::new()
///     .with_content("Deploy finished")
///     .with_embed(Embed::new().with_title("build #42"))
///     .with_file(File::new("log.txt", b"ok".to_vec()));
///
/// assert!(message.has_files());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    /// Message text
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,

    /// Overrides the webhook's default display name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,

    /// Overrides the webhook's default avatar
    #[serde(skip_serializing_if = "String::is_empty")]
    pub avatar_url: String,

    /// Text-to-speech flag
    #[serde(skip_serializing_if = "super::is_false")]
    pub tts: bool,

    /// Creates a forum thread with this name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub thread_name: String,

    /// Which mentions in `content` are allowed to ping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,

    /// Rich embeds, in display order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,

    /// File attachments, sent as multipart parts
    #[serde(skip)]
    pub files: Vec<File>,

    /// Query parameters appended to the webhook URL
    #[serde(skip)]
    pub query_params: Option<QueryParams>,
}

impl Message {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Overrides the display name.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Overrides the avatar URL.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = avatar_url.into();
        self
    }

    /// Sets the text-to-speech flag.
    #[must_use]
    pub const fn with_tts(mut self, tts: bool) -> Self {
        self.tts = tts;
        self
    }

    /// Names the forum thread this message starts.
    #[must_use]
    pub fn with_thread_name(mut self, thread_name: impl Into<String>) -> Self {
        self.thread_name = thread_name.into();
        self
    }

    /// Sets the mention policy.
    #[must_use]
    pub fn with_allowed_mentions(mut self, allowed_mentions: AllowedMentions) -> Self {
        self.allowed_mentions = Some(allowed_mentions);
        self
    }

    /// Appends an embed.
    #[must_use]
    pub fn with_embed(mut self, embed: Embed) -> Self {
        self.embeds.get_or_insert_with(Vec::new).push(embed);
        self
    }

    /// Appends a file attachment.
    #[must_use]
    pub fn with_file(mut self, file: File) -> Self {
        self.files.push(file);
        self
    }

    /// Posts into an existing thread.
    #[must_use]
    pub fn in_thread(mut self, thread_id: impl Into<String>) -> Self {
        self.query_params = Some(QueryParams::thread(thread_id));
        self
    }

    /// Returns true if the message carries attachments.
    #[must_use]
    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }

    /// Returns true if there is nothing to display: no text, embeds or files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
            && self.embeds.as_ref().is_none_or(Vec::is_empty)
            && self.files.is_empty()
    }
}

/// Controls which mentions in a message actually notify their targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowedMentions {
    /// Mention types parsed from the content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse: Option<Vec<MentionType>>,

    /// User ids allowed to be mentioned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,

    /// Role ids allowed to be mentioned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

impl AllowedMentions {
    /// A policy that suppresses every mention.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            parse: Some(Vec::new()),
            users: None,
            roles: None,
        }
    }
}

/// Mention categories for [`AllowedMentions::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionType {
    /// Role mentions
    Roles,
    /// User mentions
    Users,
    /// `@everyone` and `@here`
    Everyone,
}

/// A file attachment.
///
/// Only used to build multipart bodies; never serialized as JSON.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct File {
    /// Filename reported to the endpoint (`attachment://<name>` in embeds)
    pub name: String,
    /// Raw file content
    pub data: Vec<u8>,
}

impl File {
    /// Creates an attachment from a name and its bytes.
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

impl std::fmt::Debug for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("File")
            .field("name", &self.name)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Query parameters for webhook execution.
///
/// `wait` is not configurable: it is always sent as `true` so the endpoint
/// returns the created message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Target thread inside the webhook's channel (empty = none)
    pub thread_id: String,
}

impl QueryParams {
    /// Targets the given thread.
    #[must_use]
    pub fn thread(thread_id: impl Into<String>) -> Self {
        Self {
            thread_id: thread_id.into(),
        }
    }
}

/// Payload for editing a previously sent webhook message.
///
/// Editing requires an application-owned webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageEdit {
    /// Replacement message text
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,

    /// Replacement mention policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,

    /// Replacement embeds (`Some(vec![])` removes all embeds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
}

impl MessageEdit {
    /// Creates an edit that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the message text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Replaces the embeds.
    #[must_use]
    pub fn with_embeds(mut self, embeds: Vec<Embed>) -> Self {
        self.embeds = Some(embeds);
        self
    }
}
