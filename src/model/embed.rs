//! Rich embed records.

use serde::{Deserialize, Serialize};

/// Packs an RGB triple into an embed colour (`0x00RRGGBB`).
///
/// # Example
///
/// ```
/// assert_eq!(discord_webhooks::model::rgb(0x58, 0x65, 0xF2), 0x5865F2);
/// ```
#[must_use]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    u32::from_be_bytes([0, r, g, b])
}

/// A rich embed attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Embed {
    /// Embed title
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Embed body text
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// URL the title links to
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// ISO-8601 timestamp shown in the footer
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timestamp: String,

    /// Sidebar colour, 24-bit RGB (see [`rgb`])
    #[serde(skip_serializing_if = "super::is_zero")]
    pub color: u32,

    /// Footer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,

    /// Large image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,

    /// Thumbnail image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,

    /// Video
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<EmbedVideo>,

    /// Provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<EmbedProvider>,

    /// Author line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,

    /// Name/value fields, in display order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<EmbedField>>,
}

impl Embed {
    /// Creates an empty embed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the title link.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the ISO-8601 timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Sets the sidebar colour.
    ///
    /// Only the low 24 bits are meaningful.
    #[must_use]
    pub const fn with_color(mut self, color: u32) -> Self {
        self.color = color & 0x00FF_FFFF;
        self
    }

    /// Sets the footer text.
    #[must_use]
    pub fn with_footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(EmbedFooter {
            text: text.into(),
            ..EmbedFooter::default()
        });
        self
    }

    /// Sets the large image URL.
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(EmbedImage::new(url));
        self
    }

    /// Sets the thumbnail URL.
    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(EmbedThumbnail::new(url));
        self
    }

    /// Sets the author name.
    #[must_use]
    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.author = Some(EmbedAuthor {
            name: name.into(),
            ..EmbedAuthor::default()
        });
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.get_or_insert_with(Vec::new).push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }
}

/// Embed footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedFooter {
    /// Footer text (always sent)
    pub text: String,

    /// Footer icon
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_url: String,

    /// Proxied footer icon
    #[serde(skip_serializing_if = "String::is_empty")]
    pub proxy_icon_url: String,
}

/// Embedded media: image, thumbnail or video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedImage {
    /// Source URL (always sent)
    pub url: String,

    /// Proxied URL
    #[serde(skip_serializing_if = "String::is_empty")]
    pub proxy_url: String,

    /// Height in pixels
    #[serde(skip_serializing_if = "super::is_zero")]
    pub height: u32,

    /// Width in pixels
    #[serde(skip_serializing_if = "super::is_zero")]
    pub width: u32,
}

impl EmbedImage {
    /// Creates media pointing at `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Embed thumbnail; same shape as [`EmbedImage`].
pub type EmbedThumbnail = EmbedImage;

/// Embed video; same shape as [`EmbedImage`].
pub type EmbedVideo = EmbedImage;

/// Embed provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedProvider {
    /// Provider name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Provider URL
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

/// Embed author line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedAuthor {
    /// Author name (always sent)
    pub name: String,

    /// Link on the author name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// Author icon
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_url: String,

    /// Proxied author icon
    #[serde(skip_serializing_if = "String::is_empty")]
    pub proxy_icon_url: String,
}

/// A name/value pair shown in an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedField {
    /// Field name (always sent)
    pub name: String,

    /// Field value (always sent)
    pub value: String,

    /// Render side by side with neighbouring inline fields
    #[serde(skip_serializing_if = "super::is_false")]
    pub inline: bool,
}
