//! Webhook operations: execute, edit, delete and inspect.

use http::header::CONTENT_TYPE;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;
use url::Url;

use super::encode::{EncodedBody, encode_json, encode_message};
use super::query::{append_query, build_query};
use super::response;
use super::{HttpClient, HttpError, HttpRequest, HttpResponse, WebhookError};
use crate::model::{Message, MessageEdit, QueryParams, WebhookInfo};

/// Characters escaped in a message id path segment.
///
/// Everything except unreserved characters and the sub-delimiters
/// `$ & + : = @`, so `/ ; , ?` and `%` never change the path structure.
const MESSAGE_ID: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// A webhook endpoint bound to an HTTP client.
///
/// The URL is the full webhook URL including its token
/// (`https://discord.com/api/webhooks/<id>/<token>`). Every operation is a
/// single HTTP exchange; failures are returned, never retried.
///
/// `Webhook` is `Send + Sync` whenever the client is, so one instance can be
/// shared between tasks.
///
/// # Example
///
/// ```no_run
/// use discord_webhooks::model::{Embed, Message, rgb};
/// use discord_webhooks::webhook::{ReqwestClient, Webhook};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let webhook = Webhook::new(
///     ReqwestClient::new(),
///     Url::parse("https://discord.com/api/webhooks/1/token")?,
/// );
///
/// let message = Message::new().with_embed(
///     Embed::new()
///         .with_title("Title")
///         .with_color(rgb(0x58, 0x65, 0xF2)),
/// );
/// let id = webhook.post_message(&message).await?;
/// webhook.delete_message(&id, None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Webhook<H> {
    client: H,
    url: Url,
}

impl<H> Webhook<H> {
    /// Creates a webhook handle for `url` using `client` as transport.
    #[must_use]
    pub const fn new(client: H, url: Url) -> Self {
        Self { client, url }
    }

    /// Returns the webhook URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }

    /// Builds `<webhook>/messages/<message_id>` with the id path-escaped.
    fn message_url(&self, message_id: &str) -> Result<Url, HttpError> {
        if self.url.cannot_be_a_base() {
            return Err(HttpError::InvalidUrl(
                "webhook URL cannot have a path".to_string(),
            ));
        }

        let mut url = self.url.clone();
        let path = format!(
            "{}/messages/{}",
            url.path().trim_end_matches('/'),
            utf8_percent_encode(message_id, MESSAGE_ID)
        );
        url.set_path(&path);
        Ok(url)
    }
}

impl<H: HttpClient> Webhook<H> {
    /// Executes the webhook and returns the id of the created message.
    ///
    /// The message is sent as JSON, or as `multipart/form-data` when it has
    /// attachments. `wait=true` is always requested so the endpoint returns
    /// the message.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::Encoding`] if the message cannot be serialized
    /// - [`WebhookError::Transport`] if the request cannot be delivered
    /// - [`WebhookError::Api`] if the endpoint does not answer 200
    /// - [`WebhookError::Decoding`] if the response has no message id
    pub async fn post_message(&self, message: &Message) -> Result<String, WebhookError> {
        let mut url = self.url.clone();
        append_query(&mut url, &build_query(message.query_params.as_ref()));

        let request = with_encoded_body(HttpRequest::post(url), encode_message(message)?);
        let response = self.send("post_message", request).await?;

        response::message_id(&response)
    }

    /// Edits a message previously sent by this webhook.
    ///
    /// Only application-owned webhooks may edit; this is not checked
    /// locally, the endpoint rejects the call instead.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::Encoding`] if the edit cannot be serialized
    /// - [`WebhookError::Transport`] if the request cannot be delivered
    /// - [`WebhookError::Api`] if the endpoint does not answer 204
    pub async fn edit_message(
        &self,
        message_id: &str,
        edit: &MessageEdit,
        params: Option<&QueryParams>,
    ) -> Result<(), WebhookError> {
        let mut url = self.message_url(message_id)?;
        append_query(&mut url, &build_query(params));

        let request = with_encoded_body(HttpRequest::patch(url), encode_json(edit)?);
        let response = self.send("edit_message", request).await?;

        response::no_content(&response)
    }

    /// Deletes a message previously sent by this webhook.
    ///
    /// A query string is only appended when `params` is given.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::Transport`] if the request cannot be delivered
    /// - [`WebhookError::Api`] if the endpoint does not answer 204
    pub async fn delete_message(
        &self,
        message_id: &str,
        params: Option<&QueryParams>,
    ) -> Result<(), WebhookError> {
        let mut url = self.message_url(message_id)?;
        if params.is_some() {
            append_query(&mut url, &build_query(params));
        }

        let response = self
            .send("delete_message", HttpRequest::delete(url))
            .await?;

        response::no_content(&response)
    }

    /// Fetches the webhook's own metadata.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::Transport`] if the request cannot be delivered
    /// - [`WebhookError::Api`] if the endpoint does not answer 200
    /// - [`WebhookError::Decoding`] if the body is not a webhook object
    pub async fn info(&self) -> Result<WebhookInfo, WebhookError> {
        let response = self
            .send("info", HttpRequest::get(self.url.clone()))
            .await?;

        response::webhook_info(&response)
    }

    /// Sends one request. The URL is not logged since it embeds the token.
    async fn send(
        &self,
        operation: &'static str,
        request: HttpRequest,
    ) -> Result<HttpResponse, WebhookError> {
        debug!(
            operation,
            method = %request.method,
            body_len = request.body.as_ref().map_or(0, Vec::len),
            "Sending webhook request"
        );

        let response = self.client.request(request).await?;

        debug!(
            operation,
            status = %response.status,
            body_len = response.body.len(),
            "Received webhook response"
        );

        Ok(response)
    }
}

fn with_encoded_body(request: HttpRequest, encoded: EncodedBody) -> HttpRequest {
    request
        .with_header(CONTENT_TYPE, encoded.content_type)
        .with_body(encoded.body)
}
