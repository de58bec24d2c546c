//! Transport seam for webhook calls.
//!
//! Webhook operations build an [`HttpRequest`], hand it to an [`HttpClient`]
//! and read the buffered [`HttpResponse`]. Nothing here knows about reqwest.

use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use url::Url;

use super::HttpError;

/// One webhook call as it goes over the wire.
///
/// `url` is the full webhook URL, token and query string included, so a
/// request must never be logged as a whole.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// `POST` to execute, `PATCH` to edit, `DELETE` to delete, `GET` for info
    pub method: Method,
    /// Webhook or message URL with query string
    pub url: Url,
    /// Request headers, `Content-Type` when there is a body
    pub headers: HeaderMap,
    /// Encoded JSON or multipart payload
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Starts a request with no headers and no body.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// `GET` the webhook object.
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// `POST` a new message.
    #[must_use]
    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    /// `PATCH` an existing message.
    #[must_use]
    pub fn patch(url: Url) -> Self {
        Self::new(Method::PATCH, url)
    }

    /// `DELETE` an existing message.
    #[must_use]
    pub fn delete(url: Url) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Attaches an encoded payload.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header; repeated names keep every value.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// What the webhook endpoint answered, body fully read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// 200 for execute and info, 204 for edit and delete
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Message object, webhook object, error object, or empty
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub const fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// True for any 2xx. Operations check for their exact status instead.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The body as text for error reports, with invalid UTF-8 replaced.
    #[must_use]
    pub fn body_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends webhook requests.
///
/// [`Webhook`](super::Webhook) is generic over this trait; production code
/// uses [`ReqwestClient`](super::ReqwestClient) and tests substitute a
/// recording mock. Each call is a single attempt. Retrying, if wanted,
/// belongs to the caller.
///
/// ```ignore
/// use discord_webhooks::webhook::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct Canned(HttpResponse);
///
/// impl HttpClient for Canned {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Performs one exchange with the webhook endpoint.
    ///
    /// A 4xx or 5xx answer is still `Ok`; the calling operation turns an
    /// unexpected status into [`WebhookError::Api`](super::WebhookError::Api).
    ///
    /// # Errors
    ///
    /// [`HttpError`] when no response arrives: connection failure,
    /// timeout, or a URL the transport cannot use.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
