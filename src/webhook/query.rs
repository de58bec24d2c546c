//! Query string construction for webhook URLs.

use url::form_urlencoded;

use crate::model::QueryParams;

/// Builds the URL-encoded query string for a webhook call.
///
/// `wait=true` is always present: without it the endpoint does not return
/// the created message, and its id would be lost. `thread_id` is included
/// only when non-empty. Keys are emitted in sorted order.
///
/// # Example
///
/// ```
/// use discord_webhooks::model::QueryParams;
/// use discord_webhooks::webhook::build_query;
///
/// assert_eq!(build_query(None), "wait=true");
/// assert_eq!(
///     build_query(Some(&QueryParams::thread("42"))),
///     "thread_id=42&wait=true"
/// );
/// ```
#[must_use]
pub fn build_query(params: Option<&QueryParams>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if let Some(thread_id) = params
        .map(|p| p.thread_id.as_str())
        .filter(|id| !id.is_empty())
    {
        serializer.append_pair("thread_id", thread_id);
    }
    serializer.append_pair("wait", "true");

    serializer.finish()
}

/// Appends a built query string to a URL, after any query it already has.
pub(crate) fn append_query(url: &mut url::Url, query: &str) {
    let merged = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{query}"),
        _ => query.to_string(),
    };
    url.set_query(Some(&merged));
}
