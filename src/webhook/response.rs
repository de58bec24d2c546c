//! Interpretation of webhook responses.

use http::StatusCode;
use serde::Deserialize;

use super::{HttpResponse, WebhookError};
use crate::model::WebhookInfo;

/// The part of a created message the client cares about.
#[derive(Deserialize)]
struct CreatedMessage {
    id: String,
}

/// Fails with [`WebhookError::Api`] unless the response has `expected` status.
pub(crate) fn expect_status(
    response: &HttpResponse,
    expected: StatusCode,
) -> Result<(), WebhookError> {
    if response.status == expected {
        return Ok(());
    }

    Err(WebhookError::Api {
        status: response.status,
        expected,
        body: response.body_lossy(),
    })
}

/// Extracts the message id from an execute response (200 with a message object).
pub(crate) fn message_id(response: &HttpResponse) -> Result<String, WebhookError> {
    expect_status(response, StatusCode::OK)?;

    let created: CreatedMessage =
        serde_json::from_slice(&response.body).map_err(WebhookError::Decoding)?;
    Ok(created.id)
}

/// Validates an edit or delete response (204 No Content).
pub(crate) fn no_content(response: &HttpResponse) -> Result<(), WebhookError> {
    expect_status(response, StatusCode::NO_CONTENT)
}

/// Decodes a webhook info response (200 with a webhook object).
pub(crate) fn webhook_info(response: &HttpResponse) -> Result<WebhookInfo, WebhookError> {
    expect_status(response, StatusCode::OK)?;

    serde_json::from_slice(&response.body).map_err(WebhookError::Decoding)
}
