//! Request body encoding.
//!
//! Messages without attachments are sent as JSON. Messages with attachments
//! are sent as `multipart/form-data` with the JSON payload in a
//! `payload_json` field followed by one `files[<n>]` part per attachment.

use std::fmt::Write as _;

use http::HeaderValue;
use rand::Rng;
use serde::Serialize;

use super::EncodeError;
use crate::model::{File, Message};

/// Number of random bytes in a multipart boundary (hex encoded, so 60 characters).
const BOUNDARY_BYTES: usize = 30;

const JSON_CONTENT_TYPE: &str = "application/json";
const FILE_CONTENT_TYPE: &str = "application/octet-stream";

/// A serialized request body and the content type describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBody {
    /// Request body bytes
    pub body: Vec<u8>,
    /// Value for the `Content-Type` header
    pub content_type: HeaderValue,
}

/// Encodes a message into a request body.
///
/// Uses JSON when the message has no attachments and multipart otherwise.
///
/// # Errors
///
/// Returns [`EncodeError`] if the message cannot be serialized.
pub fn encode_message(message: &Message) -> Result<EncodedBody, EncodeError> {
    if message.has_files() {
        encode_multipart(message, &message.files, &random_boundary())
    } else {
        encode_json(message)
    }
}

/// Encodes any serializable payload as a JSON body.
///
/// # Errors
///
/// Returns [`EncodeError::Json`] if serialization fails.
pub fn encode_json<T: Serialize + ?Sized>(payload: &T) -> Result<EncodedBody, EncodeError> {
    Ok(EncodedBody {
        body: serde_json::to_vec(payload)?,
        content_type: HeaderValue::from_static(JSON_CONTENT_TYPE),
    })
}

/// Builds a multipart body with the given boundary.
pub(crate) fn encode_multipart<T: Serialize + ?Sized>(
    payload: &T,
    files: &[File],
    boundary: &str,
) -> Result<EncodedBody, EncodeError> {
    let json = serde_json::to_vec(payload)?;
    let mut writer = MultipartWriter::new(boundary);

    writer.part(r#"form-data; name="payload_json""#, None, &json);
    for (index, file) in files.iter().enumerate() {
        let disposition = format!(
            r#"form-data; name="files[{index}]"; filename="{}""#,
            escape_quotes(&file.name)
        );
        writer.part(&disposition, Some(FILE_CONTENT_TYPE), &file.data);
    }

    let content_type = HeaderValue::from_str(&format!("multipart/form-data; boundary={boundary}"))?;

    Ok(EncodedBody {
        body: writer.finish(),
        content_type,
    })
}

/// Generates a fresh multipart boundary.
///
/// Attachment bytes are not scanned. Framing breaks only if a file happens
/// to contain `--` followed by these 60 random hex characters.
fn random_boundary() -> String {
    let mut raw = [0u8; BOUNDARY_BYTES];
    rand::rng().fill(&mut raw[..]);

    raw.iter().fold(String::with_capacity(BOUNDARY_BYTES * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}

/// Escapes backslashes and double quotes for a quoted header parameter.
fn escape_quotes(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Appends `multipart/form-data` parts to a buffer.
struct MultipartWriter<'a> {
    boundary: &'a str,
    buf: Vec<u8>,
}

impl<'a> MultipartWriter<'a> {
    const fn new(boundary: &'a str) -> Self {
        Self {
            boundary,
            buf: Vec::new(),
        }
    }

    fn part(&mut self, disposition: &str, content_type: Option<&str>, data: &[u8]) {
        if !self.buf.is_empty() {
            self.buf.extend_from_slice(b"\r\n");
        }
        self.buf.extend_from_slice(b"--");
        self.buf.extend_from_slice(self.boundary.as_bytes());
        self.buf.extend_from_slice(b"\r\nContent-Disposition: ");
        self.buf.extend_from_slice(disposition.as_bytes());
        self.buf.extend_from_slice(b"\r\n");
        if let Some(content_type) = content_type {
            self.buf.extend_from_slice(b"Content-Type: ");
            self.buf.extend_from_slice(content_type.as_bytes());
            self.buf.extend_from_slice(b"\r\n");
        }
        self.buf.extend_from_slice(b"\r\n");
        self.buf.extend_from_slice(data);
    }

    fn finish(mut self) -> Vec<u8> {
        self.buf.extend_from_slice(b"\r\n--");
        self.buf.extend_from_slice(self.boundary.as_bytes());
        self.buf.extend_from_slice(b"--\r\n");
        self.buf
    }
}
