//! Read-only views over the `http::Response` being emitted.
//!
//! The emitter never builds responses. It reads the status, the protocol
//! version, the optional custom reason phrase and the header map of a response
//! that already exists, and derives the status line from them.

use http::header::CONTENT_RANGE;
use http::{HeaderMap, Response, StatusCode, Version};

/// Custom reason phrase for the status line, stored in the response extensions.
///
/// When absent the canonical reason of the status code is used.
///
/// ```
/// use micro_emitter::protocol::ReasonPhrase;
///
/// let mut response = http::Response::new(());
/// response.extensions_mut().insert(ReasonPhrase::from("Everything Fine"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonPhrase(String);

impl ReasonPhrase {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReasonPhrase {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ReasonPhrase {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The version number as it appears after `HTTP/` in a status line.
pub fn protocol_version(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

/// The reason phrase of a response, empty when none is known.
pub fn reason_phrase<B>(response: &Response<B>) -> &str {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => reason.as_str(),
        None => response.status().canonical_reason().unwrap_or(""),
    }
}

/// Composes `HTTP/<version> <code>[ <reason>]`.
pub fn status_line<B>(response: &Response<B>) -> String {
    format_status_line(response.version(), response.status(), reason_phrase(response))
}

pub(crate) fn format_status_line(version: Version, status: StatusCode, reason: &str) -> String {
    if reason.is_empty() {
        format!("HTTP/{} {}", protocol_version(version), status.as_str())
    } else {
        format!("HTTP/{} {} {}", protocol_version(version), status.as_str(), reason)
    }
}

/// All `Content-Range` values joined with `", "`, or `None` when the header is
/// absent or not valid UTF-8.
pub fn content_range_line(headers: &HeaderMap) -> Option<String> {
    let mut values = headers.get_all(CONTENT_RANGE).iter();
    let mut line = values.next()?.to_str().ok()?.to_owned();
    for value in values {
        line.push_str(", ");
        line.push_str(value.to_str().ok()?);
    }
    Some(line)
}
