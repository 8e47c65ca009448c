//! Response writer.
//!
//! Every outbound response goes through [`write_json`], which owns the status
//! code, media type, caching and `Vary` headers.

use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Media type of a reviewed-preprint list.
pub const REVIEWED_PREPRINT_LIST_TYPE: &str =
    "application/vnd.elife.reviewed-preprint-list+json; version=1";

/// Media type of an RFC 7807 problem document.
pub const PROBLEM_TYPE: &str = "application/problem+json";

/// Plain JSON.
pub const JSON_TYPE: &str = "application/json";

/// Cache policy for successful responses: 5 minutes at the edge, serve stale
/// for a day on upstream errors.
pub const CACHE_PUBLIC: &str =
    "max-age=300, public, stale-if-error=86400, stale-while-revalidate=300";

/// Cache policy for errors.
pub const CACHE_PRIVATE: &str = "must-revalidate, no-cache, no-store, private";

/// Headers that select between response variants.
pub const VARY: &str = "Accept, Authorization";

/// Problem document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            detail: None,
        }
    }

    pub fn with_detail(title: &'static str, detail: impl Into<String>) -> Self {
        Self {
            title,
            detail: Some(detail.into()),
        }
    }
}

/// Cache-Control value for a status code.
pub fn cache_control(status: StatusCode) -> &'static str {
    if status.is_success() {
        CACHE_PUBLIC
    } else {
        CACHE_PRIVATE
    }
}

/// Serialize `body` as JSON and wrap it with the standard headers.
pub fn write_json<T: Serialize>(
    status: StatusCode,
    content_type: &'static str,
    body: &T,
) -> Response {
    let json = match serde_json::to_string(body) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize response body");
            return write_raw(
                StatusCode::INTERNAL_SERVER_ERROR,
                PROBLEM_TYPE,
                r#"{"title":"internal error"}"#.to_string(),
            );
        }
    };

    write_raw(status, content_type, json)
}

fn write_raw(status: StatusCode, content_type: &'static str, body: String) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control(status)),
    );
    headers.insert(header::VARY, HeaderValue::from_static(VARY));

    (status, headers, body).into_response()
}
