//! Single reviewed preprint endpoint.

use axum::http::Uri;

use crate::error::ApiError;

/// `GET /{id}`
///
/// Item lookup is not available yet; every identifier is reported missing.
/// The identifier is not decoded, so malformed ones get the same answer.
pub async fn get_reviewed_preprint(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "item lookup not implemented");
    ApiError::NotFound
}

/// Fallback for paths no route matches.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
