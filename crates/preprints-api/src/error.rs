//! API error types and response formatting.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::params::ParamError;
use crate::response::{JSON_TYPE, PROBLEM_TYPE, Problem, write_json};
use crate::upstream::UpstreamError;

/// API error type that converts to appropriate HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid query parameter.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("not found")]
    NotFound,

    /// The EPP server failed or returned something unusable.
    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// An upstream record could not be turned into a snippet.
    #[error("transform error: {0}")]
    Transform(#[from] preprints_core::Error),
}

impl From<ParamError> for ApiError {
    fn from(err: ParamError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(detail) => write_json(
                StatusCode::BAD_REQUEST,
                PROBLEM_TYPE,
                &Problem::with_detail("bad request", detail),
            ),
            Self::NotFound => write_json(
                StatusCode::NOT_FOUND,
                JSON_TYPE,
                &Problem::new("not found"),
            ),
            Self::Upstream(err) => {
                tracing::error!(error = %err, "upstream error");
                write_json(
                    StatusCode::BAD_GATEWAY,
                    PROBLEM_TYPE,
                    &Problem::with_detail("bad gateway", "The preprint service is unavailable"),
                )
            }
            Self::Transform(err) => {
                tracing::error!(error = %err, "transform error");
                write_json(
                    StatusCode::BAD_GATEWAY,
                    PROBLEM_TYPE,
                    &Problem::with_detail(
                        "bad gateway",
                        "The preprint service returned an incomplete record",
                    ),
                )
            }
        }
    }
}
