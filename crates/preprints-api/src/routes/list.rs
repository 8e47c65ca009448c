//! Reviewed preprint listing endpoint.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use preprints_core::{Snippet, SnippetList, to_snippet};

use crate::error::ApiError;
use crate::params::RawListParams;
use crate::response::{REVIEWED_PREPRINT_LIST_TYPE, write_json};
use crate::state::AppState;

/// `GET /`
///
/// Query parameters: `page`, `per-page`, `order`, `use-date`, `start-date`,
/// `end-date`. Every parameter is validated; when several are invalid the
/// last one is reported. A repeated parameter keeps its last value.
pub async fn list_reviewed_preprints(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let params = RawListParams::from_pairs(pairs).validate().map_err(|err| {
        tracing::debug!(error = %err, "rejected listing parameters");
        ApiError::from(err)
    })?;

    let page = state.source.fetch_list(&params).await?;

    let items = page
        .items
        .iter()
        .map(to_snippet)
        .collect::<Result<Vec<Snippet>, _>>()?;

    tracing::info!(
        page = params.page,
        per_page = params.per_page,
        total = page.total,
        returned = items.len(),
        "listed reviewed preprints"
    );

    let body = SnippetList {
        total: page.total,
        items,
    };

    Ok(write_json(StatusCode::OK, REVIEWED_PREPRINT_LIST_TYPE, &body))
}
