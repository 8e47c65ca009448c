//! Route definitions.

mod item;
mod list;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete API router.
///
/// # Route Structure
///
/// - `GET /` - Paginated list of reviewed preprint snippets
/// - `GET /{id}` - Single reviewed preprint (not implemented, always 404)
///
/// Any other path gets the same not-found problem response.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list::list_reviewed_preprints))
        .route("/{id}", get(item::get_reviewed_preprint))
        .fallback(item::not_found)
        .with_state(state)
}
