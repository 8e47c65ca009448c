//! Reviewed Preprints API - JSON listing of reviewed preprints.
//!
//! This crate provides a small HTTP API in front of the EPP server. It fetches
//! enhanced article records (without body content), reshapes each into a
//! public snippet, and serves the list with CDN-friendly caching headers.
//!
//! # Architecture
//!
//! - **Params**: Validates listing query parameters
//! - **Upstream**: Fetches records from the EPP server (one GET, no retries)
//! - **Routes**: Maps records to snippets via `preprints-core`
//! - **Response**: Single place for status, media type and cache headers
//!
//! # URL Pattern
//!
//! ```text
//! GET /?page=1&per-page=20&order=desc&use-date=default&start-date=YYYY-MM-DD&end-date=YYYY-MM-DD
//! GET /{id}
//! ```

pub mod config;
pub mod error;
pub mod params;
pub mod response;
pub mod routes;
pub mod state;
pub mod upstream;

pub use config::Config;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
pub use upstream::{EppClient, PreprintPage, PreprintSource, UpstreamError};
