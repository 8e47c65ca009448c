//! Client for the EPP server's reviewed preprint listing.
//!
//! One GET per listing request, no retries. The total count comes from the
//! `x-total-count` header; when that is missing the number of returned items
//! is used instead, which undercounts on paginated results.

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use preprints_core::EnhancedArticle;

use crate::config::Config;
use crate::params::{ListParams, UseDate};

/// Response header carrying the total number of matching records.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Upstream `use-date` value for filtering on first publication.
const USE_DATE_FIRST_PUBLISHED: &str = "firstPublished";

/// Errors talking to the EPP server.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The request could not be sent or the response could not be read.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("request to {url} failed: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The body was not a JSON array of records.
    #[error("invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: preprints_core::Error,
    },
}

/// One page of upstream records.
#[derive(Debug, Clone)]
pub struct PreprintPage {
    pub total: u64,
    pub items: Vec<EnhancedArticle>,
}

/// Source of reviewed preprint records.
#[async_trait]
pub trait PreprintSource: Send + Sync {
    /// Fetch one page of records matching `params`.
    async fn fetch_list(&self, params: &ListParams) -> Result<PreprintPage, UpstreamError>;
}

/// HTTP implementation of [`PreprintSource`] backed by the EPP server.
#[derive(Debug, Clone)]
pub struct EppClient {
    http: reqwest::Client,
    list_url: String,
}

impl EppClient {
    /// Build a client for the configured EPP server.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.epp_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            list_url: config.list_url(),
        })
    }

    /// URL of the listing endpoint.
    pub fn list_url(&self) -> &str {
        &self.list_url
    }
}

#[async_trait]
impl PreprintSource for EppClient {
    async fn fetch_list(&self, params: &ListParams) -> Result<PreprintPage, UpstreamError> {
        let query = upstream_query(params);

        let request = self
            .http
            .get(&self.list_url)
            .query(&query)
            .build()
            .map_err(|source| UpstreamError::Transport {
                url: self.list_url.clone(),
                source,
            })?;
        let url = request.url().to_string();

        tracing::debug!(url = %url, "fetching reviewed preprints");

        let response =
            self.http
                .execute(request)
                .await
                .map_err(|source| UpstreamError::Transport {
                    url: url.clone(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { url, status });
        }

        let header_total = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let body = response
            .text()
            .await
            .map_err(|source| UpstreamError::Transport {
                url: url.clone(),
                source,
            })?;
        let items = EnhancedArticle::list_from_json(&body)
            .map_err(|source| UpstreamError::Decode { url, source })?;

        let total = header_total.unwrap_or(items.len() as u64);

        tracing::debug!(total, returned = items.len(), "fetched reviewed preprints");

        Ok(PreprintPage { total, items })
    }
}

/// Query string pairs sent upstream, in a stable order.
pub fn upstream_query(params: &ListParams) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("page", params.page.to_string()),
        ("per-page", params.per_page.to_string()),
        ("order", params.order.as_str().to_string()),
    ];

    if params.use_date == UseDate::Published {
        query.push(("use-date", USE_DATE_FIRST_PUBLISHED.to_string()));
    }

    if let Some(start) = params.start_date {
        query.push(("start-date", format_date(start)));
    }

    // Upstream treats end-date as exclusive; move it forward a day so the
    // requested end date is included.
    if let Some(end) = params.end_date {
        let end = end.checked_add_days(Days::new(1)).unwrap_or(end);
        query.push(("end-date", format_date(end)));
    }

    query
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
