//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::upstream::{EppClient, PreprintSource};

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Where listing requests are served from.
    pub source: Arc<dyn PreprintSource>,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state talking to the configured EPP server.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = EppClient::new(&config)?;

        tracing::info!(list_url = %client.list_url(), "application state initialized");

        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create application state with an explicit record source.
    pub fn with_source(config: Config, source: Arc<dyn PreprintSource>) -> Self {
        Self {
            source,
            config: Arc::new(config),
        }
    }
}
