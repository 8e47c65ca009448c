//! Application configuration loaded from environment variables.

use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Base URL of the EPP server, without trailing slash.
    pub epp_server_uri: String,

    /// Path of the upstream listing endpoint, starting with `/`.
    pub epp_list_path: String,

    /// Timeout for upstream requests. `None` waits indefinitely.
    pub epp_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `PREPRINTS_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `EPP_SERVER_URI`: EPP server base URL (default: "http://localhost:3000")
    /// - `EPP_LIST_PATH`: Listing endpoint path (default: "/api/preprints-no-content")
    /// - `EPP_TIMEOUT_SECS`: Upstream request timeout in seconds (default: none)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("PREPRINTS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let epp_server_uri = std::env::var("EPP_SERVER_URI")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        let epp_list_path = std::env::var("EPP_LIST_PATH")
            .unwrap_or_else(|_| "/api/preprints-no-content".to_string());
        let epp_list_path = format!("/{}", epp_list_path.trim_start_matches('/'));

        let epp_timeout = match std::env::var("EPP_TIMEOUT_SECS") {
            Ok(raw) if !raw.trim().is_empty() => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    anyhow::anyhow!("EPP_TIMEOUT_SECS must be a positive integer, got '{raw}'")
                })?;
                if secs == 0 {
                    anyhow::bail!("EPP_TIMEOUT_SECS must be a positive integer, got '{raw}'");
                }
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        tracing::info!(
            bind_addr = %bind_addr,
            epp_server_uri = %epp_server_uri,
            epp_list_path = %epp_list_path,
            epp_timeout_secs = epp_timeout.map(|t| t.as_secs()),
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            epp_server_uri,
            epp_list_path,
            epp_timeout,
        })
    }

    /// Full URL of the upstream listing endpoint.
    pub fn list_url(&self) -> String {
        format!("{}{}", self.epp_server_uri, self.epp_list_path)
    }
}
