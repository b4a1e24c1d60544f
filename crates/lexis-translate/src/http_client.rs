use std::time::Duration;

use reqwest::Client;

use crate::error::{Result, TranslateError};

/// Build the HTTP client for a single provider call
///
/// The timeout covers the whole exchange, from connecting until the response
/// body has been read. Idle connections are not kept; the process makes one call.
pub fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(0)
        .tcp_nodelay(true)
        .build()
        .map_err(|e| TranslateError::Internal(format!("failed to build HTTP client: {e}")))
}
