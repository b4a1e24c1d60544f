use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// Whole-call deadline for the provider request (connect, send and receive)
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Translation provider settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Google Cloud project the translation call is authorized and billed under
    pub project_id: String,
    /// Base URL override, e.g. a proxy in front of the Translation API
    #[serde(default)]
    pub base_url: Option<Url>,
}

impl ProviderConfig {
    /// Request timeout applied to the provider call
    pub const fn timeout(&self) -> Duration {
        REQUEST_TIMEOUT
    }
}
