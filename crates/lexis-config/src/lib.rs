#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod provider;

use serde::Deserialize;

pub use provider::*;

/// Environment variable holding the Google Cloud project identifier
pub const PROJECT_ID_VAR: &str = "GOOGLE_PROJECT_ID";

/// Environment variable overriding the Translation API base URL
pub const BASE_URL_VAR: &str = "GOOGLE_TRANSLATE_BASE_URL";

/// Top-level Lexis configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Translation provider configuration
    pub provider: ProviderConfig,
}
