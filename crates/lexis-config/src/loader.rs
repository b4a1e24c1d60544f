use std::path::Path;

use url::Url;

use crate::{BASE_URL_VAR, Config, PROJECT_ID_VAR, ProviderConfig};

impl Config {
    /// Build configuration from the process environment
    ///
    /// Reads the project identifier from `GOOGLE_PROJECT_ID` and an optional
    /// base URL override from `GOOGLE_TRANSLATE_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the project identifier is unset or empty, or if the
    /// base URL override is not a valid URL
    pub fn from_env() -> anyhow::Result<Self> {
        let project_id = match std::env::var(PROJECT_ID_VAR) {
            Ok(value) => value,
            Err(std::env::VarError::NotPresent) => anyhow::bail!("{PROJECT_ID_VAR} not set"),
            Err(e) => anyhow::bail!("{PROJECT_ID_VAR} is unreadable: {e}"),
        };

        let base_url = match std::env::var(BASE_URL_VAR) {
            Ok(raw) if !raw.is_empty() => Some(
                Url::parse(&raw).map_err(|e| anyhow::anyhow!("{BASE_URL_VAR} is not a valid URL: {e}"))?,
            ),
            _ => None,
        };

        let config = Self {
            provider: ProviderConfig { project_id, base_url },
        };

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        tracing::debug!(path = %path.display(), "loading configuration file");

        Self::from_toml(&raw)
    }

    /// Parse configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if placeholder expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Replace the provider base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.provider.base_url = Some(base_url);
        self
    }

    /// Validate that the configuration can be used to reach the provider
    ///
    /// # Errors
    ///
    /// Returns an error if the project identifier is empty or the base URL
    /// does not use an HTTP scheme
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.provider.project_id.is_empty() {
            anyhow::bail!("{PROJECT_ID_VAR} not set");
        }

        if let Some(ref base_url) = self.provider.base_url
            && !matches!(base_url.scheme(), "http" | "https")
        {
            anyhow::bail!("provider base_url must use http or https, got `{}`", base_url.scheme());
        }

        Ok(())
    }
}
