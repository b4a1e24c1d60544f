//! Google Cloud Translation v3 provider

use std::{fmt::Write as _, time::Duration};

use async_trait::async_trait;
use lexis_config::ProviderConfig;
use reqwest::{Client, header};
use serde::{Deserialize, Serialize};
use url::Url;

use super::TranslationProvider;
use crate::{
    error::{Result, TranslateError},
    http_client::http_client,
    types::{TranslationRequest, TranslationResponse},
};

/// Default Cloud Translation API base URL
pub const DEFAULT_BASE_URL: &str = "https://translation.googleapis.com/v3";

/// Only plain text is ever sent
const MIME_TYPE: &str = "text/plain";

/// Google Cloud Translation v3 provider
pub struct GoogleTranslateProvider {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl GoogleTranslateProvider {
    /// Create a provider for a project
    ///
    /// Fails with [`TranslateError::Config`] when `project_id` is empty, before
    /// any network activity.
    pub fn new(project_id: &str, base_url: Option<&Url>, timeout: Duration) -> Result<Self> {
        if project_id.is_empty() {
            return Err(TranslateError::Config("GOOGLE_PROJECT_ID not set".to_owned()));
        }

        let base = base_url.map_or(DEFAULT_BASE_URL, Url::as_str);

        Ok(Self {
            client: http_client(timeout)?,
            endpoint: translate_text_url(base, project_id),
            timeout,
        })
    }

    /// Create from provider configuration
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        Self::new(&config.project_id, config.base_url.as_ref(), config.timeout())
    }

    /// URL the translate call is posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, e: &reqwest::Error) -> TranslateError {
        if e.is_timeout() {
            TranslateError::Timeout(self.timeout)
        } else {
            TranslateError::Connection(error_chain(e))
        }
    }
}

/// Build the `translateText` URL; the project identifier is inserted as given
fn translate_text_url(base: &str, project_id: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/projects/{project_id}/locations/global:translateText")
}

/// Render an error with its causes, e.g. the DNS or TLS failure behind a send error
fn error_chain(e: &reqwest::Error) -> String {
    let mut message = e.to_string();
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        let _ = write!(message, ": {cause}");
        source = cause.source();
    }
    message
}

/// Wire format for the `translateText` request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateTextRequest<'a> {
    contents: [&'a str; 1],
    source_language_code: &'a str,
    target_language_code: &'a str,
    mime_type: &'static str,
}

impl<'a> From<&'a TranslationRequest> for TranslateTextRequest<'a> {
    fn from(request: &'a TranslationRequest) -> Self {
        Self {
            contents: [request.text.as_str()],
            source_language_code: &request.source_lang,
            target_language_code: &request.target_lang,
            mime_type: MIME_TYPE,
        }
    }
}

/// Wire format for the `translateText` response
#[derive(Debug, Deserialize)]
struct TranslateTextResponse {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    #[serde(default)]
    translated_text: String,
    #[serde(default)]
    detected_language_code: Option<String>,
}

impl TranslateTextResponse {
    /// Take the first translation; an empty list has nothing to hand back
    fn into_first(self) -> Result<Translation> {
        self.translations
            .into_iter()
            .next()
            .ok_or_else(|| TranslateError::Internal("provider returned no translations".to_owned()))
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse> {
        let body = TranslateTextRequest::from(request);

        tracing::debug!(
            provider = self.name(),
            source = %request.source_lang,
            target = %request.target_lang,
            text_len = request.text.len(),
            "sending translateText request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = self.name(), error = %e, "translateText request failed");
                self.transport_error(&e)
            })?;

        let status = response.status();

        let text = response.text().await.map_err(|e| {
            tracing::error!(provider = self.name(), error = %e, "failed to read translateText response body");
            self.transport_error(&e)
        })?;

        if !status.is_success() {
            tracing::error!(provider = self.name(), status = %status, "Google Translation API error: {text}");

            return Err(TranslateError::ProviderApi {
                status: status.as_u16(),
                body: text,
            });
        }

        let wire_response: TranslateTextResponse = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(provider = self.name(), error = %e, "failed to parse translateText response");
            TranslateError::Decode(e.to_string())
        })?;

        let translation = wire_response.into_first()?;

        if let Some(ref detected) = translation.detected_language_code {
            tracing::debug!(provider = self.name(), detected = %detected, "provider detected source language");
        }

        tracing::debug!(provider = self.name(), "translateText request complete");

        Ok(TranslationResponse {
            translated_text: translation.translated_text,
        })
    }

    fn name(&self) -> &str {
        "google"
    }
}
