pub mod google;

use async_trait::async_trait;

use crate::types::{TranslationRequest, TranslationResponse};

/// Trait for translation provider implementations
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate one text, issuing exactly one upstream request
    async fn translate(&self, request: &TranslationRequest) -> crate::error::Result<TranslationResponse>;

    /// Get the provider name
    fn name(&self) -> &str;
}
