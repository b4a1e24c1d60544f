#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod types;

pub use error::{ErrorCategory, Result, TranslateError};
pub use provider::{
    TranslationProvider,
    google::{DEFAULT_BASE_URL, GoogleTranslateProvider},
};
pub use types::{TranslationRequest, TranslationResponse};

