use std::{fmt, time::Duration};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranslateError>;

/// Translation adapter errors
///
/// Every variant is terminal for the process; nothing is retried.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Standard input is not a JSON translation request
    #[error("{0}")]
    InvalidInput(#[from] serde_json::Error),

    /// Required configuration is missing or invalid
    #[error("{0}")]
    Config(String),

    /// Connection or DNS failure before a response arrived
    #[error("connection failed: {0}")]
    Connection(String),

    /// The provider call exceeded its deadline
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Provider answered with a non-success status
    ///
    /// `body` is the raw response text and is shown unchanged, line breaks
    /// included. The category prefix and status always lead the first line.
    #[error("Google API error ({status}): {body}")]
    ProviderApi { status: u16, body: String },

    /// Success status, but the body is not a translation response
    #[error("failed to decode provider response: {0}")]
    Decode(String),

    /// Nothing usable came back, or the client could not be set up
    #[error("internal error: {0}")]
    Internal(String),
}

/// Failure class shown as the prefix of the diagnostic line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Provider,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Input => "Invalid input",
            Self::Config => "Configuration error",
            Self::Provider => "API Error",
        })
    }
}

impl TranslateError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput(_) => ErrorCategory::Input,
            Self::Config(_) => ErrorCategory::Config,
            Self::Connection(_)
            | Self::Timeout(_)
            | Self::ProviderApi { .. }
            | Self::Decode(_)
            | Self::Internal(_) => ErrorCategory::Provider,
        }
    }

    /// Single diagnostic line written to standard error
    pub fn diagnostic(&self) -> String {
        format!("{}: {self}", self.category())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_keeps_raw_body() {
        let err = TranslateError::ProviderApi {
            status: 403,
            body: r#"{"error":{"code":403,"status":"PERMISSION_DENIED"}}"#.to_owned(),
        };

        assert_eq!(err.category(), ErrorCategory::Provider);
        assert_eq!(
            err.diagnostic(),
            r#"API Error: Google API error (403): {"error":{"code":403,"status":"PERMISSION_DENIED"}}"#
        );
    }

    #[test]
    fn multi_line_body_keeps_prefix_on_first_line() {
        let err = TranslateError::ProviderApi {
            status: 500,
            body: "{\n  \"error\": \"backend\"\n}".to_owned(),
        };

        let diagnostic = err.diagnostic();
        assert_eq!(diagnostic.lines().next(), Some("API Error: Google API error (500): {"));
        assert!(diagnostic.ends_with("\"error\": \"backend\"\n}"));
    }

    #[test]
    fn config_error_has_its_own_prefix() {
        let err = TranslateError::Config("GOOGLE_PROJECT_ID not set".to_owned());
        assert_eq!(err.diagnostic(), "Configuration error: GOOGLE_PROJECT_ID not set");
    }

    #[test]
    fn timeout_names_the_deadline() {
        let err = TranslateError::Timeout(Duration::from_secs(10));
        assert_eq!(err.diagnostic(), "API Error: request timed out after 10s");
    }

    #[test]
    fn input_errors_are_classified_as_input() {
        let err: TranslateError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.diagnostic().starts_with("Invalid input: "));
    }
}
