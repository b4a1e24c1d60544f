use std::io::Read;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::Result;

/// A single translation request read from standard input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    #[serde(deserialize_with = "null_as_empty")]
    pub text: String,
    /// Source language code; empty lets the provider detect it
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source_lang: String,
    /// Target language code, passed to the provider unchecked
    #[serde(default, deserialize_with = "null_as_empty")]
    pub target_lang: String,
}

/// `null` leaves a string field empty
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl TranslationRequest {
    /// Decode a request from its JSON text
    pub fn from_json(input: &str) -> Result<Self> {
        Self::from_reader(input.as_bytes())
    }

    /// Decode the first JSON value of a reader as a request
    ///
    /// Anything after that value is left unread. Read failures and invalid
    /// UTF-8 are reported as input errors too.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::Deserializer::from_reader(reader)
            .into_iter::<Self>()
            .next()
            .unwrap_or_else(|| Err(de::Error::custom("EOF while parsing a value")))
            .map_err(Into::into)
    }
}

/// Translation result written to standard output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResponse {
    pub translated_text: String,
}

impl TranslationResponse {
    /// Encode as a single line of JSON, without the trailing newline
    pub fn to_json_line(&self) -> String {
        // A struct of one string field always serializes
        serde_json::to_string(self).unwrap_or_default()
    }
}
