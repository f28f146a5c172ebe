//! Request and response payloads of the serverless utility endpoints.

use serde::{Deserialize, Serialize};

/// Whether one third-party API key is set and answered a test call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct KeyStatus {
    pub configured: bool,
    pub tested: bool,
}

/// Response of the connectivity-check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ConnectionStatus {
    #[serde(default)]
    pub firecrawl: KeyStatus,
    #[serde(default)]
    pub openai: KeyStatus,
}

impl ConnectionStatus {
    /// Both keys are configured and passed their test call.
    pub fn all_ok(&self) -> bool {
        [self.firecrawl, self.openai]
            .iter()
            .all(|k| k.configured && k.tested)
    }
}

/// Body of an RSS validation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RssValidationRequest {
    pub url: String,
}

/// Result of validating an RSS feed.
///
/// Validation failures arrive in-band with `is_valid == false` and `error` set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RssValidation {
    pub is_valid: bool,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub item_count: usize,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Keys submitted to the key-update endpoint. Unset keys are omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firecrawl_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
}

/// Acknowledgement returned by the key-update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct KeyUpdateAck {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
