//! Client for the serverless utility endpoints.
//!
//! These handlers report validation problems in the response payload
//! (`isValid: false` / `success: false`) rather than through the status code,
//! so a non-2xx response whose body carries the payload's status flag is
//! returned to the caller for inspection.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::transport::{ApiRequest, HttpTransport, Transport};
use crate::error::{AppError, Result};
use crate::models::{
    ApiConfig, ApiKeyUpdate, ConnectionStatus, KeyUpdateAck, RssValidation, RssValidationRequest,
};
use crate::utils::endpoint_url;

const TEST_API_KEYS: &str = "test-api-keys";
const VALIDATE_RSS: &str = "validate-rss";
const UPDATE_API_KEYS: &str = "update-api-keys";

/// Client for connectivity checks, RSS validation and key updates.
#[derive(Debug, Clone)]
pub struct UtilityClient<T = HttpTransport> {
    transport: T,
    functions_url: String,
}

impl UtilityClient<HttpTransport> {
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Ok(Self::new(
            HttpTransport::from_config(config)?,
            config.functions_url.clone(),
        ))
    }
}

impl<T: Transport> UtilityClient<T> {
    pub fn new(transport: T, functions_url: impl Into<String>) -> Self {
        Self {
            transport,
            functions_url: functions_url.into(),
        }
    }

    /// Ask which third-party API keys are configured and reachable.
    ///
    /// This endpoint has no in-band failure payload; any non-2xx response fails.
    pub async fn test_connection(&self) -> Result<ConnectionStatus> {
        let url = endpoint_url(&self.functions_url, TEST_API_KEYS)?;
        self.call(ApiRequest::get(url), "Failed to test API connection", None)
            .await
    }

    /// Validate an RSS feed URL.
    ///
    /// An empty URL is reported in the payload (`is_valid == false`) without a request.
    pub async fn validate_rss(&self, feed_url: &str) -> Result<RssValidation> {
        let feed_url = feed_url.trim();
        if feed_url.is_empty() {
            return Ok(RssValidation {
                is_valid: false,
                error: Some("URL is required".to_string()),
                ..Default::default()
            });
        }

        let body = RssValidationRequest {
            url: feed_url.to_string(),
        };
        let request = self.post(VALIDATE_RSS, &body)?;
        let result: RssValidation = self
            .call(request, "Failed to validate RSS feed", Some("isValid"))
            .await?;

        if !result.is_valid {
            log::info!(
                "Feed {} is not valid: {}",
                feed_url,
                result.error.as_deref().unwrap_or("no reason given")
            );
        }
        Ok(result)
    }

    /// Submit new API keys. The endpoint only acknowledges; it stores nothing.
    pub async fn update_api_keys(&self, keys: &ApiKeyUpdate) -> Result<KeyUpdateAck> {
        let request = self.post(UPDATE_API_KEYS, keys)?;
        self.call(request, "Failed to update API keys", Some("success"))
            .await
    }

    fn post(&self, path: &str, body: &impl Serialize) -> Result<ApiRequest> {
        let url = endpoint_url(&self.functions_url, path)?;
        Ok(ApiRequest::post_json(url, serde_json::to_string(body)?))
    }

    /// Send `request` and decode the payload.
    ///
    /// A non-2xx body is returned as a payload only when it carries the
    /// `in_band_flag` field; everything else fails with [`AppError::Fetch`].
    async fn call<D: DeserializeOwned>(
        &self,
        request: ApiRequest,
        failure: &str,
        in_band_flag: Option<&str>,
    ) -> Result<D> {
        let path = request.url.path().to_string();
        log::debug!("{:?} {}", request.method, request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{} ({}): {}", failure, path, e);
            AppError::fetch_failed(failure, e)
        })?;

        if response.is_success() {
            return Ok(serde_json::from_str(&response.body)?);
        }

        let in_band = in_band_flag.and_then(|flag| {
            serde_json::from_str::<Value>(&response.body)
                .ok()
                .filter(|body| body.get(flag).is_some_and(Value::is_boolean))
                .and_then(|body| serde_json::from_value(body).ok())
        });

        in_band.ok_or_else(|| {
            log::warn!(
                "{} ({}): HTTP {}: {}",
                failure,
                path,
                response.status,
                response.body
            );
            AppError::fetch(failure, response.status)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::FakeTransport;
    use super::super::transport::Method;
    use super::*;

    const FUNCTIONS: &str = "http://localhost:54321/functions/v1";

    #[tokio::test]
    async fn test_connection_status() {
        let transport = FakeTransport::new().with(
            "/functions/v1/test-api-keys",
            200,
            r#"{"firecrawl":{"configured":true,"tested":true},"openai":{"configured":true,"tested":false}}"#,
        );
        let client = UtilityClient::new(transport, FUNCTIONS);

        let status = client.test_connection().await.unwrap();
        assert!(status.firecrawl.tested);
        assert!(!status.openai.tested);
        assert!(!status.all_ok());
    }

    #[tokio::test]
    async fn test_validate_rss_posts_url() {
        let transport = FakeTransport::new().with(
            "/functions/v1/validate-rss",
            200,
            r#"{"isValid":true,"title":"Dallas Sales","itemCount":12,"description":"Weekend sales"}"#,
        );
        let client = UtilityClient::new(transport, FUNCTIONS);

        let result = client.validate_rss(" https://feeds.example.com/sales.xml ").await.unwrap();
        assert!(result.is_valid);
        assert_eq!(result.item_count, 12);

        let requests = client.transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"url":"https://feeds.example.com/sales.xml"}"#)
        );
    }

    #[tokio::test]
    async fn test_validate_rss_in_band_failure_on_error_status() {
        let transport = FakeTransport::new().with(
            "/functions/v1/validate-rss",
            400,
            r#"{"isValid":false,"title":"","itemCount":0,"description":"","error":"Not a valid RSS feed"}"#,
        );
        let client = UtilityClient::new(transport, FUNCTIONS);

        let result = client.validate_rss("https://example.com").await.unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Not a valid RSS feed"));
    }

    #[tokio::test]
    async fn test_validate_rss_empty_url_reported_in_payload() {
        let client = UtilityClient::new(FakeTransport::new(), FUNCTIONS);

        let result = client.validate_rss("   ").await.unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("URL is required"));
        assert!(client.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_connection_server_error_not_swallowed() {
        let transport = FakeTransport::new().with(
            "/functions/v1/test-api-keys",
            500,
            r#"{"error":"Internal server error"}"#,
        );
        let client = UtilityClient::new(transport, FUNCTIONS);

        let err = client.test_connection().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to test API connection");
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_connection_empty_object_on_not_found() {
        let transport = FakeTransport::new().with("/functions/v1/test-api-keys", 404, "{}");
        let client = UtilityClient::new(transport, FUNCTIONS);

        let err = client.test_connection().await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_server_error_without_payload() {
        let transport =
            FakeTransport::new().with("/functions/v1/validate-rss", 500, r#"{"error":"boom"}"#);
        let client = UtilityClient::new(transport, FUNCTIONS);

        let err = client.validate_rss("https://example.com").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to validate RSS feed");
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_update_api_keys_ack() {
        let transport = FakeTransport::new().with(
            "/functions/v1/update-api-keys",
            200,
            r#"{"success":true,"message":"Set the keys as project secrets"}"#,
        );
        let client = UtilityClient::new(transport, FUNCTIONS);

        let keys = ApiKeyUpdate {
            firecrawl_api_key: Some("fc-123".into()),
            ..Default::default()
        };
        let ack = client.update_api_keys(&keys).await.unwrap();
        assert!(ack.success);
        assert!(ack.error.is_none());
    }

    #[tokio::test]
    async fn test_update_api_keys_in_band_failure() {
        let transport = FakeTransport::new().with(
            "/functions/v1/update-api-keys",
            400,
            r#"{"success":false,"error":"No API keys provided"}"#,
        );
        let client = UtilityClient::new(transport, FUNCTIONS);

        let ack = client.update_api_keys(&ApiKeyUpdate::default()).await.unwrap();
        assert!(!ack.success);
        assert_eq!(ack.error.as_deref(), Some("No API keys provided"));
        assert_eq!(
            client.transport.requests()[0].body.as_deref(),
            Some("{}")
        );
    }

    #[tokio::test]
    async fn test_update_api_keys_error_without_flag() {
        let transport = FakeTransport::new().with(
            "/functions/v1/update-api-keys",
            500,
            r#"{"error":"boom"}"#,
        );
        let client = UtilityClient::new(transport, FUNCTIONS);

        let err = client.update_api_keys(&ApiKeyUpdate::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to update API keys");
    }
}
