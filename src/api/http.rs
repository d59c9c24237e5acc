//! reqwest transport for native builds.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::error::{ApiError, ApiResult};
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::config::ApiConfig;

/// HTTP transport backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Create a transport for `base_url` (e.g., "http://localhost:8000")
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = request.url(&self.base_url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_error)?;

        Ok(ApiResponse { status, body })
    }
}

fn map_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Network("Request timeout".to_string())
    } else if e.is_connect() {
        ApiError::Network(format!("API unavailable: {}", e))
    } else {
        ApiError::Network(e.to_string())
    }
}
