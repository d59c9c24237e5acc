//! gloo-net transport
//!
//! Implements the shared `Transport` contract with the browser's fetch.

use async_trait::async_trait;
use gloo_net::http::Request;
use vacuno::api::{ApiError, ApiRequest, ApiResponse, ApiResult, Method, Transport};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const API_URL_KEY: &str = "vacuno_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Fetch-backed transport
#[derive(Debug, Clone)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Transport for the URL stored in local storage
    pub fn from_storage() -> Self {
        Self::new(&get_api_base())
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = request.url(&self.base_url);

        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(format!("Invalid request: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;

        Ok(ApiResponse::new(status, body))
    }
}
