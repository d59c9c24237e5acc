//! Shared request plumbing for the typed clients.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{ApiError, ApiResult};
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::models::HealthStatus;
use crate::session::SessionContext;

/// Transport plus session: builds authenticated requests and decodes replies
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn Transport>, session: SessionContext) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Request carrying the current bearer token, if any
    pub fn request(&self, method: Method, path: impl Into<String>) -> ApiRequest {
        ApiRequest::new(method, path).bearer(self.session.get())
    }

    /// Send and decode a JSON body
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let response = self.dispatch(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and ignore the body
    pub async fn send_empty(&self, request: ApiRequest) -> ApiResult<()> {
        self.dispatch(request).await.map(|_| ())
    }

    /// Check if the backend is reachable
    pub async fn health(&self) -> ApiResult<HealthStatus> {
        self.send_json(ApiRequest::new(Method::Get, "/health")).await
    }

    async fn dispatch(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let method = request.method;
        let path = request.path.clone();
        tracing::debug!(method = method.as_str(), path = %path, "API request");

        let response = self.transport.execute(request).await.map_err(|e| {
            tracing::warn!(method = method.as_str(), path = %path, error = %e, "Request failed");
            e
        })?;

        if response.is_success() {
            Ok(response)
        } else {
            let error = ApiError::from_response(response.status, &response.body);
            tracing::warn!(
                method = method.as_str(),
                path = %path,
                status = response.status,
                error = %error,
                "API returned error"
            );
            Err(error)
        }
    }
}

/// JSON request body
pub(crate) fn encode<T: Serialize>(body: &T) -> ApiResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;

    #[tokio::test]
    async fn test_bearer_attached_when_logged_in() {
        let transport = Rc::new(RecordingTransport::new());
        transport.push_json(200, serde_json::json!({"status": "ok"}));
        transport.push_json(200, serde_json::json!({"status": "ok"}));

        let session = SessionContext::in_memory();
        let client = ApiClient::new(transport.clone(), session.clone());

        let request = client.request(Method::Get, "/cattle");
        assert_eq!(request.bearer, None);
        client.send_empty(request).await.unwrap();

        session.set("tok");
        let request = client.request(Method::Get, "/cattle");
        client.send_empty(request).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].bearer, None);
        assert_eq!(sent[1].bearer.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_error_status_maps_detail() {
        let transport = Rc::new(RecordingTransport::new());
        transport.push_json(404, serde_json::json!({"detail": "Cattle not found"}));

        let client = ApiClient::new(transport, SessionContext::in_memory());
        let err = client
            .send_json::<serde_json::Value>(client.request(Method::Get, "/cattle/x"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                detail: Some("Cattle not found".into())
            }
        );
    }

    #[tokio::test]
    async fn test_bad_body_is_decode_error() {
        let transport = Rc::new(RecordingTransport::new());
        transport.push_raw(200, "not json");

        let client = ApiClient::new(transport, SessionContext::in_memory());
        let err = client.health().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
