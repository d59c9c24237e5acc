//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::error::{ApiError, ApiResult};
use super::transport::{ApiRequest, ApiResponse, Transport};

/// Replays queued responses in order and records every request it sees
#[derive(Default)]
pub struct RecordingTransport {
    responses: RefCell<VecDeque<ApiResult<ApiResponse>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_raw(status, &body.to_string());
    }

    pub fn push_raw(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn push_error(&self, error: ApiError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".into())))
    }
}
