//! Generic API call wrapper
//!
//! `ApiClient::call` never returns `Err`: a response, a transport
//! failure, and an unparseable body all collapse into the same
//! `ApiResponse` shape, so page code only ever branches on `success`.
//!
//! The wire is behind the `Transport` trait; tests inject mocks,
//! production uses `ReqwestTransport`. The wrapper imposes no timeout
//! or cancellation of its own and each call is independent.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// HTTP method for a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

/// Caller-supplied request options
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub method: Method,
    /// Extra headers; these override the default `Content-Type`
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl CallOptions {
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Result of a call. `status == 0` means no structured response was
/// obtained (network or parse failure).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub success: bool,
    pub status: u16,
    pub data: Option<Value>,
    pub error: Option<String>,
}

impl ApiResponse {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            status: 0,
            data: None,
            error: Some(message),
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Fully-resolved request handed to the transport
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Raw response before body parsing
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: TransportRequest)
        -> Result<TransportResponse, TransportError>;
}

/// The call wrapper
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Client backed by a real HTTP transport
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Issue a request and shape the outcome into an `ApiResponse`
    pub async fn call(&self, url: &str, options: CallOptions) -> ApiResponse {
        // Default JSON content type, caller headers win
        let mut headers: Vec<(String, String)> =
            vec![("Content-Type".to_string(), "application/json".to_string())];
        for (name, value) in options.headers {
            match headers
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
            {
                Some(slot) => slot.1 = value,
                None => headers.push((name, value)),
            }
        }

        let request = TransportRequest {
            url: url.to_string(),
            method: options.method,
            headers,
            body: options.body.map(|value| value.to_string()),
        };

        tracing::debug!("{} {}", request.method.as_str(), request.url);

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => return ApiResponse::failure(e.to_string()),
        };

        match serde_json::from_str::<Value>(&response.body) {
            Ok(data) => ApiResponse {
                success: (200..300).contains(&response.status),
                status: response.status,
                data: Some(data),
                error: None,
            },
            Err(e) => ApiResponse::failure(format!("invalid response body: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Production transport over reqwest
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Transport double returning a canned outcome and recording the
    /// requests it saw
    pub struct MockTransport {
        pub outcome: Result<TransportResponse, String>,
        pub seen: Mutex<Vec<TransportRequest>>,
    }

    impl MockTransport {
        pub fn responding(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                outcome: Ok(TransportResponse {
                    status,
                    body: body.to_string(),
                }),
                seen: Mutex::new(Vec::new()),
            })
        }

        pub fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                outcome: Err(message.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn execute(
            &self,
            request: TransportRequest,
        ) -> Result<TransportResponse, TransportError> {
            self.seen.lock().unwrap().push(request);
            match &self.outcome {
                Ok(response) => Ok(response.clone()),
                Err(message) => Err(TransportError::Network(message.clone())),
            }
        }
    }
}
