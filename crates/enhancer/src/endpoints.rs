//! Typed wrappers over the template's own API
//!
//! The page ships against a small health + users API; these wrappers
//! put serde models on top of the generic call wrapper so page code
//! gets typed payloads while keeping the wrapper's never-throw
//! contract: a typed decode failure of an otherwise successful call is
//! reported in-band, not raised.

use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use crate::api::{ApiClient, ApiResponse, CallOptions, Method};

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub environment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pong {
    #[serde(default)]
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub is_active: bool,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAck {
    #[serde(default)]
    pub success: bool,
    pub message: String,
}

fn default_true() -> bool {
    true
}

/// A typed view of an `ApiResponse`
#[derive(Debug, Clone)]
pub struct TypedResponse<T> {
    pub success: bool,
    pub status: u16,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: serde::de::DeserializeOwned> TypedResponse<T> {
    fn from_api(response: ApiResponse) -> Self {
        let ApiResponse {
            success,
            status,
            data,
            error,
        } = response;

        match data {
            Some(value) if success => match serde_json::from_value::<T>(value) {
                Ok(decoded) => Self {
                    success,
                    status,
                    data: Some(decoded),
                    error,
                },
                Err(e) => Self {
                    success: false,
                    status,
                    data: None,
                    error: Some(format!("unexpected response shape: {}", e)),
                },
            },
            _ => Self {
                success,
                status,
                data: None,
                error,
            },
        }
    }
}

/// Typed client for the template's endpoints
#[derive(Clone)]
pub struct ApiService {
    client: ApiClient,
    base_url: String,
}

impl ApiService {
    pub fn new(client: ApiClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn health(&self) -> TypedResponse<HealthStatus> {
        let response = self
            .client
            .call(&self.endpoint("/api/health/"), CallOptions::default())
            .await;
        TypedResponse::from_api(response)
    }

    pub async fn ping(&self) -> TypedResponse<Pong> {
        let response = self
            .client
            .call(&self.endpoint("/api/health/ping"), CallOptions::default())
            .await;
        TypedResponse::from_api(response)
    }

    pub async fn list_users(&self, skip: u32, limit: u32) -> TypedResponse<Vec<User>> {
        let url = match Url::parse(&self.endpoint("/api/users/")) {
            Ok(mut url) => {
                url.query_pairs_mut()
                    .append_pair("skip", &skip.to_string())
                    .append_pair("limit", &limit.to_string());
                url.to_string()
            }
            Err(e) => {
                return TypedResponse {
                    success: false,
                    status: 0,
                    data: None,
                    error: Some(format!("invalid base url: {}", e)),
                }
            }
        };
        TypedResponse::from_api(self.client.call(&url, CallOptions::default()).await)
    }

    pub async fn get_user(&self, user_id: i64) -> TypedResponse<User> {
        let url = self.endpoint(&format!("/api/users/{}", user_id));
        TypedResponse::from_api(self.client.call(&url, CallOptions::default()).await)
    }

    pub async fn get_user_by_username(&self, username: &str) -> TypedResponse<User> {
        let url = self.endpoint(&format!("/api/users/username/{}", username));
        TypedResponse::from_api(self.client.call(&url, CallOptions::default()).await)
    }

    pub async fn create_user(&self, user: &UserCreate) -> TypedResponse<User> {
        let options = CallOptions::default()
            .method(Method::Post)
            .body(json!(user));
        let url = self.endpoint("/api/users/");
        TypedResponse::from_api(self.client.call(&url, options).await)
    }

    pub async fn update_user(&self, user_id: i64, update: &UserUpdate) -> TypedResponse<User> {
        let options = CallOptions::default()
            .method(Method::Put)
            .body(json!(update));
        let url = self.endpoint(&format!("/api/users/{}", user_id));
        TypedResponse::from_api(self.client.call(&url, options).await)
    }

    pub async fn delete_user(&self, user_id: i64) -> TypedResponse<DeleteAck> {
        let options = CallOptions::default().method(Method::Delete);
        let url = self.endpoint(&format!("/api/users/{}", user_id));
        TypedResponse::from_api(self.client.call(&url, options).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::MockTransport;

    fn service(transport: std::sync::Arc<MockTransport>) -> ApiService {
        ApiService::new(ApiClient::with_transport(transport), "http://api.test")
    }

    #[tokio::test]
    async fn test_health_decodes() {
        let transport = MockTransport::responding(
            200,
            r#"{"status":"healthy","version":"0.1.0","environment":"development"}"#,
        );
        let api = service(transport);

        let response = api.health().await;
        assert!(response.success);
        let health = response.data.unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.environment, "development");
    }

    #[tokio::test]
    async fn test_list_users_builds_query() {
        let transport = MockTransport::responding(200, "[]");
        let api = service(transport.clone());

        let response = api.list_users(10, 50).await;
        assert!(response.success);
        assert_eq!(response.data.unwrap().len(), 0);

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].url, "http://api.test/api/users/?skip=10&limit=50");
    }

    #[tokio::test]
    async fn test_create_user_posts_payload() {
        let transport = MockTransport::responding(
            201,
            r#"{"id":1,"username":"ada","email":"ada@example.com","is_active":true}"#,
        );
        let api = service(transport.clone());

        let response = api
            .create_user(&UserCreate {
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                full_name: None,
                is_active: true,
                password: "correcthorse".to_string(),
            })
            .await;

        assert!(response.success);
        assert_eq!(response.status, 201);
        assert_eq!(response.data.unwrap().username, "ada");

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].method, Method::Post);
        let body = seen[0].body.as_deref().unwrap();
        assert!(body.contains("\"username\":\"ada\""));
        // Optional fields left out entirely
        assert!(!body.contains("full_name"));
    }

    #[tokio::test]
    async fn test_not_found_keeps_wrapper_shape() {
        let transport = MockTransport::responding(404, r#"{"detail":"User with ID 9 not found"}"#);
        let api = service(transport);

        let response = api.get_user(9).await;
        assert!(!response.success);
        assert_eq!(response.status, 404);
        assert!(response.data.is_none());
    }

    #[tokio::test]
    async fn test_shape_mismatch_reported_in_band() {
        let transport = MockTransport::responding(200, r#"{"totally":"unrelated"}"#);
        let api = service(transport);

        let response = api.get_user(1).await;
        assert!(!response.success);
        assert_eq!(response.status, 200);
        assert!(response.error.unwrap().contains("unexpected response shape"));
    }
}
