//! HTTP transport for ledgerctl.
//!
//! [`ApiClient`] wraps a `reqwest::Client` with the server base URL and
//! the session bearer token. Every data-access service goes through it;
//! this is the single place where HTTP statuses become [`ApiError`]s.

pub mod error;

use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

pub use error::ApiError;
use error::extract_message;

/// Client for the remote accounting server.
///
/// Cheap to share behind an `Arc`; the token is interior-mutable so a
/// login can install it without rebuilding the services that hold the
/// client.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a client for `base_url` with no session token.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Create a client carrying an existing session token.
    pub fn with_token(base_url: &str, token: &str) -> Result<Self, ApiError> {
        let client = Self::new(base_url)?;
        client.set_token(Some(token.to_string()));
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Install or clear the bearer token used for subsequent requests.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap() = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    /// GET `path` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_json_query(path, &[]).await
    }

    /// GET `path` with query pairs and decode the JSON body.
    pub async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path, query);
        debug!(%url, "GET");
        let req = self.authed(self.http.get(&url));
        Self::decode(req.send().await?).await
    }

    /// POST a JSON body to `path` and decode the JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path, &[]);
        debug!(%url, "POST");
        let req = self.authed(self.http.post(&url)).json(body);
        Self::decode(req.send().await?).await
    }

    /// PUT a JSON body to `path` and decode the JSON response.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path, &[]);
        debug!(%url, "PUT");
        let req = self.authed(self.http.put(&url)).json(body);
        Self::decode(req.send().await?).await
    }

    /// DELETE `path`, discarding any response body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path, &[]);
        debug!(%url, "DELETE");
        let req = self.authed(self.http.delete(&url));
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let text = resp.text().await.unwrap_or_default();
        Err(Self::status_error(status.as_u16(), &text))
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.read().unwrap().as_deref() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(Self::status_error(status.as_u16(), &text));
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn status_error(status: u16, body: &str) -> ApiError {
        let message = extract_message(status, body);
        if status == 401 {
            ApiError::Unauthorized(message)
        } else {
            ApiError::Remote { status, message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::extract::Query;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Pong {
        ok: bool,
    }

    /// Spin up an in-process stub server, return its base URL.
    async fn stub_server() -> String {
        let app = Router::new()
            .route("/ping", get(|| async { Json(serde_json::json!({"ok": true})) }))
            .route(
                "/echo-auth",
                get(|headers: HeaderMap| async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    Json(serde_json::json!({ "auth": auth }))
                }),
            )
            .route(
                "/echo-query",
                get(|Query(q): Query<std::collections::HashMap<String, String>>| async move {
                    Json(serde_json::json!({ "limit": q.get("limit") }))
                }),
            )
            .route(
                "/denied",
                get(|| async {
                    (StatusCode::UNAUTHORIZED, Json(serde_json::json!({"error": "no token"})))
                }),
            )
            .route(
                "/boom",
                get(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(serde_json::json!({"code": "INTERNAL", "message": "kaboom"})),
                    )
                }),
            )
            .route("/not-json", get(|| async { "hello" }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn get_json_decodes_success() {
        let base = stub_server().await;
        let client = ApiClient::new(&base).unwrap();
        let pong: Pong = client.get_json("/ping").await.unwrap();
        assert!(pong.ok);
    }

    #[tokio::test]
    async fn bearer_token_is_attached() {
        let base = stub_server().await;
        let client = ApiClient::with_token(&base, "tok-123").unwrap();
        let v: serde_json::Value = client.get_json("/echo-auth").await.unwrap();
        assert_eq!(v["auth"], "Bearer tok-123");

        client.set_token(None);
        let v: serde_json::Value = client.get_json("/echo-auth").await.unwrap();
        assert_eq!(v["auth"], "");
    }

    #[tokio::test]
    async fn query_pairs_are_sent() {
        let base = stub_server().await;
        let client = ApiClient::new(&base).unwrap();
        let v: serde_json::Value = client
            .get_json_query("/echo-query", &[("limit", "5".to_string())])
            .await
            .unwrap();
        assert_eq!(v["limit"], "5");
    }

    #[tokio::test]
    async fn status_401_maps_to_unauthorized() {
        let base = stub_server().await;
        let client = ApiClient::new(&base).unwrap();
        let err = client.get_json::<Pong>("/denied").await.unwrap_err();
        match err {
            ApiError::Unauthorized(msg) => assert_eq!(msg, "no token"),
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn other_statuses_map_to_remote() {
        let base = stub_server().await;
        let client = ApiClient::new(&base).unwrap();
        let err = client.get_json::<Pong>("/boom").await.unwrap_err();
        match err {
            ApiError::Remote { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "kaboom");
            }
            other => panic!("expected Remote, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn bad_body_maps_to_decode() {
        let base = stub_server().await;
        let client = ApiClient::new(&base).unwrap();
        let err = client.get_json::<Pong>("/not-json").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn transport_error_when_server_unreachable() {
        // Port 9 (discard) is about as reliably closed as it gets.
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let err = client.get_json::<Pong>("/ping").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
