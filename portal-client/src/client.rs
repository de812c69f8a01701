use std::sync::Arc;

use portal_model::CredentialProvider;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::{Error, Result};
use crate::config::ClientConfig;

/// HTTP client for the recruitment portal API.
///
/// Holds no per-request state: cloning shares the connection pool and the
/// credential provider, and any number of calls may run at once.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

impl Client {
    pub fn new(config: &ClientConfig, credentials: Arc<dyn CredentialProvider>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;
        Ok(Self::with_client(http, &config.base_url, credentials))
    }

    pub fn with_client(
        http: reqwest::Client,
        base_url: &str,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<R>(&self, path: &str, query: &[(&str, String)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = self.http.get(self.url(path)).query(query);
        self.send(path, request).await
    }

    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)).json(body);
        self.send(path, request).await
    }

    pub(crate) async fn put<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.http.put(self.url(path)).json(body);
        self.send(path, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The token is looked up for every request and never kept around
    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.credentials.token()?;
        Ok(match token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => request.bearer_auth(token),
            _ => request,
        })
    }

    async fn send<R>(&self, path: &str, request: RequestBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = self.authorize(request)?;
        log::debug!("requesting {}{}", self.base_url, path);
        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            log::error!(
                "request to {} failed with status {}, error resp body: {:?}",
                path,
                status,
                body,
            );
            return Err(Error::Http {
                path: path.to_owned(),
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }
        log::debug!("successfully retrieved {}", path);
        let parsed = serde_json::from_str(&body).map_err(|e| {
            log::error!("failed to parse body of {}: {}", path, e);
            e
        })?;
        Ok(parsed)
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.error.or(parsed.msg).or(parsed.message) {
            return message;
        }
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_owned();
    }
    status.canonical_reason().unwrap_or("Unknown error").to_owned()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::stub;
    use axum::http::HeaderMap as StubHeaders;
    use axum::routing::get;
    use axum::{Json, Router};
    use portal_model::StaticToken;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingToken(AtomicUsize);

    impl CredentialProvider for CountingToken {
        fn token(&self) -> std::io::Result<Option<String>> {
            let n = self.0.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(Some(format!("token-{}", n)))
        }
    }

    struct BrokenStore;

    impl CredentialProvider for BrokenStore {
        fn token(&self) -> std::io::Result<Option<String>> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked"))
        }
    }

    async fn echo_auth(headers: StubHeaders) -> Json<Value> {
        let auth = headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        Json(json!({ "authorization": auth }))
    }

    fn echo_router() -> Router {
        Router::new().route("/api/echo", get(echo_auth))
    }

    #[tokio::test]
    async fn test_bearer_header_attached() {
        let base_url = stub::serve(echo_router()).await;
        let client = stub::client(&base_url, StaticToken::new("secret"));
        let body: Value = client.get("/echo", &[]).await.expect("request failed");
        assert_eq!(body["authorization"], "Bearer secret");
    }

    #[tokio::test]
    async fn test_header_omitted_without_token() {
        let base_url = stub::serve(echo_router()).await;
        let client = stub::client(&base_url, StaticToken::anonymous());
        let body: Value = client.get("/echo", &[]).await.expect("request failed");
        assert_eq!(body["authorization"], Value::Null);
    }

    #[tokio::test]
    async fn test_token_read_on_every_request() {
        let base_url = stub::serve(echo_router()).await;
        let client = stub::client(&base_url, CountingToken(AtomicUsize::new(0)));
        let first: Value = client.get("/echo", &[]).await.unwrap();
        let second: Value = client.get("/echo", &[]).await.unwrap();
        assert_eq!(first["authorization"], "Bearer token-1");
        assert_eq!(second["authorization"], "Bearer token-2");
    }

    #[tokio::test]
    async fn test_credential_failure_is_surfaced() {
        let base_url = stub::serve(echo_router()).await;
        let client = stub::client(&base_url, BrokenStore);
        let result: Result<Value> = client.get("/echo", &[]).await;
        assert!(matches!(result, Err(Error::Credentials(_))));
    }

    #[tokio::test]
    async fn test_network_error_has_no_status() {
        let base_url = stub::unreachable().await;
        let client = stub::client(&base_url, StaticToken::anonymous());
        let err = client.get::<Value>("/echo", &[]).await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_error() {
        let router = Router::new().route("/api/html", get(|| async { "<html>oops</html>" }));
        let base_url = stub::serve(router).await;
        let client = stub::client(&base_url, StaticToken::anonymous());
        let err = client.get::<Value>("/html", &[]).await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_error_message_sources() {
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, r#"{"error": "Job not found"}"#),
            "Job not found"
        );
        assert_eq!(
            error_message(StatusCode::UNAUTHORIZED, r#"{"msg": "Missing Authorization Header"}"#),
            "Missing Authorization Header"
        );
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, "upstream down"), "upstream down");
        assert_eq!(error_message(StatusCode::SERVICE_UNAVAILABLE, ""), "Service Unavailable");
    }
}
