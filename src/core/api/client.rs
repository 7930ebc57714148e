//! The Figma client seam and its reqwest implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::debug;

use super::{ApiError, ApiResult, QueryParams};
use crate::core::config::{FigmaAuth, FigmaConfig};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const FIGMA_TOKEN_HEADER: &str = "x-figma-token";

/// A client shared by every tool.
pub type SharedClient = Arc<dyn FigmaClient>;

/// Verb-specific access to the Figma REST API.
///
/// Paths are relative to the client's base URL (e.g. `/v1/files/abc`).
/// Every method performs exactly one request and fails on a non-success
/// status. Implementations are blocking.
pub trait FigmaClient: Send + Sync {
    fn get(&self, path: &str, query: &QueryParams) -> ApiResult<Value>;

    fn post(&self, path: &str, query: &QueryParams, body: &Value) -> ApiResult<Value>;

    fn put(&self, path: &str, query: &QueryParams, body: &Value) -> ApiResult<Value>;

    fn delete(&self, path: &str, query: &QueryParams) -> ApiResult<Value>;
}

/// [`FigmaClient`] backed by `reqwest::blocking`.
///
/// Must not be called from inside an async context; tools run it on a
/// blocking thread.
#[derive(Debug, Clone)]
pub struct HttpFigmaClient {
    client: Client,
    base_url: String,
}

impl HttpFigmaClient {
    /// Build a client from configuration.
    pub fn new(config: &FigmaConfig) -> ApiResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ApiError::config(format!("invalid base URL '{}': {}", base_url, e)))?;

        let client = Client::builder()
            .default_headers(auth_headers(config.auth())?)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::config(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn execute(&self, request: RequestBuilder, query: &QueryParams) -> ApiResult<Value> {
        let request = if query.is_empty() {
            request
        } else {
            request.query(query.pairs())
        };

        let response = request
            .send()
            .map_err(|e| ApiError::transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .map_err(|e| ApiError::transport(e.to_string()))?;

        debug!("Figma API responded {} ({} bytes)", status, text.len());

        if !status.is_success() {
            return Err(ApiError::status(status.as_u16(), text));
        }

        decode_body(&text)
    }
}

impl FigmaClient for HttpFigmaClient {
    fn get(&self, path: &str, query: &QueryParams) -> ApiResult<Value> {
        self.execute(self.client.get(self.url(path)), query)
    }

    fn post(&self, path: &str, query: &QueryParams, body: &Value) -> ApiResult<Value> {
        self.execute(self.client.post(self.url(path)).json(body), query)
    }

    fn put(&self, path: &str, query: &QueryParams, body: &Value) -> ApiResult<Value> {
        self.execute(self.client.put(self.url(path)).json(body), query)
    }

    fn delete(&self, path: &str, query: &QueryParams) -> ApiResult<Value> {
        self.execute(self.client.delete(self.url(path)), query)
    }
}

fn auth_headers(auth: Option<FigmaAuth<'_>>) -> ApiResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    let (name, raw) = match auth {
        Some(FigmaAuth::OAuth(token)) => (AUTHORIZATION, format!("Bearer {}", token)),
        Some(FigmaAuth::AccessToken(token)) => {
            (HeaderName::from_static(FIGMA_TOKEN_HEADER), token.to_string())
        }
        None => return Ok(headers),
    };

    let mut value = HeaderValue::from_str(&raw)
        .map_err(|_| ApiError::config("token contains characters not allowed in a header"))?;
    value.set_sensitive(true);
    headers.insert(name, value);

    Ok(headers)
}

/// Decode a success body. Empty bodies decode to `null`.
fn decode_body(text: &str) -> ApiResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
