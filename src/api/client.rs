//! Request executor for the CATS API
//!
//! One authenticated outbound call per tool invocation, outcome normalized
//! into a JSON value or an [`ApiError`]. Purely a wrapper: no caching, no
//! retries, no state shared across invocations beyond the connection pool
//! the HTTP stack provides by default.

use crate::api::error::{ApiError, FailureKind};
use crate::config::ApiConfig;
use crate::error::{Result, ServerError};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, error};

/// Authenticated client for the upstream CATS API
#[derive(Debug, Clone)]
pub struct CatsClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl CatsClient {
    /// Build a client from API configuration.
    ///
    /// A missing credential is not an error here: tools register regardless,
    /// and each invocation then fails with `MissingCredential`.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ServerError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Base address requests are issued against (trailing slash stripped)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a credential is configured
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Execute one authenticated request against the upstream API.
    ///
    /// The path is appended to the configured base address. Query parameters
    /// and the optional JSON body are forwarded as-is. Non-2xx statuses are
    /// classified by range; an empty 2xx body yields an empty structured
    /// success, never null.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> std::result::Result<Value, ApiError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            error!("CATS_API_KEY not configured");
            ApiError::MissingCredential
        })?;

        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!("Making {} request to {}", method, path);

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, format!("Token {api_key}"));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                error!("Timeout error for {}: {}", path, e);
                ApiError::Timeout {
                    method: method.to_string(),
                    path: path.to_string(),
                    timeout_secs: self.timeout_secs,
                }
            } else {
                error!("HTTP error for {}: {}", path, e);
                ApiError::Network {
                    method: method.to_string(),
                    path: path.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();

        // Surface upstream rate-limit headroom when the API reports it
        if let Some(remaining) = response
            .headers()
            .get("X-Rate-Limit-Remaining")
            .and_then(|v| v.to_str().ok())
        {
            debug!("Rate limit remaining: {}", remaining);
        }

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!("HTTP error {} for {}: {}", status.as_u16(), path, detail);
            return Err(ApiError::Status {
                kind: FailureKind::from_status(status.as_u16()),
                status: status.as_u16(),
                method: method.to_string(),
                path: path.to_string(),
                detail,
            });
        }

        let bytes = response.bytes().await.map_err(|e| ApiError::Network {
            method: method.to_string(),
            path: path.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

        // 204 No Content and other empty successes
        if status == StatusCode::NO_CONTENT || bytes.is_empty() {
            return Ok(json!({
                "status": "success",
                "status_code": status.as_u16(),
            }));
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Network {
            method: method.to_string(),
            path: path.to_string(),
            detail: format!("Invalid JSON in response body: {e}"),
        })
    }
}
