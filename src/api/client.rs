//! The configured API client.
//!
//! # Responsibilities
//! - Join request paths under the configured origin and base path
//! - Enforce the request deadline
//! - Classify failures into the caller-visible error kinds
//! - Run the interceptor chains around every request

use std::sync::Arc;
use std::time::{Duration, Instant};

use url::Url;

use crate::api::error::ApiError;
use crate::api::interceptor::{
    run_request_chain, run_response_chain, RequestInterceptor, ResponseInterceptor,
};
use crate::config::ApiConfig;

/// Declarative description of one outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    pub method: reqwest::Method,
    /// Path relative to the configured base path.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    /// JSON body, when present.
    pub body: Option<serde_json::Value>,
}

impl RequestConfig {
    pub fn new(method: reqwest::Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(reqwest::Method::GET, path)
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        let mut config = Self::new(reqwest::Method::POST, path);
        config.body = Some(body);
        config
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Response handed back to callers after the response chain has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    /// Deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body)
            .map_err(|e| ApiError::InvalidRequest(format!("response body is not valid JSON: {e}")))
    }
}

/// The console's single entry point for outbound API calls.
///
/// Constructed once at startup and shared by reference; see
/// [`crate::api::install`] for the process-global slot.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Client with the given settings and empty interceptor chains.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::builder(config).build()
    }

    pub fn builder(config: &ApiConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config: config.clone(),
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    /// Base URL requests are issued against (origin + base path).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Deadline applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issue a request, running both interceptor chains.
    pub async fn request(&self, config: RequestConfig) -> Result<ApiResponse, ApiError> {
        let outcome = match run_request_chain(&self.request_interceptors, Ok(config)) {
            Ok(config) => self.dispatch(config).await,
            Err(error) => Err(error),
        };
        run_response_chain(&self.response_interceptors, outcome)
    }

    /// GET `path` under the base path.
    pub async fn get(&self, path: impl Into<String>) -> Result<ApiResponse, ApiError> {
        self.request(RequestConfig::get(path)).await
    }

    /// POST `body` as JSON to `path` under the base path.
    pub async fn post_json(
        &self,
        path: impl Into<String>,
        body: serde_json::Value,
    ) -> Result<ApiResponse, ApiError> {
        self.request(RequestConfig::post(path, body)).await
    }

    async fn dispatch(&self, config: RequestConfig) -> Result<ApiResponse, ApiError> {
        let url = self.join(&config.path)?;
        let method = config.method.clone();

        let mut request = self.http.request(method.clone(), url.clone());
        if !config.query.is_empty() {
            request = request.query(&config.query);
        }
        for (name, value) in &config.headers {
            request = request.header(name, value);
        }
        if let Some(body) = &config.body {
            request = request.json(body);
        }

        let started = Instant::now();
        let result = async {
            let response = request.send().await?;
            let status = response.status();
            let headers = response
                .headers()
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str().to_string(),
                        String::from_utf8_lossy(value.as_bytes()).into_owned(),
                    )
                })
                .collect();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, headers, body))
        }
        .await;

        let (status, headers, body) = match result {
            Ok(parts) => parts,
            Err(source) => {
                let error = ApiError::from_transport(source, started.elapsed());
                tracing::warn!(method = %method, url = %url, error = %error, "request failed");
                return Err(error);
            }
        };

        tracing::debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }

    fn join(&self, path: &str) -> Result<Url, ApiError> {
        let mut full = self.base_url.as_str().trim_end_matches('/').to_string();
        if !path.starts_with('/') {
            full.push('/');
        }
        full.push_str(path);
        Url::parse(&full)
            .map_err(|e| ApiError::InvalidRequest(format!("invalid request path `{path}`: {e}")))
    }
}

/// Builder for [`ApiClient`]; interceptors register here, before the first
/// request, and the chains are fixed afterwards.
pub struct ApiClientBuilder {
    config: ApiConfig,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    /// Append a request interceptor. Chains run in registration order.
    pub fn request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    /// Append a response interceptor. Chains run in registration order.
    pub fn response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    pub fn build(self) -> Result<ApiClient, ApiError> {
        let origin = Url::parse(&self.config.origin).map_err(|e| {
            ApiError::InvalidRequest(format!("invalid origin `{}`: {e}", self.config.origin))
        })?;

        if !self.config.base_path.starts_with('/') {
            return Err(ApiError::InvalidRequest(format!(
                "base path `{}` must start with '/'",
                self.config.base_path
            )));
        }

        let mut base = origin.as_str().trim_end_matches('/').to_string();
        base.push_str(&self.config.base_path);
        let base_url = Url::parse(&base).map_err(|e| {
            ApiError::InvalidRequest(format!("invalid base path `{}`: {e}", self.config.base_path))
        })?;

        let timeout = Duration::from_millis(self.config.timeout_ms);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::InvalidRequest(format!("client construction failed: {e}")))?;

        tracing::debug!(
            base_url = %base_url,
            timeout_ms = self.config.timeout_ms,
            request_interceptors = self.request_interceptors.len(),
            response_interceptors = self.response_interceptors.len(),
            "api client ready"
        );

        Ok(ApiClient {
            http,
            base_url,
            timeout,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
        })
    }
}
