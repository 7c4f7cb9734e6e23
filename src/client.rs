use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// A completed HTTP response, passed through without transformation
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
    body: Bytes,
}

impl ApiResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Final URL of the request, after redirects
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the JSON body
    ///
    /// # Errors
    /// Returns `ApiError::Decode` if the body is not valid JSON for `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Shared HTTP client for the plant-care backend
///
/// Cloning is cheap: the reqwest client is reference-counted and the
/// configuration sits behind an `Arc`, so every namespace reuses the same
/// connection pool and the same immutable settings.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: Arc<ApiConfig>,
}

impl ApiClient {
    /// Create a client with JSON default headers
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        Self::with_builder(config, Client::builder())
    }

    /// Create a client from a caller-supplied reqwest builder (TLS, proxies, ...).
    /// The JSON default headers are added on top.
    pub fn with_builder(config: ApiConfig, builder: ClientBuilder) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );

        let http = builder.default_headers(headers).build()?;

        tracing::info!(
            "API client ready (base URL: {}, origin: {})",
            config.base_url,
            config.origin
        );

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Absolute URL for a request path
    ///
    /// # Errors
    /// Returns `ApiError::InvalidUrl` if the composed URL does not parse
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        let endpoint = self.config.endpoint(path);
        self.config
            .origin
            .join(&endpoint)
            .map_err(|e| ApiError::InvalidUrl {
                url: endpoint,
                reason: e.to_string(),
            })
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        let request = self.request(Method::GET, path)?;
        self.execute(request).await
    }

    /// GET with `params` serialized as the query string. Absent values add nothing.
    pub async fn get_with_query<Q>(&self, path: &str, params: &Q) -> Result<ApiResponse, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::GET, path)?.query(params);
        self.execute(request).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path)?.json(body);
        self.execute(request).await
    }

    /// POST without a request body
    pub async fn post_empty(&self, path: &str) -> Result<ApiResponse, ApiError> {
        let request = self.request(Method::POST, path)?;
        self.execute(request).await
    }

    pub async fn put<B>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PUT, path)?.json(body);
        self.execute(request).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        let request = self.request(Method::DELETE, path)?;
        self.execute(request).await
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.url(path)?;
        Ok(self.http.request(method, url))
    }

    async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let request = request.build()?;
        let method = request.method().clone();
        tracing::debug!("{} {}", method, request.url());

        let response = self.http.execute(request).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let body = response.bytes().await?;

        let response = ApiResponse {
            status,
            headers,
            url,
            body,
        };

        if !status.is_success() {
            tracing::warn!("{} {} failed with status {}", method, response.url, status);
            return Err(ApiError::Status(Box::new(response)));
        }

        tracing::debug!("{} {} -> {}", method, response.url, status);
        Ok(response)
    }
}
