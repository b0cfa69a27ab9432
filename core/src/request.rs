//! Request executor
//!
//! Shapes an [`ApiRequest`] into a transport call, attaches the JSON content
//! header and optional bearer credential, and interprets the response:
//!
//! - non-2xx status: [`ApiError::Http`] with the best-effort body text
//! - 2xx with a JSON content type: the parsed body
//! - 2xx with any other content type: `None` (delete/expire answer without a body)

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::transport::{HttpMethod, Transport, TransportRequest, TransportResponse};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Placeholder origin that lets [`reqwest::Url`] encode a relative path.
const PATH_BASE: &str = "http://chronos.invalid/";

/// Build an endpoint path (with optional query) from raw segments.
///
/// Each segment is percent-encoded as a single path segment, so ids
/// containing `/` or spaces cannot escape their position. Query pairs are
/// form-encoded. The result always starts with `/`.
pub fn endpoint_path(segments: &[&str], query: &[(&str, &str)]) -> ApiResult<String> {
    let mut url =
        reqwest::Url::parse(PATH_BASE).map_err(|e| ApiError::InvalidPath(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidPath(PATH_BASE.to_string()))?
        .clear()
        .extend(segments);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    let mut path = url.path().to_string();
    if let Some(query) = url.query() {
        path.push('?');
        path.push_str(query);
    }
    Ok(path)
}

/// A backend call relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path beginning with `/`, including any query string.
    pub path: String,
    pub body: Option<Value>,
    pub token: Option<String>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            token: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::Encode)?);
        Ok(self)
    }

    /// Attach a bearer credential when one is available.
    pub fn bearer(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_string);
        self
    }
}

/// Issues [`ApiRequest`]s against a base URL through a [`Transport`].
#[derive(Debug, Clone)]
pub struct RequestExecutor<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> RequestExecutor<T> {
    /// Create an executor. Trailing slashes on `base_url` are ignored; an
    /// empty base URL sends paths verbatim.
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return its JSON body, if the server sent one.
    pub async fn request(&self, request: ApiRequest) -> ApiResult<Option<Value>> {
        let method = request.method;
        let path = request.path.clone();
        let response = self.execute(request).await?;

        if !response.is_json() {
            tracing::debug!("{} {} returned no JSON body", method, path);
            return Ok(None);
        }

        serde_json::from_slice(&response.body)
            .map(Some)
            .map_err(|source| ApiError::Decode {
                method: method.to_string(),
                path,
                source,
            })
    }

    /// Send a request and deserialize its JSON body into `D`.
    ///
    /// A missing body decodes as JSON `null`, so `D = Option<_>` accepts it
    /// while struct targets fail with [`ApiError::Decode`].
    pub async fn request_as<D: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<D> {
        let method = request.method;
        let path = request.path.clone();
        let value = self.request(request).await?.unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|source| ApiError::Decode {
            method: method.to_string(),
            path,
            source,
        })
    }

    /// Send a request and return the raw body text regardless of content type.
    pub async fn request_text(&self, request: ApiRequest) -> ApiResult<String> {
        let response = self.execute(request).await?;
        Ok(String::from_utf8_lossy(&response.body).into_owned())
    }

    async fn execute(&self, request: ApiRequest) -> ApiResult<TransportResponse> {
        let ApiRequest {
            method,
            path,
            body,
            token,
        } = request;

        let mut headers = vec![("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())];
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        let body = match body {
            Some(value) => Some(serde_json::to_vec(&value).map_err(ApiError::Encode)?),
            None => None,
        };

        tracing::debug!("{} {}", method, path);
        let response = self
            .transport
            .send(TransportRequest {
                method,
                url: self.url_for(&path),
                headers,
                body,
            })
            .await
            .map_err(|source| ApiError::Transport {
                method: method.to_string(),
                path: path.clone(),
                source,
            })?;

        tracing::debug!("{} {} -> {}", method, path, response.status);
        if !response.is_success() {
            return Err(ApiError::Http {
                method: method.to_string(),
                path,
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        Ok(response)
    }
}
