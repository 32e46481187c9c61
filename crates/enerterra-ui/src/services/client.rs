//! HTTP client seam shared by the page services.

use std::future::Future;

use http::Method;
use serde::{de::DeserializeOwned, Serialize};

/// Prefix of every API path.
pub const API_BASE: &str = "/api";

pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}")]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("invalid request body: {0}")]
    Encode(String),
    #[error("unsupported method {0}")]
    UnsupportedMethod(String),
}

/// JSON request/response transport. `path` is relative to the API base;
/// headers, base URL and credentials are the implementation's concern.
pub trait HttpClient {
    type Error;

    fn request<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> impl Future<Output = Result<R, Self::Error>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned;
}

/// Browser client backed by `fetch`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    token: Option<String>,
}

#[cfg(feature = "hydrate")]
impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

#[cfg(feature = "hydrate")]
impl HttpClient for ApiClient {
    type Error = ClientError;

    async fn request<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        use reqwasm::http::Request;

        let url = api_url(path);
        let mut request = if method == Method::GET {
            Request::get(&url)
        } else if method == Method::POST {
            Request::post(&url)
        } else if method == Method::PUT {
            Request::put(&url)
        } else if method == Method::PATCH {
            Request::patch(&url)
        } else if method == Method::DELETE {
            Request::delete(&url)
        } else {
            return Err(ClientError::UnsupportedMethod(method.to_string()));
        };

        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }

        if let Some(body) = body {
            let json = serde_json::to_string(body).map_err(|e| ClientError::Encode(e.to_string()))?;
            request = request.header("Content-Type", "application/json").body(json);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%method, path, status, "API request failed");
            return Err(ClientError::Status { status, body });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
