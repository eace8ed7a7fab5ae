//! HTTP transports behind the admin client
//!
//! `reqwasm` in the browser, `reqwest` on native targets.

use async_trait::async_trait;

use crate::shared::errors::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Only GET leaves server state untouched
    pub fn is_write(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// A fully resolved request, ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body, absent for GET
    pub body: Option<String>,
}

/// Sends one request and returns the response body text.
///
/// Implementations send exactly once; non-2xx answers become
/// `AppError::Status`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &PreparedRequest) -> Result<String>;
}

#[cfg(target_arch = "wasm32")]
pub use browser::ReqwasmTransport as DefaultTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport as DefaultTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use reqwasm::http::Request;

    #[derive(Debug, Clone, Default)]
    pub struct ReqwasmTransport;

    #[async_trait(?Send)]
    impl Transport for ReqwasmTransport {
        async fn send(&self, request: &PreparedRequest) -> Result<String> {
            let builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
                HttpMethod::Put => Request::put(&request.url),
                HttpMethod::Delete => Request::delete(&request.url),
            };
            let builder = match &request.body {
                Some(body) => builder
                    .header("Content-Type", "application/json")
                    .body(body.clone()),
                None => builder,
            };

            let response = builder
                .send()
                .await
                .map_err(|e| AppError::Transport(e.to_string()))?;

            if !response.ok() {
                return Err(AppError::Status {
                    status: response.status(),
                    status_text: response.status_text(),
                });
            }

            response
                .text()
                .await
                .map_err(|e| AppError::Transport(e.to_string()))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;

    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        fn method(method: HttpMethod) -> reqwest::Method {
            match method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Put => reqwest::Method::PUT,
                HttpMethod::Delete => reqwest::Method::DELETE,
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for ReqwestTransport {
        async fn send(&self, request: &PreparedRequest) -> Result<String> {
            let mut builder = self
                .client
                .request(Self::method(request.method), &request.url);
            if let Some(body) = &request.body {
                builder = builder
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(body.clone());
            }

            let response = builder
                .send()
                .await
                .map_err(|e| AppError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(AppError::Status {
                    status: status.as_u16(),
                    status_text: status.canonical_reason().unwrap_or_default().to_string(),
                });
            }

            response
                .text()
                .await
                .map_err(|e| AppError::Transport(e.to_string()))
        }
    }
}
