//! Transport core: a cloneable client that attaches the bearer token,
//! unwraps the `{ data: ... }` envelope, and turns failures into a single
//! error type. One network request per call; no retries, no caching.

mod appointments;
mod auth;
mod dashboard;
mod expenses;
mod members;
mod renovation;
mod settings;

pub use dashboard::TrendGroupBy;

use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{ApiEnvelope, ApiErrorBody};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "/api";
const GENERIC_ERROR: &str = "Si è verificato un errore. Riprova.";

/// Base URL for the API, overridable at build time; by default requests go
/// through the same-origin `/api` proxy.
pub fn api_base_url() -> String {
    option_env!("FAMIGLIA_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Errore di rete: {0}")]
    Network(String),
    #[error("Risposta non valida dal server: {0}")]
    Decode(String),
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Message shown to the user, already extracted from a structured
    /// `{error}` body when the server sent one.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    async fn from_response(response: Response) -> Self {
        let status = response.status();
        match response.json::<ApiErrorBody>().await {
            Ok(body) => ApiError::Server {
                status,
                message: body.error,
            },
            Err(_) => ApiError::Server {
                status,
                message: GENERIC_ERROR.to_string(),
            },
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP client for the dashboard API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(api_base_url(), token)
    }

    pub fn with_base_url(base_url: String, token: Option<String>) -> Self {
        Self { base_url, token }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }
        response
            .json::<ApiEnvelope<T>>()
            .await
            .map(|envelope| envelope.data)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::unwrap_envelope(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::unwrap_envelope(response).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::unwrap_envelope(response).await
    }

    /// POST with no body and no payload in the response (logout).
    pub(crate) async fn post_empty(&self, path: &str) -> ApiResult<()> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::from_response(response).await)
        }
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::from_response(response).await)
        }
    }
}
