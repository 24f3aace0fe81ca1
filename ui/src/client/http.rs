//! HTTP API Client
//!
//! Talks to the backend through the same-origin `/api` prefix. In
//! development the `folio serve` proxy forwards those requests (cookies
//! included) to the deployed backend, so the UI never needs to know the real
//! origin.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use folio_shared::{
    AuthUser, Certificate, LoginRequest, LoginResponse, MessageReceipt, NewMessage, Project,
    SummaryStats,
};

use super::{ApiClient, ApiError};

/// Client bound to a base origin
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: String,
}

impl HttpApiClient {
    /// Create a client for an explicit origin
    pub fn new(url: &str) -> Self {
        // Normalize URL (remove trailing slash)
        let base_url = url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Create a client for the origin the page was served from
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        Self::new(&origin)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(status_error(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

fn status_error(status: u16) -> ApiError {
    if status == 401 {
        ApiError::Unauthenticated
    } else {
        ApiError::RequestFailed(format!("HTTP {}", status))
    }
}

#[async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn fetch_summary(&self) -> Result<SummaryStats, ApiError> {
        self.get_json("/api/admin/summary").await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/api/projects").await
    }

    async fn list_certificates(&self) -> Result<Vec<Certificate>, ApiError> {
        self.get_json("/api/certificates").await
    }

    async fn send_message(&self, message: &NewMessage) -> Result<MessageReceipt, ApiError> {
        let response = Request::post(&self.url("/api/messages"))
            .header("Content-Type", "application/json")
            .json(message)
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(status_error(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = Request::post(&self.url("/api/auth/login"))
            .header("Content-Type", "application/json")
            .json(credentials)
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(status_error(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn me(&self, token: &str) -> Result<AuthUser, ApiError> {
        let response = Request::get(&self.url("/api/auth/me"))
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(status_error(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn health(&self) -> Result<(), ApiError> {
        let response = Request::get(&self.url("/health"))
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::ConnectionFailed(format!(
                "Health check failed: HTTP {}",
                response.status()
            )))
        }
    }
}
