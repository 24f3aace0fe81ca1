//! Backend API Client Abstraction
//!
//! The REST backend is an external deployment; everything the UI knows about
//! it goes through the [`ApiClient`] trait. Components take the client from
//! context instead of reaching for a module-level fetch helper, which keeps
//! them testable in isolation.

mod http;

pub use http::HttpApiClient;

use async_trait::async_trait;
use folio_shared::{
    AuthUser, Certificate, LoginRequest, LoginResponse, MessageReceipt, NewMessage, Project,
    SummaryStats,
};

/// Error types for backend API operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Not authenticated")]
    Unauthenticated,
}

/// Trait for backend client implementations
///
/// [`HttpApiClient`] is the production implementation; tests substitute a
/// canned one.
#[async_trait(?Send)]
pub trait ApiClient {
    /// Fetch the aggregate counts for the admin summary panel
    async fn fetch_summary(&self) -> Result<SummaryStats, ApiError>;

    /// List showcased projects
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;

    /// List certificates
    async fn list_certificates(&self) -> Result<Vec<Certificate>, ApiError>;

    /// Submit a contact form message
    async fn send_message(&self, message: &NewMessage) -> Result<MessageReceipt, ApiError>;

    /// Exchange credentials for a bearer token
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Read the authenticated admin profile back
    async fn me(&self, token: &str) -> Result<AuthUser, ApiError>;

    /// Check backend liveness
    async fn health(&self) -> Result<(), ApiError>;
}
