//! Global State Management
//!
//! This module manages the global application state:
//! - The shared backend client
//! - The admin bearer token, mirrored in localStorage

use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use leptos::*;

use crate::client::{ApiClient, HttpApiClient};

/// localStorage key for the admin bearer token
const TOKEN_KEY: &str = "folio.admin.token";

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Backend client shared by every component
    pub api: Rc<dyn ApiClient>,

    /// Admin bearer token, if signed in
    pub admin_token: RwSignal<Option<String>>,
}

impl AppState {
    /// Create app state talking to the page's own origin
    pub fn new() -> Self {
        Self::with_client(Rc::new(HttpApiClient::from_window()))
    }

    /// Create app state over an explicit client (tests inject canned ones)
    pub fn with_client(api: Rc<dyn ApiClient>) -> Self {
        let token = LocalStorage::get::<String>(TOKEN_KEY).ok();
        Self {
            api,
            admin_token: create_rw_signal(token),
        }
    }

    /// Record a fresh bearer token
    pub fn store_token(&self, token: String) {
        if let Err(e) = LocalStorage::set(TOKEN_KEY, &token) {
            tracing::warn!("Failed to persist admin token: {}", e);
        }
        self.admin_token.set(Some(token));
    }

    /// Forget the bearer token (sign out, or the backend rejected it)
    pub fn clear_token(&self) {
        LocalStorage::delete(TOKEN_KEY);
        self.admin_token.set(None);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
