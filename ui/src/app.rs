//! Root Application Component
//!
//! This module contains the main App component that sets up:
//! - Routing
//! - The shared API client context
//! - The page shell

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::admin::AdminPage;
use crate::components::contact::ContactPage;
use crate::components::layout::Shell;
use crate::components::showcase::ShowcasePage;
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = AppState::new();
    provide_context(app_state.clone());

    // Warm the backend once on startup; free-tier hosts sleep between visits
    {
        let api = app_state.api.clone();
        create_effect(move |ran: Option<bool>| {
            if ran.is_some() {
                return true;
            }

            let api = api.clone();
            spawn_local(async move {
                if let Err(e) = api.health().await {
                    tracing::warn!("Backend health check failed: {}", e);
                }
            });

            true
        });
    }

    view! {
        <Title text="Folio" />
        <Router>
            <Shell>
                <Routes>
                    <Route path="/" view=ShowcasePage />
                    <Route path="/contact" view=ContactPage />
                    <Route path="/admin" view=AdminPage />

                    // Catch-all for 404
                    <Route path="/*" view=NotFoundPage />
                </Routes>
            </Shell>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex-1 flex items-center justify-center p-6">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-theme-muted mb-4">"404"</h1>
                <p class="text-xl text-theme-secondary mb-6">"Page not found"</p>
                <a href="/" class="btn-primary">"Back to projects"</a>
            </div>
        </div>
    }
}
