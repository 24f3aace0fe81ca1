//! Admin Area Components
//!
//! Sign-in gate plus the summary modal. Auth here is deliberately thin: the
//! backend owns the session; the UI only holds the bearer token it was
//! handed.

mod panel;
mod summary_modal;

pub use panel::{PanelPhase, SummaryPanel};
pub use summary_modal::AdminSummaryModal;

use folio_shared::LoginRequest;
use leptos::*;

use crate::client::ApiError;
use crate::state::AppState;

/// Admin landing page: owns the summary modal's `open` flag
#[component]
pub fn AdminPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let (summary_open, set_summary_open) = create_signal(false);

    let signed_in = {
        let app_state = app_state.clone();
        move || app_state.admin_token.get().is_some()
    };

    view! {
        <div class="flex-1 overflow-auto p-6">
            <div class="max-w-xl mx-auto">
                <div class="mb-6">
                    <h1 class="text-2xl font-bold text-theme">"Admin"</h1>
                    <p class="text-theme-secondary mt-1">"Site management"</p>
                </div>

                <Show
                    when=signed_in
                    fallback=move || view! { <SignInForm /> }
                >
                    <AdminHome on_open_summary=move |_| set_summary_open.set(true) />
                </Show>
            </div>

            <AdminSummaryModal
                open=summary_open
                on_close=move |_| set_summary_open.set(false)
            />
        </div>
    }
}

/// Signed-in view with the summary trigger
#[component]
fn AdminHome(
    #[prop(into)] on_open_summary: Callback<()>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let (who, set_who) = create_signal(Option::<String>::None);

    // Verify the stored token once by reading the profile back
    {
        let app_state = app_state.clone();
        create_effect(move |ran: Option<bool>| {
            if ran.is_some() {
                return true;
            }
            let Some(token) = app_state.admin_token.get_untracked() else {
                return true;
            };

            let app_state = app_state.clone();
            spawn_local(async move {
                match app_state.api.me(&token).await {
                    Ok(user) => set_who.set(Some(user.email)),
                    Err(ApiError::Unauthenticated) => {
                        tracing::info!("Stored admin token was rejected, signing out");
                        app_state.clear_token();
                    }
                    Err(e) => tracing::warn!("Failed to fetch admin profile: {}", e),
                }
            });

            true
        });
    }

    let sign_out = {
        let app_state = app_state.clone();
        move |_| app_state.clear_token()
    };

    view! {
        <div class="bg-theme-surface rounded-xl border border-theme-border p-4 space-y-4">
            <div class="flex items-center justify-between">
                <div>
                    <div class="text-sm text-theme-secondary">"Signed in as"</div>
                    <div class="font-medium text-theme">
                        {move || who.get().unwrap_or_else(|| "…".to_string())}
                    </div>
                </div>
                <button class="btn-ghost text-xs px-2 py-1" on:click=sign_out>
                    "Sign out"
                </button>
            </div>

            <button
                class="btn-primary w-full"
                on:click=move |_| on_open_summary.call(())
            >
                "View site summary"
            </button>
        </div>
    }
}

/// Email + password form for the backend's login endpoint
#[component]
fn SignInForm() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);
    let (error, set_error) = create_signal(Option::<String>::None);

    let submit = {
        let app_state = app_state.clone();
        move |_| {
            let credentials = LoginRequest {
                email: email.get(),
                password: password.get(),
            };
            set_saving.set(true);
            set_error.set(None);

            let app_state = app_state.clone();
            spawn_local(async move {
                match app_state.api.login(&credentials).await {
                    Ok(response) => app_state.store_token(response.token),
                    Err(ApiError::Unauthenticated) => {
                        set_error.set(Some("Wrong email or password".to_string()))
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                set_saving.set(false);
            });
        }
    };

    view! {
        <div class="bg-theme-surface rounded-xl border border-theme-border p-4 space-y-4">
            <div class="space-y-1">
                <label class="text-sm text-theme-secondary">"Email"</label>
                <input
                    type="email"
                    class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent"
                    prop:value=move || email.get()
                    on:input=move |e| set_email.set(event_target_value(&e))
                />
            </div>

            <div class="space-y-1">
                <label class="text-sm text-theme-secondary">"Password"</label>
                <input
                    type="password"
                    class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent"
                    prop:value=move || password.get()
                    on:input=move |e| set_password.set(event_target_value(&e))
                />
            </div>

            {move || error.get().map(|e| view! {
                <div class="p-3 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm">
                    {e}
                </div>
            })}

            <div class="flex justify-end">
                <button
                    class="btn-primary disabled:opacity-50"
                    disabled=move || {
                        saving.get() || email.get().trim().is_empty() || password.get().is_empty()
                    }
                    on:click=submit
                >
                    {move || if saving.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </div>
        </div>
    }
}
