//! Admin Summary Modal

use leptos::*;

use super::panel::{PanelPhase, SummaryPanel};
use crate::state::AppState;

/// Overlay showing aggregate site counts.
///
/// Renders nothing while `open` is false. Each false-to-true transition
/// starts a fresh activation and exactly one fetch of the summary endpoint;
/// the close control and the scrim both hand control back to the caller
/// through `on_close`.
#[component]
pub fn AdminSummaryModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let panel = create_rw_signal(SummaryPanel::new());

    let api = app_state.api.clone();
    create_effect(move |was_open: Option<bool>| {
        let now_open = open.get();

        if now_open && was_open != Some(true) {
            let generation = panel.try_update(|p| p.activate()).unwrap_or_default();

            let api = api.clone();
            spawn_local(async move {
                let outcome = api.fetch_summary().await.map_err(|e| e.to_string());
                let applied = panel
                    .try_update(|p| p.resolve(generation, outcome))
                    .unwrap_or(false);
                if !applied {
                    tracing::debug!("Discarded stale summary response (generation {})", generation);
                }
            });
        } else if !now_open {
            panel.update(|p| p.close());
        }

        now_open
    });

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50"
                on:click=move |_| on_close.call(())
            >
                <div
                    class="bg-theme-surface rounded-xl w-[420px] shadow-xl border border-theme-border"
                    on:click=|e| e.stop_propagation()
                >
                    <div class="flex items-center justify-between p-4 border-b border-theme-border">
                        <h2 class="text-lg font-semibold text-theme">"Site Summary"</h2>
                        <button
                            class="p-1.5 hover:bg-theme-surface-hover rounded-lg text-theme-secondary hover:text-theme transition-colors"
                            on:click=move |_| on_close.call(())
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="p-6">
                        {move || {
                            let phase = panel.with(|p| p.phase().cloned());
                            match phase {
                                None | Some(PanelPhase::Loading) => view! {
                                    <div class="flex items-center justify-center py-8 gap-3">
                                        <div class="animate-spin w-6 h-6 border-4 border-accent border-t-transparent rounded-full" />
                                        <span class="text-theme-secondary text-sm">"Loading"</span>
                                    </div>
                                }.into_view(),
                                Some(PanelPhase::Loaded(stats)) => view! {
                                    <div class="grid grid-cols-3 gap-4">
                                        <CountBox label="Projects" value=stats.projects_count />
                                        <CountBox label="Messages" value=stats.messages_count />
                                        <CountBox label="Certificates" value=stats.certificates_count />
                                    </div>
                                }.into_view(),
                                Some(PanelPhase::Failed(message)) => view! {
                                    <div class="text-center py-6">
                                        <p class="text-red-400 text-sm">"Couldn't load the summary"</p>
                                        <p class="text-theme-muted text-xs mt-1">{message}</p>
                                    </div>
                                }.into_view(),
                            }
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// One labelled count
#[component]
fn CountBox(
    label: &'static str,
    value: u64,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-3xl font-bold text-theme">{value}</div>
            <div class="text-xs text-theme-muted mt-1">{label}</div>
        </div>
    }
}
