//! Contact Form Components

use folio_shared::NewMessage;
use gloo_storage::{LocalStorage, Storage};
use leptos::*;

use crate::state::AppState;

/// localStorage key remembering the sender across visits
const SENDER_KEY: &str = "folio.contact.sender";

/// Contact page with the message form
#[component]
pub fn ContactPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let remembered: Option<(String, String)> = LocalStorage::get(SENDER_KEY).ok();
    let (remembered_name, remembered_email) = remembered.unwrap_or_default();

    let (name, set_name) = create_signal(remembered_name);
    let (email, set_email) = create_signal(remembered_email);
    let (body, set_body) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);
    let (sent, set_sent) = create_signal(false);
    let (error, set_error) = create_signal(Option::<String>::None);

    let api = app_state.api.clone();
    let submit = move |_| {
        let message = NewMessage {
            name: name.get(),
            email: email.get(),
            body: body.get(),
        };
        set_saving.set(true);
        set_error.set(None);

        let api = api.clone();
        spawn_local(async move {
            match api.send_message(&message).await {
                Ok(_) => {
                    if let Err(e) =
                        LocalStorage::set(SENDER_KEY, (&message.name, &message.email))
                    {
                        tracing::debug!("Failed to remember sender: {}", e);
                    }
                    set_body.set(String::new());
                    set_sent.set(true);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="flex-1 overflow-auto p-6">
            <div class="max-w-xl mx-auto">
                <div class="mb-6">
                    <h1 class="text-2xl font-bold text-theme">"Contact"</h1>
                    <p class="text-theme-secondary mt-1">"Say hello or ask about a project"</p>
                </div>

                <div class="bg-theme-surface rounded-xl border border-theme-border p-4 space-y-4">
                    <div class="space-y-1">
                        <label class="text-sm text-theme-secondary">"Name"</label>
                        <input
                            type="text"
                            class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent"
                            prop:value=move || name.get()
                            on:input=move |e| set_name.set(event_target_value(&e))
                        />
                    </div>

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
                        <label class="text-sm text-theme-secondary">"Message"</label>
                        <textarea
                            class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme resize-none focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent"
                            rows="5"
                            placeholder="What's on your mind?"
                            prop:value=move || body.get()
                            on:input=move |e| {
                                set_body.set(event_target_value(&e));
                                set_sent.set(false);
                            }
                        />
                    </div>

                    {move || error.get().map(|e| view! {
                        <div class="p-3 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm">
                            {e}
                        </div>
                    })}

                    {move || sent.get().then(|| view! {
                        <div class="p-3 bg-green-500/10 border border-green-500/30 rounded-lg text-green-400 text-sm">
                            "Message sent, thanks!"
                        </div>
                    })}

                    <div class="flex justify-end">
                        <button
                            class="btn-primary disabled:opacity-50"
                            disabled=move || {
                                saving.get()
                                    || name.get().trim().is_empty()
                                    || email.get().trim().is_empty()
                                    || body.get().trim().is_empty()
                            }
                            on:click=submit
                        >
                            {move || if saving.get() { "Sending..." } else { "Send" }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
