//! Project Showcase Components
//!
//! Landing page: project grid plus a certificates strip underneath. Both
//! lists come from the backend in one parallel fetch on mount.

use folio_shared::{Certificate, Project};
use leptos::*;

use crate::state::AppState;

/// Main showcase view
#[component]
pub fn ShowcasePage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let (projects, set_projects) = create_signal(Vec::<Project>::new());
    let (certificates, set_certificates) = create_signal(Vec::<Certificate>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(Option::<String>::None);

    // Fetch showcase data on mount
    let api = app_state.api.clone();
    create_effect(move |ran: Option<bool>| {
        if ran.is_some() {
            return true;
        }

        let api = api.clone();
        spawn_local(async move {
            set_loading.set(true);

            let (projects, certificates) =
                futures::future::join(api.list_projects(), api.list_certificates()).await;

            match projects {
                Ok(list) => {
                    set_projects.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }

            // Certificates are decoration; a failure only logs
            match certificates {
                Ok(list) => set_certificates.set(list),
                Err(e) => tracing::warn!("Failed to fetch certificates: {}", e),
            }

            set_loading.set(false);
        });

        true
    });

    view! {
        <div class="flex-1 overflow-auto p-6">
            <div class="max-w-5xl mx-auto">
                // Page header
                <div class="mb-6">
                    <h1 class="text-2xl font-bold text-theme">"Projects"</h1>
                    <p class="text-theme-secondary mt-1">"Selected work and experiments"</p>
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=move || view! {
                        <div class="flex items-center justify-center py-12">
                            <div class="animate-spin w-8 h-8 border-4 border-accent border-t-transparent rounded-full" />
                        </div>
                    }
                >
                    {move || {
                        if let Some(err) = error.get() {
                            view! {
                                <div class="text-center py-12">
                                    <p class="text-theme-secondary">{err}</p>
                                </div>
                            }.into_view()
                        } else if projects.get().is_empty() {
                            view! {
                                <div class="text-center py-12">
                                    <p class="text-theme-secondary">"Nothing here yet"</p>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                                    {projects.get().into_iter().map(|project| {
                                        view! { <ProjectCard project=project /> }
                                    }).collect::<Vec<_>>()}
                                </div>
                            }.into_view()
                        }
                    }}

                    {move || {
                        let certificates = certificates.get();
                        let has_certificates = !certificates.is_empty();
                        view! {
                            <Show when=move || has_certificates>
                                <div class="mt-10">
                                    <h2 class="text-lg font-semibold text-theme mb-3">"Certificates"</h2>
                                    <div class="space-y-2">
                                        {certificates.iter().map(|certificate| {
                                            view! { <CertificateRow certificate=certificate.clone() /> }
                                        }).collect::<Vec<_>>()}
                                    </div>
                                </div>
                            </Show>
                        }
                    }}
                </Show>
            </div>
        </div>
    }
}

/// One project card in the grid
#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let has_image = !project.image.trim().is_empty();
    let image = project.image.clone();
    let title = project.title.clone();

    view! {
        <div class="bg-theme-surface rounded-xl border border-theme-border overflow-hidden hover:border-accent/50 transition-colors">
            <Show when=move || has_image>
                <img class="w-full h-40 object-cover" src=image.clone() alt=title.clone() />
            </Show>

            <div class="p-4">
                <h3 class="font-medium text-theme">{project.title.clone()}</h3>
                <p class="text-sm text-theme-secondary mt-1">{project.description.clone()}</p>

                <div class="flex flex-wrap gap-1 mt-3">
                    {project.tags.iter().map(|tag| {
                        view! {
                            <span class="px-2 py-0.5 bg-theme-surface-hover text-theme-muted text-xs rounded-full">
                                {tag.clone()}
                            </span>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="flex gap-3 mt-3 text-sm">
                    {project.repo_url.clone().map(|url| view! {
                        <a href=url target="_blank" class="text-accent hover:text-accent/80">"Source"</a>
                    })}
                    {project.live_url.clone().map(|url| view! {
                        <a href=url target="_blank" class="text-accent hover:text-accent/80">"Live"</a>
                    })}
                </div>
            </div>
        </div>
    }
}

/// One certificate row
#[component]
fn CertificateRow(certificate: Certificate) -> impl IntoView {
    let issued = certificate
        .issued_on
        .map(|date| date.format("%Y").to_string())
        .unwrap_or_default();

    view! {
        <div class="flex items-center gap-3 p-3 bg-theme-surface rounded-lg border border-theme-border">
            <div class="flex-1">
                <div class="text-sm font-medium text-theme">{certificate.title.clone()}</div>
                <div class="text-xs text-theme-secondary">{certificate.issuer.clone()}</div>
            </div>
            <div class="text-xs text-theme-muted font-mono">{issued}</div>
        </div>
    }
}
