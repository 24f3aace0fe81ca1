//! Page Shell Components

use leptos::*;
use leptos_router::*;

/// Header + routed content + footer
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-theme-bg text-theme">
            <Header />
            <main class="flex-1 flex flex-col">{children()}</main>
            <Footer />
        </div>
    }
}

/// Main application header with navigation
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="h-14 border-b border-theme-border bg-theme-surface/50 backdrop-blur-sm flex items-center px-4 gap-4">
            // Logo
            <A href="/" class="flex items-center gap-2 text-theme font-bold text-lg">
                <span class="text-2xl">"◆"</span>
                <span>"Folio"</span>
            </A>

            <nav class="flex items-center gap-1 ml-4">
                <NavLink href="/" label="Projects" />
                <NavLink href="/contact" label="Contact" />
            </nav>

            // Spacer
            <div class="flex-1" />

            <NavLink href="/admin" label="Admin" />
        </header>
    }
}

/// Navigation link component
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    let location = use_location();

    view! {
        <A
            href=href
            class=move || {
                let path = location.pathname.get();
                let is_active = if href == "/" { path == "/" } else { path.starts_with(href) };
                let base = "px-3 py-1.5 rounded-md text-sm font-medium transition-colors";
                if is_active {
                    format!("{} bg-theme-surface-hover text-theme", base)
                } else {
                    format!("{} text-theme-secondary hover:text-theme hover:bg-theme-surface-hover/50", base)
                }
            }
        >
            {label}
        </A>
    }
}

/// Site footer
#[component]
fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="h-12 border-t border-theme-border flex items-center justify-center text-sm text-theme-muted">
            {format!("© {} Folio", year)}
        </footer>
    }
}
