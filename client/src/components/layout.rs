//! Site chrome wrapping every route: header, theme toggle, toasts, footer.

use leptos::prelude::*;

use crate::components::toast_viewport::ToastViewport;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::ui::UiState;
use crate::util::{dark_mode, notify::notify};

/// Layout wrapper applied around the route outlet.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Restore the stored theme once the page is live in the browser.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <div class="app-shell">
            <SiteHeader/>
            <main class="app-shell__main" on:click=move |_| ui.update(UiState::close_nav)>
                {children()}
            </main>
            <ToastViewport/>
            <footer class="app-shell__footer">
                <small>"Ventureboard · Backing founders who build what matters"</small>
            </footer>
        </div>
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_toggle_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let on_sign_out = move |_| {
        auth.update(AuthState::sign_out);
        notify(toasts, ToastKind::Info, "Signed out", "See you soon.");
    };

    let nav_class = move || if ui.get().nav_open { "site-nav site-nav--open" } else { "site-nav" };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Ventureboard"</a>
            <button
                class="site-header__menu"
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(|u| u.nav_open = !u.nav_open)
            >
                "☰"
            </button>
            <nav class=nav_class>
                <a href="/campaigns">"Explore"</a>
                <Show when=move || auth.get().can_manage_campaigns()>
                    <a href="/start-campaign">"Start a campaign"</a>
                </Show>
                <Show
                    when=move || auth.get().is_signed_in()
                    fallback=|| {
                        view! {
                            <a href="/login">"Log in"</a>
                            <a class="btn btn--primary" href="/signup">"Sign up"</a>
                        }
                    }
                >
                    <span class="site-nav__user">
                        {move || auth.get().user.map(|u| format!("{} · {}", u.name, u.role.label())).unwrap_or_default()}
                    </span>
                    <button class="btn" on:click=on_sign_out>"Log out"</button>
                </Show>
                <button class="btn btn--ghost" on:click=on_toggle_theme>
                    {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
                </button>
            </nav>
        </header>
    }
}
