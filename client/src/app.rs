//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::pages::{
    campaign::CampaignPage, campaigns::CampaignsPage, edit_campaign::EditCampaignPage, home::HomePage,
    invest::InvestPage, login::LoginPage, not_found::NotFoundPage, signup::SignupPage,
    start_campaign::StartCampaignPage,
};
use crate::state::{auth::AuthState, toast::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and wraps every route in `Layout`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/ventureboard.css"/>
        <Title text="Ventureboard"/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("start-campaign") view=StartCampaignPage/>
                    <Route path=StaticSegment("campaigns") view=CampaignsPage/>
                    <Route path=(StaticSegment("campaigns"), ParamSegment("id")) view=CampaignPage/>
                    <Route
                        path=(StaticSegment("campaigns"), ParamSegment("id"), StaticSegment("invest"))
                        view=InvestPage
                    />
                    <Route
                        path=(StaticSegment("campaigns"), ParamSegment("id"), StaticSegment("edit"))
                        view=EditCampaignPage
                    />
                </Routes>
            </Layout>
        </Router>
    }
}
