//! Not-found presentations for unknown routes and unknown campaigns.

use leptos::prelude::*;

/// Fallback page for any route the router does not know.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist or has moved."</p>
            <a class="btn btn--primary" href="/">"Back to home"</a>
        </section>
    }
}

/// Shown in place of a campaign whose id is not in the catalogue.
#[component]
pub fn CampaignNotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Campaign not found"</h1>
            <p>"This campaign may have ended or never existed."</p>
            <a class="btn btn--primary" href="/campaigns">"Explore campaigns"</a>
        </section>
    }
}
