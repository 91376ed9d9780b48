//! Landing page: pitch for both audiences and featured campaigns.

use leptos::prelude::*;
use ventureboard::campaign::dummy_campaigns;

use crate::components::campaign_card::CampaignCard;

const FEATURED_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = dummy_campaigns()
        .iter()
        .take(FEATURED_COUNT)
        .map(|c| view! { <CampaignCard campaign=c.clone()/> })
        .collect::<Vec<_>>();

    view! {
        <section class="hero">
            <h1>"Where founders meet their first believers"</h1>
            <p class="hero__lead">
                "Entrepreneurs raise from a community of investors who back ideas early."
            </p>
            <div class="hero__actions">
                <a class="btn btn--primary" href="/signup">"Raise for your idea"</a>
                <a class="btn" href="/campaigns">"Find a campaign to back"</a>
            </div>
        </section>
        <section class="featured">
            <header class="featured__header">
                <h2>"Featured campaigns"</h2>
                <a href="/campaigns">"See all"</a>
            </header>
            <div class="campaign-grid">{featured}</div>
        </section>
    }
}
