//! Campaign detail page.
//!
//! The route id is looked up in the static catalogue. An unknown id renders
//! the not-found presentation instead of failing.

#[cfg(test)]
#[path = "campaign_test.rs"]
mod campaign_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use ventureboard::campaign::{Campaign, format_currency, get_campaign_by_id};

use crate::components::campaign_card::days_left_label;
use crate::components::funding_progress::FundingProgress;
use crate::pages::not_found::CampaignNotFound;
use crate::state::auth::AuthState;

/// Campaign for an optional route id; a missing or unknown id is `None`.
pub(crate) fn resolve_campaign(id: Option<&str>) -> Option<&'static Campaign> {
    id.and_then(get_campaign_by_id)
}

#[component]
pub fn CampaignPage() -> impl IntoView {
    let params = use_params_map();
    let campaign = move || resolve_campaign(params.read().get("id").as_deref());

    move || match campaign() {
        Some(found) => view! { <CampaignDetail campaign=found.clone()/> }.into_any(),
        None => view! { <CampaignNotFound/> }.into_any(),
    }
}

#[component]
fn CampaignDetail(campaign: Campaign) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let invest_href = format!("/campaigns/{}/invest", campaign.id);
    let edit_href = format!("/campaigns/{}/edit", campaign.id);
    let is_open = campaign.is_open();

    view! {
        <article class="campaign-detail">
            <img class="campaign-detail__image" src=campaign.image_url.clone() alt=campaign.title.clone()/>
            <header class="campaign-detail__header">
                <span class="campaign-detail__category">{campaign.category.clone()}</span>
                <h1>{campaign.title.clone()}</h1>
                <p class="campaign-detail__tagline">{campaign.tagline.clone()}</p>
                <p class="campaign-detail__founder">
                    {format!("by {} · {}", campaign.founder, campaign.location)}
                </p>
            </header>
            <FundingProgress campaign=campaign.clone()/>
            <dl class="campaign-detail__stats">
                <dt>"Investors"</dt>
                <dd>{campaign.investor_count}</dd>
                <dt>"Minimum investment"</dt>
                <dd>{format_currency(campaign.min_investment)}</dd>
                <dt>"Deadline"</dt>
                <dd>{days_left_label(campaign.days_left)}</dd>
            </dl>
            <p class="campaign-detail__description">{campaign.description.clone()}</p>
            <div class="campaign-detail__actions">
                <Show
                    when=move || is_open
                    fallback=|| view! { <span class="campaign-detail__closed">"This campaign is fully funded."</span> }
                >
                    <a class="btn btn--primary" href=invest_href.clone()>"Invest"</a>
                </Show>
                <Show when=move || auth.get().can_manage_campaigns()>
                    <a class="btn" href=edit_href.clone()>"Edit campaign"</a>
                </Show>
            </div>
        </article>
    }
}
