//! Card for a campaign in the explore grid and home page.

#[cfg(test)]
#[path = "campaign_card_test.rs"]
mod campaign_card_test;

use leptos::prelude::*;
use ventureboard::campaign::Campaign;

use crate::components::funding_progress::FundingProgress;

/// Caption for the funding deadline.
pub fn days_left_label(days_left: u32) -> String {
    match days_left {
        0 => "Funding closed".to_owned(),
        1 => "1 day left".to_owned(),
        n => format!("{n} days left"),
    }
}

/// A clickable card linking to the campaign detail page.
#[component]
pub fn CampaignCard(campaign: Campaign) -> impl IntoView {
    let href = format!("/campaigns/{}", campaign.id);
    let days = days_left_label(campaign.days_left);

    view! {
        <a class="campaign-card" href=href>
            <img class="campaign-card__image" src=campaign.image_url.clone() alt=campaign.title.clone()/>
            <div class="campaign-card__body">
                <span class="campaign-card__category">{campaign.category.clone()}</span>
                <h3 class="campaign-card__title">{campaign.title.clone()}</h3>
                <p class="campaign-card__tagline">{campaign.tagline.clone()}</p>
                <FundingProgress campaign=campaign.clone()/>
                <div class="campaign-card__meta">
                    <span>{format!("{} investors", campaign.investor_count)}</span>
                    <span>{days}</span>
                </div>
            </div>
        </a>
    }
}
