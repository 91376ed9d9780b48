//! Explore page listing every campaign with a category filter.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use leptos::prelude::*;
use ventureboard::campaign::{Campaign, dummy_campaigns};

use crate::components::campaign_card::CampaignCard;

pub(crate) const ALL_CATEGORIES: &str = "All";

/// Distinct categories in first-seen order, preceded by `ALL_CATEGORIES`.
pub(crate) fn categories(campaigns: &[Campaign]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_owned()];
    for campaign in campaigns {
        if !out.contains(&campaign.category) {
            out.push(campaign.category.clone());
        }
    }
    out
}

/// Campaigns in `category`, or all of them for `ALL_CATEGORIES`.
pub(crate) fn filter_by_category<'a>(campaigns: &'a [Campaign], category: &str) -> Vec<&'a Campaign> {
    campaigns
        .iter()
        .filter(|c| category == ALL_CATEGORIES || c.category == category)
        .collect()
}

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let selected = RwSignal::new(ALL_CATEGORIES.to_owned());

    let chips = categories(dummy_campaigns())
        .into_iter()
        .map(|category| {
            let value = category.clone();
            let class = {
                let value = value.clone();
                move || if selected.get() == value { "chip chip--active" } else { "chip" }
            };
            view! {
                <button class=class on:click=move |_| selected.set(value.clone())>
                    {category}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let cards = move || {
        filter_by_category(dummy_campaigns(), &selected.get())
            .into_iter()
            .map(|c| view! { <CampaignCard campaign=c.clone()/> })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="explore">
            <h1>"Explore campaigns"</h1>
            <div class="explore__filters">{chips}</div>
            <div class="campaign-grid">{cards}</div>
        </section>
    }
}
