//! Funding progress bar with raised/goal caption.

use leptos::prelude::*;
use ventureboard::campaign::{Campaign, format_currency};

#[component]
pub fn FundingProgress(campaign: Campaign) -> impl IntoView {
    let percent = campaign.funded_percent();
    let width = format!("width: {percent}%");

    view! {
        <div class="funding-progress">
            <div class="funding-progress__track">
                <div class="funding-progress__fill" style=width></div>
            </div>
            <div class="funding-progress__caption">
                <strong>{format_currency(campaign.raised_amount)}</strong>
                " raised of "
                {format_currency(campaign.goal_amount)}
                <span class="funding-progress__percent">{format!("{percent}%")}</span>
            </div>
        </div>
    }
}
