//! Edit form for an existing campaign.
//!
//! Only fields that differ from the current record are sent, so the PATCH
//! body stays a true partial update.

#[cfg(test)]
#[path = "edit_campaign_test.rs"]
mod edit_campaign_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use ventureboard::campaign::{Campaign, CampaignDetailUpdate};

use crate::pages::campaign::resolve_campaign;
use crate::pages::not_found::CampaignNotFound;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::form::{field, parse_amount};
use crate::util::notify::{notify, notify_api_error};

/// Raw text of the edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EditFormFields {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub goal_amount: String,
    pub min_investment: String,
}

impl EditFormFields {
    /// Prefill the form from the current record.
    pub(crate) fn from_campaign(campaign: &Campaign) -> Self {
        Self {
            title: campaign.title.clone(),
            tagline: campaign.tagline.clone(),
            description: campaign.description.clone(),
            category: campaign.category.clone(),
            location: campaign.location.clone(),
            goal_amount: campaign.goal_amount.to_string(),
            min_investment: campaign.min_investment.to_string(),
        }
    }
}

fn changed_text(current: &str, raw: &str) -> Option<String> {
    let next = field(raw);
    (next != current).then_some(next)
}

/// Diff the form against `original`, keeping only the fields that changed.
pub(crate) fn build_detail_update(
    original: &Campaign,
    fields: &EditFormFields,
) -> Result<CampaignDetailUpdate, &'static str> {
    if field(&fields.title).is_empty() {
        return Err("Title cannot be empty.");
    }
    let goal_amount = parse_amount(&fields.goal_amount).filter(|g| *g > 0).ok_or("Enter a funding goal in whole dollars.")?;
    let min_investment = parse_amount(&fields.min_investment).ok_or("Enter the minimum investment in whole dollars.")?;
    if min_investment > goal_amount {
        return Err("Minimum investment cannot exceed the funding goal.");
    }

    let update = CampaignDetailUpdate {
        title: changed_text(&original.title, &fields.title),
        tagline: changed_text(&original.tagline, &fields.tagline),
        description: changed_text(&original.description, &fields.description),
        category: changed_text(&original.category, &fields.category),
        location: changed_text(&original.location, &fields.location),
        image_url: None,
        goal_amount: (goal_amount != original.goal_amount).then_some(goal_amount),
        min_investment: (min_investment != original.min_investment).then_some(min_investment),
    };
    if update.is_empty() {
        return Err("Nothing to update.");
    }
    Ok(update)
}

#[component]
pub fn EditCampaignPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let campaign = move || resolve_campaign(params.read().get("id").as_deref());

    move || match campaign() {
        None => view! { <CampaignNotFound/> }.into_any(),
        Some(_) if !auth.get().can_manage_campaigns() => view! {
            <section class="edit-campaign">
                <p class="edit-campaign__gate">
                    "Only entrepreneurs can edit campaigns. "
                    <a href="/login">"Log in"</a>
                </p>
            </section>
        }
        .into_any(),
        Some(found) => view! { <EditCampaignForm campaign=found.clone()/> }.into_any(),
    }
}

#[component]
fn EditCampaignForm(campaign: Campaign) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let fields = RwSignal::new(EditFormFields::from_campaign(&campaign));
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);
    let back_href = format!("/campaigns/{}", campaign.id);
    let heading = format!("Edit {}", campaign.title);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let update = match build_detail_update(&campaign, &fields.get()) {
            Ok(update) => update,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let id = campaign.id.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_campaign_detail(&id, &update).await {
                    Ok(saved) => {
                        notify(toasts, ToastKind::Success, "Campaign updated", &format!("Saved changes to {}.", saved.title));
                        navigate(&format!("/campaigns/{id}"), NavigateOptions::default());
                    }
                    Err(e) => notify_api_error(toasts, "Could not update campaign", &e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (update, toasts);
        }
    };

    view! {
        <section class="edit-campaign">
            <a class="edit-campaign__back" href=back_href>"← Back to campaign"</a>
            <h1>{heading}</h1>
            <form class="campaign-form" on:submit=on_submit>
                <label class="form-field">
                    "Title"
                    <input
                        type="text"
                        prop:value=move || fields.with(|f| f.title.clone())
                        on:input=move |ev| fields.update(|f| f.title = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Tagline"
                    <input
                        type="text"
                        prop:value=move || fields.with(|f| f.tagline.clone())
                        on:input=move |ev| fields.update(|f| f.tagline = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Description"
                    <textarea
                        rows="6"
                        prop:value=move || fields.with(|f| f.description.clone())
                        on:input=move |ev| fields.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="form-row">
                    <label class="form-field">
                        "Category"
                        <input
                            type="text"
                            prop:value=move || fields.with(|f| f.category.clone())
                            on:input=move |ev| fields.update(|f| f.category = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        "Location"
                        <input
                            type="text"
                            prop:value=move || fields.with(|f| f.location.clone())
                            on:input=move |ev| fields.update(|f| f.location = event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="form-row">
                    <label class="form-field">
                        "Funding goal (USD)"
                        <input
                            type="text"
                            inputmode="numeric"
                            prop:value=move || fields.with(|f| f.goal_amount.clone())
                            on:input=move |ev| fields.update(|f| f.goal_amount = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        "Minimum investment (USD)"
                        <input
                            type="text"
                            inputmode="numeric"
                            prop:value=move || fields.with(|f| f.min_investment.clone())
                            on:input=move |ev| fields.update(|f| f.min_investment = event_target_value(&ev))
                        />
                    </label>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </section>
    }
}
