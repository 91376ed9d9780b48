//! Start-a-campaign form for entrepreneurs.

#[cfg(test)]
#[path = "start_campaign_test.rs"]
mod start_campaign_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use ventureboard::campaign::CampaignBasicDetail;

use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::form::{field, parse_amount};
use crate::util::notify::{notify, notify_api_error};

/// Raw text of the start-a-campaign form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CampaignFormFields {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub category: String,
    pub founder: String,
    pub location: String,
    pub goal_amount: String,
    pub min_investment: String,
}

/// Turn the form into a creation payload, or the first problem to show.
pub(crate) fn build_basic_detail(fields: &CampaignFormFields) -> Result<CampaignBasicDetail, &'static str> {
    let title = field(&fields.title);
    if title.is_empty() {
        return Err("Give your campaign a title.");
    }
    let goal_amount = parse_amount(&fields.goal_amount).filter(|g| *g > 0).ok_or("Enter a funding goal in whole dollars.")?;
    let min_investment = if fields.min_investment.trim().is_empty() {
        0
    } else {
        parse_amount(&fields.min_investment).ok_or("Enter the minimum investment in whole dollars.")?
    };
    if min_investment > goal_amount {
        return Err("Minimum investment cannot exceed the funding goal.");
    }

    Ok(CampaignBasicDetail {
        title,
        tagline: field(&fields.tagline),
        description: field(&fields.description),
        category: field(&fields.category),
        founder: field(&fields.founder),
        location: field(&fields.location),
        goal_amount,
        min_investment,
    })
}

#[component]
pub fn StartCampaignPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <section class="start-campaign">
            <h1>"Start a campaign"</h1>
            <Show
                when=move || auth.get().can_manage_campaigns()
                fallback=|| {
                    view! {
                        <p class="start-campaign__gate">
                            "Sign in as an entrepreneur to start a campaign. "
                            <a href="/login">"Log in"</a>
                        </p>
                    }
                }
            >
                <StartCampaignForm/>
            </Show>
        </section>
    }
}

#[component]
fn StartCampaignForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let founder = auth.get_untracked().user.map(|u| u.name).unwrap_or_default();
    let fields = RwSignal::new(CampaignFormFields { founder, ..CampaignFormFields::default() });
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let detail = match build_basic_detail(&fields.get()) {
            Ok(detail) => detail,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::save_campaign_basic_detail(&detail).await {
                    Ok(campaign) => {
                        notify(toasts, ToastKind::Success, "Campaign created", &format!("{} is live.", campaign.title));
                        navigate("/campaigns", NavigateOptions::default());
                    }
                    Err(e) => notify_api_error(toasts, "Could not create campaign", &e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (detail, toasts);
        }
    };

    view! {
        <form class="campaign-form" on:submit=on_submit>
            <TextField label="Title" value=fields getter={|f| f.title.clone()} setter={|f, v| f.title = v}/>
            <TextField label="Tagline" value=fields getter={|f| f.tagline.clone()} setter={|f, v| f.tagline = v}/>
            <label class="form-field">
                "Description"
                <textarea
                    rows="6"
                    prop:value=move || fields.with(|f| f.description.clone())
                    on:input=move |ev| fields.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </label>
            <TextField label="Category" value=fields getter={|f| f.category.clone()} setter={|f, v| f.category = v}/>
            <TextField label="Founder" value=fields getter={|f| f.founder.clone()} setter={|f, v| f.founder = v}/>
            <TextField label="Location" value=fields getter={|f| f.location.clone()} setter={|f, v| f.location = v}/>
            <div class="form-row">
                <TextField
                    label="Funding goal (USD)"
                    value=fields
                    getter={|f| f.goal_amount.clone()}
                    setter={|f, v| f.goal_amount = v}
                />
                <TextField
                    label="Minimum investment (USD)"
                    value=fields
                    getter={|f| f.min_investment.clone()}
                    setter={|f, v| f.min_investment = v}
                />
            </div>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Create campaign" }}
            </button>
        </form>
    }
}

/// Single-line input bound to one field of the form signal.
#[component]
fn TextField(
    label: &'static str,
    value: RwSignal<CampaignFormFields>,
    getter: fn(&CampaignFormFields) -> String,
    setter: fn(&mut CampaignFormFields, String),
) -> impl IntoView {
    view! {
        <label class="form-field">
            {label}
            <input
                type="text"
                prop:value=move || value.with(getter)
                on:input=move |ev| {
                    let next = event_target_value(&ev);
                    value.update(|f| setter(f, next));
                }
            />
        </label>
    }
}
