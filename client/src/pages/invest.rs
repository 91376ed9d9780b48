//! Investment checkout with masked card inputs.
//!
//! DESIGN
//! ======
//! Card number, expiry, and security code are reformatted on every keystroke
//! with the shared payment formatters, so the input always shows the
//! canonical display form. Submission only checks the form is filled in and
//! confirms with a toast; no card is charged or verified.

#[cfg(test)]
#[path = "invest_test.rs"]
mod invest_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use ventureboard::campaign::{Campaign, format_currency};
use ventureboard::payment::{
    CARD_NUMBER_MAX_LEN, CVV_MAX_LEN, ExpiryDate, digits_only, format_card_number, format_cvv, format_expiry_date,
};

use crate::pages::campaign::resolve_campaign;
use crate::pages::not_found::CampaignNotFound;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::form::{field, parse_amount};
use crate::util::notify::notify;

const MIN_CVV_LEN: usize = 3;

/// Raw checkout form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CheckoutInput {
    pub amount: String,
    pub card_holder: String,
    pub card_number: String,
    pub expiry: ExpiryDate,
    pub cvv: String,
}

/// What the confirmation toast reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CheckoutSummary {
    pub amount: u64,
    pub card_holder: String,
    pub card_last_four: String,
    pub expiry: String,
}

/// Check the form is filled in well enough to submit.
pub(crate) fn validate_checkout(input: &CheckoutInput, min_investment: u64) -> Result<CheckoutSummary, &'static str> {
    let amount = parse_amount(&input.amount).filter(|a| *a > 0).ok_or("Enter a whole-dollar amount.")?;
    if amount < min_investment {
        return Err("Amount is below the minimum investment.");
    }
    let card_holder = field(&input.card_holder);
    if card_holder.is_empty() {
        return Err("Enter the name on the card.");
    }
    let digits = digits_only(&input.card_number);
    if digits.is_empty() {
        return Err("Enter a card number.");
    }
    if !input.expiry.is_complete() {
        return Err("Enter the expiry as MM/YY.");
    }
    if input.cvv.len() < MIN_CVV_LEN {
        return Err("Enter the 3 or 4 digit security code.");
    }

    let card_last_four = digits[digits.len().saturating_sub(4)..].to_owned();
    Ok(CheckoutSummary { amount, card_holder, card_last_four, expiry: input.expiry.formatted_value.clone() })
}

/// Confirmation line shown after a successful checkout.
pub(crate) fn confirmation_message(summary: &CheckoutSummary, campaign_title: &str) -> String {
    format!(
        "{} pledged to {campaign_title} with the card ending {}.",
        format_currency(summary.amount),
        summary.card_last_four
    )
}

/// What the checkout route shows for a route id.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CheckoutTarget {
    Open(&'static Campaign),
    Closed(&'static Campaign),
    Missing,
}

pub(crate) fn checkout_target(id: Option<&str>) -> CheckoutTarget {
    match resolve_campaign(id) {
        Some(campaign) if campaign.is_open() => CheckoutTarget::Open(campaign),
        Some(campaign) => CheckoutTarget::Closed(campaign),
        None => CheckoutTarget::Missing,
    }
}

#[component]
pub fn InvestPage() -> impl IntoView {
    let params = use_params_map();
    let target = move || checkout_target(params.read().get("id").as_deref());

    move || match target() {
        CheckoutTarget::Open(found) => view! { <CheckoutForm campaign=found.clone()/> }.into_any(),
        CheckoutTarget::Closed(found) => view! { <CheckoutClosed campaign=found.clone()/> }.into_any(),
        CheckoutTarget::Missing => view! { <CampaignNotFound/> }.into_any(),
    }
}

#[component]
fn CheckoutClosed(campaign: Campaign) -> impl IntoView {
    let back_href = format!("/campaigns/{}", campaign.id);
    view! {
        <section class="checkout">
            <a class="checkout__back" href=back_href>"← Back to campaign"</a>
            <h1>{campaign.title.clone()}</h1>
            <p class="campaign-detail__closed">"This campaign is fully funded."</p>
        </section>
    }
}

#[component]
fn CheckoutForm(campaign: Campaign) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let amount = RwSignal::new(campaign.min_investment.to_string());
    let card_holder = RwSignal::new(String::new());
    let card_number = RwSignal::new(String::new());
    let expiry = RwSignal::new(ExpiryDate::default());
    let cvv = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let min_investment = campaign.min_investment;
    let title = campaign.title.clone();
    let back_href = format!("/campaigns/{}", campaign.id);

    let on_submit = {
        let back_href = back_href.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let input = CheckoutInput {
                amount: amount.get(),
                card_holder: card_holder.get(),
                card_number: card_number.get(),
                expiry: expiry.get(),
                cvv: cvv.get(),
            };
            match validate_checkout(&input, min_investment) {
                Ok(summary) => {
                    error.set(None);
                    notify(toasts, ToastKind::Success, "Investment confirmed", &confirmation_message(&summary, &title));
                    navigate(&back_href, NavigateOptions::default());
                }
                Err(message) => error.set(Some(message)),
            }
        }
    };

    view! {
        <section class="checkout">
            <a class="checkout__back" href=back_href>"← Back to campaign"</a>
            <h1>{format!("Invest in {}", campaign.title)}</h1>
            <p class="checkout__minimum">
                {format!("Minimum investment {}", format_currency(min_investment))}
            </p>
            <form class="checkout-form" on:submit=on_submit>
                <label class="form-field">
                    "Amount (USD)"
                    <input
                        type="text"
                        inputmode="numeric"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Name on card"
                    <input
                        type="text"
                        autocomplete="cc-name"
                        prop:value=move || card_holder.get()
                        on:input=move |ev| card_holder.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Card number"
                    <input
                        type="text"
                        inputmode="numeric"
                        autocomplete="cc-number"
                        placeholder="1234 5678 9012 3456"
                        maxlength=CARD_NUMBER_MAX_LEN.to_string()
                        prop:value=move || card_number.get()
                        on:input=move |ev| card_number.set(format_card_number(&event_target_value(&ev)))
                    />
                </label>
                <div class="form-row">
                    <label class="form-field">
                        "Expiry"
                        <input
                            type="text"
                            inputmode="numeric"
                            autocomplete="cc-exp"
                            placeholder="MM/YY"
                            maxlength="5"
                            prop:value=move || expiry.get().formatted_value
                            on:input=move |ev| expiry.set(format_expiry_date(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="form-field">
                        "CVV"
                        <input
                            type="password"
                            inputmode="numeric"
                            autocomplete="cc-csc"
                            maxlength=CVV_MAX_LEN.to_string()
                            prop:value=move || cvv.get()
                            on:input=move |ev| cvv.set(format_cvv(&event_target_value(&ev)))
                        />
                    </label>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit">"Confirm investment"</button>
            </form>
        </section>
    }
}
