//! Login page.
//!
//! There is no credential check: a plausible email and a non-empty password
//! sign the user in locally with the chosen role.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, User, UserRole};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::form::{field, is_plausible_email};
use crate::util::notify::notify;

/// Validate login input, returning the trimmed email.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<String, &'static str> {
    let email = field(email);
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !is_plausible_email(&email) {
        return Err("Enter a valid email address.");
    }
    Ok(email)
}

/// Display name derived from the email's local part, `jane.doe` -> `Jane Doe`.
pub(crate) fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::default());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&email.get(), &password.get()) {
            Ok(email_value) => {
                let user = User { name: display_name_from_email(&email_value), email: email_value, role: role.get() };
                let greeting = format!("Signed in as {}.", user.name);
                auth.update(|a| a.sign_in(user));
                password.set(String::new());
                info.set(String::new());
                notify(toasts, ToastKind::Success, "Welcome back", &greeting);
                navigate("/campaigns", NavigateOptions::default());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Log in"</h1>
                <p class="login-card__subtitle">"Back your next big idea"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <RoleSelect role=role/>
                    <button class="login-button" type="submit">"Log in"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "New here? " <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

/// Investor / entrepreneur picker shared by login and signup.
#[component]
pub fn RoleSelect(role: RwSignal<UserRole>) -> impl IntoView {
    let options = [UserRole::Investor, UserRole::Entrepreneur];
    view! {
        <select
            class="login-input"
            prop:value=move || role.get().as_str()
            on:change=move |ev| {
                if let Some(parsed) = UserRole::parse(&event_target_value(&ev)) {
                    role.set(parsed);
                }
            }
        >
            {options
                .into_iter()
                .map(|option| view! { <option value=option.as_str()>{option.label()}</option> })
                .collect_view()}
        </select>
    }
}
