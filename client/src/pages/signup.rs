//! Signup page. Accounts live only in page state.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::pages::login::RoleSelect;
use crate::state::auth::{AuthState, User, UserRole};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::form::{field, is_plausible_email};
use crate::util::notify::notify;

pub(crate) const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

/// Check the signup form and build the new user.
pub(crate) fn validate_signup(input: &SignupInput) -> Result<User, &'static str> {
    let name = field(&input.name);
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = field(&input.email);
    if !is_plausible_email(&email) {
        return Err("Enter a valid email address.");
    }
    if input.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if input.password != input.confirm_password {
        return Err("Passwords do not match.");
    }
    let role = UserRole::parse(&input.role).ok_or("Choose investor or entrepreneur.")?;
    Ok(User { name, email, role })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::default());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = SignupInput {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            role: role.get().as_str().to_owned(),
        };
        match validate_signup(&input) {
            Ok(user) => {
                let destination = if user.role == UserRole::Entrepreneur { "/start-campaign" } else { "/campaigns" };
                let greeting = format!("Welcome, {}.", user.name);
                auth.update(|a| a.sign_in(user));
                info.set(String::new());
                notify(toasts, ToastKind::Success, "Account created", &greeting);
                navigate(destination, NavigateOptions::default());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    <RoleSelect role=role/>
                    <button class="login-button" type="submit">"Sign up"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
