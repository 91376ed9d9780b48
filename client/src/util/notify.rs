//! Toast helpers that also schedule auto-dismiss in the browser.

use leptos::prelude::*;
use ventureboard::error::ApiError;

use crate::state::toast::{ToastKind, ToastState};

/// Show a toast; it disappears after `TOAST_DURATION_MS` in the browser.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, title: &str, message: &str) {
    if let Some(id) = toasts.try_update(|t| t.push(kind, title, message)) {
        schedule_dismiss(toasts, id);
    }
}

/// Show an error toast for a failed API call.
pub fn notify_api_error(toasts: RwSignal<ToastState>, title: &str, err: &ApiError) {
    if let Some(id) = toasts.try_update(|t| t.push_api_error(title, err)) {
        schedule_dismiss(toasts, id);
    }
}

fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_DURATION_MS).await;
        toasts.update(|t| {
            t.dismiss(id);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, id);
    }
}
