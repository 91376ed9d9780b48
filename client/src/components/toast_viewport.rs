//! Stack of transient notifications in the corner of the viewport.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-viewport" role="status" aria-live="polite">
            <For each=move || toasts.get().toasts key=|toast| toast.id let:toast>
                <div class=toast.kind.css_class()>
                    <div class="toast__body">
                        <strong class="toast__title">{toast.title.clone()}</strong>
                        <Show when={
                            let empty = toast.message.is_empty();
                            move || !empty
                        }>
                            <p class="toast__message">{toast.message.clone()}</p>
                        </Show>
                    </div>
                    <button
                        class="toast__close"
                        aria-label="Dismiss"
                        on:click=move |_| {
                            toasts.update(|t| {
                                t.dismiss(toast.id);
                            });
                        }
                    >
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
}
