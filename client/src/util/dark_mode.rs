//! Theme preference persistence and application.
//!
//! Reads the stored theme from `localStorage`, falling back to the system
//! colour scheme, and toggles the `.dark-mode` class on `<html>`. Browser
//! access only happens in the hydrate build.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "ventureboard_theme";

/// Storage value for a theme flag.
#[cfg(any(test, feature = "hydrate"))]
fn theme_value(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Parse a stored theme value. Unknown values count as unset.
#[cfg(any(test, feature = "hydrate"))]
fn parse_theme_value(raw: &str) -> Option<bool> {
    match raw {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Read the theme preference.
///
/// Returns `true` if dark mode was stored, or if nothing usable is stored and
/// the system prefers a dark scheme.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(dark) = storage.get_item(STORAGE_KEY).ok().flatten().as_deref().and_then(parse_theme_value) {
                return dark;
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let class_list = el.class_list();
            let _ = if enabled { class_list.add_1("dark-mode") } else { class_list.remove_1("dark-mode") };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle the theme and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, theme_value(next));
        }
    }
    next
}
