//! Local UI chrome state (theme, navigation menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so layout
//! controls can evolve independently of campaign data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the layout wrapper.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Mobile navigation drawer.
    pub nav_open: bool,
}

impl UiState {
    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }
}
