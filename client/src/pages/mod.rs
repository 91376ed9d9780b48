//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (params, form state, API calls,
//! toasts) and delegates rendering details to `components`. Form rules live
//! in plain functions next to each page so they can be tested without a DOM.

pub mod campaign;
pub mod campaigns;
pub mod edit_campaign;
pub mod home;
pub mod invest;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod start_campaign;
