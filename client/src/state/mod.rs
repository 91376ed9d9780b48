//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`, `ui`) and provided as
//! `RwSignal` contexts from the root `App`, so components depend only on the
//! small model they read.

pub mod auth;
pub mod toast;
pub mod ui;
