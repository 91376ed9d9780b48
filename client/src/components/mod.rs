//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components render from context state or props and leave route-level
//! orchestration to `pages`.

pub mod campaign_card;
pub mod funding_progress;
pub mod layout;
pub mod toast_viewport;
