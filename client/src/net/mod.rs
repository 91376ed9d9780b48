//! Networking modules for the server's JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the campaign REST endpoints; wire types are shared with the
//! server through the `ventureboard` crate.

pub mod api;
