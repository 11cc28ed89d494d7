//! Networking modules for the assistant HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the browser-side calls and `types` defines the JSON schema
//! shared with the server crate.

pub mod api;
pub mod types;
