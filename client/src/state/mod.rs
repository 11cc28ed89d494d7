//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each model is a plain struct wrapped in an `RwSignal` and provided via
//! context by `app::App`. Keeping them free of Leptos types makes every
//! state transition unit-testable on the host.

pub mod conversation;
pub mod page;
pub mod scheduler;
pub mod testimonials;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
