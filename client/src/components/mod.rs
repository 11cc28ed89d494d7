//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component per page section. Each reads the active language from the
//! shared `PageState` context and bubbles assistant intents back through it.

pub mod doctors;
pub mod footer;
pub mod health_bot;
pub mod hero;
pub mod medicine_scheduler;
pub mod navbar;
pub mod services;
pub mod testimonials;
