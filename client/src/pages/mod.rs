//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single scrolling page; `home` composes the section
//! components in order and hosts the assistant widget.

pub mod home;
