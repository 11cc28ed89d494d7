//! Page-level coordinator: active language and assistant widget visibility.
//!
//! DESIGN
//! ======
//! Sections never talk to the widget directly. They call `open_bot` with an
//! optional pre-filled message; the widget drains it with
//! `take_pending_message` once it is mounted.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::i18n::Language;

/// Delay between hiding the widget and clearing its pending message, so the
/// close transition does not flash an empty state.
pub const BOT_CLOSE_DELAY_MS: u32 = 300;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub language: Language,
    pub bot_open: bool,
    pub pending_bot_message: Option<String>,
}

impl PageState {
    /// Show the widget, optionally queueing a message to send on open.
    pub fn open_bot(&mut self, message: Option<String>) {
        self.bot_open = true;
        self.pending_bot_message = message.filter(|m| !m.trim().is_empty());
    }

    pub fn close_bot(&mut self) {
        self.bot_open = false;
    }

    /// Drop a queued message that was never consumed. Runs after the close
    /// delay and only if the widget stayed closed.
    pub fn clear_pending_if_closed(&mut self) {
        if !self.bot_open {
            self.pending_bot_message = None;
        }
    }

    pub fn take_pending_message(&mut self) -> Option<String> {
        self.pending_bot_message.take()
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}
