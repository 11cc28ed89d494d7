//! Localization tables for every display surface.
//!
//! DESIGN
//! ======
//! `Language` is a closed enum; each section module exposes one `&'static`
//! string table per language through a total `strings(lang)` lookup, so a
//! missing translation is a compile error rather than a runtime fallback.


pub mod assistant;
pub mod doctors;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod scheduler;
pub mod services;
pub mod testimonials;

use serde::{Deserialize, Serialize};

/// Active UI language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    De,
    Fr,
    Zh,
}

impl Language {
    /// Menu order.
    pub const ALL: [Language; 5] = [Self::En, Self::Hi, Self::De, Self::Fr, Self::Zh];

    /// Two-letter code used on the wire and in the language menu button.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Zh => "zh",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }

    /// English name of the language.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "Hindi",
            Self::De => "German",
            Self::Fr => "French",
            Self::Zh => "Chinese",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिंदी",
            Self::De => "Deutsch",
            Self::Fr => "Français",
            Self::Zh => "中文",
        }
    }

    /// Parenthetical suffix appended to outgoing assistant prompts so the
    /// model answers in the visitor's language. English needs none.
    #[must_use]
    pub fn reply_directive(self) -> Option<&'static str> {
        match self {
            Self::En => None,
            Self::Hi => Some(" (Please reply in Hindi)"),
            Self::De => Some(" (Please reply in German)"),
            Self::Fr => Some(" (Please reply in French)"),
            Self::Zh => Some(" (Please reply in Chinese)"),
        }
    }

    /// Append the reply directive (if any) to a user message.
    #[must_use]
    pub fn directed_prompt(self, message: &str) -> String {
        match self.reply_directive() {
            Some(suffix) => format!("{message}{suffix}"),
            None => message.to_owned(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
