//! # Target Languages
//!
//! The fixed set of translation targets the backend understands. Each
//! variant is an opaque `(code, label)` pair: the code travels on the
//! wire (and tags speech utterances), the label is for display only.
//! Glot never interprets the codes beyond equality.

use serde::{Deserialize, Serialize};

/// A supported translation target.
///
/// The cycle order (`next()`) matches the declaration order, which is the
/// order the picker lists them in.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[serde(rename = "hi")]
    Hindi,
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "la")]
    Latin,
    #[serde(rename = "zh-CN")]
    Chinese,
}

/// All targets in picker order.
pub const ALL_LANGUAGES: [Language; 12] = [
    Language::Hindi,
    Language::English,
    Language::French,
    Language::Spanish,
    Language::Japanese,
    Language::Turkish,
    Language::German,
    Language::Dutch,
    Language::Korean,
    Language::Russian,
    Language::Latin,
    Language::Chinese,
];

impl Language {
    /// The wire code sent as the request's `target` field.
    pub fn code(self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::English => "en",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Japanese => "ja",
            Language::Turkish => "tr",
            Language::German => "de",
            Language::Dutch => "nl",
            Language::Korean => "ko",
            Language::Russian => "ru",
            Language::Latin => "la",
            Language::Chinese => "zh-CN",
        }
    }

    /// Display label for the picker and status messages.
    pub fn label(self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::Japanese => "Japanese",
            Language::Turkish => "Turkish",
            Language::German => "German",
            Language::Dutch => "Dutch",
            Language::Korean => "Korean",
            Language::Russian => "Russian",
            Language::Latin => "Latin",
            Language::Chinese => "Chinese (Simplified)",
        }
    }

    /// Cycles to the next target (wraps around).
    pub fn next(self) -> Language {
        let idx = ALL_LANGUAGES
            .iter()
            .position(|l| *l == self)
            .unwrap_or(0);
        ALL_LANGUAGES[(idx + 1) % ALL_LANGUAGES.len()]
    }

    /// Parses a wire code back into a Language. Case-insensitive on the
    /// region-less codes; `zh-CN` keeps its canonical casing.
    pub fn from_code(code: &str) -> Option<Language> {
        let normalized = code.trim();
        ALL_LANGUAGES
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(normalized))
    }
}
