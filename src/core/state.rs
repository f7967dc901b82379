//! # Application State
//!
//! Core business state for Glot. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn TranslateBackend>  // the external translate service
//! ├── target: Language              // current translation target
//! ├── result: Option<TranslationResult>  // last successful response
//! ├── is_loading: bool              // translate request in flight
//! ├── is_listening: bool            // one-shot recognition in flight
//! ├── reveal_stage: u8              // 0..=3 visible result lines
//! ├── status_message: String        // title bar text
//! ├── error: Option<String>         // blocking error view when Some
//! ├── pending_text: Option<String>  // text of the in-flight request
//! └── history: Vec<HistoryEntry>    // successful translations, oldest first
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::{TranslateBackend, TranslationResult};
use crate::core::history::HistoryEntry;
use crate::core::lang::Language;

pub struct App {
    pub backend: Arc<dyn TranslateBackend>,
    pub target: Language,
    pub result: Option<TranslationResult>,
    pub is_loading: bool,
    pub is_listening: bool,
    /// How many of the three result lines are currently revealed.
    pub reveal_stage: u8,
    pub status_message: String,
    /// When `Some`, the UI shows a blocking error view until dismissed.
    pub error: Option<String>,
    /// Text of the request currently in flight; becomes the history
    /// entry's input on success.
    pub pending_text: Option<String>,
    pub history: Vec<HistoryEntry>,
}

/// Number of result lines a translation reveals (source language,
/// translation, romanization).
pub const RESULT_LINES: u8 = 3;

impl App {
    pub fn new(backend: Arc<dyn TranslateBackend>, target: Language) -> Self {
        Self {
            backend,
            target,
            result: None,
            is_loading: false,
            is_listening: false,
            reveal_stage: 0,
            status_message: String::from("Welcome to Glot!"),
            error: None,
            pending_text: None,
            history: Vec::new(),
        }
    }

    /// True once the reveal schedule has shown every line.
    pub fn fully_revealed(&self) -> bool {
        self.reveal_stage >= RESULT_LINES
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Glot!");
        assert!(!app.is_loading);
        assert!(!app.is_listening);
        assert_eq!(app.reveal_stage, 0);
        assert!(app.result.is_none());
        assert!(app.error.is_none());
        assert!(app.history.is_empty());
    }
}
