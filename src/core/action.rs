//! # Actions
//!
//! Everything that can happen in Glot becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The backend responds? That's `Action::TranslationReceived(result)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state, returning an `Effect` describing the side effect
//! the event loop should run. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state and
//! effects. The capability gates for the speech services are part of the
//! action payload, so both sides of each gate are covered without a
//! platform engine.

use log::debug;

use crate::api::{TranslationRequest, TranslationResult};
use crate::core::history::HistoryEntry;
use crate::core::lang::Language;
use crate::core::state::{App, RESULT_LINES};
use crate::speech::Capability;

/// Everything that can happen in the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Enter pressed with the current input text.
    Submit(String),
    /// Backend returned a result for the in-flight request.
    TranslationReceived(TranslationResult),
    /// Backend request failed (network error or non-2xx status).
    TranslationFailed(String),
    /// The reveal schedule says line `0..3` should now be visible.
    RevealLine(u8),
    /// Picker chose a target language.
    SelectLanguage(Language),
    /// Quick-cycle to the next target language.
    CycleLanguage,
    /// Speech-to-text trigger, with the recognizer's capability state.
    Listen { capability: Capability },
    /// Recognition produced its one-shot transcript.
    TranscriptReceived(String),
    /// Recognition failed at runtime. Cleared silently per design.
    RecognitionFailed(String),
    /// Text-to-speech trigger, with the synthesizer's capability state.
    Speak { capability: Capability },
    /// Synthesis failed; surfaced in the status line only.
    SpeakFailed(String),
    /// History overlay chose an entry to load back into the input.
    RecallHistory(HistoryEntry),
    /// History overlay deleted an entry by id.
    RemoveHistoryEntry(String),
    /// Dismiss the blocking error view.
    DismissError,
    Quit,
}

/// Side effects the event loop runs after an update. At most one per
/// action; `None` means the state change was the whole story.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Spawn the translate request on the runtime.
    SpawnTranslate(TranslationRequest),
    /// Start the staggered result reveal schedule.
    ScheduleReveal,
    /// Start a one-shot recognition session.
    StartRecognition,
    /// Speak `text` with the utterance language `lang`.
    Speak { text: String, lang: Language },
    /// Replace the input buffer wholesale (transcript or recalled entry).
    ReplaceInput(String),
    Quit,
}

/// The only mutation path for `App`.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            // Empty or whitespace-only input is a silent no-op.
            if text.trim().is_empty() {
                return Effect::None;
            }
            // One outstanding request at a time; later submissions are
            // ignored until this one resolves (see DESIGN.md).
            if app.is_loading {
                debug!("Submit ignored: request already in flight");
                return Effect::None;
            }
            app.is_loading = true;
            app.reveal_stage = 0;
            app.error = None;
            app.pending_text = Some(text.clone());
            app.status_message = format!("Translating to {}...", app.target.label());
            Effect::SpawnTranslate(TranslationRequest::new(text, app.target))
        }

        Action::TranslationReceived(result) => {
            app.is_loading = false;
            if let Some(text) = app.pending_text.take() {
                app.history.push(HistoryEntry::new(text, app.target, result.clone()));
            }
            app.result = Some(result);
            app.reveal_stage = 0;
            app.status_message = String::from("Done");
            Effect::ScheduleReveal
        }

        Action::TranslationFailed(message) => {
            // Previous result stays untouched; the error view is the
            // blocking notice and loading always clears.
            app.is_loading = false;
            app.pending_text = None;
            app.status_message = String::from("Translation failed");
            app.error = Some(message);
            Effect::None
        }

        Action::RevealLine(line) => {
            // Stale schedule ticks (aborted late, or racing a new
            // submission) must not resurrect old lines.
            if app.result.is_some() && !app.is_loading {
                app.reveal_stage = app.reveal_stage.max((line + 1).min(RESULT_LINES));
            }
            Effect::None
        }

        Action::SelectLanguage(lang) => {
            app.target = lang;
            app.status_message = format!("Target: {}", lang.label());
            Effect::None
        }

        Action::CycleLanguage => {
            app.target = app.target.next();
            app.status_message = format!("Target: {}", app.target.label());
            Effect::None
        }

        Action::Listen { capability } => match capability {
            Capability::Unavailable(reason) => {
                app.error = Some(reason);
                Effect::None
            }
            Capability::Available => {
                if app.is_listening {
                    return Effect::None;
                }
                app.is_listening = true;
                app.status_message = String::from("Listening...");
                Effect::StartRecognition
            }
        },

        Action::TranscriptReceived(transcript) => {
            app.is_listening = false;
            app.status_message = String::from("Heard you");
            Effect::ReplaceInput(transcript)
        }

        Action::RecognitionFailed(_reason) => {
            // Silent by design: clear the flag, no user notice. The
            // spawning task already logged the detail.
            app.is_listening = false;
            Effect::None
        }

        Action::Speak { capability } => match capability {
            Capability::Unavailable(reason) => {
                app.error = Some(reason);
                Effect::None
            }
            Capability::Available => {
                // Empty string when no result yet; the synthesizer
                // treats that as a no-op utterance.
                let text = app
                    .result
                    .as_ref()
                    .map(|r| r.translated.clone())
                    .unwrap_or_default();
                Effect::Speak {
                    text,
                    lang: app.target,
                }
            }
        },

        Action::SpeakFailed(reason) => {
            app.status_message = format!("Speech failed: {reason}");
            Effect::None
        }

        Action::RecallHistory(entry) => {
            app.target = entry.target;
            app.status_message = format!("Recalled ({})", entry.target.label());
            Effect::ReplaceInput(entry.text)
        }

        Action::RemoveHistoryEntry(id) => {
            app.history.retain(|e| e.id != id);
            Effect::None
        }

        Action::DismissError => {
            app.error = None;
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_result, test_app};

    fn submit(app: &mut App, text: &str) -> Effect {
        update(app, Action::Submit(text.to_string()))
    }

    #[test]
    fn test_empty_submit_is_a_noop() {
        let mut app = test_app();
        assert_eq!(submit(&mut app, ""), Effect::None);
        assert_eq!(submit(&mut app, "   \t\n"), Effect::None);
        assert!(!app.is_loading);
        assert_eq!(app.reveal_stage, 0);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_submit_spawns_request_with_current_target() {
        let mut app = test_app();
        update(&mut app, Action::SelectLanguage(Language::French));
        let effect = submit(&mut app, "hello");

        assert!(app.is_loading);
        assert_eq!(app.reveal_stage, 0);
        assert_eq!(
            effect,
            Effect::SpawnTranslate(TranslationRequest::new(
                "hello".to_string(),
                Language::French
            ))
        );
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut app = test_app();
        submit(&mut app, "first");
        assert!(app.is_loading);

        let effect = submit(&mut app, "second");
        assert_eq!(effect, Effect::None);
        assert_eq!(app.pending_text.as_deref(), Some("first"));
    }

    #[test]
    fn test_submit_clears_previous_error() {
        let mut app = test_app();
        app.error = Some("old failure".to_string());
        submit(&mut app, "retry");
        assert!(app.error.is_none());
    }

    #[test]
    fn test_success_stores_result_and_schedules_reveal() {
        let mut app = test_app();
        submit(&mut app, "hello");

        let effect = update(
            &mut app,
            Action::TranslationReceived(sample_result("en", "bonjour", "bonjour")),
        );
        assert_eq!(effect, Effect::ScheduleReveal);
        assert!(!app.is_loading);
        assert_eq!(app.reveal_stage, 0);

        let result = app.result.as_ref().unwrap();
        assert_eq!(result.source_lang, "en");
        assert_eq!(result.translated, "bonjour");
        assert_eq!(result.romanized, "bonjour");
    }

    #[test]
    fn test_success_appends_history() {
        let mut app = test_app();
        update(&mut app, Action::SelectLanguage(Language::French));
        submit(&mut app, "hello");
        update(
            &mut app,
            Action::TranslationReceived(sample_result("en", "bonjour", "bonjour")),
        );

        assert_eq!(app.history.len(), 1);
        let entry = &app.history[0];
        assert_eq!(entry.text, "hello");
        assert_eq!(entry.target, Language::French);
        assert_eq!(entry.result.translated, "bonjour");
    }

    #[test]
    fn test_reveal_advances_in_order_and_never_regresses() {
        let mut app = test_app();
        submit(&mut app, "hello");
        update(
            &mut app,
            Action::TranslationReceived(sample_result("en", "bonjour", "bonjour")),
        );

        for (line, expected_stage) in [(0u8, 1u8), (1, 2), (2, 3)] {
            update(&mut app, Action::RevealLine(line));
            assert_eq!(app.reveal_stage, expected_stage);
        }
        assert!(app.fully_revealed());

        // A late duplicate for an earlier line must not regress the stage.
        update(&mut app, Action::RevealLine(0));
        assert_eq!(app.reveal_stage, 3);
    }

    #[test]
    fn test_reveal_ignored_without_result_or_while_loading() {
        let mut app = test_app();
        update(&mut app, Action::RevealLine(0));
        assert_eq!(app.reveal_stage, 0);

        submit(&mut app, "hello");
        update(&mut app, Action::RevealLine(0));
        assert_eq!(app.reveal_stage, 0);
    }

    #[test]
    fn test_failure_clears_loading_and_keeps_previous_result() {
        let mut app = test_app();
        submit(&mut app, "hello");
        update(
            &mut app,
            Action::TranslationReceived(sample_result("en", "bonjour", "bonjour")),
        );
        let previous = app.result.clone();

        submit(&mut app, "again");
        let effect = update(
            &mut app,
            Action::TranslationFailed("backend error (HTTP 500): boom".to_string()),
        );

        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert!(app.error.is_some());
        assert_eq!(app.result, previous);
        assert!(app.history.len() == 1, "failed request must not enter history");
    }

    #[test]
    fn test_language_change_has_no_network_effect() {
        let mut app = test_app();
        submit(&mut app, "hello");
        update(
            &mut app,
            Action::TranslationReceived(sample_result("en", "bonjour", "bonjour")),
        );
        let previous = app.result.clone();

        assert_eq!(
            update(&mut app, Action::SelectLanguage(Language::Japanese)),
            Effect::None
        );
        assert_eq!(update(&mut app, Action::CycleLanguage), Effect::None);
        assert_eq!(app.result, previous);
    }

    #[test]
    fn test_listen_unavailable_sets_single_notice() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::Listen {
                capability: Capability::Unavailable("no recognizer".to_string()),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.error.as_deref(), Some("no recognizer"));
        assert!(!app.is_listening);
    }

    #[test]
    fn test_listen_available_starts_one_shot_session() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::Listen {
                capability: Capability::Available,
            },
        );
        assert_eq!(effect, Effect::StartRecognition);
        assert!(app.is_listening);

        // A second press while listening does nothing.
        let effect = update(
            &mut app,
            Action::Listen {
                capability: Capability::Available,
            },
        );
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_transcript_replaces_input_and_clears_listening() {
        let mut app = test_app();
        update(
            &mut app,
            Action::Listen {
                capability: Capability::Available,
            },
        );
        let effect = update(&mut app, Action::TranscriptReceived("hola".to_string()));
        assert_eq!(effect, Effect::ReplaceInput("hola".to_string()));
        assert!(!app.is_listening);
    }

    #[test]
    fn test_recognition_error_is_silent() {
        let mut app = test_app();
        update(
            &mut app,
            Action::Listen {
                capability: Capability::Available,
            },
        );
        let effect = update(
            &mut app,
            Action::RecognitionFailed("mic exploded".to_string()),
        );
        assert_eq!(effect, Effect::None);
        assert!(!app.is_listening);
        assert!(app.error.is_none(), "recognition errors show no notice");
    }

    #[test]
    fn test_speak_with_no_result_uses_empty_utterance() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::Speak {
                capability: Capability::Available,
            },
        );
        assert_eq!(
            effect,
            Effect::Speak {
                text: String::new(),
                lang: app.target,
            }
        );
    }

    #[test]
    fn test_speak_uses_translated_text_and_target_lang() {
        let mut app = test_app();
        update(&mut app, Action::SelectLanguage(Language::French));
        submit(&mut app, "hello");
        update(
            &mut app,
            Action::TranslationReceived(sample_result("en", "bonjour", "bonjour")),
        );

        let effect = update(
            &mut app,
            Action::Speak {
                capability: Capability::Available,
            },
        );
        assert_eq!(
            effect,
            Effect::Speak {
                text: "bonjour".to_string(),
                lang: Language::French,
            }
        );
    }

    #[test]
    fn test_speak_unavailable_sets_notice() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::Speak {
                capability: Capability::Unavailable("no synthesizer".to_string()),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.error.as_deref(), Some("no synthesizer"));
    }

    #[test]
    fn test_recall_history_replaces_input_and_target() {
        let mut app = test_app();
        let entry = HistoryEntry::new(
            "hello".to_string(),
            Language::Korean,
            sample_result("en", "안녕", "annyeong"),
        );
        let effect = update(&mut app, Action::RecallHistory(entry));
        assert_eq!(effect, Effect::ReplaceInput("hello".to_string()));
        assert_eq!(app.target, Language::Korean);
    }

    #[test]
    fn test_remove_history_entry() {
        let mut app = test_app();
        submit(&mut app, "hello");
        update(
            &mut app,
            Action::TranslationReceived(sample_result("en", "bonjour", "bonjour")),
        );
        let id = app.history[0].id.clone();
        update(&mut app, Action::RemoveHistoryEntry(id));
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_full_hello_to_french_scenario() {
        let mut app = test_app();
        update(&mut app, Action::SelectLanguage(Language::French));

        let effect = submit(&mut app, "hello");
        assert!(matches!(effect, Effect::SpawnTranslate(_)));

        update(
            &mut app,
            Action::TranslationReceived(sample_result("en", "bonjour", "bonjour")),
        );
        for line in 0..3 {
            update(&mut app, Action::RevealLine(line));
        }

        let result = app.result.as_ref().unwrap();
        assert_eq!(result.source_lang, "en");
        assert_eq!(result.translated, "bonjour");
        assert_eq!(result.romanized, "bonjour");
        assert!(app.fully_revealed());
    }
}
