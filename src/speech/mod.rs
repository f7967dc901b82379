//! # Speech Services
//!
//! Thin wrappers around platform speech recognition and synthesis.
//! Glot does not implement either — like the translation backend, both
//! are external collaborators reached through a narrow trait:
//!
//! ```text
//!   core / event loop
//!         │
//!         ├── SpeechInput::listen_once()   → one-shot transcript
//!         └── SpeechOutput::speak()        → fire-and-forget utterance
//!                  │
//!                  ▼
//!       user-configured helper command
//!       ([speech] section of config.toml)
//! ```
//!
//! Every use is preceded by a capability check. `Unavailable` is a
//! first-class state, not an error: the UI surfaces the reason once and
//! does nothing else. Tests inject the mock engines from
//! `test_support` to simulate both sides of the gate.

pub mod recognizer;
pub mod synthesizer;

use std::fmt;

use async_trait::async_trait;

use crate::core::lang::Language;

/// Whether a platform speech service can be used right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    Available,
    /// Human-readable reason, shown to the user verbatim.
    Unavailable(String),
}

impl Capability {
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available)
    }
}

/// Errors from a speech helper. Recognition errors are handled silently
/// (listening state cleared, log only); synthesis errors surface in the
/// status line.
#[derive(Debug)]
pub enum SpeechError {
    /// The helper process could not be spawned.
    Spawn(String),
    /// The helper ran but exited non-zero.
    Helper(String),
    /// Reading/writing the helper's pipes failed.
    Io(String),
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechError::Spawn(msg) => write!(f, "could not start speech helper: {msg}"),
            SpeechError::Helper(msg) => write!(f, "speech helper failed: {msg}"),
            SpeechError::Io(msg) => write!(f, "speech helper I/O error: {msg}"),
        }
    }
}

impl std::error::Error for SpeechError {}

/// One-shot speech recognition.
#[async_trait]
pub trait SpeechInput: Send + Sync {
    /// Gate checked before every listen attempt.
    fn capability(&self) -> Capability;

    /// Runs a single recognition session and returns the transcript.
    /// No interim results, no cancellation once started.
    async fn listen_once(&self) -> Result<String, SpeechError>;
}

/// Speech synthesis.
#[async_trait]
pub trait SpeechOutput: Send + Sync {
    /// Gate checked before every speak attempt.
    fn capability(&self) -> Capability;

    /// Speaks `text` with the utterance language set to `lang`. Voice
    /// selection is left to the platform engine. An empty `text` must
    /// succeed and produce no audio.
    async fn speak(&self, text: &str, lang: Language) -> Result<(), SpeechError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedRecognizer, UnavailableSpeech};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_injected_recognizer_behind_trait_object() {
        // The event loop only ever sees `Arc<dyn SpeechInput>`; both
        // sides of the capability gate work through that seam.
        let available: Arc<dyn SpeechInput> = Arc::new(ScriptedRecognizer {
            transcript: "hola".to_string(),
        });
        assert!(available.capability().is_available());
        assert_eq!(available.listen_once().await.unwrap(), "hola");
    }

    #[test]
    fn test_unavailable_gate_carries_reason() {
        let input: Arc<dyn SpeechInput> = Arc::new(UnavailableSpeech);
        match input.capability() {
            Capability::Unavailable(reason) => {
                assert!(reason.contains("unavailable"));
            }
            Capability::Available => panic!("gate should be closed"),
        }

        let output: Arc<dyn SpeechOutput> = Arc::new(UnavailableSpeech);
        assert!(!output.capability().is_available());
    }
}
