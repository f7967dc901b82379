//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{TranslateBackend, TranslateError, TranslationRequest, TranslationResult};
use crate::core::lang::Language;
use crate::core::state::App;
use crate::speech::{Capability, SpeechError, SpeechInput, SpeechOutput};

/// A backend that always returns the same scripted result.
pub struct ScriptedBackend {
    pub result: TranslationResult,
}

#[async_trait]
impl TranslateBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn translate(
        &self,
        _request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        Ok(self.result.clone())
    }
}

/// A backend that always fails with the given HTTP status.
pub struct FailingBackend {
    pub status: u16,
}

#[async_trait]
impl TranslateBackend for FailingBackend {
    fn name(&self) -> &str {
        "failing"
    }

    async fn translate(
        &self,
        _request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        Err(TranslateError::Api {
            status: self.status,
            message: "scripted failure".to_string(),
        })
    }
}

/// Speech input that immediately returns a fixed transcript.
pub struct ScriptedRecognizer {
    pub transcript: String,
}

#[async_trait]
impl SpeechInput for ScriptedRecognizer {
    fn capability(&self) -> Capability {
        Capability::Available
    }

    async fn listen_once(&self) -> Result<String, SpeechError> {
        Ok(self.transcript.clone())
    }
}

/// Speech engine reporting the unavailable side of the capability gate.
pub struct UnavailableSpeech;

#[async_trait]
impl SpeechInput for UnavailableSpeech {
    fn capability(&self) -> Capability {
        Capability::Unavailable("speech recognition unavailable".to_string())
    }

    async fn listen_once(&self) -> Result<String, SpeechError> {
        Err(SpeechError::Spawn("unavailable".to_string()))
    }
}

#[async_trait]
impl SpeechOutput for UnavailableSpeech {
    fn capability(&self) -> Capability {
        Capability::Unavailable("speech output unavailable".to_string())
    }

    async fn speak(&self, _text: &str, _lang: Language) -> Result<(), SpeechError> {
        Err(SpeechError::Spawn("unavailable".to_string()))
    }
}

/// Builds a `TranslationResult` from its three wire fields.
pub fn sample_result(source_lang: &str, translated: &str, romanized: &str) -> TranslationResult {
    TranslationResult {
        source_lang: source_lang.to_string(),
        translated: translated.to_string(),
        romanized: romanized.to_string(),
    }
}

/// Creates a test App with a scripted backend and the default target.
pub fn test_app() -> App {
    let backend = Arc::new(ScriptedBackend {
        result: sample_result("en", "bonjour", "bonjour"),
    });
    App::new(backend, Language::default())
}
