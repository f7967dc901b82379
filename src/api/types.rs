//! Wire types for the translation backend.
//!
//! The backend is an opaque collaborator: one endpoint, one request
//! shape, one response shape. Field names here are the wire names —
//! nothing is renamed on the Rust side so a reader can diff these
//! structs against the HTTP traffic directly.

use serde::{Deserialize, Serialize};

use crate::core::lang::Language;

/// Body of `POST /api/translate`.
///
/// `Language` serializes to its wire code, so this struct produces
/// exactly `{"text": "...", "target": "fr"}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    pub text: String,
    pub target: Language,
}

impl TranslationRequest {
    pub fn new(text: String, target: Language) -> Self {
        Self { text, target }
    }
}

/// A successful response body.
///
/// Replaced wholesale on each request; `source_lang` is whatever the
/// backend's detector reported and is displayed verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TranslationResult {
    pub source_lang: String,
    pub translated: String,
    pub romanized: String,
}
