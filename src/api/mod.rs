pub mod client;
pub mod types;

pub use client::{HttpTranslator, TranslateBackend, TranslateError};
pub use types::{TranslationRequest, TranslationResult};
