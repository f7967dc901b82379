//! HTTP client for the translation backend.
//!
//! The real backend lives behind `POST {base_url}/api/translate`. The
//! client is hidden behind the [`TranslateBackend`] trait so the core
//! and the tests can swap in a scripted mock without a server.
//!
//! There is deliberately no retry, no backoff, and no error-body
//! parsing: every non-2xx status collapses into the same failure path
//! and the user retries by hand.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};

use super::types::{TranslationRequest, TranslationResult};

/// Errors that can occur while talking to the backend.
/// All variants are terminal for the current user action.
#[derive(Debug)]
pub enum TranslateError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Backend returned a non-2xx status. The body is kept only as
    /// diagnostic text, never parsed.
    Api { status: u16, message: String },
    /// The 2xx body did not match the expected response shape.
    Parse(String),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Network(msg) => write!(f, "network error: {msg}"),
            TranslateError::Api { status, message } => {
                write!(f, "backend error (HTTP {status}): {message}")
            }
            TranslateError::Parse(msg) => write!(f, "response parse error: {msg}"),
        }
    }
}

impl std::error::Error for TranslateError {}

/// A translation backend. One call, one result.
#[async_trait]
pub trait TranslateBackend: Send + Sync {
    /// Returns the backend's name for logging.
    fn name(&self) -> &str;

    /// Translates the request's text into its target language.
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError>;
}

/// The production backend: the external translate/romanize service.
pub struct HttpTranslator {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTranslator {
    /// `base_url` is the service root without the `/api/translate` path,
    /// e.g. `http://localhost:5000`.
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/translate", self.base_url)
    }
}

#[async_trait]
impl TranslateBackend for HttpTranslator {
    fn name(&self) -> &str {
        "http"
    }

    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        let url = self.endpoint();
        info!(
            "POST {} (target={}, text_len={})",
            url,
            request.target.code(),
            request.text.len()
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| TranslateError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Read the body for the log, but treat every non-2xx the same.
            let message = response.text().await.unwrap_or_default();
            let message = message.chars().take(200).collect::<String>();
            return Err(TranslateError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let result: TranslationResult = response
            .json()
            .await
            .map_err(|e| TranslateError::Parse(e.to_string()))?;

        debug!(
            "translate ok: source_lang={}, translated_len={}",
            result.source_lang,
            result.translated.len()
        );
        Ok(result)
    }
}
