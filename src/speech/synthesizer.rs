//! Helper-command speech synthesis.
//!
//! The utterance text is piped to the configured command's stdin and the
//! target language code is exported as `GLOT_LANG`, so a config line
//! like `synthesizer = "espeak-ng -v \"$GLOT_LANG\" --stdin"` works as
//! is. Voice choice within the language is the engine's default.

use async_trait::async_trait;
use log::{debug, info};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::{Capability, SpeechError, SpeechOutput};
use crate::core::lang::Language;

/// Environment variable carrying the utterance language code.
pub const LANG_ENV_VAR: &str = "GLOT_LANG";

/// Synthesizer backed by a user-configured shell command.
pub struct CommandSynthesizer {
    command: Option<String>,
}

impl CommandSynthesizer {
    pub fn new(command: Option<String>) -> Self {
        let command = command.filter(|c| !c.trim().is_empty());
        Self { command }
    }
}

#[async_trait]
impl SpeechOutput for CommandSynthesizer {
    fn capability(&self) -> Capability {
        match &self.command {
            Some(_) => Capability::Available,
            None => Capability::Unavailable(
                "speech output is not set up (set [speech].synthesizer in ~/.glot/config.toml)"
                    .to_string(),
            ),
        }
    }

    async fn speak(&self, text: &str, lang: Language) -> Result<(), SpeechError> {
        let command = self.command.as_deref().ok_or_else(|| {
            SpeechError::Spawn("no synthesizer command configured".to_string())
        })?;

        info!(
            "Starting synthesis helper (lang={}, text_len={})",
            lang.code(),
            text.len()
        );

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .env(LANG_ENV_VAR, lang.code())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SpeechError::Spawn(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| SpeechError::Io(e.to_string()))?;
            // Dropping stdin closes the pipe so the helper sees EOF.
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| SpeechError::Io(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpeechError::Helper(format!(
                "exit {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        debug!("Synthesis helper finished");
        Ok(())
    }
}
