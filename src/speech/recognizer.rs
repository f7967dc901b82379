//! Helper-command speech recognition.
//!
//! The platform recognizer is whatever command the user configured
//! (`[speech] recognizer` in `~/.glot/config.toml`) — typically a small
//! record-and-transcribe script. The command's stdout is the transcript.
//! Locale negotiation is the helper's business, not ours.

use async_trait::async_trait;
use log::{debug, info};
use tokio::process::Command;

use super::{Capability, SpeechError, SpeechInput};

/// One-shot recognizer backed by a user-configured shell command.
pub struct CommandRecognizer {
    command: Option<String>,
}

impl CommandRecognizer {
    /// `command` comes straight from the resolved config; `None` or an
    /// empty string means the capability is absent on this system.
    pub fn new(command: Option<String>) -> Self {
        let command = command.filter(|c| !c.trim().is_empty());
        Self { command }
    }
}

#[async_trait]
impl SpeechInput for CommandRecognizer {
    fn capability(&self) -> Capability {
        match &self.command {
            Some(_) => Capability::Available,
            None => Capability::Unavailable(
                "speech recognition is not set up (set [speech].recognizer in ~/.glot/config.toml)"
                    .to_string(),
            ),
        }
    }

    async fn listen_once(&self) -> Result<String, SpeechError> {
        let command = self.command.as_deref().ok_or_else(|| {
            SpeechError::Spawn("no recognizer command configured".to_string())
        })?;

        info!("Starting recognition helper: {}", command);
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .output()
            .await
            .map_err(|e| SpeechError::Spawn(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpeechError::Helper(format!(
                "exit {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!("Recognition helper returned {} chars", transcript.len());
        Ok(transcript)
    }
}
