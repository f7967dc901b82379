//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.glot/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::lang::Language;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GlotConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub target_language: Option<Language>,
    pub animations: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SpeechConfig {
    /// Shell command whose stdout is the one-shot transcript.
    pub recognizer: Option<String>,
    /// Shell command that reads the utterance from stdin; the language
    /// code is exported as `GLOT_LANG`.
    pub synthesizer: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Default root of the external translate/romanize service.
pub const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:5000";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub target: Language,
    pub animations: bool,
    pub backend_base_url: String,
    pub recognizer_command: Option<String>,
    pub synthesizer_command: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.glot/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".glot").join("config.toml"))
}

/// Load config from `~/.glot/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GlotConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GlotConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GlotConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GlotConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: GlotConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Glot Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# target_language = "en"             # hi, en, fr, es, ja, tr, de, nl, ko, ru, la, zh-CN
# animations = true                  # decorative title/landing animation

# [backend]
# base_url = "http://localhost:5000" # translate service root (or GLOT_BACKEND_URL)

# [speech]
# One-shot speech recognition: the command's stdout becomes the input text.
# recognizer = "my-record-and-transcribe.sh"
#
# Speech synthesis: the utterance arrives on stdin, the language code in
# the GLOT_LANG environment variable.
# synthesizer = "espeak-ng -v \"$GLOT_LANG\" --stdin"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_target` and `cli_backend` are from CLI flags (None = not specified);
/// `cli_no_motion` forces animations off when true.
pub fn resolve(
    config: &GlotConfig,
    cli_target: Option<Language>,
    cli_backend: Option<&str>,
    cli_no_motion: bool,
) -> ResolvedConfig {
    // Target: CLI → env → config → default
    let target = cli_target
        .or_else(|| {
            std::env::var("GLOT_TARGET_LANG")
                .ok()
                .and_then(|code| Language::from_code(&code))
        })
        .or(config.general.target_language)
        .unwrap_or_default();

    // Backend base URL: CLI → env → config → default
    let backend_base_url = cli_backend
        .map(|s| s.to_string())
        .or_else(|| std::env::var("GLOT_BACKEND_URL").ok())
        .or_else(|| config.backend.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BACKEND_BASE_URL.to_string());

    let animations = if cli_no_motion {
        false
    } else {
        config.general.animations.unwrap_or(true)
    };

    ResolvedConfig {
        target,
        animations,
        backend_base_url,
        recognizer_command: config.speech.recognizer.clone(),
        synthesizer_command: config.speech.synthesizer.clone(),
    }
}
