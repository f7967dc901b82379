//! # Translation History
//!
//! Append-only log of successful translations, persisted to
//! `~/.glot/history.json`. Loaded once at startup, saved once on exit —
//! the in-flight view state itself is never persisted.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash
//! safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::api::TranslationResult;
use crate::core::lang::Language;

/// Oldest entries are dropped beyond this many.
pub const MAX_HISTORY_ENTRIES: usize = 200;

/// One successful translation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    /// The submitted input text.
    pub text: String,
    pub target: Language,
    pub result: TranslationResult,
    /// Unix timestamp (seconds).
    pub created_at: i64,
}

impl HistoryEntry {
    pub fn new(text: String, target: Language, result: TranslationResult) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            target,
            result,
            created_at: Utc::now().timestamp(),
        }
    }

    /// First line of the input, truncated for list display.
    pub fn preview(&self) -> String {
        let first_line = self.text.lines().next().unwrap_or("").trim();
        if first_line.chars().count() > 48 {
            let truncated: String = first_line.chars().take(45).collect();
            format!("{truncated}...")
        } else {
            first_line.to_string()
        }
    }
}

/// Returns `~/.glot/history.json`.
fn history_path() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    Ok(home.join(".glot").join("history.json"))
}

/// Load history from the default location. Missing or unreadable files
/// are an empty history, not an error — a corrupt log should never stop
/// the app from starting.
pub fn load_history() -> Vec<HistoryEntry> {
    match history_path() {
        Ok(path) => load_from(&path),
        Err(e) => {
            warn!("History unavailable: {}", e);
            Vec::new()
        }
    }
}

pub fn load_from(path: &Path) -> Vec<HistoryEntry> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!("Failed to read history {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<HistoryEntry>>(&contents) {
        Ok(entries) => {
            debug!("Loaded {} history entries", entries.len());
            entries
        }
        Err(e) => {
            warn!("Malformed history file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Save history to the default location, keeping the newest
/// `MAX_HISTORY_ENTRIES`. Failures are logged, never fatal.
pub fn save_history(entries: &[HistoryEntry]) {
    let path = match history_path() {
        Ok(p) => p,
        Err(e) => {
            warn!("History not saved: {}", e);
            return;
        }
    };
    if let Err(e) = save_to(&path, entries) {
        warn!("Failed to save history {}: {}", path.display(), e);
    }
}

pub fn save_to(path: &Path, entries: &[HistoryEntry]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let start = entries.len().saturating_sub(MAX_HISTORY_ENTRIES);
    let kept = &entries[start..];

    let json = serde_json::to_string_pretty(kept)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    debug!("Saved {} history entries", kept.len());
    Ok(())
}
