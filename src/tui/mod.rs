//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, etc.)
//! in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (decorations on, or a request loading): draws every
//!   ~80ms. One frame interval is also one hue step for the decorative
//!   layer, and the 500ms blink phase is derived from the same clock.
//! - **Idle** (`--no-motion` and nothing in flight): sleeps up to 500ms,
//!   only redraws on events.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor
//! because ratatui's `set_cursor_position` resets the terminal's blink
//! timer on every `draw()` call, making blinking cursors appear erratic
//! during continuous redraws.

mod anim;
mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::api::HttpTranslator;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::history;
use crate::core::state::App;
use crate::speech::recognizer::CommandRecognizer;
use crate::speech::synthesizer::CommandSynthesizer;
use crate::speech::{SpeechInput, SpeechOutput};
use crate::tui::anim::{ANIMATION_TICK, Anim, IDLE_TICK};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    HistoryEvent, HistoryViewState, InputBox, InputEvent, LanguagePickerState, PickerEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Delay before the first result line appears.
const REVEAL_SETTLE: Duration = Duration::from_millis(80);
/// Gap between consecutive result lines.
const REVEAL_STAGGER: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    // Overlays (None = hidden)
    pub language_picker: Option<LanguagePickerState>,
    pub history_view: Option<HistoryViewState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            language_picker: None,
            history_view: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend = Arc::new(HttpTranslator::new(config.backend_base_url.clone()));
    let recognizer: Arc<dyn SpeechInput> =
        Arc::new(CommandRecognizer::new(config.recognizer_command.clone()));
    let synthesizer: Arc<dyn SpeechOutput> =
        Arc::new(CommandSynthesizer::new(config.synthesizer_command.clone()));

    let mut app = App::new(backend, config.target);
    app.history = history::load_history();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handles for the in-flight request and the reveal schedule.
    // A new submission aborts a stale reveal so old lines can't pop in.
    let mut request_handles: Vec<AbortHandle> = Vec::new();
    let mut reveal_handles: Vec<AbortHandle> = Vec::new();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    let mut should_quit = false;
    loop {
        // Decorations animate indefinitely; loading animates the blink
        // even under --no-motion.
        let animating = config.animations || app.is_loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let anim = Anim::at(start_time.elapsed(), config.animations);
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, anim))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Ctrl+C always quits regardless of overlays
            if matches!(tui_event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // When the language picker is open, it owns all events
            if tui.language_picker.is_some() {
                let picker_event = tui
                    .language_picker
                    .as_mut()
                    .and_then(|picker| picker.handle_event(&tui_event));
                match picker_event {
                    Some(PickerEvent::Select(lang)) => {
                        update(&mut app, Action::SelectLanguage(lang));
                        tui.language_picker = None;
                    }
                    Some(PickerEvent::Dismiss) => {
                        tui.language_picker = None;
                    }
                    None => {}
                }
                continue;
            }

            // Same for the history overlay
            if tui.history_view.is_some() {
                let history_event = tui
                    .history_view
                    .as_mut()
                    .and_then(|hv| hv.handle_event(&tui_event));
                match history_event {
                    Some(HistoryEvent::Recall(entry)) => {
                        let effect = update(&mut app, Action::RecallHistory(entry));
                        should_quit |= run_effect(
                            effect,
                            &app,
                            &mut tui,
                            &mut request_handles,
                            &mut reveal_handles,
                            &recognizer,
                            &synthesizer,
                            &tx,
                        );
                        tui.history_view = None;
                    }
                    Some(HistoryEvent::Delete(id)) => {
                        update(&mut app, Action::RemoveHistoryEntry(id.clone()));
                        if let Some(ref mut hv) = tui.history_view {
                            hv.remove_entry(&id);
                        }
                    }
                    Some(HistoryEvent::Dismiss) => {
                        tui.history_view = None;
                    }
                    None => {}
                }
                continue;
            }

            // Esc dismisses the error view first; otherwise it quits
            if matches!(tui_event, TuiEvent::Escape) {
                if app.error.is_some() {
                    update(&mut app, Action::DismissError);
                } else if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            let effect = match tui_event {
                TuiEvent::CycleLanguage => Some(update(&mut app, Action::CycleLanguage)),
                TuiEvent::OpenLanguagePicker => {
                    tui.language_picker = Some(LanguagePickerState::new(app.target));
                    None
                }
                TuiEvent::OpenHistory => {
                    tui.history_view = Some(HistoryViewState::new(app.history.clone()));
                    None
                }
                TuiEvent::Listen => Some(update(
                    &mut app,
                    Action::Listen {
                        capability: recognizer.capability(),
                    },
                )),
                TuiEvent::Speak => Some(update(
                    &mut app,
                    Action::Speak {
                        capability: synthesizer.capability(),
                    },
                )),
                other => match tui.input_box.handle_event(&other) {
                    Some(InputEvent::Submit(text)) => {
                        Some(update(&mut app, Action::Submit(text)))
                    }
                    Some(InputEvent::ContentChanged) | None => None,
                },
            };

            if let Some(effect) = effect {
                should_quit |= run_effect(
                    effect,
                    &app,
                    &mut tui,
                    &mut request_handles,
                    &mut reveal_handles,
                    &recognizer,
                    &synthesizer,
                    &tx,
                );
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (request completions, reveals)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            should_quit |= run_effect(
                effect,
                &app,
                &mut tui,
                &mut request_handles,
                &mut reveal_handles,
                &recognizer,
                &synthesizer,
                &tx,
            );
        }

        if should_quit {
            break;
        }
    }

    // Persist the translation log on the way out.
    history::save_history(&app.history);

    ratatui::restore();
    Ok(())
}

/// Executes the side effect returned by `update()`. Returns true when
/// the app should quit.
#[allow(clippy::too_many_arguments)]
fn run_effect(
    effect: Effect,
    app: &App,
    tui: &mut TuiState,
    request_handles: &mut Vec<AbortHandle>,
    reveal_handles: &mut Vec<AbortHandle>,
    recognizer: &Arc<dyn SpeechInput>,
    synthesizer: &Arc<dyn SpeechOutput>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => {}
        Effect::SpawnTranslate(request) => {
            // A fresh submission invalidates any pending reveal lines.
            for handle in reveal_handles.drain(..) {
                handle.abort();
            }
            request_handles.clear();
            request_handles.push(spawn_translate(app, request, tx.clone()));
        }
        Effect::ScheduleReveal => {
            reveal_handles.clear();
            reveal_handles.push(spawn_reveal(tx.clone()));
        }
        Effect::StartRecognition => {
            spawn_recognition(recognizer.clone(), tx.clone());
        }
        Effect::Speak { text, lang } => {
            spawn_speak(synthesizer.clone(), text, lang, tx.clone());
        }
        Effect::ReplaceInput(text) => {
            tui.input_box.set_text(text);
        }
        Effect::Quit => return true,
    }
    false
}

/// Spawns the translate request; the completion comes back as an Action.
fn spawn_translate(
    app: &App,
    request: crate::api::TranslationRequest,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!(
        "Spawning translate request (backend={}, target={})",
        app.backend.name(),
        request.target.code()
    );
    let backend = app.backend.clone();
    let handle = tokio::spawn(async move {
        let action = match backend.translate(&request).await {
            Ok(result) => Action::TranslationReceived(result),
            Err(e) => {
                log::error!("Translate request failed: {}", e);
                Action::TranslationFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send translate completion: receiver dropped");
        }
    });
    handle.abort_handle()
}

/// Spawns the staggered reveal schedule: line 0 after the settle delay,
/// then one more line per stagger interval.
fn spawn_reveal(tx: mpsc::Sender<Action>) -> AbortHandle {
    let handle = tokio::spawn(async move {
        tokio::time::sleep(REVEAL_SETTLE).await;
        for line in 0..crate::core::state::RESULT_LINES {
            if tx.send(Action::RevealLine(line)).is_err() {
                warn!("Failed to send reveal tick: receiver dropped");
                return;
            }
            if line + 1 < crate::core::state::RESULT_LINES {
                tokio::time::sleep(REVEAL_STAGGER).await;
            }
        }
    });
    handle.abort_handle()
}

/// Spawns a one-shot recognition session.
fn spawn_recognition(recognizer: Arc<dyn SpeechInput>, tx: mpsc::Sender<Action>) {
    info!("Spawning recognition session");
    tokio::spawn(async move {
        let action = match recognizer.listen_once().await {
            Ok(transcript) => Action::TranscriptReceived(transcript),
            Err(e) => {
                // Runtime recognition errors are silent for the user.
                warn!("Recognition failed: {}", e);
                Action::RecognitionFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send recognition result: receiver dropped");
        }
    });
}

/// Spawns a synthesis request. Failures surface in the status line.
fn spawn_speak(
    synthesizer: Arc<dyn SpeechOutput>,
    text: String,
    lang: crate::core::lang::Language,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning synthesis (lang={}, len={})", lang.code(), text.len());
    tokio::spawn(async move {
        if let Err(e) = synthesizer.speak(&text, lang).await {
            warn!("Synthesis failed: {}", e);
            if tx.send(Action::SpeakFailed(e.to_string())).is_err() {
                warn!("Failed to send synthesis failure: receiver dropped");
            }
        }
    });
}
