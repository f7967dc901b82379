use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Hard quit (Ctrl+C), honored regardless of overlays
    ForceQuit,
    // Esc: dismiss error/overlay, or quit from the main view
    Escape,
    Submit,

    // Text editing (routed to the input box)
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Backspace,
    CursorLeft,
    CursorRight,
    Home,
    End,

    // Overlay navigation
    CursorUp,
    CursorDown,

    // Control panel triggers
    CycleLanguage,      // Tab
    OpenLanguagePicker, // Ctrl+L
    Listen,             // Ctrl+R ("record")
    Speak,              // Ctrl+P ("play")
    OpenHistory,        // Ctrl+O
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::OpenLanguagePicker),
                (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Listen),
                (KeyModifiers::CONTROL, KeyCode::Char('p')) => Some(TuiEvent::Speak),
                (KeyModifiers::CONTROL, KeyCode::Char('o')) => Some(TuiEvent::OpenHistory),
                (_, KeyCode::Tab) => Some(TuiEvent::CycleLanguage),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Home) => Some(TuiEvent::Home),
                (_, KeyCode::End) => Some(TuiEvent::End),
                _ => None,
            }
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
