//! # Language Picker Component
//!
//! Full-screen overlay for choosing the translation target. Opened with
//! Ctrl+L, dismissed with Esc. Tab cycles languages without opening the
//! overlay at all.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `LanguagePickerState` lives in `TuiState`
//! - `LanguagePicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::lang::{ALL_LANGUAGES, Language};
use crate::tui::event::TuiEvent;

/// Persistent state for the language picker overlay.
pub struct LanguagePickerState {
    pub selected: usize,
    pub list_state: ListState,
}

impl LanguagePickerState {
    /// Opens the picker with the current target pre-selected.
    pub fn new(current: Language) -> Self {
        let selected = ALL_LANGUAGES
            .iter()
            .position(|l| *l == current)
            .unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            selected,
            list_state,
        }
    }

    /// Handle a key event, returning a PickerEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<PickerEvent> {
        match event {
            TuiEvent::Escape => Some(PickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(ALL_LANGUAGES.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(PickerEvent::Select(ALL_LANGUAGES[self.selected])),
            _ => None,
        }
    }
}

/// Events emitted by the language picker.
pub enum PickerEvent {
    Select(Language),
    Dismiss,
}

/// Transient render wrapper for the language picker overlay.
pub struct LanguagePicker<'a> {
    state: &'a mut LanguagePickerState,
    current: Language,
}

impl<'a> LanguagePicker<'a> {
    pub fn new(state: &'a mut LanguagePickerState, current: Language) -> Self {
        Self { state, current }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Target Language ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = ALL_LANGUAGES
            .iter()
            .map(|lang| {
                let is_active = *lang == self.current;
                let marker = if is_active { "● " } else { "  " };
                let line = Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::raw(lang.label()),
                    Span::styled(
                        format!("  ({})", lang.code()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Centers a `percent_x` × `percent_y` rect inside `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);
    horizontal[1]
}
