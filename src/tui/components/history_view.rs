//! # History View Component
//!
//! Full-screen overlay for browsing, recalling, and deleting past
//! translations. Opened with Ctrl+O, dismissed with Esc. Enter loads
//! the highlighted entry back into the input box; `d` pressed twice
//! deletes it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HistoryViewState` lives in `TuiState`
//! - `HistoryView` is created each frame with borrowed state

use chrono::{Local, TimeZone};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};

use crate::core::history::HistoryEntry;
use crate::tui::event::TuiEvent;

/// Persistent state for the history overlay. Entries are newest first.
pub struct HistoryViewState {
    pub entries: Vec<HistoryEntry>,
    pub selected: usize,
    pub confirm_delete: bool,
    pub list_state: ListState,
}

impl HistoryViewState {
    pub fn new(mut entries: Vec<HistoryEntry>) -> Self {
        entries.reverse(); // stored oldest first, shown newest first
        let mut list_state = ListState::default();
        if !entries.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            entries,
            selected: 0,
            confirm_delete: false,
            list_state,
        }
    }

    /// Handle a key event, returning a HistoryEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<HistoryEvent> {
        // Reset delete confirmation on any non-delete key
        let is_delete_key = matches!(event, TuiEvent::InputChar('d'));
        if !is_delete_key {
            self.confirm_delete = false;
        }

        match event {
            TuiEvent::Escape => Some(HistoryEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.entries.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.entries.is_empty() {
                    self.selected = (self.selected + 1).min(self.entries.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self
                .entries
                .get(self.selected)
                .cloned()
                .map(HistoryEvent::Recall),
            TuiEvent::InputChar('d') => {
                if self.entries.is_empty() {
                    return None;
                }
                if self.confirm_delete {
                    let id = self.entries[self.selected].id.clone();
                    self.confirm_delete = false;
                    Some(HistoryEvent::Delete(id))
                } else {
                    self.confirm_delete = true;
                    None
                }
            }
            _ => None,
        }
    }

    /// Remove an entry from the local list after deletion.
    pub fn remove_entry(&mut self, id: &str) {
        self.entries.retain(|e| e.id != id);
        if self.entries.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(self.entries.len() - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

/// Events emitted by the history overlay.
pub enum HistoryEvent {
    Recall(HistoryEntry),
    Delete(String),
    Dismiss,
}

/// Transient render wrapper for the history overlay.
pub struct HistoryView<'a> {
    state: &'a mut HistoryViewState,
}

impl<'a> HistoryView<'a> {
    pub fn new(state: &'a mut HistoryViewState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(80, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let help_text = if self.state.confirm_delete {
            " press d again to delete "
        } else {
            " Enter Recall  d Delete  Esc Back "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" History ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        if self.state.entries.is_empty() {
            let empty = Paragraph::new("No translations yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .map(|entry| {
                let when = Local
                    .timestamp_opt(entry.created_at, 0)
                    .single()
                    .map(|t| t.format("%b %d %H:%M").to_string())
                    .unwrap_or_default();
                let line = Line::from(vec![
                    Span::styled(
                        format!("{when}  "),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(entry.preview()),
                    Span::styled(
                        format!("  → {}", entry.result.translated),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        format!("  ({})", entry.target.code()),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lang::Language;
    use crate::test_support::sample_result;

    fn entry(text: &str) -> HistoryEntry {
        HistoryEntry::new(
            text.to_string(),
            Language::French,
            sample_result("en", "bonjour", "bonjour"),
        )
    }

    #[test]
    fn test_entries_shown_newest_first() {
        let state = HistoryViewState::new(vec![entry("oldest"), entry("newest")]);
        assert_eq!(state.entries[0].text, "newest");
    }

    #[test]
    fn test_recall_emits_selected_entry() {
        let mut state = HistoryViewState::new(vec![entry("first"), entry("second")]);
        let event = state.handle_event(&TuiEvent::Submit);
        assert!(matches!(
            event,
            Some(HistoryEvent::Recall(e)) if e.text == "second"
        ));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut state = HistoryViewState::new(vec![entry("only")]);
        assert!(state.handle_event(&TuiEvent::InputChar('d')).is_none());
        assert!(state.confirm_delete);

        // Any other key cancels the pending delete.
        state.handle_event(&TuiEvent::CursorUp);
        assert!(!state.confirm_delete);

        state.handle_event(&TuiEvent::InputChar('d'));
        let event = state.handle_event(&TuiEvent::InputChar('d'));
        assert!(matches!(event, Some(HistoryEvent::Delete(_))));
    }

    #[test]
    fn test_remove_entry_fixes_selection() {
        let mut state = HistoryViewState::new(vec![entry("a"), entry("b")]);
        state.handle_event(&TuiEvent::CursorDown);
        let id = state.entries[1].id.clone();
        state.remove_entry(&id);
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.selected, 0);

        let id = state.entries[0].id.clone();
        state.remove_entry(&id);
        assert!(state.entries.is_empty());
        assert_eq!(state.list_state.selected(), None);
    }
}
