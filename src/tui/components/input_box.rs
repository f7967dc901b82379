//! # InputBox Component
//!
//! Single-line text entry with horizontal scrolling.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace, cursor movement)
//! - Handle submission (Enter)
//! - Accept wholesale replacement from speech recognition or a recalled
//!   history entry
//! - Show the listening indicator while a recognition session runs
//!
//! ## State Management
//!
//! The buffer and cursor are internal state; the listening flag is a
//! prop from the application state. Cursor positions are char indices
//! (never byte offsets), and the visible window scrolls so the cursor
//! stays on screen for arbitrarily long input.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content changed (optional, if parent needs to know)
    ContentChanged,
}

/// Text input component.
///
/// # Props
///
/// - `is_listening`: a recognition session is running (from App state)
///
/// # State
///
/// - `buffer`: current text
/// - `cursor`: char index into `buffer`
/// - `scroll`: first visible char index
pub struct InputBox {
    pub buffer: String,
    /// Whether speech recognition is currently listening (Prop)
    pub is_listening: bool,
    cursor: usize,
    scroll: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            is_listening: false,
            cursor: 0,
            scroll: 0,
        }
    }

    /// Replace the buffer wholesale (speech transcript, recalled entry).
    /// Cursor moves to the end.
    pub fn set_text(&mut self, text: String) {
        self.cursor = text.chars().count();
        self.scroll = 0;
        self.buffer = text;
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Byte offset of the given char index.
    fn byte_at(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.buffer.len())
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    fn insert_str(&mut self, s: &str) {
        let at = self.byte_at(self.cursor);
        self.buffer.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let from = self.byte_at(self.cursor - 1);
        let to = self.byte_at(self.cursor);
        self.buffer.replace_range(from..to, "");
        self.cursor -= 1;
    }

    /// Slides the scroll window so the cursor fits within `width` cells.
    fn ensure_cursor_visible(&mut self, width: u16) {
        let width = width as usize;
        if width == 0 {
            return;
        }
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
            return;
        }
        // Walk back from the cursor until the window is full.
        let chars: Vec<char> = self.buffer.chars().collect();
        let mut cells = 0usize;
        let mut start = self.cursor;
        while start > self.scroll {
            let w = chars[start - 1].width().unwrap_or(1);
            if cells + w >= width {
                break;
            }
            cells += w;
            start -= 1;
        }
        if start > self.scroll {
            self.scroll = start;
        }
    }

    /// The visible slice of the buffer for the given inner width.
    fn visible_text(&self, width: u16) -> String {
        let width = width as usize;
        let mut cells = 0usize;
        let mut out = String::new();
        for c in self.buffer.chars().skip(self.scroll) {
            let w = c.width().unwrap_or(1);
            if cells + w > width {
                break;
            }
            cells += w;
            out.push(c);
        }
        out
    }

    /// Screen column of the cursor relative to the visible window.
    fn cursor_column(&self) -> u16 {
        self.buffer
            .chars()
            .skip(self.scroll)
            .take(self.cursor.saturating_sub(self.scroll))
            .map(|c| c.width().unwrap_or(1) as u16)
            .sum()
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<InputEvent> {
        match event {
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            TuiEvent::InputChar(c) => {
                self.insert_char(*c);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(data) => {
                // Newlines make no sense in a single-line box.
                let flattened = data.replace(['\r', '\n'], " ");
                self.insert_str(&flattened);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                self.backspace();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                self.scroll = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.char_count();
                None
            }
            _ => None,
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.is_listening {
            " Input · ● listening "
        } else {
            " Input "
        };
        let border_style = if self.is_listening {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let inner_width = area.width.saturating_sub(2);
        self.ensure_cursor_visible(inner_width);

        let paragraph = Paragraph::new(self.visible_text(inner_width))
            .block(Block::bordered().title(title).border_style(border_style));
        frame.render_widget(paragraph, area);

        // Cursor sits inside the border.
        frame.set_cursor_position((area.x + 1 + self.cursor_column(), area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputBox {
        let mut input = InputBox::new();
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input
    }

    #[test]
    fn test_typing_builds_buffer() {
        let input = typed("hello");
        assert_eq!(input.buffer, "hello");
        assert_eq!(input.cursor, 5);
    }

    #[test]
    fn test_submit_emits_current_text() {
        let mut input = typed("bonjour");
        let event = input.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(InputEvent::Submit("bonjour".to_string())));
        // Buffer survives submission; the text stays editable.
        assert_eq!(input.buffer, "bonjour");
    }

    #[test]
    fn test_backspace_at_char_boundaries() {
        let mut input = typed("héllo");
        input.handle_event(&TuiEvent::Backspace);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "hél");

        // Backspace at the start is a no-op.
        let mut input = typed("a");
        input.handle_event(&TuiEvent::Backspace);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "");
    }

    #[test]
    fn test_cursor_movement_and_mid_insert() {
        let mut input = typed("hllo");
        for _ in 0..3 {
            input.handle_event(&TuiEvent::CursorLeft);
        }
        input.handle_event(&TuiEvent::InputChar('e'));
        assert_eq!(input.buffer, "hello");

        input.handle_event(&TuiEvent::End);
        assert_eq!(input.cursor, 5);
        input.handle_event(&TuiEvent::Home);
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("two\nlines".to_string()));
        assert_eq!(input.buffer, "two lines");
    }

    #[test]
    fn test_set_text_replaces_wholesale() {
        let mut input = typed("typed by hand");
        input.set_text("spoken transcript".to_string());
        assert_eq!(input.buffer, "spoken transcript");
        assert_eq!(input.cursor, "spoken transcript".chars().count());
    }

    #[test]
    fn test_scroll_follows_cursor_on_long_input() {
        let mut input = typed(&"x".repeat(50));
        input.ensure_cursor_visible(10);
        assert!(input.scroll > 0);
        let visible = input.visible_text(10);
        assert!(visible.chars().count() <= 10);
        assert!(input.cursor_column() <= 10);
    }
}
