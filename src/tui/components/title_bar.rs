//! # TitleBar Component
//!
//! Top bar carrying the animated wordmark, the current target language,
//! and status messages.
//!
//! ## Responsibilities
//!
//! - Render the "Glot" wordmark with per-letter hue-cycling and a small
//!   brightness wave (the terminal rendition of the letter bobbing)
//! - Display the current target language
//! - Display status messages (e.g., "Translating to French...")
//! - Show the blink indicator while a request is loading
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational—it receives all data as props and has
//! no internal state, which keeps it trivial to test:
//!
//! ```rust,ignore
//! let title_bar = TitleBar {
//!     target_label: "French",
//!     status_message: "Translating to French...".to_string(),
//!     is_loading: true,
//!     anim,
//! };
//! title_bar.render(frame, area);
//! ```
//!
//! ### Animation as a Prop
//!
//! The hue step and blink flag arrive in the [`Anim`] snapshot computed
//! once per frame by the event loop. The component never reads a clock,
//! so a test can pin any animation phase it wants to assert on.

use crate::tui::anim::{Anim, hue_color};
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// The wordmark rendered letter by letter.
const WORDMARK: &str = "Glot";

/// Hue distance between adjacent wordmark letters.
const LETTER_PHASE: u16 = 24;

/// Top bar component showing the wordmark, target language, and status.
pub struct TitleBar {
    /// Label of the current target language (Prop)
    pub target_label: &'static str,
    /// Transient status (e.g., "Translating to French...") (Prop)
    pub status_message: String,
    /// Whether a translate request is in flight (Prop)
    pub is_loading: bool,
    /// Frame animation snapshot (Prop)
    pub anim: Anim,
}

impl TitleBar {
    pub fn new(
        target_label: &'static str,
        status_message: String,
        is_loading: bool,
        anim: Anim,
    ) -> Self {
        Self {
            target_label,
            status_message,
            is_loading,
            anim,
        }
    }

    /// Wordmark letters with per-letter hue phase and brightness wave.
    fn wordmark_spans(&self) -> Vec<Span<'static>> {
        WORDMARK
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let phase = self.anim.hue_step.wrapping_mul(6) + (i as u16) * LETTER_PHASE;
                let mut style = Style::default()
                    .fg(hue_color(phase % 360))
                    .add_modifier(Modifier::BOLD);
                // The "bob": every third letter (sliding with the hue
                // step) dims slightly, giving the wordmark a wave.
                if self.anim.active && (i + self.anim.hue_step as usize) % 3 == 0 {
                    style = style.add_modifier(Modifier::DIM);
                }
                Span::styled(c.to_string(), style)
            })
            .collect()
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = self.wordmark_spans();

        spans.push(Span::styled(
            format!("  → {}", self.target_label),
            Style::default().fg(Color::Cyan),
        ));

        if self.is_loading {
            // Blink is tied to loading only; the ✻ toggles every 500ms.
            let marker = if self.anim.blink_on { " ✻" } else { "  " };
            spans.push(Span::styled(
                marker.to_string(),
                Style::default().fg(Color::Yellow),
            ));
        }

        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!("  | {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
