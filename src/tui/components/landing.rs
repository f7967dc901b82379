//! # Landing Page Component
//!
//! Fills the main area before the first translation: the parrot mascot,
//! a short caption, and a field of slowly drifting background glyphs.
//! Purely decorative — it reads nothing but the animation snapshot.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::anim::{Anim, hue_color};
use crate::tui::component::Component;

/// The mascot. Polyglots deserve a parrot.
const MASCOT: &[&str] = &[
    r"   __    ",
    r"  (o>    ",
    r"  //\    ",
    r"  V_/_   ",
];

/// Glyphs drifting through the background.
const FLOATERS: &[char] = &['·', '∘', '✦', '❖', '°'];

pub struct LandingPage {
    pub anim: Anim,
}

impl LandingPage {
    pub fn new(anim: Anim) -> Self {
        Self { anim }
    }

    /// Deterministic drifting positions: each floater follows its own
    /// diagonal track, advanced by the hue step. No RNG — the same step
    /// always produces the same field, which keeps tests stable.
    fn floater_positions(&self, area: Rect) -> Vec<(u16, u16, char)> {
        if !self.anim.active || area.width < 8 || area.height < 4 {
            return Vec::new();
        }
        let step = self.anim.hue_step as usize;
        (0..10)
            .map(|i| {
                let x = ((i * 37 + step * (1 + i % 3)) % area.width as usize) as u16;
                let y = ((i * 13 + step / (2 + i % 2)) % area.height as usize) as u16;
                (area.x + x, area.y + y, FLOATERS[i % FLOATERS.len()])
            })
            .collect()
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Background floaters first so the mascot draws over them.
        for (x, y, glyph) in self.floater_positions(area) {
            let cell_area = Rect::new(x, y, 1, 1);
            let floater = Paragraph::new(glyph.to_string())
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(floater, cell_area);
        }

        let accent = hue_color(self.anim.hue_step.wrapping_mul(6) % 360);

        let mut text_lines: Vec<Line> = MASCOT
            .iter()
            .map(|row| {
                Line::from(Span::styled(
                    *row,
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ))
            })
            .collect();

        text_lines.push(Line::default());
        text_lines.push(Line::from(Span::styled(
            "Say it in any tongue.",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        text_lines.push(Line::from(Span::styled(
            "Glot",
            Style::default().fg(Color::DarkGray),
        )));
        text_lines.push(Line::from(Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )));

        let text_height = text_lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(text_height)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(text_lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    #[test]
    fn test_landing_renders_mascot_and_caption() {
        let backend = TestBackend::new(40, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut landing = LandingPage::new(Anim::at(Duration::ZERO, true));
        terminal
            .draw(|f| landing.render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("(o>"));
        assert!(text.contains("Say it in any tongue."));
    }

    #[test]
    fn test_floaters_move_between_steps() {
        let area = Rect::new(0, 0, 40, 12);
        let a = LandingPage::new(Anim::at(Duration::ZERO, true)).floater_positions(area);
        let b = LandingPage::new(Anim::at(Duration::from_millis(800), true))
            .floater_positions(area);
        assert_ne!(a, b);
    }

    #[test]
    fn test_no_motion_disables_floaters() {
        let area = Rect::new(0, 0, 40, 12);
        let still = LandingPage::new(Anim::at(Duration::from_millis(800), false))
            .floater_positions(area);
        assert!(still.is_empty());
    }
}
