//! # ResultPanel Component
//!
//! The output half of the main view: three result lines (detected
//! language, translation, romanization) revealed one by one on the
//! staggered schedule driven by `Effect::ScheduleReveal`.
//!
//! The panel renders whatever the reveal stage says is visible — it
//! never decides visibility itself, so a test can pin any stage.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::api::TranslationResult;
use crate::tui::anim::{Anim, hue_color};
use crate::tui::component::Component;

/// Output panel showing the current translation result.
///
/// # Props
///
/// - `result`: the last successful response, if any
/// - `reveal_stage`: how many lines (0..=3) are visible
/// - `is_loading`: a request is in flight
/// - `anim`: frame animation snapshot (blink + accent hue)
pub struct ResultPanel {
    pub result: Option<TranslationResult>,
    pub reveal_stage: u8,
    pub is_loading: bool,
    pub anim: Anim,
}

impl ResultPanel {
    fn line(label: &str, value: &str, accent: Color) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{label:>12}  "),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(value.to_string()),
        ])
    }

    fn revealed_lines(&self) -> Vec<Line<'static>> {
        let Some(result) = &self.result else {
            return Vec::new();
        };
        let accent = hue_color(self.anim.hue_step.wrapping_mul(6) % 360);
        let all = [
            ("Language", result.source_lang.as_str()),
            ("Translation", result.translated.as_str()),
            ("Romanized", result.romanized.as_str()),
        ];
        all.iter()
            .take(self.reveal_stage as usize)
            .map(|(label, value)| Self::line(label, value, accent))
            .collect()
    }
}

impl Component for ResultPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Result ")
            .border_style(Style::default().fg(Color::DarkGray));

        if self.is_loading {
            // The spinner glyph blinks on the 500ms cadence.
            let marker = if self.anim.blink_on { "✻" } else { " " };
            let loading = Paragraph::new(format!("{marker} translating..."))
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(loading, area);
            return;
        }

        if self.result.is_none() {
            let placeholder = Paragraph::new("Translations will appear here")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(placeholder, area);
            return;
        }

        let paragraph = Paragraph::new(self.revealed_lines())
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
