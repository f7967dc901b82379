use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::anim::Anim;
use crate::tui::component::Component;
use crate::tui::components::{
    HistoryView, LandingPage, LanguagePicker, ResultPanel, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, anim: Anim) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3), Length(1)]);
    let [title_area, main_area, input_area, footer_area] = layout.areas(frame.area());

    // Title bar
    let mut title_bar = TitleBar::new(
        app.target.label(),
        app.status_message.clone(),
        app.is_loading,
        anim,
    );
    title_bar.render(frame, title_area);

    // Main area — blocking error view wins over everything else
    if let Some(error_msg) = &app.error {
        draw_error_view(frame, main_area, error_msg);
    } else if app.result.is_none() && !app.is_loading {
        LandingPage::new(anim).render(frame, main_area);
    } else {
        let mut panel = ResultPanel {
            result: app.result.clone(),
            reveal_stage: app.reveal_stage,
            is_loading: app.is_loading,
            anim,
        };
        panel.render(frame, main_area);
    }

    // Input area
    tui.input_box.is_listening = app.is_listening;
    tui.input_box.render(frame, input_area);

    // Footer key hints; the speak hint dims while there is no result.
    draw_footer(frame, footer_area, app.result.is_some());

    // Overlays render last, over everything
    if let Some(picker) = &mut tui.language_picker {
        LanguagePicker::new(picker, app.target).render(frame, main_area);
    }
    if let Some(history) = &mut tui.history_view {
        HistoryView::new(history).render(frame, main_area);
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(format!("{error_msg}\n\nPress Esc to dismiss"))
        .block(
            Block::bordered()
                .title(" ERROR ")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);

    frame.render_widget(error_paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, has_result: bool) {
    use ratatui::text::Span;
    let dim = Style::default().fg(Color::DarkGray);
    // ^P only does something once a result exists
    let speak_style = if has_result {
        dim
    } else {
        dim.add_modifier(ratatui::style::Modifier::DIM)
    };
    let line = Line::from(vec![
        Span::styled(" Enter translate  Tab language  ^L pick  ^R listen  ", dim),
        Span::styled("^P speak", speak_style),
        Span::styled("  ^O history  Esc quit", dim),
    ]);
    frame.render_widget(line, area);
}
