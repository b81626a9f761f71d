use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use super::components::{render_options_panel, render_scroll_indicator, render_slider, slot_rows};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.interactions.clear();

    let indicator_rows = if app.config.show_scroll_indicator { 1 } else { 0 };

    // Main vertical layout: logo, slider, indicator, options, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2),                    // Logo + spacing
        Constraint::Length(slot_rows(&app.config)), // Slider
        Constraint::Length(indicator_rows),       // Scroll indicator
        Constraint::Length(1),                    // Spacing
        Constraint::Min(0),                       // Options
        Constraint::Length(1),                    // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);
    render_slider(frame, main_layout[1], app);
    if app.config.show_scroll_indicator {
        render_scroll_indicator(frame, main_layout[2], app);
    }
    render_options_panel(frame, main_layout[4], app);
    render_hotkeys(frame, main_layout[5]);
}

fn render_logo(frame: &mut Frame, area: Rect) {
    // Center the colorful "carousel" logo
    let logo = "carousel";
    let colors = [LOGO_CORAL, LOGO_GOLD, LOGO_LIGHT_BLUE, LOGO_MINT];
    let padding = (area.width.saturating_sub(logo.len() as u16)) / 2;

    let mut spans = vec![Span::raw(" ".repeat(padding as usize))];
    for (i, ch) in logo.chars().enumerate() {
        spans.push(Span::styled(
            ch.to_string(),
            Style::new().fg(colors[i % colors.len()]).bold(),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let keys = [
        ("h/l", "prev/next"),
        ("d", "direction"),
        ("o", "loop"),
        ("a", "autoplay"),
        ("q", "quit"),
    ];

    let mut spans = vec![];
    for (key, label) in keys {
        spans.push(Span::styled(format!("[{}] ", key), Style::new().fg(TEXT_WHITE)));
        spans.push(Span::styled(format!("{}  ", label), Style::new().fg(TEXT_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
