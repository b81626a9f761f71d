//! Options panel - current slider options with their keys, plus scroll state.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use carousel::boundary::{Boundary, classify};
use carousel::controller::Navigation;
use carousel::geometry::max_scroll;
use carousel::viewport::Viewport;

use crate::app::App;
use crate::tui::theme::*;

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

fn option_line<'a>(label: &'a str, value: String, keys: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", label), Style::new().fg(TEXT_DIM)),
        Span::styled(format!("{:<14}", value), Style::new().fg(TEXT_WHITE)),
        Span::styled(keys, Style::new().fg(LOGO_GOLD)),
    ])
}

fn position(boundary: Boundary) -> &'static str {
    if boundary.in_between() {
        "between"
    } else if boundary.at_start && boundary.at_end {
        "fits"
    } else if boundary.at_start {
        "start"
    } else {
        "end"
    }
}

fn describe(navigation: Navigation) -> String {
    match navigation {
        Navigation::Stepped { delta } => format!("step {:+}", delta),
        Navigation::Wrapped { target } => format!("wrap to {}", target),
        Navigation::Dropped => "dropped (in flight)".to_string(),
        Navigation::Unmoved => "nothing to scroll".to_string(),
    }
}

/// Render the options panel.
pub fn render_options_panel(frame: &mut Frame, area: Rect, app: &App) {
    let config = &app.config;
    let count = app.slides.len();
    let mut lines: Vec<Line> = vec![];

    lines.push(Line::styled("Slider Options", Style::new().fg(LOGO_LIGHT_BLUE).bold()));
    lines.push(option_line("Slide width", format!("{} px", config.item_width), ""));
    lines.push(option_line("Slide height", format!("{} px", config.item_height), ""));
    lines.push(option_line("Slides to scroll", config.items_per_step.to_string(), "[-/+]"));
    lines.push(option_line("Gap", format!("{} px", config.gap), "[[/]]"));
    lines.push(option_line(
        "Scroll indicator",
        on_off(config.show_scroll_indicator).to_string(),
        "[s]",
    ));
    let looping = if config.loop_enabled && !config.effective_loop(count) {
        "on (too few)".to_string()
    } else {
        on_off(config.loop_enabled).to_string()
    };
    lines.push(option_line("Looping", looping, "[o]"));
    lines.push(option_line("Auto play", on_off(config.autoplay_enabled).to_string(), "[a]"));
    lines.push(option_line(
        "Auto play speed",
        format!("{} ms", config.autoplay_interval_ms),
        "[</>]",
    ));
    lines.push(option_line("Direction", app.direction.to_string().to_uppercase(), "[d]"));
    lines.push(Line::raw(""));

    let viewport = &app.viewport;
    let max = max_scroll(viewport.content_extent(), viewport.viewport_extent());
    lines.push(Line::styled("Scroll State", Style::new().fg(LOGO_MINT).bold()));
    lines.push(option_line(
        "Offset",
        format!("{:.0} / {:.0}", viewport.offset(), max),
        "",
    ));
    lines.push(option_line(
        "Position",
        position(classify(viewport.offset(), max)).to_string(),
        "",
    ));
    lines.push(option_line("Animating", on_off(viewport.is_animating()).to_string(), ""));
    lines.push(option_line("Slides", count.to_string(), ""));
    lines.push(option_line(
        "Last navigation",
        app.last_navigation.map(describe).unwrap_or_else(|| "-".to_string()),
        "",
    ));

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::new().fg(TEXT_DIM));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
