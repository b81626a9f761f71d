//! Slider view - directional controls, the slide strip and the scroll indicator.
//!
//! The strip is drawn cell by cell: each cell maps back to a content
//! position (`|offset| + column * PX_PER_COLUMN`) and takes the colour of
//! the slot under it. In RTL the content runs from the right edge.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use carousel::config::SliderConfig;
use carousel::direction::Direction;
use carousel::geometry::max_scroll;
use carousel::layout::{self, Slot};
use carousel::viewport::Viewport;

use crate::app::{App, PX_PER_COLUMN, PX_PER_ROW};
use crate::events::Action;
use crate::tui::theme::*;

/// Width of each directional control
pub const CONTROL_COLUMNS: u16 = 3;

/// Strip columns left between the two controls.
pub fn strip_columns(area_width: u16) -> u16 {
    area_width.saturating_sub(CONTROL_COLUMNS * 2)
}

/// Terminal rows of one slot.
pub fn slot_rows(config: &SliderConfig) -> u16 {
    ((config.item_height / PX_PER_ROW).round() as u16).max(3)
}

/// Render controls and strip, registering their hit regions.
pub fn render_slider(frame: &mut Frame, area: Rect, app: &mut App) {
    let columns = Layout::horizontal([
        Constraint::Length(CONTROL_COLUMNS),
        Constraint::Min(0),
        Constraint::Length(CONTROL_COLUMNS),
    ])
    .split(area);

    // Controls sit on the logical start/end sides.
    let (start_area, end_area, start_glyph, end_glyph) = match app.direction {
        Direction::Ltr => (columns[0], columns[2], "❮", "❯"),
        Direction::Rtl => (columns[2], columns[0], "❯", "❮"),
    };
    let strip = columns[1];

    render_strip(frame, strip, app);
    app.interactions.register_strip(strip.into());

    if app.edges.start {
        render_control(frame, start_area, start_glyph);
        app.interactions.register_control(start_area.into(), Action::Previous);
    }
    if app.edges.end {
        render_control(frame, end_area, end_glyph);
        app.interactions.register_control(end_area.into(), Action::Next);
    }
}

fn render_control(frame: &mut Frame, area: Rect, glyph: &str) {
    let middle = area.height / 2;
    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            let text = if row == middle {
                format!(" {} ", glyph)
            } else {
                "   ".to_string()
            };
            Line::styled(text, Style::new().fg(TEXT_WHITE).bg(CONTROL_BG).bold())
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Slot under content position `px`, with the distance into that slot.
fn slot_at(px: f64, slots: &[Slot]) -> Option<(usize, f64)> {
    slots
        .iter()
        .find(|slot| px >= slot.start && px < slot.end())
        .map(|slot| (slot.index, px - slot.start))
}

fn render_strip(frame: &mut Frame, area: Rect, app: &App) {
    let offset = app.viewport.offset().abs();
    let config = &app.config;
    let rtl = app.direction.is_rtl();
    let slot_columns = (config.item_width / PX_PER_COLUMN).ceil() as usize;
    let label_row = area.height / 2;

    // Only slots overlapping the visible strip are sampled.
    let visible: Vec<Slot> = layout::slots(config, app.slides.len())
        .into_iter()
        .filter(|slot| slot.intersects(offset, area.width as f64 * PX_PER_COLUMN))
        .collect();

    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            let spans: Vec<Span> = (0..area.width)
                .map(|col| {
                    let visual = if rtl { area.width - 1 - col } else { col };
                    // sample at the cell centre
                    let px = offset + (visual as f64 + 0.5) * PX_PER_COLUMN;
                    match slot_at(px, &visible) {
                        Some((index, within)) => {
                            let slide = &app.slides[index];
                            let within_col = (within / PX_PER_COLUMN) as usize;
                            let label_col = if rtl {
                                slot_columns.saturating_sub(within_col + 1)
                            } else {
                                within_col
                            };
                            let ch = if row == label_row {
                                label_char(&slide.label, label_col, slot_columns)
                            } else {
                                ' '
                            };
                            Span::styled(ch.to_string(), Style::new().fg(Color::Black).bg(slide.color))
                        }
                        None => Span::raw(" "),
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Character of `label` centred in a slot `width` columns wide.
fn label_char(label: &str, column: usize, width: usize) -> char {
    let len = label.chars().count();
    let start = width.saturating_sub(len) / 2;
    column
        .checked_sub(start)
        .and_then(|i| label.chars().nth(i))
        .unwrap_or(' ')
}

/// Thumb position and length along a track of `track` cells.
fn thumb(offset: f64, content: f64, visible: f64, track: u16) -> (u16, u16) {
    let track_len = track as f64;
    if track == 0 {
        return (0, 0);
    }
    if content <= visible || content <= 0.0 {
        return (0, track);
    }
    let length = (track_len * visible / content).round().clamp(1.0, track_len);
    let max = max_scroll(content, visible);
    let start = (offset.abs() / max).clamp(0.0, 1.0) * (track_len - length);
    (start.round() as u16, length as u16)
}

/// Render the scroll indicator under the strip.
pub fn render_scroll_indicator(frame: &mut Frame, area: Rect, app: &App) {
    let strip = Rect {
        x: area.x + CONTROL_COLUMNS.min(area.width),
        width: strip_columns(area.width),
        ..area
    };
    let viewport = &app.viewport;
    let (start, length) = thumb(
        viewport.offset(),
        viewport.content_extent(),
        viewport.viewport_extent(),
        strip.width,
    );
    let rtl = app.direction.is_rtl();

    let spans: Vec<Span> = (0..strip.width)
        .map(|col| {
            let visual = if rtl { strip.width - 1 - col } else { col };
            if visual >= start && visual < start + length {
                Span::styled("━", Style::new().fg(LOGO_LIGHT_BLUE))
            } else {
                Span::styled("─", Style::new().fg(TRACK_DIM))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), strip);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_at() {
        let config = SliderConfig {
            item_width: 200.0,
            gap: 16.0,
            ..SliderConfig::default()
        };
        let slots = layout::slots(&config, 3);
        assert_eq!(slot_at(10.0, &slots), Some((0, 10.0)));
        assert_eq!(slot_at(205.0, &slots), None);
        assert_eq!(slot_at(220.0, &slots), Some((1, 4.0)));
        assert_eq!(slot_at(700.0, &slots), None);
        assert_eq!(slot_at(-1.0, &slots), None);
    }

    #[test]
    fn test_slot_at_only_sees_visible_slots() {
        let config = SliderConfig {
            item_width: 200.0,
            gap: 16.0,
            ..SliderConfig::default()
        };
        // a 300px window at offset 432 overlaps slots 2 and 3
        let visible: Vec<Slot> = layout::slots(&config, 10)
            .into_iter()
            .filter(|slot| slot.intersects(432.0, 300.0))
            .collect();
        assert_eq!(visible.iter().map(|slot| slot.index).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(slot_at(440.0, &visible), Some((2, 8.0)));
        assert_eq!(slot_at(10.0, &visible), None);
    }

    #[test]
    fn test_label_char_centres_text() {
        // "ab" in 6 columns starts at column 2
        assert_eq!(label_char("ab", 1, 6), ' ');
        assert_eq!(label_char("ab", 2, 6), 'a');
        assert_eq!(label_char("ab", 3, 6), 'b');
        assert_eq!(label_char("ab", 4, 6), ' ');
    }

    #[test]
    fn test_thumb() {
        assert_eq!(thumb(0.0, 1000.0, 2000.0, 50), (0, 50));
        assert_eq!(thumb(0.0, 2000.0, 500.0, 40), (0, 10));
        assert_eq!(thumb(1500.0, 2000.0, 500.0, 40), (30, 10));
        assert_eq!(thumb(-1500.0, 2000.0, 500.0, 40), (30, 10));
    }

    #[test]
    fn test_thumb_zero_track() {
        // a terminal too narrow for the strip leaves no track at all
        let track = strip_columns(6);
        assert_eq!(track, 0);
        assert_eq!(thumb(0.0, 2144.0, track as f64 * PX_PER_COLUMN, track), (0, 0));
        assert_eq!(thumb(0.0, 100.0, 200.0, 0), (0, 0));
    }

    #[test]
    fn test_layout_helpers() {
        assert_eq!(strip_columns(100), 94);
        assert_eq!(strip_columns(4), 0);
        assert_eq!(slot_rows(&SliderConfig::default()), 10);
    }
}
