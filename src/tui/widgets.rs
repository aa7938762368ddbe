//! Custom widgets for the TUI

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use crate::dance::DanceMode;

/// Header bar showing title and dance state
pub struct HeaderBar {
    pub dance_mode: DanceMode,
    pub running: bool,
    pub offset: i32,
}

impl Widget for HeaderBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (status, status_style) = if self.running {
            ("● dancing", Theme::running())
        } else {
            ("○ resting", Theme::idle())
        };
        let line = Line::from(vec![
            Span::styled(" Moonwalk ", Theme::title()),
            Span::styled("│ ", Theme::border()),
            Span::styled(self.dance_mode.label(), Theme::text()),
            Span::styled(" │ ", Theme::border()),
            Span::styled(status, status_style),
            Span::styled(format!(" │ offset {}px", self.offset), Theme::dim()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

/// The stage: ceiling, floor and the dancer at its current position.
pub struct StageWidget<'a> {
    /// Figure drawing, one string per row
    pub figure: &'a [String],
    /// How many cells the figure's right edge sits left of the stage's
    pub offset_cells: i32,
}

impl Widget for StageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width == 0 {
            return;
        }
        let ceiling = "▔".repeat(area.width as usize);
        let floor = "▁".repeat(area.width as usize);
        buf.set_string(area.x, area.y, ceiling, Theme::border());
        let floor_y = area.y + area.height - 1;
        buf.set_string(area.x, floor_y, floor, Theme::floor());

        // Figure stands on the floor, clipped by the stage on all sides.
        let right_edge = area.x as i32 + area.width as i32 - self.offset_cells;
        let top = floor_y as i32 - self.figure.len() as i32;
        for (row, line) in self.figure.iter().enumerate() {
            let y = top + row as i32;
            if y <= area.y as i32 || y >= floor_y as i32 {
                continue;
            }
            let left = right_edge - line.width() as i32;
            for (col, ch) in line.chars().enumerate() {
                let x = left + col as i32;
                if ch == ' ' || x < area.x as i32 || x >= (area.x + area.width) as i32 {
                    continue;
                }
                if let Some(cell) = buf.cell_mut(Position::new(x as u16, y as u16)) {
                    cell.set_char(ch).set_style(Theme::dancer());
                }
            }
        }
    }
}

/// Screen areas of the three controls, for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlRects {
    pub start: Rect,
    pub delay: Rect,
    pub dance: Rect,
}

impl ControlRects {
    pub fn split(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);
        Self {
            start: chunks[0],
            delay: chunks[1],
            dance: chunks[2],
        }
    }
}

/// Start/stop button, delay field and dance toggle
pub struct ControlBar<'a> {
    pub running: bool,
    pub delay_text: &'a str,
    pub delay_focused: bool,
    pub dance_mode: DanceMode,
}

impl ControlBar<'_> {
    fn button(label: &str, style: Style, border: Style) -> Paragraph<'_> {
        Paragraph::new(Line::from(Span::styled(label, style)).centered()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border),
        )
    }
}

impl Widget for ControlBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rects = ControlRects::split(area);

        let (label, style) = if self.running {
            ("STOP", Theme::stop_button())
        } else {
            ("START", Theme::start_button())
        };
        Self::button(label, style, Theme::border()).render(rects.start, buf);

        let delay_border = if self.delay_focused {
            Theme::border_focused()
        } else {
            Theme::border()
        };
        Paragraph::new(Line::from(Span::styled(self.delay_text, Theme::text())).centered())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(delay_border)
                    .title(Span::styled(" delay ms ", Theme::dim())),
            )
            .render(rects.delay, buf);

        Self::button(self.dance_mode.label(), Theme::dance_button(), Theme::border())
            .render(rects.dance, buf);
    }
}

/// One-line status message (errors in red)
pub struct StatusBar<'a> {
    pub text: &'a str,
    pub is_error: bool,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.is_error {
            Theme::error()
        } else {
            Theme::success()
        };
        Paragraph::new(Span::styled(format!(" {}", self.text), style)).render(area, buf);
    }
}

/// Help bar with keyboard shortcuts
pub struct HelpBar {
    pub editing: bool,
}

impl Widget for HelpBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints: &[(&str, &str)] = if self.editing {
            &[("Enter", "apply"), ("Esc", "cancel"), ("Ctrl+U", "clear")]
        } else {
            &[
                ("Space", "start/stop"),
                ("Tab", "edit delay"),
                ("d", "dance style"),
                ("q", "quit"),
            ]
        };

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Theme::key_desc()));
            }
            spans.push(Span::styled(*key, Theme::key()));
            spans.push(Span::styled(format!(" {desc}"), Theme::key_desc()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_figure_anchored_right() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        let figure = vec!["ab".to_string(), "cd".to_string()];
        StageWidget {
            figure: &figure,
            offset_cells: 0,
        }
        .render(area, &mut buf);

        assert!(row_text(&buf, 2).ends_with("ab"));
        assert!(row_text(&buf, 3).ends_with("cd"));
    }

    #[test]
    fn test_figure_clipped_off_left_edge() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        let figure = vec!["xyz".to_string()];
        StageWidget {
            figure: &figure,
            offset_cells: 9,
        }
        .render(area, &mut buf);

        // Right edge at column 1: only the last character is visible.
        assert_eq!(row_text(&buf, 2), format!("z{}", " ".repeat(9)));
    }

    #[test]
    fn test_control_bar_labels() {
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        ControlBar {
            running: true,
            delay_text: "700",
            delay_focused: false,
            dance_mode: DanceMode::DuckWalk,
        }
        .render(area, &mut buf);

        let middle = row_text(&buf, 1);
        assert!(middle.contains("STOP"));
        assert!(middle.contains("700"));
        assert!(middle.contains("Duck walk"));
    }

    #[test]
    fn test_control_rects_cover_area() {
        let rects = ControlRects::split(Rect::new(0, 10, 30, 3));
        assert_eq!(rects.start.x, 0);
        assert_eq!(rects.delay.x, 10);
        assert_eq!(rects.dance.x + rects.dance.width, 30);
        assert!(rects.start.contains(Position::new(5, 11)));
    }
}
