//! Small reusable widgets for the dashboard.

use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Minimum terminal size requirements.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 16;

/// Check if terminal meets minimum size requirements.
pub const fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(colors().warning).bold(),
        ),
        Line::from(""),
        Line::from(format!(
            "Current: {}x{}  Required: {MIN_WIDTH}x{MIN_HEIGHT}",
            area.width, area.height
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

/// Render an empty state placeholder inside a bordered block.
pub fn render_empty_state(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let scheme = colors();
    let panel = Paragraph::new(vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(scheme.text_muted)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.border)),
    );
    frame.render_widget(panel, area);
}

/// Width of the slide-over for a closing progress in `0.0..=1.0`.
///
/// Shrinks linearly from `full` to zero.
#[must_use]
pub fn shrink_width(full: u16, progress: f64) -> u16 {
    let remaining = (1.0 - progress.clamp(0.0, 1.0)) * f64::from(full);
    remaining.round() as u16
}
