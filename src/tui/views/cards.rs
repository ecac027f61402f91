//! Metric card grid.

use crate::tui::app::DashboardApp;
use crate::tui::constants::CARD_COLUMNS;
use crate::tui::theme::{colors, Styles};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub fn render_cards(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let row_count = app.cards.len().div_ceil(CARD_COLUMNS).max(1);
    let rows = Layout::vertical(vec![Constraint::Max(5); row_count]).split(area);

    for (row_idx, row_area) in rows.iter().enumerate() {
        let columns =
            Layout::horizontal(vec![Constraint::Ratio(1, CARD_COLUMNS as u32); CARD_COLUMNS])
                .split(*row_area);
        for (col_idx, card_area) in columns.iter().enumerate() {
            let idx = row_idx * CARD_COLUMNS + col_idx;
            let (Some(card), Some(headline)) = (app.cards.get(idx), app.headlines.get(idx)) else {
                continue;
            };
            let selected = idx == app.grid.selected;
            let border = if selected {
                Styles::border_focused()
            } else {
                Styles::border()
            };
            let value_style = if headline == "!" {
                Styles::error()
            } else {
                Style::default().fg(colors().primary).bold()
            };
            let body = Paragraph::new(vec![
                Line::styled(headline.clone(), value_style),
                Line::styled(card.category.to_string(), Styles::text_muted()),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(format!(" {} ", card.title))
                    .borders(Borders::ALL)
                    .border_style(border),
            );
            frame.render_widget(body, *card_area);
        }
    }
}
