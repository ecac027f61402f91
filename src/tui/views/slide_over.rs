//! The drill-down slide-over: header, table and summary footer.

use super::render_related_panel;
use crate::model::{ColumnKind, Session};
use crate::present::{format_cell, format_currency, truncate_to_width, SessionSummary};
use crate::tui::app::DashboardApp;
use crate::tui::constants::RELATED_PANEL_HEIGHT;
use crate::tui::theme::{filter_chip, value_badge, Styles};
use crate::tui::widgets::render_empty_state;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState},
};

pub fn render_slide_over(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let Some(session) = app.session() else {
        return;
    };
    frame.render_widget(Clear, area);

    let border = if app.controller().is_slide_over_open() {
        Styles::border_focused()
    } else {
        Styles::border()
    };
    let block = Block::default()
        .title(Span::styled(format!(" {} ", session.title), Styles::header_title()))
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let related = session.show_relationships;
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(if related { RELATED_PANEL_HEIGHT } else { 0 }),
        Constraint::Length(2),
    ])
    .split(inner);

    render_header(frame, chunks[0], session);
    render_table(frame, chunks[1], app, session);
    if related {
        render_related_panel(
            frame,
            chunks[2],
            session.selected_item_id.as_deref(),
            app.related_items(),
        );
    }
    render_summary(frame, chunks[3], app, session);
}

fn render_header(frame: &mut Frame, area: Rect, session: &Session) {
    let mut chips: Vec<Span> = vec![Span::styled("Filters: ", Styles::label())];
    match &session.filters {
        Some(filters) if !filters.is_empty() => {
            for chip in filters.chips() {
                chips.push(filter_chip(&chip));
                chips.push(Span::raw(" "));
            }
        }
        _ => chips.push(Span::styled("none", Styles::text_muted())),
    }
    let lines = vec![
        Line::styled(
            format!("{} • {} records", session.module, session.record_count()),
            Styles::text_muted(),
        ),
        Line::from(chips),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &DashboardApp, session: &Session) {
    if let Some(error) = &session.error {
        render_empty_state(frame, area, "Error", &format!("Failed to load records: {error}"));
        return;
    }
    if session.is_empty() {
        render_empty_state(frame, area, "Records", "No records match these filters");
        return;
    }

    let max_width = app.format_options.max_cell_width;
    let header = Row::new(
        session
            .columns
            .iter()
            .map(|c| Span::styled(c.label.clone(), Styles::label())),
    );
    let rows = session.data.iter().map(|record| {
        Row::new(session.columns.iter().map(|column| {
            let text = format_cell(column, record, &app.format_options);
            let text = match max_width {
                Some(width) => truncate_to_width(&text, width),
                None => text,
            };
            if column.kind == ColumnKind::Badge && !record.get(&column.key).map_or(true, |v| v.is_null()) {
                Line::from(value_badge(text.trim_matches(['[', ']'])))
            } else if column.kind.is_numeric() {
                Line::from(text).alignment(Alignment::Right)
            } else {
                Line::from(text)
            }
        }))
    });
    let widths = vec![Constraint::Fill(1); session.columns.len()];
    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Styles::selected());

    let mut state = TableState::default().with_selected(Some(app.rows.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_summary(frame: &mut Frame, area: Rect, app: &DashboardApp, session: &Session) {
    let summary = SessionSummary::compute(session, chrono::Utc::now(), app.due_soon_days);
    let mut spans = vec![
        Span::styled("Total Records: ", Styles::label()),
        Span::styled(summary.total_records.to_string(), Styles::value()),
    ];
    if let Some(value) = summary.total_value {
        spans.push(Span::styled("   Total Value: ", Styles::label()));
        spans.push(Span::styled(format_currency(value), Styles::value()));
    }
    if let Some(due) = summary.due_soon {
        spans.push(Span::styled("   Due Soon: ", Styles::label()));
        spans.push(Span::styled(due.to_string(), Styles::value()));
    }
    spans.push(Span::styled("   Success Rate: ", Styles::label()));
    spans.push(Span::styled(
        summary
            .success_rate
            .map_or_else(|| "-".to_string(), |rate| format!("{rate}%")),
        Styles::value(),
    ));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP)),
        area,
    );
}
