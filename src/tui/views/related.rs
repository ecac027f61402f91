//! Related-items panel under the slide-over table.

use crate::model::RelatedItem;
use crate::tui::theme::{value_badge, Styles};
use crate::tui::widgets::render_empty_state;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

pub fn render_related_panel(
    frame: &mut Frame,
    area: Rect,
    selected_id: Option<&str>,
    items: &[RelatedItem],
) {
    let title = format!("Related to {}", selected_id.unwrap_or("-"));
    if items.is_empty() {
        render_empty_state(frame, area, &title, "No related items");
        return;
    }

    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10} ", item.item_type.as_str()), Styles::label()),
                Span::styled(item.title.clone(), Styles::text()),
                Span::raw(" "),
                value_badge(&item.status),
                Span::styled(
                    format!("  {} · {}", item.module, item.relationship),
                    Styles::text_muted(),
                ),
            ]))
        })
        .collect();

    let list = List::new(list_items).block(
        Block::default()
            .title(format!(" {title} ({}) ", items.len()))
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(list, area);
}
