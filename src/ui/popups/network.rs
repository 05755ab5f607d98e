//! Network selection popup rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};

use crate::domain::Network;
use crate::theme::{MUTED_COLOR, SELECTED_STYLE, SUCCESS_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

/// Renders the network selector with the highlighted index.
pub fn render(frame: &mut Frame, area: Rect, selected_index: usize, current: Network) {
    let networks = Network::all();
    let popup_height = networks.len() as u16 + 4;
    let popup_area = centered_popup_area(area, 36, popup_height);

    let block = create_popup_block("Select Network");
    frame.render_widget(Clear, popup_area);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let items: Vec<ListItem> = networks
        .iter()
        .map(|network| {
            let marker = if *network == current { " (current)" } else { "" };
            let line = format!("{}{}", network.as_str(), marker);
            let style = if *network == current {
                Style::default()
                    .fg(SUCCESS_COLOR)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list_area = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(1),
    );
    let list = List::new(items).highlight_style(SELECTED_STYLE);
    let mut list_state = ListState::default();
    list_state.select(Some(selected_index % networks.len()));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    let help_area = Rect::new(
        popup_area.x,
        popup_area.y + popup_area.height.saturating_sub(2),
        popup_area.width,
        1,
    );
    frame.render_widget(
        Paragraph::new("↑/↓:Select  Enter:Switch  Esc:Close")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        help_area,
    );
}

// ============================================================================
// Tests
// ============================================================================
