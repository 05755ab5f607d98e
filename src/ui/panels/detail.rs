//! Row detail view.
//!
//! A centered overlay listing every projected field of the selected operation
//! at full length. This is where the complete value of long addresses and
//! hashes stays reachable when the table has truncated them visually.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};

use crate::state::App;
use crate::table::project::detail_rows;
use crate::theme::{MUTED_COLOR, SELECTED_STYLE};

use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

/// Width of the label gutter in the detail list.
const LABEL_WIDTH: usize = 20;

/// Render the row detail overlay for the selected operation.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(record) = app.nav.selected_row.and_then(|row| app.data.get(row)) else {
        return;
    };

    let rows = detail_rows(record);
    let popup_width = (area.width * 8 / 10).max(40);
    let popup_height = (rows.len() as u16 + 5).min(area.height);
    let popup_area = centered_popup_area(area, popup_width, popup_height);

    let block = create_popup_block("Operation Details");
    frame.render_widget(Clear, popup_area);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let items: Vec<ListItem> = rows
        .iter()
        .map(|(label, value)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<width$}", label, width = LABEL_WIDTH),
                    Style::default()
                        .fg(MUTED_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(value.clone()),
            ]))
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
    list_state.select(Some(app.nav.detail_field_index));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    let help_area = Rect::new(
        popup_area.x,
        popup_area.y + popup_area.height.saturating_sub(2),
        popup_area.width,
        1,
    );
    frame.render_widget(
        Paragraph::new("↑/↓:Field  c:Copy value  Esc:Close")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(ratatui::layout::Alignment::Center),
        help_area,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OperationRecord, OperationsResponse};
    use crate::state::StartupOptions;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_detail_view_shows_full_values() {
        let long_hash = "a".repeat(64);
        let mut app = App::new(StartupOptions::default());
        app.data.set_response(OperationsResponse {
            operations: vec![OperationRecord {
                asset: "btc".to_string(),
                source_tx_hash: Some(long_hash.clone()),
                source_amount: "100000000".to_string(),
                ..Default::default()
            }],
            addresses: Vec::new(),
        });
        app.nav.sync_after_update(1);
        app.nav.open_detail();

        let backend = TestBackend::new(120, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(&app, frame, Rect::new(0, 0, 120, 24)))
            .unwrap();

        let content = terminal.backend().to_string();
        assert!(content.contains(&long_hash[..60]));
        assert!(content.contains("Source Tx"));
    }

    #[test]
    fn test_detail_view_without_selection_is_noop() {
        let app = App::new(StartupOptions::default());
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(&app, frame, Rect::new(0, 0, 80, 24)))
            .unwrap();
    }
}
