//! Protocol addresses panel.
//!
//! Shows the intermediary custody addresses returned alongside the
//! operations, one `[coin → chain]: address` line each.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem},
};

use crate::state::App;
use crate::theme::{MONO_STYLE, MUTED_COLOR};

use crate::ui::helpers::create_border_block;

/// Render the protocol addresses panel.
///
/// The caller only allocates an area when at least one address is present.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = create_border_block("Protocol Addresses", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items: Vec<ListItem> = app
        .data
        .protocol_addresses
        .iter()
        .map(|address| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(
                        "[{} → {}]: ",
                        address.source_coin_type, address.destination_chain
                    ),
                    Style::default().fg(MUTED_COLOR),
                ),
                Span::styled(address.address.clone(), MONO_STYLE),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

// ============================================================================
// Tests
// ============================================================================
