//! Header and address bar rendering.
//!
//! The header shows the logo and the active network; the address bar below it
//! is the query input, highlighted while focused.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, Focus};
use crate::theme::{MUTED_COLOR, SUCCESS_COLOR};

use super::helpers::create_border_block;

// ============================================================================
// Header
// ============================================================================

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let title = create_logo();
    let title_area = Rect::new(
        area.x + 2,
        area.y + 1,
        12.min(area.width.saturating_sub(2)),
        1,
    );
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Left), title_area);

    if area.width > 40 {
        render_network_indicator(frame, area, app);
    }
}

/// Create the bracketed logo line.
fn create_logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "lazy".green().bold(),
        "unit".magenta().bold(),
        "]".into(),
    ])
}

/// Render the network indicator on the right side.
fn render_network_indicator(frame: &mut Frame, area: Rect, app: &App) {
    let network_text = format!("Network: {}", app.selection.network.as_str());
    let network_style = Style::default()
        .fg(SUCCESS_COLOR)
        .add_modifier(Modifier::BOLD);

    let network_area = Rect::new(area.right().saturating_sub(22), area.y + 1, 20, 1);
    frame.render_widget(
        Paragraph::new(network_text)
            .style(network_style)
            .alignment(Alignment::Right),
        network_area,
    );
}

// ============================================================================
// Address Bar
// ============================================================================

/// Render the address input bar.
pub fn render_address_bar(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.ui.focus == Focus::Address && !app.ui.has_active_popup();
    let block = create_border_block("Address", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let mut spans: Vec<Span> = Vec::new();
    if app.selection.address.is_empty() && !focused {
        spans.push(Span::styled(
            "Press / to enter a Hyperliquid or EVM address, Enter to query",
            Style::default().fg(MUTED_COLOR),
        ));
    } else {
        spans.push(Span::raw(app.selection.address.clone()));
        if focused {
            spans.push(Span::styled("▌", Style::default().fg(SUCCESS_COLOR)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

// ============================================================================
// Tests
// ============================================================================
