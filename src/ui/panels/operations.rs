//! Operations table panel.
//!
//! Renders the ordered operations through the column layout: one header line
//! with user-resizable widths, a rule, and the data rows. Cells are projected
//! with [`project_cell`]; only this layer adds color, so export stays
//! byte-identical to the plain cell values.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::state::{App, Focus, QueryPhase};
use crate::table::{COLUMNS, ColumnSpec, project_cell};
use crate::theme::{ERROR_COLOR, MONO_STYLE, MUTED_COLOR, SELECTED_STYLE};

use crate::ui::helpers::create_border_block;

// ============================================================================
// Public API
// ============================================================================

/// Render the operations table panel.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.ui.focus == Focus::Table && !app.ui.has_active_popup();
    let title = if app.data.is_empty() {
        "Operations".to_string()
    } else {
        format!("Operations ({})", app.data.len())
    };
    let block = create_border_block(&title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 1 {
        return;
    }

    match app.query.phase {
        QueryPhase::Idle => {
            render_status(frame, inner, "Enter an address and press Enter to query.", MUTED_COLOR);
        }
        QueryPhase::Loading => {
            render_status(frame, inner, "Querying operations…", MUTED_COLOR);
        }
        QueryPhase::Failed => {
            let message = app.query.error.as_deref().unwrap_or("Query failed");
            render_status(frame, inner, message, ERROR_COLOR);
        }
        QueryPhase::Loaded if app.data.is_empty() => {
            render_status(frame, inner, "No operations found.", MUTED_COLOR);
        }
        QueryPhase::Loaded => render_table(app, frame, inner),
    }
}

// ============================================================================
// Internal Rendering
// ============================================================================

/// Render a centered status message inside the table area.
fn render_status(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let y = area.y + area.height / 3;
    let status_area = Rect::new(area.x, y, area.width, 1.min(area.height));
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        status_area,
    );
}

/// Render the column header, rule, and data rows.
fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    if area.height < 3 {
        return;
    }

    let visible: Vec<&ColumnSpec> = COLUMNS.iter().skip(app.nav.first_col).collect();

    // Column header line.
    let mut header_spans: Vec<Span> = Vec::new();
    for spec in &visible {
        let width = app.columns.width_of(spec.key);
        header_spans.push(Span::styled(
            fit(spec.label, width),
            Style::default()
                .fg(MUTED_COLOR)
                .add_modifier(Modifier::BOLD),
        ));
        header_spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
    }
    let header_area = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(Paragraph::new(Line::from(header_spans)), header_area);

    // Rule line under the header.
    let rule_area = Rect::new(area.x, area.y + 1, area.width, 1);
    frame.render_widget(
        Paragraph::new("─".repeat(area.width as usize))
            .style(Style::default().fg(Color::DarkGray)),
        rule_area,
    );

    // Data rows.
    let items: Vec<ListItem> = app
        .data
        .operations
        .iter()
        .map(|record| {
            let mut spans: Vec<Span> = Vec::new();
            for spec in &visible {
                let width = app.columns.width_of(spec.key);
                let value = fit(&project_cell(record, spec.key), width);
                let style = match spec.key {
                    crate::table::ColumnKey::State => Style::default()
                        .fg(record.state.color())
                        .add_modifier(Modifier::BOLD),
                    _ if spec.monospace => MONO_STYLE,
                    _ => Style::default(),
                };
                spans.push(Span::styled(value, style));
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let rows_area = Rect::new(
        area.x,
        area.y + 2,
        area.width,
        area.height.saturating_sub(2),
    );
    let list = List::new(items).highlight_style(SELECTED_STYLE);
    let mut list_state = ListState::default();
    list_state.select(app.nav.selected_row);
    frame.render_stateful_widget(list, rows_area, &mut list_state);
}

/// Pads or truncates a cell to the column width.
///
/// Truncated values end in an ellipsis; the full value stays reachable via
/// the row detail view.
fn fit(value: &str, width: u16) -> String {
    let width = width as usize;
    let len = value.chars().count();
    if len <= width {
        format!("{value:<width$}")
    } else if width == 0 {
        String::new()
    } else {
        let truncated: String = value.chars().take(width - 1).collect();
        format!("{truncated}…")
    }
}

// ============================================================================
// Tests
// ============================================================================
