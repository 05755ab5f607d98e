//! Layout calculations for the LazyUnit TUI.
//!
//! The same arithmetic backs rendering and mouse hit-testing, so the
//! column-resize gesture always agrees with what is on screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Dimension Constants
// ============================================================================

/// Height of the application header (logo + network indicator).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the address input bar.
pub const ADDRESS_BAR_HEIGHT: u16 = 3;

/// Height of the footer hint line.
pub const FOOTER_HEIGHT: u16 = 1;

/// Maximum protocol address lines shown in the addresses panel.
pub const MAX_ADDRESS_LINES: u16 = 3;

/// Rows inside the table block consumed by the column header and its rule.
pub const TABLE_HEADER_ROWS: u16 = 2;

// ============================================================================
// Main Layout
// ============================================================================

/// Splits the frame into header, address bar, content, and footer.
#[must_use]
pub fn main_chunks(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(ADDRESS_BAR_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Height of the protocol addresses panel for `count` addresses.
///
/// Zero when there is nothing to show; otherwise the visible lines plus
/// borders.
#[must_use]
pub fn addresses_panel_height(count: usize) -> u16 {
    if count == 0 {
        0
    } else {
        (count as u16).min(MAX_ADDRESS_LINES) + 2
    }
}

/// Splits the content area into the optional addresses panel and the table.
#[must_use]
pub fn content_chunks(area: Rect, address_count: usize) -> (Option<Rect>, Rect) {
    let panel_height = addresses_panel_height(address_count);
    if panel_height == 0 {
        return (None, area);
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(panel_height), Constraint::Min(3)])
        .split(area);
    (Some(chunks[0]), chunks[1])
}

/// Terminal row of the table's column header line.
///
/// Used by the mouse handler to decide whether a click starts a column
/// resize.
#[must_use]
pub fn table_header_row(address_count: usize) -> u16 {
    HEADER_HEIGHT + ADDRESS_BAR_HEIGHT + addresses_panel_height(address_count) + 1
}

/// Number of operation rows that fit in the table body.
#[must_use]
pub fn table_body_height(terminal_height: u16, address_count: usize) -> u16 {
    terminal_height
        .saturating_sub(HEADER_HEIGHT)
        .saturating_sub(ADDRESS_BAR_HEIGHT)
        .saturating_sub(FOOTER_HEIGHT)
        .saturating_sub(addresses_panel_height(address_count))
        .saturating_sub(2) // table borders
        .saturating_sub(TABLE_HEADER_ROWS)
}

// ============================================================================
// Popup Layout
// ============================================================================

/// Centers a popup of the given size within `area`, clamped to fit.
#[must_use]
pub fn centered_popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_chunks_heights() {
        let chunks = main_chunks(Rect::new(0, 0, 120, 40));
        assert_eq!(chunks[0].height, HEADER_HEIGHT);
        assert_eq!(chunks[1].height, ADDRESS_BAR_HEIGHT);
        assert_eq!(chunks[3].height, FOOTER_HEIGHT);
        assert_eq!(
            chunks[2].height,
            40 - HEADER_HEIGHT - ADDRESS_BAR_HEIGHT - FOOTER_HEIGHT
        );
    }

    #[test]
    fn test_addresses_panel_height() {
        assert_eq!(addresses_panel_height(0), 0);
        assert_eq!(addresses_panel_height(1), 3);
        assert_eq!(addresses_panel_height(3), 5);
        assert_eq!(addresses_panel_height(10), MAX_ADDRESS_LINES + 2);
    }

    #[test]
    fn test_content_chunks_with_and_without_addresses() {
        let area = Rect::new(0, 6, 120, 33);
        let (panel, table) = content_chunks(area, 0);
        assert!(panel.is_none());
        assert_eq!(table, area);

        let (panel, table) = content_chunks(area, 2);
        let panel = panel.unwrap();
        assert_eq!(panel.height, 4);
        assert_eq!(table.height, 29);
    }

    #[test]
    fn test_table_header_row_tracks_addresses_panel() {
        assert_eq!(table_header_row(0), HEADER_HEIGHT + ADDRESS_BAR_HEIGHT + 1);
        assert_eq!(
            table_header_row(2),
            HEADER_HEIGHT + ADDRESS_BAR_HEIGHT + 4 + 1
        );
    }

    #[test]
    fn test_table_body_height() {
        // 40 rows, no addresses: 40 - 3 - 3 - 1 - 2 - 2 = 29.
        assert_eq!(table_body_height(40, 0), 29);
        // Tiny terminal saturates to zero instead of underflowing.
        assert_eq!(table_body_height(5, 0), 0);
    }

    #[test]
    fn test_centered_popup_area_clamps() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_popup_area(area, 40, 10);
        assert_eq!(popup, Rect::new(20, 7, 40, 10));

        let oversized = centered_popup_area(area, 200, 50);
        assert_eq!(oversized.width, 80);
        assert_eq!(oversized.height, 24);
    }
}
