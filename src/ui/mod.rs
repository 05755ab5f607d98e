//! UI rendering module for the LazyUnit TUI.
//!
//! This module provides the main rendering entry point and orchestrates
//! rendering of all UI components.
//!
//! # Module Structure
//!
//! - `panels` - Content panels (operations table, protocol addresses, detail)
//! - `popups` - Modal dialogs (network selector, messages)
//! - `components` - Reusable components (toast notifications)
//! - `layout` - Layout calculations shared with mouse hit-testing
//! - `header` - Header bar and address input rendering
//! - `footer` - Footer hint line
//! - `helpers` - Styled block helpers

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::Frame;

use crate::state::{App, PopupState};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let chunks = layout::main_chunks(size);

    header::render(frame, chunks[0], app);
    header::render_address_bar(frame, chunks[1], app);
    render_content(app, frame, chunks[2]);
    footer::render(frame, chunks[3], app);

    // Detail overlay under popups, so a popup opened from the detail view
    // stays on top.
    if app.nav.show_detail && app.ui.popup_state == PopupState::None {
        panels::detail::render(app, frame, size);
    }

    render_popups(app, frame, size);

    // Toast notifications on top of everything (non-blocking overlay).
    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Internal Rendering Functions
// ============================================================================

/// Render the content area: optional protocol addresses panel + table.
fn render_content(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
    let (addresses_area, table_area) =
        layout::content_chunks(area, app.data.protocol_addresses.len());

    if let Some(addresses_area) = addresses_area {
        panels::addresses::render(app, frame, addresses_area);
    }
    panels::operations::render(app, frame, table_area);
}

/// Render popup overlays based on current popup state.
fn render_popups(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
    match &app.ui.popup_state {
        PopupState::NetworkSelect(selected_index) => {
            popups::network::render(frame, area, *selected_index, app.selection.network);
        }
        PopupState::Message(message) => {
            popups::message::render(frame, area, message);
        }
        PopupState::None => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
