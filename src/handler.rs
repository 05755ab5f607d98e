//! Maps crossterm events to application actions.
//!
//! Keyboard routing is modal: active popups consume keys first, then the
//! detail view, then the focused area. Mouse events drive row selection and
//! the column-resize gesture, whose geometry comes from the same layout
//! arithmetic the renderer uses.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::event::Action;
use crate::state::{App, Focus, PopupState};
use crate::ui::layout;

/// Help text shown by the `?` key.
const HELP_TEXT: &str = "LazyUnit - Hyperunit operations explorer\n\n\
/:Edit address   Enter:Query / row details\n\
n:Network   r:Re-query   e:Export CSV\n\
c:Copy value   s:Copy share link\n\
←/→:Scroll columns   Mouse drag on header:Resize column\n\
q:Quit";

/// Handles a crossterm event and returns an optional Action.
pub fn handle_event(app: &App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_press(key, app),
        Event::Mouse(mouse) => handle_mouse_event(mouse, app),
        _ => None,
    }
}

// ============================================================================
// Keyboard
// ============================================================================

fn handle_key_press(key: KeyEvent, app: &App) -> Option<Action> {
    if app.ui.has_active_popup() {
        return handle_popup_keys(key, app);
    }
    if app.nav.show_detail {
        return handle_detail_keys(key);
    }
    match app.ui.focus {
        Focus::Address => handle_address_keys(key),
        Focus::Table => handle_table_keys(key),
    }
}

/// Keys while a popup is active.
fn handle_popup_keys(key: KeyEvent, app: &App) -> Option<Action> {
    match &app.ui.popup_state {
        PopupState::NetworkSelect(selected_index) => match key.code {
            KeyCode::Esc => Some(Action::ClearPopup),
            KeyCode::Up => Some(Action::SelectNetworkOption(
                selected_index.checked_sub(1).unwrap_or(
                    crate::domain::Network::all().len() - 1,
                ),
            )),
            KeyCode::Down => Some(Action::SelectNetworkOption(selected_index + 1)),
            KeyCode::Enter => Some(Action::ConfirmNetworkSelection),
            _ => None,
        },
        PopupState::Message(_) => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::ClearPopup),
            _ => None,
        },
        PopupState::None => None,
    }
}

/// Keys while the row detail view is open.
fn handle_detail_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(Action::CloseDetail),
        KeyCode::Up => Some(Action::DetailMoveUp),
        KeyCode::Down => Some(Action::DetailMoveDown),
        KeyCode::Char('c') => Some(Action::CopySelectedValue),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Keys while the address input bar has focus.
fn handle_address_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => Some(Action::CycleFocus),
        KeyCode::Enter => Some(Action::SubmitQuery),
        KeyCode::Backspace => Some(Action::AddressBackspace),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::AddressClear)
        }
        KeyCode::Char(c) => Some(Action::AddressInput(c)),
        _ => None,
    }
}

/// Keys while the operations table has focus.
fn handle_table_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::FocusAddress),
        KeyCode::Char('n') => Some(Action::OpenNetworkSelector),
        KeyCode::Char('r') => Some(Action::SubmitQuery),
        KeyCode::Char('e') => Some(Action::ExportCsv),
        KeyCode::Char('c') => Some(Action::CopySelectedValue),
        KeyCode::Char('s') => Some(Action::CopyShareLink),
        KeyCode::Char('?') => Some(Action::ShowMessage(HELP_TEXT.to_string())),
        KeyCode::Tab => Some(Action::CycleFocus),
        KeyCode::Up => Some(Action::MoveSelectionUp),
        KeyCode::Down => Some(Action::MoveSelectionDown),
        KeyCode::PageUp => Some(Action::ScrollPageUp),
        KeyCode::PageDown => Some(Action::ScrollPageDown),
        KeyCode::Left => Some(Action::ScrollColumnsLeft),
        KeyCode::Right => Some(Action::ScrollColumnsRight),
        KeyCode::Enter => Some(Action::ShowDetail),
        _ => None,
    }
}

// ============================================================================
// Mouse
// ============================================================================

/// Mouse events: wheel scrolling plus the column-resize drag gesture.
///
/// A left press on a column boundary in the table header starts a drag,
/// movement resizes that column only, release ends the gesture. Release
/// always emits `ResizeEnd` so a drag can never outlive the gesture.
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Action::MoveSelectionDown),
        MouseEventKind::ScrollUp => Some(Action::MoveSelectionUp),
        MouseEventKind::Down(MouseButton::Left) => {
            let header_row = layout::table_header_row(app.data.protocol_addresses.len());
            if mouse.row != header_row {
                return None;
            }
            app.columns
                .hit_test_separator(1, app.nav.first_col, mouse.column)
                .map(|key| Action::ResizeStart(key, mouse.column))
        }
        MouseEventKind::Drag(MouseButton::Left) if app.columns.is_dragging() => {
            Some(Action::ResizeMove(mouse.column))
        }
        MouseEventKind::Up(MouseButton::Left) if app.columns.is_dragging() => {
            Some(Action::ResizeEnd)
        }
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
