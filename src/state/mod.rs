//! State management for the LazyUnit TUI application.
//!
//! The state is decomposed by concern:
//!
//! - [`QuerySelection`] / [`QueryState`] - the address/network pair and the
//!   fetch lifecycle machine with its stale-response guard
//! - [`DataState`] - operations and protocol addresses from the latest query
//! - [`NavigationState`] - row selection, column scroll, detail view
//! - [`UiState`] - focus, popups, toasts
//! - [`crate::table::ColumnLayout`] - column widths and the resize drag
//!
//! All mutable state is owned by [`App`] and mutated only on the main loop in
//! response to discrete [`Action`]s; background fetches communicate through
//! the [`AppMessage`] channel.

use tokio::sync::mpsc;

use crate::client::UnitClient;
use crate::domain::Network;
use crate::event::{Action, AppMessage};
use crate::table::ColumnLayout;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod data;
pub mod navigation;
pub mod query;
pub mod ui_state;

mod app_actions;
mod app_messages;

// ============================================================================
// Re-exports
// ============================================================================

pub use data::DataState;
pub use navigation::NavigationState;
pub use query::{QueryPhase, QuerySelection, QueryState};
pub use ui_state::{Focus, PopupState, TOAST_TICKS, UiState};

// ============================================================================
// Startup Options
// ============================================================================

/// Options passed when starting the application.
///
/// These replace the web viewer's read-once location parameters: an address
/// supplied here seeds the selection and fires the automatic initial query.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Address to query on startup.
    pub address: Option<String>,
    /// Network to connect to on startup.
    pub network: Option<Network>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Address/network pair the next query runs against.
    pub selection: QuerySelection,
    /// Fetch lifecycle of the current query.
    pub query: QueryState,
    /// Data from the latest successful query.
    pub data: DataState,
    /// Row/column navigation state.
    pub nav: NavigationState,
    /// Focus, popups, toasts.
    pub ui: UiState,
    /// Column widths and the resize drag machine.
    pub columns: ColumnLayout,

    /// Whether the application should exit.
    pub exit: bool,
    /// Last observed terminal size.
    pub terminal_size: (u16, u16),

    // NOTE: Channel sends use `let _ = tx.send(...)` throughout this module.
    // This is intentional fire-and-forget: the receiver may be dropped during
    // shutdown, and those errors must not propagate.
    /// Sender for app messages (cloned into background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    /// Unit API client for the selected network.
    pub(crate) client: UnitClient,
}

impl App {
    /// Creates the application state from startup options.
    #[must_use]
    pub fn new(options: StartupOptions) -> Self {
        let network = options.network.unwrap_or_default();
        let address = options.address.unwrap_or_default();
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut ui = UiState::new();
        // With an address already supplied, start on the table; otherwise the
        // user types one first.
        if !address.trim().is_empty() {
            ui.focus = Focus::Table;
        }

        Self {
            selection: QuerySelection::new(address, network),
            query: QueryState::new(),
            data: DataState::new(),
            nav: NavigationState::new(),
            ui,
            columns: ColumnLayout::new(),
            exit: false,
            terminal_size: (0, 0),
            message_tx,
            message_rx,
            client: UnitClient::new(network),
        }
    }

    /// Returns `true` when an address was supplied at startup.
    ///
    /// The caller fires the automatic initial query exactly once when this
    /// holds.
    #[must_use]
    pub fn has_startup_address(&self) -> bool {
        self.selection.trimmed_address().is_some()
    }

    /// Updates the stored terminal size.
    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// Drains and processes all pending async messages.
    pub fn drain_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.process_message(message);
        }
    }

    /// Applies one user action to the state.
    pub fn update(&mut self, action: Action) {
        match action {
            // App lifecycle
            Action::Quit => self.exit = true,
            Action::ClearPopup => self.ui.dismiss_popup(),
            Action::ShowMessage(message) => self.ui.show_message(message),
            Action::Tick => self.on_tick(),

            // Focus & address input
            Action::CycleFocus => self.ui.cycle_focus(),
            Action::FocusAddress => self.ui.focus = Focus::Address,
            Action::AddressInput(c) => self.selection.address.push(c),
            Action::AddressBackspace => {
                self.selection.address.pop();
            }
            Action::AddressClear => self.selection.address.clear(),
            Action::SubmitQuery => self.submit_query(),

            // Network selector popup
            Action::OpenNetworkSelector => self.open_network_selector(),
            Action::SelectNetworkOption(index) => {
                let wrapped = index % Network::all().len();
                self.ui.update_network_selection(wrapped);
            }
            Action::ConfirmNetworkSelection => self.confirm_network_selection(),

            // Table navigation
            Action::MoveSelectionUp => self.nav.select_prev(self.data.len()),
            Action::MoveSelectionDown => self.nav.select_next(self.data.len()),
            Action::ScrollPageUp => self.nav.page_up(self.rows_per_page()),
            Action::ScrollPageDown => self.nav.page_down(self.rows_per_page(), self.data.len()),
            Action::ScrollColumnsLeft => self.nav.scroll_cols_left(),
            Action::ScrollColumnsRight => self.nav.scroll_cols_right(),
            Action::ShowDetail => self.nav.open_detail(),
            Action::CloseDetail => self.nav.close_detail(),
            Action::DetailMoveUp => self.nav.detail_prev(),
            Action::DetailMoveDown => self.nav.detail_next(),

            // Column resize gesture
            Action::ResizeStart(key, x) => self.columns.resize_start(key, x),
            Action::ResizeMove(x) => self.columns.resize_move(x),
            Action::ResizeEnd => self.columns.resize_end(),

            // Clipboard & export
            Action::CopySelectedValue => self.copy_selected_value(),
            Action::CopyShareLink => self.copy_share_string(),
            Action::ExportCsv => self.export_csv(),
        }
    }

    /// Advances time-based UI state by one tick.
    fn on_tick(&mut self) {
        self.ui.tick_toast();
    }

    /// Rows that fit on one table page with the current terminal size.
    fn rows_per_page(&self) -> usize {
        let (_, height) = self.terminal_size;
        usize::from(crate::ui::layout::table_body_height(
            height,
            self.data.protocol_addresses.len(),
        ))
        .max(1)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
