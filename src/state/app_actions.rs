//! High-level application actions.
//!
//! Query submission, network switching, clipboard operations, and CSV export.

use arboard::Clipboard;
use tracing::{debug, info};

use super::{App, Focus, PopupState, TOAST_TICKS};
use crate::client::UnitClient;
use crate::domain::Network;
use crate::event::AppMessage;
use crate::table::project::detail_rows;

impl App {
    // ========================================================================
    // Query Submission
    // ========================================================================

    /// Submits a query for the current selection.
    ///
    /// Submitting with an empty address is a silent no-op. Otherwise the
    /// previous results are cleared synchronously, the query generation is
    /// bumped, and the fetch runs on a background task; a response belonging
    /// to a superseded generation is discarded on arrival.
    pub(crate) fn submit_query(&mut self) {
        let Some(address) = self.selection.trimmed_address().map(str::to_string) else {
            return;
        };

        let generation = self.query.begin();
        self.data.clear();
        self.nav.reset();
        self.ui.focus = Focus::Table;

        info!(%address, network = %self.selection.network, generation, "submitting query");

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client
                .fetch_operations(&address)
                .await
                .map_err(|e| e.to_string());
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(AppMessage::OperationsFetched { generation, result });
        });
    }

    // ========================================================================
    // Network Selection
    // ========================================================================

    /// Opens the network selector on the currently selected network.
    pub(crate) fn open_network_selector(&mut self) {
        let current = Network::all()
            .iter()
            .position(|n| *n == self.selection.network)
            .unwrap_or(0);
        self.ui.open_network_select(current);
    }

    /// Applies the highlighted network from the selector popup.
    ///
    /// Switching changes the selection and the client base URL only; the next
    /// submitted query runs against the new network.
    pub(crate) fn confirm_network_selection(&mut self) {
        let PopupState::NetworkSelect(index) = self.ui.popup_state else {
            return;
        };
        let network = Network::all()[index % Network::all().len()];
        self.ui.dismiss_popup();

        if network == self.selection.network {
            return;
        }

        debug!(%network, "switching network");
        self.selection.network = network;
        self.client = UnitClient::new(network);
        self.ui
            .show_toast(format!("Switched to {network}"), TOAST_TICKS);
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    /// Copies the value under the cursor to the clipboard.
    ///
    /// In the detail view this is the selected field's full value; in the
    /// table it is the selected row's source transaction hash.
    pub(crate) fn copy_selected_value(&mut self) {
        let Some(row) = self.nav.selected_row else {
            self.ui.show_toast("[x] No operation selected", TOAST_TICKS);
            return;
        };
        let Some(record) = self.data.get(row) else {
            self.ui.show_toast("[x] No operation selected", TOAST_TICKS);
            return;
        };

        let (label, value) = if self.nav.show_detail {
            let rows = detail_rows(record);
            let (label, value) = rows[self.nav.detail_field_index % rows.len()].clone();
            (label.to_string(), value)
        } else {
            match record.source_tx_hash.clone() {
                Some(hash) => ("Source Tx".to_string(), hash),
                None => {
                    self.ui.show_toast("[x] No source tx hash", TOAST_TICKS);
                    return;
                }
            }
        };

        self.copy_text_to_clipboard(&value, &label);
    }

    /// Copies the shareable selection string to the clipboard.
    pub(crate) fn copy_share_string(&mut self) {
        let share = self.selection.share_string();
        self.copy_text_to_clipboard(&share, "Share link");
    }

    /// Copies text to the clipboard with toast feedback.
    ///
    /// Clipboard failures degrade to a toast; they never block interaction.
    pub(crate) fn copy_text_to_clipboard(&mut self, text: &str, description: &str) {
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(text.to_string()).is_ok() {
                    self.ui
                        .show_toast(format!("[+] {description} copied!"), TOAST_TICKS);
                } else {
                    self.ui.show_toast("[x] Failed to copy", TOAST_TICKS);
                }
            }
            Err(_) => {
                self.ui.show_toast("[x] Clipboard not available", TOAST_TICKS);
            }
        }
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Exports the currently displayed operations to a CSV file.
    pub(crate) fn export_csv(&mut self) {
        if self.data.is_empty() {
            self.ui.show_toast("[x] Nothing to export", TOAST_TICKS);
            return;
        }

        match crate::export::write_export(&self.data.operations) {
            Ok(path) => {
                info!(path = %path.display(), rows = self.data.len(), "exported operations");
                self.ui
                    .show_toast(format!("[+] Saved {}", path.display()), 2 * TOAST_TICKS);
            }
            Err(err) => {
                self.ui
                    .show_toast(format!("[x] Export failed: {err}"), 2 * TOAST_TICKS);
            }
        }
    }
}
