//! App-level state tests: query lifecycle, stale-response guarding, and
//! action dispatch.

use super::*;
use crate::domain::{OpState, OperationRecord, OperationsResponse};
use crate::event::{Action, AppMessage};

fn app() -> App {
    App::new(StartupOptions::default())
}

fn app_with_address(address: &str) -> App {
    App::new(StartupOptions {
        address: Some(address.to_string()),
        network: None,
    })
}

fn record(hash: &str, created_at: &str) -> OperationRecord {
    OperationRecord {
        asset: "btc".to_string(),
        state: OpState::Done,
        source_tx_hash: Some(hash.to_string()),
        source_amount: "100000000".to_string(),
        op_created_at: created_at.to_string(),
        ..Default::default()
    }
}

fn response(records: Vec<OperationRecord>) -> OperationsResponse {
    OperationsResponse {
        operations: records,
        addresses: Vec::new(),
    }
}

// ============================================================================
// Query Lifecycle
// ============================================================================

#[test]
fn test_empty_address_submit_is_noop() {
    let mut app = app();
    app.update(Action::SubmitQuery);
    assert_eq!(app.query.phase, QueryPhase::Idle);

    app.selection.address = "   ".to_string();
    app.update(Action::SubmitQuery);
    assert_eq!(app.query.phase, QueryPhase::Idle);
}

#[tokio::test]
async fn test_submit_clears_previous_data_synchronously() {
    let mut app = app_with_address("0xabc");
    app.data
        .set_response(response(vec![record("old", "2024-01-01T00:00:00Z")]));
    app.nav.sync_after_update(app.data.len());

    app.update(Action::SubmitQuery);

    assert_eq!(app.query.phase, QueryPhase::Loading);
    assert!(app.data.is_empty());
    assert_eq!(app.nav.selected_row, None);
}

#[tokio::test]
async fn test_success_applies_sorted_data_and_clears_error() {
    let mut app = app_with_address("0xabc");
    app.update(Action::SubmitQuery);

    app.process_message(AppMessage::OperationsFetched {
        generation: 1,
        result: Ok(response(vec![
            record("older", "2024-01-01T00:00:00Z"),
            record("newer", "2024-02-01T00:00:00Z"),
        ])),
    });

    assert_eq!(app.query.phase, QueryPhase::Loaded);
    assert_eq!(app.query.error, None);
    assert_eq!(app.data.len(), 2);
    assert_eq!(
        app.data.get(0).unwrap().source_tx_hash.as_deref(),
        Some("newer")
    );
    assert_eq!(app.nav.selected_row, Some(0));
}

#[tokio::test]
async fn test_failure_keeps_data_cleared() {
    let mut app = app_with_address("0xabc");
    app.update(Action::SubmitQuery);

    app.process_message(AppMessage::OperationsFetched {
        generation: 1,
        result: Err("address not found".to_string()),
    });

    assert_eq!(app.query.phase, QueryPhase::Failed);
    assert_eq!(app.query.error.as_deref(), Some("address not found"));
    assert!(app.data.is_empty());
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let mut app = app_with_address("0xabc");
    app.update(Action::SubmitQuery); // generation 1
    app.update(Action::SubmitQuery); // generation 2

    // The superseded fetch lands late with data.
    app.process_message(AppMessage::OperationsFetched {
        generation: 1,
        result: Ok(response(vec![record("stale", "2024-01-01T00:00:00Z")])),
    });
    assert_eq!(app.query.phase, QueryPhase::Loading);
    assert!(app.data.is_empty());

    // The current fetch wins.
    app.process_message(AppMessage::OperationsFetched {
        generation: 2,
        result: Ok(response(vec![record("fresh", "2024-03-01T00:00:00Z")])),
    });
    assert_eq!(app.query.phase, QueryPhase::Loaded);
    assert_eq!(
        app.data.get(0).unwrap().source_tx_hash.as_deref(),
        Some("fresh")
    );
}

#[tokio::test]
async fn test_zero_operations_is_loaded_without_error() {
    let mut app = app_with_address("0xabc");
    app.update(Action::SubmitQuery);

    app.process_message(AppMessage::OperationsFetched {
        generation: 1,
        result: Ok(response(Vec::new())),
    });

    // The "no operations found" display state: loaded, empty, no error.
    assert_eq!(app.query.phase, QueryPhase::Loaded);
    assert!(app.data.is_empty());
    assert_eq!(app.query.error, None);
}

// ============================================================================
// Startup
// ============================================================================

#[test]
fn test_startup_address_focuses_table() {
    let app_addr = app_with_address("0xabc");
    assert!(app_addr.has_startup_address());
    assert_eq!(app_addr.ui.focus, Focus::Table);

    let app = app();
    assert!(!app.has_startup_address());
    assert_eq!(app.ui.focus, Focus::Address);
}

// ============================================================================
// Action Dispatch
// ============================================================================

#[test]
fn test_address_editing_actions() {
    let mut app = app();
    app.update(Action::AddressInput('0'));
    app.update(Action::AddressInput('x'));
    app.update(Action::AddressInput('a'));
    assert_eq!(app.selection.address, "0xa");
    app.update(Action::AddressBackspace);
    assert_eq!(app.selection.address, "0x");
    app.update(Action::AddressClear);
    assert_eq!(app.selection.address, "");
}

#[test]
fn test_network_selection_flow() {
    let mut app = app();
    assert_eq!(app.selection.network, crate::domain::Network::Mainnet);

    app.update(Action::OpenNetworkSelector);
    assert_eq!(app.ui.popup_state, PopupState::NetworkSelect(0));

    app.update(Action::SelectNetworkOption(1));
    assert_eq!(app.ui.popup_state, PopupState::NetworkSelect(1));

    app.update(Action::ConfirmNetworkSelection);
    assert_eq!(app.selection.network, crate::domain::Network::Testnet);
    assert!(!app.ui.has_active_popup());
    // Switching alone does not start a fetch.
    assert_eq!(app.query.phase, QueryPhase::Idle);
}

#[test]
fn test_selection_option_wraps() {
    let mut app = app();
    app.update(Action::OpenNetworkSelector);
    app.update(Action::SelectNetworkOption(2));
    assert_eq!(app.ui.popup_state, PopupState::NetworkSelect(0));
}

#[test]
fn test_resize_actions_drive_column_layout() {
    use crate::table::{ColumnKey, spec_for};

    let mut app = app();
    let init = app.columns.width_of(ColumnKey::Amount);
    app.update(Action::ResizeStart(ColumnKey::Amount, 40));
    app.update(Action::ResizeMove(48));
    assert_eq!(app.columns.width_of(ColumnKey::Amount), init + 8);
    app.update(Action::ResizeMove(0));
    assert_eq!(
        app.columns.width_of(ColumnKey::Amount),
        spec_for(ColumnKey::Amount).min_width
    );
    app.update(Action::ResizeEnd);
    assert!(!app.columns.is_dragging());
}

#[test]
fn test_tick_expires_toast() {
    let mut app = app();
    app.ui.show_toast("[+] done", 1);
    app.update(Action::Tick);
    assert!(app.ui.toast.is_none());
}

#[tokio::test]
async fn test_detail_view_requires_rows() {
    let mut app = app_with_address("0xabc");
    app.update(Action::ShowDetail);
    assert!(!app.nav.show_detail);

    app.update(Action::SubmitQuery);
    app.process_message(AppMessage::OperationsFetched {
        generation: 1,
        result: Ok(response(vec![record("tx", "2024-01-01T00:00:00Z")])),
    });
    app.update(Action::ShowDetail);
    assert!(app.nav.show_detail);
}
