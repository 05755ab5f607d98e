//! Application actions and async messages.

use crate::domain::OperationsResponse;
use crate::table::ColumnKey;

/// Results delivered from background tasks to the main loop.
#[derive(Debug)]
pub enum AppMessage {
    /// An operations fetch finished.
    ///
    /// `generation` identifies the query that started the fetch; results from
    /// superseded queries are discarded by the receiver.
    OperationsFetched {
        generation: u64,
        result: Result<OperationsResponse, String>,
    },
}

/// Application actions triggered by user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // App lifecycle
    Quit,
    ClearPopup,
    ShowMessage(String),
    Tick,

    // Focus & address input
    CycleFocus,
    FocusAddress,
    AddressInput(char),
    AddressBackspace,
    AddressClear,
    SubmitQuery,

    // Network selector popup
    OpenNetworkSelector,
    SelectNetworkOption(usize),
    ConfirmNetworkSelection,

    // Table navigation
    MoveSelectionUp,
    MoveSelectionDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollColumnsLeft,
    ScrollColumnsRight,
    ShowDetail,
    CloseDetail,
    DetailMoveUp,
    DetailMoveDown,

    // Column resize gesture
    ResizeStart(ColumnKey, u16),
    ResizeMove(u16),
    ResizeEnd,

    // Clipboard & export
    CopySelectedValue,
    CopyShareLink,
    ExportCsv,
}
