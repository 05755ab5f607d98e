//! UI state for the LazyUnit TUI.
//!
//! Presentation concerns only: which area has focus, the active popup, and
//! the transient toast overlay. Kept separate from query, data, and
//! navigation state.

// ============================================================================
// Focus
// ============================================================================

/// Represents which UI area currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The address input bar has focus.
    #[default]
    Address,
    /// The operations table has focus.
    Table,
}

impl Focus {
    /// Cycles to the next focus target.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Address => Self::Table,
            Self::Table => Self::Address,
        }
    }
}

// ============================================================================
// Popup State
// ============================================================================

/// The current popup/modal state. Only one popup is active at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is displayed.
    #[default]
    None,
    /// Network selection popup with the highlighted index.
    NetworkSelect(usize),
    /// Message/notification popup.
    Message(String),
}

impl PopupState {
    /// Returns `true` if there is an active popup.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

// ============================================================================
// UI State
// ============================================================================

/// Default toast lifetime in event-loop ticks.
pub const TOAST_TICKS: u8 = 20;

/// UI state: focus, popup state, and toast notifications.
#[derive(Debug, Default)]
pub struct UiState {
    /// Which area currently has focus.
    pub focus: Focus,
    /// Current popup/modal state.
    pub popup_state: PopupState,
    /// Toast notification message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u8)>,
}

impl UiState {
    /// Creates a new `UiState` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cycles focus between the address bar and the table.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Returns `true` if a popup is active.
    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    /// Dismisses the current popup.
    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Shows a message popup.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    /// Opens the network selection popup on the given index.
    pub fn open_network_select(&mut self, current_index: usize) {
        self.popup_state = PopupState::NetworkSelect(current_index);
    }

    /// Updates the network selection index.
    pub fn update_network_selection(&mut self, index: usize) {
        self.popup_state = PopupState::NetworkSelect(index);
    }

    /// Shows a toast notification for `ticks` event-loop ticks.
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Counts the toast down one tick, clearing it when expired.
    pub fn tick_toast(&mut self) {
        if let Some((_, remaining)) = &mut self.toast {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                self.toast = None;
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
