//! Data state for the operations view.
//!
//! Holds the operations returned by the latest successful query, already in
//! display order, plus the protocol addresses that arrived alongside them.
//! Kept separate from navigation and UI concerns so a new response can land
//! without disturbing either.

use crate::domain::{OperationRecord, OperationsResponse, ProtocolAddress, order_by_recency};

// ============================================================================
// Data State
// ============================================================================

/// Operations and protocol addresses from the latest successful query.
#[derive(Debug, Default)]
pub struct DataState {
    /// Operations in display order (newest first).
    pub operations: Vec<OperationRecord>,
    /// Protocol custody addresses related to the queried address.
    pub protocol_addresses: Vec<ProtocolAddress>,
}

impl DataState {
    /// Creates an empty data state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held data with a fresh upstream response.
    ///
    /// Operations are ordered by recency here, once per response, so every
    /// consumer (table, export, detail view) sees the same order.
    pub fn set_response(&mut self, response: OperationsResponse) {
        self.operations = order_by_recency(&response.operations);
        self.protocol_addresses = response.addresses;
    }

    /// Clears all held data (new query submitted or network switched).
    pub fn clear(&mut self) {
        self.operations.clear();
        self.protocol_addresses.clear();
    }

    /// Returns `true` when no operations are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Returns the number of held operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Gets an operation by display index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&OperationRecord> {
        self.operations.get(index)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> OperationsResponse {
        let older = OperationRecord {
            op_created_at: "2024-01-01T00:00:00Z".to_string(),
            source_tx_hash: Some("older".to_string()),
            ..Default::default()
        };
        let newer = OperationRecord {
            op_created_at: "2024-02-01T00:00:00Z".to_string(),
            source_tx_hash: Some("newer".to_string()),
            ..Default::default()
        };
        OperationsResponse {
            operations: vec![older, newer],
            addresses: vec![ProtocolAddress {
                source_coin_type: "btc".to_string(),
                destination_chain: "hyperliquid".to_string(),
                address: "bc1qcustody".to_string(),
            }],
        }
    }

    #[test]
    fn test_set_response_orders_by_recency() {
        let mut data = DataState::new();
        data.set_response(response());
        assert_eq!(data.len(), 2);
        assert_eq!(data.get(0).unwrap().source_tx_hash.as_deref(), Some("newer"));
        assert_eq!(data.protocol_addresses.len(), 1);
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut data = DataState::new();
        data.set_response(response());
        data.clear();
        assert!(data.is_empty());
        assert!(data.protocol_addresses.is_empty());
        assert!(data.get(0).is_none());
    }
}
