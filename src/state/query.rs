//! Query selection and lifecycle.
//!
//! [`QuerySelection`] is the user-editable (address, network) pair, serialized
//! into the shareable query string. [`QueryState`] is the fetch lifecycle
//! machine: `Idle -> Loading -> (Loaded | Failed)`, with a generation counter
//! that discards out-of-order completions of superseded fetches.

use crate::domain::Network;

// ============================================================================
// Query Selection
// ============================================================================

/// The address/network pair a query runs against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySelection {
    pub address: String,
    pub network: Network,
}

impl QuerySelection {
    /// Creates a selection from startup values.
    #[must_use]
    pub fn new(address: impl Into<String>, network: Network) -> Self {
        Self {
            address: address.into(),
            network,
        }
    }

    /// Returns the trimmed address, if non-empty.
    #[must_use]
    pub fn trimmed_address(&self) -> Option<&str> {
        let trimmed = self.address.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Serializes the selection as the shareable query string.
    ///
    /// Matches the `address=…&network=…` location parameters of the Unit web
    /// explorer, so a pasted string drops straight into either client.
    #[must_use]
    pub fn share_string(&self) -> String {
        match self.trimmed_address() {
            Some(address) => format!(
                "address={}&network={}",
                percent_encode(address),
                self.network.as_str()
            ),
            None => format!("network={}", self.network.as_str()),
        }
    }
}

/// Percent-encodes everything outside the RFC 3986 unreserved set.
#[must_use]
pub fn percent_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

// ============================================================================
// Query State
// ============================================================================

/// Fetch lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPhase {
    /// No query submitted yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded.
    Loaded,
    /// The latest fetch failed.
    Failed,
}

/// The query lifecycle machine.
///
/// Starting a new query supersedes any in-flight one: `begin` bumps the
/// generation and the caller clears displayed data synchronously, so a stale
/// response can never overwrite newer state. Completions are only applied when
/// their generation is still current.
#[derive(Debug, Default)]
pub struct QueryState {
    pub phase: QueryPhase,
    pub error: Option<String>,
    generation: u64,
}

impl QueryState {
    /// Creates an idle query state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new query and returns its generation.
    ///
    /// Clears the previous error; the caller clears displayed data in the
    /// same step.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = QueryPhase::Loading;
        self.error = None;
        self.generation
    }

    /// Returns `true` when `generation` identifies the latest query.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Marks the current query as succeeded.
    pub fn succeed(&mut self) {
        self.phase = QueryPhase::Loaded;
        self.error = None;
    }

    /// Marks the current query as failed with a human-readable message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = QueryPhase::Failed;
        self.error = Some(message.into());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_string_includes_address_and_network() {
        let selection = QuerySelection::new("0xabc123", Network::Testnet);
        assert_eq!(
            selection.share_string(),
            "address=0xabc123&network=testnet"
        );
    }

    #[test]
    fn test_share_string_without_address() {
        let selection = QuerySelection::new("   ", Network::Mainnet);
        assert_eq!(selection.share_string(), "network=mainnet");
    }

    #[test]
    fn test_share_string_percent_encodes() {
        let selection = QuerySelection::new("a b/c", Network::Mainnet);
        assert_eq!(
            selection.share_string(),
            "address=a%20b%2Fc&network=mainnet"
        );
    }

    #[test]
    fn test_trimmed_address() {
        assert_eq!(
            QuerySelection::new("  0xabc  ", Network::Mainnet).trimmed_address(),
            Some("0xabc")
        );
        assert_eq!(QuerySelection::default().trimmed_address(), None);
    }

    #[test]
    fn test_begin_clears_error_and_bumps_generation() {
        let mut query = QueryState::new();
        assert_eq!(query.phase, QueryPhase::Idle);

        let first = query.begin();
        query.fail("boom");
        assert_eq!(query.phase, QueryPhase::Failed);

        let second = query.begin();
        assert!(second > first);
        assert_eq!(query.phase, QueryPhase::Loading);
        assert_eq!(query.error, None);
    }

    #[test]
    fn test_stale_generation_is_not_current() {
        let mut query = QueryState::new();
        let first = query.begin();
        let second = query.begin();
        assert!(!query.is_current(first));
        assert!(query.is_current(second));
    }

    #[test]
    fn test_success_clears_error() {
        let mut query = QueryState::new();
        query.begin();
        query.fail("transient");
        query.begin();
        query.succeed();
        assert_eq!(query.phase, QueryPhase::Loaded);
        assert_eq!(query.error, None);
    }

    #[test]
    fn test_failure_stores_message() {
        let mut query = QueryState::new();
        query.begin();
        query.fail("address not found");
        assert_eq!(query.phase, QueryPhase::Failed);
        assert_eq!(query.error.as_deref(), Some("address not found"));
    }
}
