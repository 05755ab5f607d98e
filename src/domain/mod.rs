//! Domain types for the LazyUnit operations explorer.
//!
//! This module contains the core types used throughout the application:
//! network configuration, bridge operation records and their lifecycle
//! states, and base-unit amount conversion.
//!
//! # Module Organization
//!
//! - [`error`] - Custom error types for Unit API operations
//! - [`network`] - Network configuration (mainnet, testnet)
//! - [`operation`] - Operation records, states, and ordering
//! - [`amount`] - Asset precision table and base-unit conversion

// ============================================================================
// Module Declarations
// ============================================================================

pub mod amount;
pub mod error;
pub mod network;
pub mod operation;

// ============================================================================
// Re-exports
// ============================================================================

// Error types
pub use error::UnitError;

// Network types
pub use network::{API_BASE_ENV, Network, resolve_api_base};

// Operation types
pub use operation::{
    OpState, OperationRecord, OperationsResponse, ProtocolAddress, order_by_recency,
};

// Amount conversion
pub use amount::{decimals_for, human_amount};
