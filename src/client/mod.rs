//! HTTP clients for the Unit operations API.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::UnitClient;
//! use crate::domain::Network;
//!
//! let client = UnitClient::new(Network::Mainnet);
//! let response = client.fetch_operations("0xa6f1...").await?;
//! ```

pub mod http;
pub mod unit;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::{HttpClient, HttpConfig};
pub use unit::UnitClient;
