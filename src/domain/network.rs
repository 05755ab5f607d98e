//! Network configuration for the Unit operations API.
//!
//! This module defines the supported deployment environments and the
//! resolution rules for the upstream API base URL.

use serde::{Deserialize, Serialize};

// ============================================================================
// Network Configuration
// ============================================================================

/// Environment variable that overrides the upstream API base URL.
pub const API_BASE_ENV: &str = "UNIT_API_BASE";

/// Unit network variants.
///
/// Represents the deployment environments of the Unit operations API,
/// each with its own upstream base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Network {
    /// Production network.
    #[default]
    Mainnet,
    /// Test network for development.
    Testnet,
}

impl Network {
    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }

    /// Returns the built-in upstream API base URL for this network.
    #[must_use]
    pub const fn api_base(&self) -> &str {
        match self {
            Self::Mainnet => "https://api.hyperunit.xyz",
            Self::Testnet => "https://api.hyperunit-testnet.xyz",
        }
    }

    /// Returns all networks in selector order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Mainnet, Self::Testnet]
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Network {
    type Err = crate::domain::UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            other => Err(crate::domain::UnitError::invalid_input(format!(
                "unknown network '{other}' (expected mainnet or testnet)"
            ))),
        }
    }
}

/// Resolves the upstream API base URL for a network.
///
/// An explicit override (read from [`API_BASE_ENV`] by callers) wins over the
/// built-in per-network base, mirroring the deployment-side configuration of
/// the upstream service.
#[must_use]
pub fn resolve_api_base(network: Network, override_base: Option<&str>) -> String {
    match override_base {
        Some(base) if !base.trim().is_empty() => base.trim_end_matches('/').to_string(),
        _ => network.api_base().to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
