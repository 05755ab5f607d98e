//! Client for the Unit operations API.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::client::http::HttpClient;
use crate::domain::{Network, OperationsResponse, UnitError, resolve_api_base};

// ============================================================================
// Error Body
// ============================================================================

/// Body shape of a non-2xx upstream response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extracts the upstream error message from a non-2xx response body.
///
/// Preference order for the surfaced message: the body's `error` field, then
/// a plain `HTTP {status}` description when the body is missing or malformed.
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error,
        _ => format!("HTTP {status}"),
    }
}

// ============================================================================
// Unit Client
// ============================================================================

/// API client for a single Unit network.
#[derive(Debug, Clone)]
pub struct UnitClient {
    base: String,
    http: HttpClient,
}

impl UnitClient {
    /// Creates a client for the given network.
    ///
    /// The upstream base URL honors the `UNIT_API_BASE` environment override.
    #[must_use]
    pub fn new(network: Network) -> Self {
        let override_base = std::env::var(crate::domain::API_BASE_ENV).ok();
        Self::with_base(resolve_api_base(network, override_base.as_deref()))
    }

    /// Creates a client against an explicit base URL.
    #[must_use]
    pub fn with_base(base: String) -> Self {
        Self {
            base,
            http: HttpClient::new(),
        }
    }

    /// Returns the resolved upstream base URL.
    #[must_use]
    #[allow(dead_code)] // Part of client API
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Fetches all bridge operations associated with an address.
    ///
    /// Non-2xx responses surface the upstream `error` body field when present,
    /// falling back to the HTTP status; transport failures surface the
    /// underlying error text.
    pub async fn fetch_operations(&self, address: &str) -> Result<OperationsResponse, UnitError> {
        let url = format!("{}/operations/{}", self.base, address);
        debug!(%url, "fetching operations");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status.as_u16(), &body);
            warn!(status = status.as_u16(), %message, "operations query rejected");
            return Err(UnitError::api(status.as_u16(), message));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| UnitError::parse(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
