//! Bridge operation types and ordering.
//!
//! One [`OperationRecord`] describes a single cross-chain deposit or withdraw
//! tracked by the Unit protocol. Records arrive as loosely-populated JSON:
//! every field is deserialized with a default so that an incomplete record can
//! never fail to parse, and display-facing access goes through the table
//! projection's defaulting rather than ad hoc field reads.

use ratatui::style::Color;
use serde::Deserialize;

// ============================================================================
// Operation State
// ============================================================================

/// Lifecycle state of a bridge operation.
///
/// The documented lifecycle order is:
///
/// ```text
/// sourceTxDiscovered -> waitForSrcTxFinalization -> buildingDstTx -> signTx
///   -> broadcastTx -> waitForDstTxFinalization -> readyForWithdrawQueue
///   -> queuedForWithdraw -> done
/// ```
///
/// with the terminal `failure` state reachable from any non-terminal state.
/// States the upstream adds later deserialize into [`OpState::Other`] and
/// render with a neutral color instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum OpState {
    SourceTxDiscovered,
    WaitForSrcTxFinalization,
    BuildingDstTx,
    SignTx,
    BroadcastTx,
    WaitForDstTxFinalization,
    ReadyForWithdrawQueue,
    QueuedForWithdraw,
    Done,
    Failure,
    /// A state outside the known enumeration, carrying the raw label.
    Other(String),
}

impl OpState {
    /// Returns the wire-format label for this state.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::SourceTxDiscovered => "sourceTxDiscovered",
            Self::WaitForSrcTxFinalization => "waitForSrcTxFinalization",
            Self::BuildingDstTx => "buildingDstTx",
            Self::SignTx => "signTx",
            Self::BroadcastTx => "broadcastTx",
            Self::WaitForDstTxFinalization => "waitForDstTxFinalization",
            Self::ReadyForWithdrawQueue => "readyForWithdrawQueue",
            Self::QueuedForWithdraw => "queuedForWithdraw",
            Self::Done => "done",
            Self::Failure => "failure",
            Self::Other(label) => label,
        }
    }

    /// Returns the badge color for this state.
    ///
    /// Values match the Unit web explorer's palette; unknown states get a
    /// neutral gray.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::SourceTxDiscovered => Color::Rgb(0x6b, 0x72, 0x80),
            Self::WaitForSrcTxFinalization => Color::Rgb(0x08, 0x91, 0xb2),
            Self::BuildingDstTx | Self::SignTx => Color::Rgb(0x7c, 0x3a, 0xed),
            Self::BroadcastTx => Color::Rgb(0x25, 0x63, 0xeb),
            Self::WaitForDstTxFinalization => Color::Rgb(0x0e, 0xa5, 0xe9),
            Self::ReadyForWithdrawQueue | Self::QueuedForWithdraw => {
                Color::Rgb(0xa1, 0x62, 0x07)
            }
            Self::Done => Color::Rgb(0x16, 0xa3, 0x4a),
            Self::Failure => Color::Rgb(0xdc, 0x26, 0x26),
            Self::Other(_) => Color::Rgb(0x4b, 0x55, 0x63),
        }
    }

    /// Returns `true` for states the lifecycle cannot leave.
    #[must_use]
    #[allow(dead_code)] // Part of state API
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failure)
    }
}

impl From<String> for OpState {
    fn from(label: String) -> Self {
        match label.as_str() {
            "sourceTxDiscovered" => Self::SourceTxDiscovered,
            "waitForSrcTxFinalization" => Self::WaitForSrcTxFinalization,
            "buildingDstTx" => Self::BuildingDstTx,
            "signTx" => Self::SignTx,
            "broadcastTx" => Self::BroadcastTx,
            "waitForDstTxFinalization" => Self::WaitForDstTxFinalization,
            "readyForWithdrawQueue" => Self::ReadyForWithdrawQueue,
            "queuedForWithdraw" => Self::QueuedForWithdraw,
            "done" => Self::Done,
            "failure" => Self::Failure,
            _ => Self::Other(label),
        }
    }
}

impl Default for OpState {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

// ============================================================================
// Operation Record
// ============================================================================

/// One bridge transfer event, as returned by the Unit operations API.
///
/// Read-only projection of the upstream JSON: constructed by serde, never
/// mutated afterwards. Optional wire fields stay `Option`; fields the contract
/// declares required still default to empty rather than failing, because the
/// upstream is trusted but not guaranteed complete.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationRecord {
    /// Lowercase asset ticker; drives decimal precision lookup.
    pub asset: String,
    /// Lifecycle state.
    pub state: OpState,
    pub source_chain: String,
    pub destination_chain: String,
    pub source_address: Option<String>,
    /// Absent until the operation has been routed.
    pub destination_address: Option<String>,
    /// Intermediary custody address.
    pub protocol_address: Option<String>,
    pub source_tx_hash: Option<String>,
    /// Absent until the destination transaction has been broadcast.
    pub destination_tx_hash: Option<String>,
    /// Base-unit amount as a decimal integer string, arbitrary precision.
    pub source_amount: String,
    /// Base-unit destination fee, same precision as the asset.
    pub destination_fee_amount: Option<String>,
    /// Opaque, asset-specific fee. NOT base-unit-scaled; kept raw on purpose.
    pub sweep_fee_amount: Option<String>,
    /// ISO-8601 creation timestamp; the ordering key.
    pub op_created_at: String,
}

/// Intermediary custody address for a source-asset/destination-chain pair.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtocolAddress {
    pub source_coin_type: String,
    pub destination_chain: String,
    pub address: String,
}

/// Successful response body of `GET {base}/operations/{address}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OperationsResponse {
    pub operations: Vec<OperationRecord>,
    pub addresses: Vec<ProtocolAddress>,
}

// ============================================================================
// Ordering
// ============================================================================

/// Parses an operation timestamp into epoch milliseconds.
///
/// Unparseable or absent timestamps map to epoch zero so they order as the
/// oldest entries.
fn created_at_millis(record: &OperationRecord) -> i64 {
    chrono::DateTime::parse_from_rfc3339(&record.op_created_at)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Orders operations by creation time, newest first.
///
/// The sort is stable: records with equal timestamps keep their relative input
/// order (ties are common when several operations share a creation batch).
/// Records with unparseable timestamps sort as epoch zero and land last.
/// The input is not mutated.
#[must_use]
pub fn order_by_recency(records: &[OperationRecord]) -> Vec<OperationRecord> {
    let mut ordered = records.to_vec();
    ordered.sort_by_key(|r| std::cmp::Reverse(created_at_millis(r)));
    ordered
}

// ============================================================================
// Tests
// ============================================================================
