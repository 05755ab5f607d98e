//! Cell projection for the operations table.
//!
//! Maps an [`OperationRecord`] through a [`ColumnKey`] to the plain display
//! string for that cell. Projection is deterministic and carries no hidden
//! state; badge colors are applied by the rendering layer and are absent here,
//! which is what lets the CSV export reuse the same values verbatim.

use chrono::{DateTime, Local};

use crate::domain::{OperationRecord, human_amount};
use crate::table::columns::ColumnKey;

/// Placeholder shown for absent optional fields.
pub const PLACEHOLDER: &str = "-";

/// Placeholder asset label when the ticker is absent.
pub const ASSET_PLACEHOLDER: &str = "ASSET";

// ============================================================================
// Projection
// ============================================================================

/// Produces the display value for one (record, column) pair.
///
/// A missing or unexpected field never panics; it resolves to the documented
/// placeholder.
#[must_use]
pub fn project_cell(record: &OperationRecord, key: ColumnKey) -> String {
    match key {
        ColumnKey::Time => format_local_time(&record.op_created_at),
        ColumnKey::Asset => {
            if record.asset.is_empty() {
                ASSET_PLACEHOLDER.to_string()
            } else {
                record.asset.to_uppercase()
            }
        }
        ColumnKey::Route => format!(
            "{} → {}",
            or_placeholder(&record.source_chain),
            or_placeholder(&record.destination_chain)
        ),
        ColumnKey::State => record.state.as_str().to_string(),
        ColumnKey::Amount => {
            let amount = human_amount(&record.asset, Some(record.source_amount.as_str()));
            if record.asset.is_empty() {
                amount
            } else {
                format!("{} {}", amount, record.asset.to_uppercase())
            }
        }
        ColumnKey::Fee => format_fee(record),
        ColumnKey::SourceAddress => opt_or_placeholder(record.source_address.as_deref()),
        ColumnKey::DestinationAddress => opt_or_placeholder(record.destination_address.as_deref()),
        ColumnKey::ProtocolAddress => opt_or_placeholder(record.protocol_address.as_deref()),
        ColumnKey::SourceTxHash => opt_or_placeholder(record.source_tx_hash.as_deref()),
        ColumnKey::DestinationTxHash => opt_or_placeholder(record.destination_tx_hash.as_deref()),
    }
}

/// Formats the creation timestamp in the viewer's local timezone.
///
/// Absent timestamps produce an empty string; unparseable ones fall back to
/// the raw value rather than failing.
#[must_use]
pub fn format_local_time(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Fee summary: the base-unit destination fee scaled through the asset's
/// precision, with the opaque sweep fee appended raw.
///
/// `sweep_fee_amount` is deliberately NOT base-unit-scaled; the two fee fields
/// live in different accounting domains upstream.
fn format_fee(record: &OperationRecord) -> String {
    let dst_fee = record
        .destination_fee_amount
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .map(|raw| human_amount(&record.asset, Some(raw)));

    let mut summary = dst_fee.unwrap_or_else(|| PLACEHOLDER.to_string());
    if let Some(sweep) = record.sweep_fee_amount.as_deref().filter(|s| !s.is_empty()) {
        summary.push_str(&format!(" +{sweep} sweep"));
    }
    summary
}

/// Full projected (label, value) pairs for one record, in column order.
///
/// Backs the row detail view and clipboard copy: unlike the table cells these
/// are never truncated, so the complete value of every address and hash stays
/// reachable.
#[must_use]
pub fn detail_rows(record: &OperationRecord) -> Vec<(&'static str, String)> {
    crate::table::columns::COLUMNS
        .iter()
        .map(|spec| (spec.label, project_cell(record, spec.key)))
        .collect()
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() { PLACEHOLDER } else { value }
}

fn opt_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OpState;

    fn sample_record() -> OperationRecord {
        OperationRecord {
            asset: "btc".to_string(),
            state: OpState::Done,
            source_chain: "bitcoin".to_string(),
            destination_chain: "hyperliquid".to_string(),
            source_address: Some("bc1qsource".to_string()),
            destination_address: None,
            protocol_address: Some("bc1qprotocol".to_string()),
            source_tx_hash: Some("abc123".to_string()),
            destination_tx_hash: None,
            source_amount: "150000000".to_string(),
            destination_fee_amount: Some("50000".to_string()),
            sweep_fee_amount: None,
            op_created_at: "2024-06-15T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_amount_cell_concatenates_ticker() {
        assert_eq!(
            project_cell(&sample_record(), ColumnKey::Amount),
            "1.5 BTC"
        );
    }

    #[test]
    fn test_route_cell() {
        assert_eq!(
            project_cell(&sample_record(), ColumnKey::Route),
            "bitcoin → hyperliquid"
        );
        let empty = OperationRecord::default();
        assert_eq!(project_cell(&empty, ColumnKey::Route), "- → -");
    }

    #[test]
    fn test_absent_optionals_project_as_dash() {
        let record = sample_record();
        assert_eq!(project_cell(&record, ColumnKey::DestinationAddress), "-");
        assert_eq!(project_cell(&record, ColumnKey::DestinationTxHash), "-");
        assert_eq!(project_cell(&record, ColumnKey::SourceAddress), "bc1qsource");
    }

    #[test]
    fn test_asset_placeholder_when_absent() {
        let record = OperationRecord::default();
        assert_eq!(project_cell(&record, ColumnKey::Asset), "ASSET");
        assert_eq!(project_cell(&sample_record(), ColumnKey::Asset), "BTC");
    }

    #[test]
    fn test_state_cell_uses_raw_label() {
        assert_eq!(project_cell(&sample_record(), ColumnKey::State), "done");
        let mut record = sample_record();
        record.state = OpState::Other("mysteryState".to_string());
        assert_eq!(project_cell(&record, ColumnKey::State), "mysteryState");
    }

    #[test]
    fn test_fee_cell_scales_destination_fee_only() {
        let record = sample_record();
        // 50000 sat at 8 decimals.
        assert_eq!(project_cell(&record, ColumnKey::Fee), "0.0005");

        let mut with_sweep = sample_record();
        with_sweep.sweep_fee_amount = Some("12".to_string());
        assert_eq!(project_cell(&with_sweep, ColumnKey::Fee), "0.0005 +12 sweep");

        let mut sweep_only = sample_record();
        sweep_only.destination_fee_amount = None;
        sweep_only.sweep_fee_amount = Some("7".to_string());
        assert_eq!(project_cell(&sweep_only, ColumnKey::Fee), "- +7 sweep");

        let mut no_fees = sample_record();
        no_fees.destination_fee_amount = None;
        assert_eq!(project_cell(&no_fees, ColumnKey::Fee), "-");
    }

    #[test]
    fn test_time_cell_local_formatting() {
        let projected = project_cell(&sample_record(), ColumnKey::Time);
        // Mid-year, mid-day UTC instant stays in June 2024 in every timezone.
        assert!(projected.starts_with("2024-06-1"), "got {projected}");

        let mut record = sample_record();
        record.op_created_at = String::new();
        assert_eq!(project_cell(&record, ColumnKey::Time), "");

        record.op_created_at = "not-a-timestamp".to_string();
        assert_eq!(project_cell(&record, ColumnKey::Time), "not-a-timestamp");
    }

    #[test]
    fn test_detail_rows_cover_all_columns() {
        let rows = detail_rows(&sample_record());
        assert_eq!(rows.len(), crate::table::columns::COLUMNS.len());
        insta::assert_snapshot!(
            rows.iter()
                .map(|(label, value)| format!("{label}: {value}"))
                .collect::<Vec<_>>()
                .join("\n")
                .lines()
                .skip(1) // Time renders in the viewer's local timezone.
                .collect::<Vec<_>>()
                .join("\n"),
            @r#"
        Asset: BTC
        Route: bitcoin → hyperliquid
        State: done
        Amount: 1.5 BTC
        Fee: 0.0005
        Source Address: bc1qsource
        Destination Address: -
        Protocol Address: bc1qprotocol
        Source Tx: abc123
        Destination Tx: -
        "#
        );
    }

    #[test]
    fn test_empty_record_never_panics() {
        let record = OperationRecord::default();
        for spec in &crate::table::columns::COLUMNS {
            let _ = project_cell(&record, spec.key);
        }
    }
}
