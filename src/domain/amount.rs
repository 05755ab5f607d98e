//! Base-unit amount conversion.
//!
//! Upstream amounts arrive as decimal integer strings denominated in the
//! asset's base units (satoshis, wei, lamports). Conversion to human decimal
//! strings uses exact big-integer arithmetic: for 18-decimal assets realistic
//! amounts exceed the exact-integer range of `f64`, so floating point is never
//! involved.

use num_bigint::BigUint;

// ============================================================================
// Asset Precision Table
// ============================================================================

/// Decimal places per asset ticker (lowercase).
///
/// Static and read-only for the lifetime of the process.
pub const ASSET_DECIMALS: [(&str, u32); 3] = [("btc", 8), ("eth", 18), ("sol", 9)];

/// Decimal places assumed for assets missing from [`ASSET_DECIMALS`].
pub const DEFAULT_DECIMALS: u32 = 6;

/// Returns the decimal precision for an asset ticker, case-insensitive.
///
/// Unknown assets fall back to [`DEFAULT_DECIMALS`].
#[must_use]
pub fn decimals_for(asset: &str) -> u32 {
    let asset = asset.trim().to_lowercase();
    ASSET_DECIMALS
        .iter()
        .find(|(ticker, _)| *ticker == asset)
        .map_or(DEFAULT_DECIMALS, |(_, d)| *d)
}

// ============================================================================
// Conversion
// ============================================================================

/// Converts a base-unit amount string into a human decimal string.
///
/// - Absent or empty input yields an empty string, not `"0"`.
/// - The fractional part is zero-padded to the asset's precision and trailing
///   zeros are stripped; a fully-stripped fraction leaves no trailing dot.
/// - A value that does not parse as a non-negative integer is returned
///   unchanged rather than treated as an error.
///
/// # Example
///
/// ```
/// use lazyunit::domain::amount::human_amount;
///
/// assert_eq!(human_amount("eth", Some("1230000000000000000")), "1.23");
/// assert_eq!(human_amount("btc", Some("100000000")), "1");
/// assert_eq!(human_amount("btc", None), "");
/// ```
#[must_use]
pub fn human_amount(asset: &str, raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    if raw.is_empty() {
        return String::new();
    }

    let Ok(value) = raw.parse::<BigUint>() else {
        return raw.to_string();
    };

    let decimals = decimals_for(asset);
    let base = BigUint::from(10u32).pow(decimals);
    let int_part = &value / &base;
    let frac_part = &value % &base;

    let padded = format!("{:0>width$}", frac_part.to_string(), width = decimals as usize);
    let frac = padded.trim_end_matches('0');

    if frac.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac}")
    }
}

// ============================================================================
// Tests
// ============================================================================
