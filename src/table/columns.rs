//! Column layout model for the operations table.
//!
//! The ordered [`COLUMNS`] sequence defines display and export order. Widths
//! are measured in terminal cells, start from each column's initial width, and
//! are adjusted through an explicit drag state machine driven by discrete
//! pointer events: `idle` / `dragging {key, start_x, start_width}`.

use std::collections::HashMap;

// ============================================================================
// Column Keys
// ============================================================================

/// Identifies one displayable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Time,
    Asset,
    Route,
    State,
    Amount,
    Fee,
    SourceAddress,
    DestinationAddress,
    ProtocolAddress,
    SourceTxHash,
    DestinationTxHash,
}

// ============================================================================
// Column Specs
// ============================================================================

/// Static description of one column: label, width constraints, and rendering
/// flags.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub key: ColumnKey,
    pub label: &'static str,
    /// Lower bound enforced on every width update.
    pub min_width: u16,
    /// Width at view mount.
    pub init_width: u16,
    /// Rendered in the muted monospace style.
    pub monospace: bool,
    /// Never wrapped; truncated visually with the full value available through
    /// the row detail view.
    pub single_line: bool,
}

/// Display and export column order.
pub const COLUMNS: [ColumnSpec; 11] = [
    ColumnSpec {
        key: ColumnKey::Time,
        label: "Time",
        min_width: 10,
        init_width: 19,
        monospace: true,
        single_line: true,
    },
    ColumnSpec {
        key: ColumnKey::Asset,
        label: "Asset",
        min_width: 5,
        init_width: 6,
        monospace: false,
        single_line: true,
    },
    ColumnSpec {
        key: ColumnKey::Route,
        label: "Route",
        min_width: 8,
        init_width: 14,
        monospace: true,
        single_line: true,
    },
    ColumnSpec {
        key: ColumnKey::State,
        label: "State",
        min_width: 8,
        init_width: 24,
        monospace: false,
        single_line: true,
    },
    ColumnSpec {
        key: ColumnKey::Amount,
        label: "Amount",
        min_width: 8,
        init_width: 18,
        monospace: true,
        single_line: true,
    },
    ColumnSpec {
        key: ColumnKey::Fee,
        label: "Fee",
        min_width: 8,
        init_width: 16,
        monospace: true,
        single_line: true,
    },
    ColumnSpec {
        key: ColumnKey::SourceAddress,
        label: "Source Address",
        min_width: 12,
        init_width: 42,
        monospace: true,
        single_line: true,
    },
    ColumnSpec {
        key: ColumnKey::DestinationAddress,
        label: "Destination Address",
        min_width: 12,
        init_width: 42,
        monospace: true,
        single_line: true,
    },
    ColumnSpec {
        key: ColumnKey::ProtocolAddress,
        label: "Protocol Address",
        min_width: 12,
        init_width: 42,
        monospace: true,
        single_line: true,
    },
    ColumnSpec {
        key: ColumnKey::SourceTxHash,
        label: "Source Tx",
        min_width: 12,
        init_width: 46,
        monospace: true,
        single_line: true,
    },
    ColumnSpec {
        key: ColumnKey::DestinationTxHash,
        label: "Destination Tx",
        min_width: 12,
        init_width: 46,
        monospace: true,
        single_line: true,
    },
];

/// Looks up the static spec for a column key.
#[must_use]
pub fn spec_for(key: ColumnKey) -> &'static ColumnSpec {
    COLUMNS
        .iter()
        .find(|spec| spec.key == key)
        .unwrap_or(&COLUMNS[0])
}

// ============================================================================
// Drag State
// ============================================================================

/// The active drag gesture, captured at drag start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResizeDrag {
    key: ColumnKey,
    start_x: u16,
    start_width: u16,
}

// ============================================================================
// Column Layout
// ============================================================================

/// Mutable column widths plus the drag-resize state machine.
///
/// Created at view mount, discarded on teardown; widths are never persisted.
/// At most one drag is active at a time; starting a new drag while one is
/// active silently replaces it.
#[derive(Debug)]
pub struct ColumnLayout {
    widths: HashMap<ColumnKey, u16>,
    drag: Option<ResizeDrag>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnLayout {
    /// Creates a layout with every column at its initial width.
    #[must_use]
    pub fn new() -> Self {
        Self {
            widths: COLUMNS
                .iter()
                .map(|spec| (spec.key, spec.init_width))
                .collect(),
            drag: None,
        }
    }

    /// Returns the current width of a column.
    #[must_use]
    pub fn width_of(&self, key: ColumnKey) -> u16 {
        self.widths
            .get(&key)
            .copied()
            .unwrap_or_else(|| spec_for(key).init_width)
    }

    /// Returns `true` while a drag gesture is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begins a drag on `key`, capturing the pointer position and the current
    /// width. Replaces any drag already in progress.
    pub fn resize_start(&mut self, key: ColumnKey, pointer_x: u16) {
        self.drag = Some(ResizeDrag {
            key,
            start_x: pointer_x,
            start_width: self.width_of(key),
        });
    }

    /// Applies a pointer movement to the dragged column.
    ///
    /// The new width is clamped to the column's minimum; no other column is
    /// touched. No-op when no drag is active.
    pub fn resize_move(&mut self, pointer_x: u16) {
        let Some(drag) = self.drag else {
            return;
        };
        let delta = i32::from(pointer_x) - i32::from(drag.start_x);
        let min = i32::from(spec_for(drag.key).min_width);
        let new_width = (i32::from(drag.start_width) + delta).max(min);
        self.widths.insert(drag.key, new_width as u16);
    }

    /// Ends the active drag. Idempotent.
    pub fn resize_end(&mut self) {
        self.drag = None;
    }

    /// Maps a pointer column to the table column whose trailing boundary is
    /// under the pointer.
    ///
    /// Columns are laid out from `origin_x`, starting at visible column
    /// `first_col`, each followed by a one-cell separator. The separator cell
    /// and the last cell of a column both grab that column's boundary, which
    /// gives the gesture a one-cell tolerance.
    #[must_use]
    pub fn hit_test_separator(
        &self,
        origin_x: u16,
        first_col: usize,
        pointer_x: u16,
    ) -> Option<ColumnKey> {
        let mut x = origin_x;
        for spec in COLUMNS.iter().skip(first_col) {
            let boundary = x + self.width_of(spec.key);
            if pointer_x == boundary || pointer_x + 1 == boundary {
                return Some(spec.key);
            }
            x = boundary + 1;
            if pointer_x < x {
                break;
            }
        }
        None
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_widths_match_specs() {
        let layout = ColumnLayout::new();
        for spec in &COLUMNS {
            assert_eq!(layout.width_of(spec.key), spec.init_width);
        }
    }

    #[test]
    fn test_resize_grows_and_shrinks() {
        let mut layout = ColumnLayout::new();
        layout.resize_start(ColumnKey::Amount, 50);
        layout.resize_move(60);
        assert_eq!(layout.width_of(ColumnKey::Amount), 28);
        layout.resize_move(45);
        assert_eq!(layout.width_of(ColumnKey::Amount), 13);
        layout.resize_end();
        assert_eq!(layout.width_of(ColumnKey::Amount), 13);
    }

    #[test]
    fn test_width_never_below_minimum() {
        let mut layout = ColumnLayout::new();
        layout.resize_start(ColumnKey::Time, 100);
        // A sequence of deltas including an absurdly large negative one.
        for x in [90, 40, 0, 120, 3] {
            layout.resize_move(x);
            assert!(layout.width_of(ColumnKey::Time) >= spec_for(ColumnKey::Time).min_width);
        }
        layout.resize_move(0);
        assert_eq!(
            layout.width_of(ColumnKey::Time),
            spec_for(ColumnKey::Time).min_width
        );
    }

    #[test]
    fn test_move_without_drag_is_noop() {
        let mut layout = ColumnLayout::new();
        layout.resize_move(5);
        for spec in &COLUMNS {
            assert_eq!(layout.width_of(spec.key), spec.init_width);
        }
    }

    #[test]
    fn test_new_drag_replaces_active_drag() {
        let mut layout = ColumnLayout::new();
        layout.resize_start(ColumnKey::Asset, 10);
        layout.resize_start(ColumnKey::Route, 30);
        layout.resize_move(40);
        // Only the most recent drag target moved.
        assert_eq!(layout.width_of(ColumnKey::Asset), spec_for(ColumnKey::Asset).init_width);
        assert_eq!(
            layout.width_of(ColumnKey::Route),
            spec_for(ColumnKey::Route).init_width + 10
        );
    }

    #[test]
    fn test_resize_end_is_idempotent() {
        let mut layout = ColumnLayout::new();
        layout.resize_start(ColumnKey::Fee, 10);
        layout.resize_end();
        layout.resize_end();
        assert!(!layout.is_dragging());
        layout.resize_move(99);
        assert_eq!(layout.width_of(ColumnKey::Fee), spec_for(ColumnKey::Fee).init_width);
    }

    #[test]
    fn test_hit_test_separator_boundaries() {
        let layout = ColumnLayout::new();
        // First visible column is Time (width 19) laid out from x = 1, so its
        // separator sits at x = 20, then Asset (width 6) ends at x = 27.
        assert_eq!(
            layout.hit_test_separator(1, 0, 20),
            Some(ColumnKey::Time)
        );
        assert_eq!(
            layout.hit_test_separator(1, 0, 19),
            Some(ColumnKey::Time)
        );
        assert_eq!(
            layout.hit_test_separator(1, 0, 27),
            Some(ColumnKey::Asset)
        );
        assert_eq!(layout.hit_test_separator(1, 0, 5), None);
    }

    #[test]
    fn test_hit_test_respects_first_visible_column() {
        let layout = ColumnLayout::new();
        // Starting from the Asset column, its separator is at 1 + 6 = 7.
        assert_eq!(layout.hit_test_separator(1, 1, 7), Some(ColumnKey::Asset));
        assert_eq!(layout.hit_test_separator(1, 1, 20), None);
    }

    #[test]
    fn test_column_order_and_flags() {
        assert_eq!(COLUMNS[0].key, ColumnKey::Time);
        assert_eq!(COLUMNS[10].key, ColumnKey::DestinationTxHash);
        // Address and hash columns are monospaced and single-line.
        for key in [
            ColumnKey::SourceAddress,
            ColumnKey::DestinationAddress,
            ColumnKey::ProtocolAddress,
            ColumnKey::SourceTxHash,
            ColumnKey::DestinationTxHash,
        ] {
            let spec = spec_for(key);
            assert!(spec.monospace);
            assert!(spec.single_line);
        }
    }
}
