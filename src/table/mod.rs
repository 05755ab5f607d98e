//! Table model: column layout and cell projection.
//!
//! The table model is pure and rendering-independent. [`columns`] owns the
//! ordered column specs, the mutable width map, and the drag-resize state
//! machine; [`project`] turns records into per-cell display strings. The
//! ratatui panel and the CSV exporter both consume these, which keeps display
//! and export in lockstep.

pub mod columns;
pub mod project;

// ============================================================================
// Re-exports
// ============================================================================

pub use columns::{COLUMNS, ColumnKey, ColumnLayout, ColumnSpec, spec_for};
pub use project::{PLACEHOLDER, format_local_time, project_cell};
