#![forbid(unsafe_code)]

//! Pointer-move geometry for resize gestures.
//!
//! # Pipeline
//!
//! ```text
//! PixelSize + PointerOffset + WidgetPosition
//!        │ compute_row_cols          (pixels → cells, half-up rounding)
//!        ▼
//! RowCols (raw, may be out of bounds)
//!        │ compute_bounded_row_cols  (0 ≤ left, right ≤ column_count)
//!        ▼
//! RowCols (bounded)
//!        │ has_row_cols_changed      (exact edge comparison)
//!        ▼
//! Option<RowCols>
//! ```
//!
//! Rows are not clamped: the canvas grows downward, so only the horizontal
//! edges are bounded here.

use gridresize_core::{
    Axis, CellSpace, GridConfig, PixelSize, PointerOffset, RowCols, WidgetPosition, round_half_up,
};

/// Convert a pixel delta and pointer offset into a raw candidate placement.
///
/// The offset moves the top-left corner; the delta plus the offset moves the
/// bottom-right corner. Each edge is rounded to the nearest cell.
#[must_use]
pub fn compute_row_cols(
    delta: PixelSize,
    offset: PointerOffset,
    current: &WidgetPosition,
) -> RowCols {
    let RowCols {
        left_column,
        top_row,
        right_column,
        bottom_row,
    } = current.row_cols;
    let space = current.cell_space;

    RowCols::new(
        shift_edge(left_column, offset.x, space, Axis::Horizontal),
        shift_edge(top_row, offset.y, space, Axis::Vertical),
        shift_edge(right_column, delta.width + offset.x, space, Axis::Horizontal),
        shift_edge(bottom_row, delta.height + offset.y, space, Axis::Vertical),
    )
}

#[inline]
fn shift_edge(edge: i32, pixels: f64, space: CellSpace, axis: Axis) -> i32 {
    round_half_up(f64::from(edge) + pixels / space.along(axis))
}

/// Clamp the horizontal edges of a candidate into the grid.
///
/// `top_row` and `bottom_row` pass through unchanged.
#[must_use]
pub fn compute_bounded_row_cols(row_cols: RowCols, config: &GridConfig) -> RowCols {
    RowCols {
        left_column: row_cols.left_column.max(0),
        right_column: row_cols.right_column.min(config.max_right_column()),
        ..row_cols
    }
}

/// Whether `candidate` differs from the widget's current placement on any edge.
#[must_use]
pub fn has_row_cols_changed(candidate: &RowCols, current: &WidgetPosition) -> bool {
    current.row_cols.left_column != candidate.left_column
        || current.row_cols.top_row != candidate.top_row
        || current.row_cols.bottom_row != candidate.bottom_row
        || current.row_cols.right_column != candidate.right_column
}

/// Compute the bounded placement for one pointer-move sample.
///
/// Returns `None` when the bounded candidate equals the current placement,
/// meaning the caller can skip the re-render.
#[must_use]
pub fn compute_final_row_cols(
    delta: PixelSize,
    offset: PointerOffset,
    current: &WidgetPosition,
    config: &GridConfig,
) -> Option<RowCols> {
    let bounded = compute_bounded_row_cols(compute_row_cols(delta, offset, current), config);
    if has_row_cols_changed(&bounded, current) {
        tracing::trace!(
            left_column = bounded.left_column,
            top_row = bounded.top_row,
            right_column = bounded.right_column,
            bottom_row = bounded.bottom_row,
            "resize moved widget"
        );
        Some(bounded)
    } else {
        tracing::trace!(
            delta_width = delta.width,
            delta_height = delta.height,
            "resize left widget in place"
        );
        None
    }
}
