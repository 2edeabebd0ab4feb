#![forbid(unsafe_code)]

//! Geometric primitives for grid placement.
//!
//! Pixel-space values ([`PixelSize`], [`PointerOffset`]) come from the drag
//! gesture; grid-space values ([`RowCols`]) are integer cell indices. A
//! [`CellSpace`] converts between the two and is validated on construction,
//! so no conversion can divide by zero.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left to right; measured in columns.
    Horizontal,
    /// Top to bottom; measured in rows.
    Vertical,
}

impl Axis {
    /// Name of the grid unit along this axis.
    #[must_use]
    pub const fn cell_label(self) -> &'static str {
        match self {
            Self::Horizontal => "column",
            Self::Vertical => "row",
        }
    }
}

/// Pixel-space size delta produced by a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pixel displacement of the drag anchor relative to the widget's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A placement in grid-cell units.
///
/// Coordinates are signed: candidate placements computed mid-drag may sit
/// left of column 0 or past the last column until they are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowCols {
    pub left_column: i32,
    pub top_row: i32,
    pub right_column: i32,
    pub bottom_row: i32,
}

impl RowCols {
    /// Create a placement from its four edges.
    #[inline]
    pub const fn new(left_column: i32, top_row: i32, right_column: i32, bottom_row: i32) -> Self {
        Self {
            left_column,
            top_row,
            right_column,
            bottom_row,
        }
    }
}

/// Pixel size of one grid row and one grid column inside a parent container.
///
/// Both values are finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSpace {
    row: f64,
    column: f64,
}

impl CellSpace {
    /// Validate and create a cell space.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCellSpace`] if either value is zero,
    /// negative, NaN, or infinite.
    pub fn new(row: f64, column: f64) -> Result<Self, GridError> {
        check_space(Axis::Vertical, row)?;
        check_space(Axis::Horizontal, column)?;
        Ok(Self { row, column })
    }

    /// Pixel height of one grid row.
    #[inline]
    #[must_use]
    pub const fn row(self) -> f64 {
        self.row
    }

    /// Pixel width of one grid column.
    #[inline]
    #[must_use]
    pub const fn column(self) -> f64 {
        self.column
    }

    /// Pixel size of one cell along `axis`.
    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.column,
            Axis::Vertical => self.row,
        }
    }
}

fn check_space(axis: Axis, value: f64) -> Result<(), GridError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidCellSpace { axis, value })
    }
}

/// A widget's current placement plus the cell space of its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WidgetPositionRepr", into = "WidgetPositionRepr")]
pub struct WidgetPosition {
    pub row_cols: RowCols,
    pub cell_space: CellSpace,
}

impl WidgetPosition {
    #[inline]
    pub const fn new(row_cols: RowCols, cell_space: CellSpace) -> Self {
        Self {
            row_cols,
            cell_space,
        }
    }
}

/// Flat wire shape of [`WidgetPosition`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WidgetPositionRepr {
    left_column: i32,
    top_row: i32,
    right_column: i32,
    bottom_row: i32,
    parent_row_space: f64,
    parent_column_space: f64,
}

impl TryFrom<WidgetPositionRepr> for WidgetPosition {
    type Error = GridError;

    fn try_from(repr: WidgetPositionRepr) -> Result<Self, Self::Error> {
        let cell_space = CellSpace::new(repr.parent_row_space, repr.parent_column_space)?;
        Ok(Self::new(
            RowCols::new(
                repr.left_column,
                repr.top_row,
                repr.right_column,
                repr.bottom_row,
            ),
            cell_space,
        ))
    }
}

impl From<WidgetPosition> for WidgetPositionRepr {
    fn from(position: WidgetPosition) -> Self {
        let RowCols {
            left_column,
            top_row,
            right_column,
            bottom_row,
        } = position.row_cols;
        Self {
            left_column,
            top_row,
            right_column,
            bottom_row,
            parent_row_space: position.cell_space.row(),
            parent_column_space: position.cell_space.column(),
        }
    }
}

/// A [`WidgetPosition`] inside a padded resizable container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaddedWidgetPosition {
    #[serde(flatten)]
    pub position: WidgetPosition,
    /// Pixel padding between the container border and the widget.
    pub padding_offset: f64,
}

impl From<PaddedWidgetPosition> for WidgetPosition {
    fn from(padded: PaddedWidgetPosition) -> Self {
        padded.position
    }
}

/// Round to the nearest integer, resolving exact halves toward `+inf`.
///
/// `2.5` rounds to `3` and `-2.5` rounds to `-2`. Results saturate to the
/// `i32` range; NaN maps to `0`.
#[must_use]
pub fn round_half_up(value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    if rounded >= f64::from(i32::MAX) {
        return i32::MAX;
    }
    if rounded <= f64::from(i32::MIN) {
        return i32::MIN;
    }
    rounded as i32
}
