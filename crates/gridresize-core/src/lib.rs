#![forbid(unsafe_code)]

//! Core: grid placement types, grid configuration, and errors.
//!
//! # Role in gridresize
//! `gridresize-core` is the data layer. It owns the value types that a
//! page-builder's drag controller hands to the resize geometry, the grid
//! configuration that bounds it, and the validation errors raised when
//! those values are constructed.
//!
//! # Primary responsibilities
//! - **Geometry**: pixel deltas, pointer offsets, and grid placements.
//! - **CellSpace**: validated pixel size of one grid row/column.
//! - **GridConfig**: the injected column count (default 64).
//!
//! # How it fits in the system
//! `gridresize-layout` consumes these types and performs the per-event
//! conversion, clamping, and change detection. Every type here is an
//! immutable `Copy` snapshot; nothing owns mutable state.

pub mod config;
pub mod error;
pub mod geometry;

pub use config::{COLUMN_COUNT_ENV_VAR, DEFAULT_GRID_COLUMNS, GridConfig};
pub use error::GridError;
pub use geometry::{
    Axis, CellSpace, PaddedWidgetPosition, PixelSize, PointerOffset, RowCols, WidgetPosition,
    round_half_up,
};
