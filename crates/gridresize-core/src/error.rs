#![forbid(unsafe_code)]

//! Validation errors for grid values.

use thiserror::Error;

use crate::geometry::Axis;

/// Errors raised when constructing grid values from untrusted input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A parent row/column space was zero, negative, or not finite.
    #[error("{} cell space must be finite and positive, got {value}", .axis.cell_label())]
    InvalidCellSpace { axis: Axis, value: f64 },
    /// A configured column count was not a positive `u16`.
    #[error("grid column count must be a positive integer up to 65535, got {value:?}")]
    InvalidColumnCount { value: String },
}
