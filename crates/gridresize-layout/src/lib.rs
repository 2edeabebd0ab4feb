#![forbid(unsafe_code)]

//! Resize geometry and handle policy.
//!
//! A resize gesture reports a pixel delta and a pointer offset on every
//! pointer move. [`compute_final_row_cols`] turns that sample into the new
//! grid placement, or `None` when the widget would not move. Handle
//! visibility is decided separately, once per handle, by
//! [`is_handle_resize_allowed`] / [`HandlePolicy`].
//!
//! ```
//! use gridresize_layout::{
//!     CellSpace, GridConfig, PixelSize, PointerOffset, RowCols, WidgetPosition,
//!     compute_final_row_cols,
//! };
//!
//! let widget = WidgetPosition::new(RowCols::new(2, 1, 6, 4), CellSpace::new(10.0, 10.0)?);
//! let next = compute_final_row_cols(
//!     PixelSize::new(30.0, 0.0),
//!     PointerOffset::default(),
//!     &widget,
//!     &GridConfig::default(),
//! );
//! assert_eq!(next, Some(RowCols::new(2, 1, 9, 4)));
//! # Ok::<(), gridresize_layout::GridError>(())
//! ```

pub use gridresize_core::{
    Axis, CellSpace, GridConfig, GridError, PaddedWidgetPosition, PixelSize, PointerOffset,
    RowCols, WidgetPosition,
};

pub mod handle;
pub mod resize;

pub use handle::{
    HandlePolicy, RESIZABLE_CONTAINER_BORDER_THEME_INDEX, ReflowDirection, ResponsiveBehavior,
    is_handle_resize_allowed,
};
pub use resize::{
    compute_bounded_row_cols, compute_final_row_cols, compute_row_cols, has_row_cols_changed,
};
