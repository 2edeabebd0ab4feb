#![no_main]

use arbitrary::Arbitrary;
use gridresize_core::{CellSpace, GridConfig, PixelSize, PointerOffset, RowCols, WidgetPosition};
use gridresize_layout::{
    HandlePolicy, ReflowDirection, ResponsiveBehavior, compute_bounded_row_cols,
    compute_final_row_cols, compute_row_cols, has_row_cols_changed,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    edges: [i32; 4],
    row_space: f64,
    column_space: f64,
    columns: u16,
    delta: [f64; 2],
    offset: [f64; 2],
    flags: u8,
}

fuzz_target!(|input: Input| {
    // Invalid spaces and column counts must be rejected, never panic.
    let Ok(cell_space) = CellSpace::new(input.row_space, input.column_space) else {
        return;
    };
    let Ok(config) = GridConfig::new(input.columns) else {
        return;
    };

    let [left, top, right, bottom] = input.edges;
    let current = WidgetPosition::new(RowCols::new(left, top, right, bottom), cell_space);
    let delta = PixelSize::new(input.delta[0], input.delta[1]);
    let offset = PointerOffset::new(input.offset[0], input.offset[1]);

    let bounded = compute_bounded_row_cols(compute_row_cols(delta, offset, &current), &config);
    assert!(bounded.left_column >= 0, "left edge escaped the grid");
    assert!(
        bounded.right_column <= i32::from(input.columns),
        "right edge escaped the grid"
    );

    match compute_final_row_cols(delta, offset, &current, &config) {
        Some(next) => {
            assert_eq!(next, bounded);
            assert!(has_row_cols_changed(&next, &current));
        }
        None => assert!(!has_row_cols_changed(&bounded, &current)),
    }

    let mut policy = HandlePolicy::new(input.flags & 1 != 0, input.flags & 2 != 0);
    if input.flags & 4 != 0 {
        let behavior = if input.flags & 8 != 0 {
            ResponsiveBehavior::Fill
        } else {
            ResponsiveBehavior::Hug
        };
        policy = policy.flex_child(behavior);
    }
    assert!(policy.allows(None));
    assert!(policy.allows(Some(ReflowDirection::Unset)));
    if policy.fills_container() {
        assert!(!policy.allows(Some(ReflowDirection::Left)));
        assert!(!policy.allows(Some(ReflowDirection::Right)));
    }
});
