#![forbid(unsafe_code)]

//! Resize handle policy.
//!
//! Decides, per handle direction, whether a widget's resize handle is active.
//!
//! | Direction | Result |
//! |-----------|--------|
//! | `Top`, `Bottom` | `vertical_enabled` |
//! | `Left`, `Right` on a fill-behaviour flex child | `false` |
//! | `Left`, `Right` otherwise | `horizontal_enabled` |
//! | `Unset` or no direction | `true` |

use gridresize_core::Axis;
use serde::{Deserialize, Serialize};

/// Theme border-width index applied to resizable containers.
pub const RESIZABLE_CONTAINER_BORDER_THEME_INDEX: usize = 1;

/// Direction of the handle that triggered a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReflowDirection {
    Top,
    Bottom,
    Left,
    Right,
    #[default]
    Unset,
}

impl ReflowDirection {
    /// The four edge handles, clockwise from the top.
    pub const HANDLES: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Axis along which this handle resizes, if any.
    #[must_use]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::Top | Self::Bottom => Some(Axis::Vertical),
            Self::Left | Self::Right => Some(Axis::Horizontal),
            Self::Unset => None,
        }
    }
}

/// How a child of an auto-layout (flex) container is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponsiveBehavior {
    /// Width follows the container.
    Fill,
    /// Width follows the content.
    Hug,
}

/// Per-widget resize flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HandlePolicy {
    pub horizontal_enabled: bool,
    pub vertical_enabled: bool,
    pub is_flex_child: bool,
    pub responsive_behavior: Option<ResponsiveBehavior>,
}

impl Default for HandlePolicy {
    /// Both axes enabled, not inside a flex container.
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl HandlePolicy {
    /// Policy for a widget outside any flex container.
    #[must_use]
    pub const fn new(horizontal_enabled: bool, vertical_enabled: bool) -> Self {
        Self {
            horizontal_enabled,
            vertical_enabled,
            is_flex_child: false,
            responsive_behavior: None,
        }
    }

    /// Mark the widget as a flex child with the given behaviour.
    #[must_use]
    pub const fn flex_child(mut self, behavior: ResponsiveBehavior) -> Self {
        self.is_flex_child = true;
        self.responsive_behavior = Some(behavior);
        self
    }

    /// Whether the container, not the user, owns this widget's width.
    #[must_use]
    pub fn fills_container(&self) -> bool {
        self.is_flex_child && self.responsive_behavior == Some(ResponsiveBehavior::Fill)
    }

    /// Whether the handle in `direction` is active.
    #[must_use]
    pub fn allows(&self, direction: Option<ReflowDirection>) -> bool {
        match direction.and_then(ReflowDirection::axis) {
            Some(Axis::Vertical) => self.vertical_enabled,
            Some(Axis::Horizontal) => !self.fills_container() && self.horizontal_enabled,
            None => true,
        }
    }

    /// Active edge handles, clockwise from the top.
    pub fn enabled_handles(&self) -> impl Iterator<Item = ReflowDirection> + '_ {
        ReflowDirection::HANDLES
            .into_iter()
            .filter(|direction| self.allows(Some(*direction)))
    }
}

/// Whether a resize handle in `direction` is active for a widget.
///
/// Only edge directions are restricted; an unset direction is always allowed.
#[must_use]
pub fn is_handle_resize_allowed(
    horizontal_enabled: bool,
    vertical_enabled: bool,
    direction: Option<ReflowDirection>,
    is_flex_child: bool,
    responsive_behavior: Option<ResponsiveBehavior>,
) -> bool {
    HandlePolicy {
        horizontal_enabled,
        vertical_enabled,
        is_flex_child,
        responsive_behavior,
    }
    .allows(direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_handles_follow_vertical_flag() {
        assert!(!is_handle_resize_allowed(true, false, Some(ReflowDirection::Top), false, None));
        assert!(!is_handle_resize_allowed(true, false, Some(ReflowDirection::Bottom), false, None));
        assert!(is_handle_resize_allowed(false, true, Some(ReflowDirection::Top), false, None));
    }

    #[test]
    fn horizontal_handles_follow_horizontal_flag() {
        assert!(!is_handle_resize_allowed(false, true, Some(ReflowDirection::Left), false, None));
        assert!(is_handle_resize_allowed(true, false, Some(ReflowDirection::Right), false, None));
    }

    #[test]
    fn fill_flex_child_never_resizes_horizontally() {
        for horizontal in [true, false] {
            assert!(!is_handle_resize_allowed(
                horizontal,
                true,
                Some(ReflowDirection::Right),
                true,
                Some(ResponsiveBehavior::Fill),
            ));
        }
    }

    #[test]
    fn fill_without_flex_parent_is_ignored() {
        assert!(is_handle_resize_allowed(
            true,
            true,
            Some(ReflowDirection::Left),
            false,
            Some(ResponsiveBehavior::Fill),
        ));
    }

    #[test]
    fn hug_flex_child_keeps_horizontal_flag() {
        let policy = HandlePolicy::new(true, false).flex_child(ResponsiveBehavior::Hug);
        assert!(policy.allows(Some(ReflowDirection::Left)));
        assert!(!policy.fills_container());
    }

    #[test]
    fn unset_direction_is_always_allowed() {
        assert!(is_handle_resize_allowed(true, true, None, false, None));
        let locked = HandlePolicy::new(false, false).flex_child(ResponsiveBehavior::Fill);
        assert!(locked.allows(None));
        assert!(locked.allows(Some(ReflowDirection::Unset)));
    }

    #[test]
    fn enabled_handles_lists_active_edges() {
        let fill = HandlePolicy::new(true, true).flex_child(ResponsiveBehavior::Fill);
        assert_eq!(
            fill.enabled_handles().collect::<Vec<_>>(),
            vec![ReflowDirection::Top, ReflowDirection::Bottom]
        );
        assert_eq!(HandlePolicy::default().enabled_handles().count(), 4);
    }

    #[test]
    fn axis_mapping() {
        assert_eq!(ReflowDirection::Top.axis(), Some(Axis::Vertical));
        assert_eq!(ReflowDirection::Right.axis(), Some(Axis::Horizontal));
        assert_eq!(ReflowDirection::Unset.axis(), None);
    }
}
