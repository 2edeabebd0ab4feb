#![forbid(unsafe_code)]

//! Grid configuration.
//!
//! The column count bounds every horizontal clamp. It is passed into the
//! geometry explicitly rather than read from a process-wide constant, so
//! two canvases with different grids can share one process.
//!
//! # Sources
//!
//! | Source | Entry point |
//! |--------|-------------|
//! | Built-in default (64 columns) | [`GridConfig::default`] |
//! | Code | [`GridConfig::new`] |
//! | JSON/serde (`{"columnCount": 96}`) | `Deserialize` |
//! | `GRIDRESIZE_COLUMN_COUNT` | [`GridConfig::from_env`] |

use std::num::NonZeroU16;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Column count used when nothing else is configured.
pub const DEFAULT_GRID_COLUMNS: u16 = 64;

/// Environment variable consulted by [`GridConfig::from_env`].
pub const COLUMN_COUNT_ENV_VAR: &str = "GRIDRESIZE_COLUMN_COUNT";

const DEFAULT_COLUMN_COUNT: NonZeroU16 = match NonZeroU16::new(DEFAULT_GRID_COLUMNS) {
    Some(count) => count,
    None => panic!("default grid column count must be non-zero"),
};

/// Grid dimensions shared by all widgets on one canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    column_count: NonZeroU16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_count: DEFAULT_COLUMN_COUNT,
        }
    }
}

impl GridConfig {
    /// Create a configuration with `column_count` columns.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidColumnCount`] if `column_count` is zero.
    pub fn new(column_count: u16) -> Result<Self, GridError> {
        NonZeroU16::new(column_count)
            .map(|column_count| Self { column_count })
            .ok_or_else(|| GridError::InvalidColumnCount {
                value: column_count.to_string(),
            })
    }

    /// Load from the process environment.
    ///
    /// An unset variable yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidColumnCount`] if the variable is set but
    /// is not an integer in `1..=65535`.
    pub fn from_env() -> Result<Self, GridError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Load using a custom variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`GridConfig::from_env`].
    pub fn from_env_with(mut lookup: impl FnMut(&str) -> Option<String>) -> Result<Self, GridError> {
        let Some(raw) = lookup(COLUMN_COUNT_ENV_VAR) else {
            return Ok(Self::default());
        };
        let Ok(column_count) = raw.trim().parse::<NonZeroU16>() else {
            return Err(GridError::InvalidColumnCount { value: raw });
        };
        tracing::debug!(
            column_count = column_count.get(),
            source = COLUMN_COUNT_ENV_VAR,
            "grid column count loaded from environment"
        );
        Ok(Self { column_count })
    }

    /// Total number of columns in the grid.
    #[inline]
    #[must_use]
    pub const fn column_count(&self) -> u16 {
        self.column_count.get()
    }

    /// Rightmost valid column edge, in placement coordinates.
    #[inline]
    #[must_use]
    pub fn max_right_column(&self) -> i32 {
        i32::from(self.column_count.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn default_is_sixty_four_columns() {
        let config = GridConfig::default();
        assert_eq!(config.column_count(), 64);
        assert_eq!(config.max_right_column(), 64);
    }

    #[test]
    fn new_rejects_zero() {
        assert_eq!(GridConfig::new(12).unwrap().column_count(), 12);
        assert_eq!(
            GridConfig::new(0),
            Err(GridError::InvalidColumnCount {
                value: "0".to_string(),
            })
        );
    }

    #[test]
    fn env_unset_uses_default() {
        let config = GridConfig::from_env_with(|_| None).unwrap();
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn env_value_is_trimmed_and_parsed() {
        let config = GridConfig::from_env_with(|key| {
            assert_eq!(key, COLUMN_COUNT_ENV_VAR);
            Some(" 96 ".to_string())
        })
        .unwrap();
        assert_eq!(config.column_count(), 96);
    }

    #[traced_test]
    #[test]
    fn env_load_is_logged() {
        let config = GridConfig::from_env_with(|_| Some("48".to_string())).unwrap();
        assert_eq!(config.column_count(), 48);
        assert!(logs_contain("grid column count loaded from environment"));
        assert!(logs_contain("column_count=48"));
    }

    #[traced_test]
    #[test]
    fn default_config_is_not_logged() {
        let _ = GridConfig::from_env_with(|_| None).unwrap();
        assert!(!logs_contain("grid column count loaded from environment"));
    }

    #[test]
    fn env_rejects_zero_and_garbage() {
        for raw in ["0", "-4", "wide", "70000", ""] {
            let err = GridConfig::from_env_with(|_| Some(raw.to_string())).unwrap_err();
            assert_eq!(
                err,
                GridError::InvalidColumnCount {
                    value: raw.to_string(),
                }
            );
        }
    }

    #[test]
    fn json_fills_missing_fields_with_default() {
        let config: GridConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.column_count(), DEFAULT_GRID_COLUMNS);

        let config: GridConfig = serde_json::from_str(r#"{"columnCount": 32}"#).unwrap();
        assert_eq!(config.column_count(), 32);

        assert!(serde_json::from_str::<GridConfig>(r#"{"columnCount": 0}"#).is_err());
    }
}
