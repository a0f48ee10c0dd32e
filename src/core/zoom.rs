use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::TimeWindow;

/// The three nested magnification tiers.
///
/// The derived order (`NoZoom < Level1 < Level2`) is what the controller uses
/// to classify a transition as zooming in (`target > current`). By that rule a
/// non-adjacent jump such as `NoZoom -> Level2` counts as a zoom-in, with the
/// same bounds-recording and width-division effects as an adjacent one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum ZoomLevel {
    #[default]
    NoZoom,
    Level1,
    Level2,
}

/// Outer window bounds recorded when a zoom level was entered by zooming in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl WindowBounds {
    #[must_use]
    pub fn of_window(window: TimeWindow) -> Self {
        Self {
            from: window.from,
            to: window.to,
        }
    }
}

/// Selected zoom level plus the per-level recorded bounds.
///
/// A level's bounds stay `None` until the first zoom-in into that level and
/// are overwritten on every subsequent zoom-in into it. Zooming out leaves
/// them untouched, which is what makes zooming back in restorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ZoomSettings {
    pub selected: ZoomLevel,
    pub level1_bounds: Option<WindowBounds>,
    pub level2_bounds: Option<WindowBounds>,
}

impl ZoomSettings {
    /// `true` when switching to `target` means descending to a deeper level.
    #[must_use]
    pub fn came_by_zooming_in(self, target: ZoomLevel) -> bool {
        target > self.selected
    }

    /// Recorded bounds for `level`, if it was ever entered by zooming in.
    /// `NoZoom` has no recorded bounds; its view is the global range.
    #[must_use]
    pub fn bounds_for(self, level: ZoomLevel) -> Option<WindowBounds> {
        match level {
            ZoomLevel::NoZoom => None,
            ZoomLevel::Level1 => self.level1_bounds,
            ZoomLevel::Level2 => self.level2_bounds,
        }
    }

    /// Returns a copy with `level`'s bounds replaced.
    #[must_use]
    pub fn with_bounds(self, level: ZoomLevel, bounds: WindowBounds) -> Self {
        match level {
            ZoomLevel::NoZoom => self,
            ZoomLevel::Level1 => Self {
                level1_bounds: Some(bounds),
                ..self
            },
            ZoomLevel::Level2 => Self {
                level2_bounds: Some(bounds),
                ..self
            },
        }
    }

    /// Returns a copy with `level` selected.
    #[must_use]
    pub fn with_selected(self, level: ZoomLevel) -> Self {
        Self {
            selected: level,
            ..self
        }
    }
}
