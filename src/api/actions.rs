use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ZoomLevel;

/// Actions a host UI can apply to the chart state.
///
/// Each action maps to one pure transition in [`super::controller`]; there is
/// no other way to mutate a [`super::ChartState`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartAction {
    /// Move/resize the visible window within the global range.
    SetWindow {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
    /// Replace the minimal selectable window width.
    SetMinimalWidthMinutes(f64),
    /// Switch to a zoom level, recording or restoring its bounds.
    SetZoomLevel(ZoomLevel),
}
