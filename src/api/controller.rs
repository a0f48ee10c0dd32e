use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::core::{TimeWindow, WindowBounds, ZoomLevel};

use super::{ChartAction, ChartState};

/// Applies one UI action to the state, returning the successor state.
///
/// This is the whole mutation surface of the core: one action in, one new
/// state out. Invalid inputs degrade to a no-op (the input state is returned
/// unchanged), never to a panic or error.
#[must_use]
pub fn apply(state: &ChartState, action: &ChartAction) -> ChartState {
    match *action {
        ChartAction::SetWindow { from, to } => set_window(state, from, to),
        ChartAction::SetMinimalWidthMinutes(minutes) => set_minimal_width_minutes(state, minutes),
        ChartAction::SetZoomLevel(level) => set_zoom_level(state, level),
    }
}

/// Moves/resizes the visible window.
///
/// Windows reaching outside the global range, and degenerate windows with
/// `from > to`, are rejected: the input state is returned unchanged and a
/// diagnostic is logged. A plain pan/resize never rebuilds the cache; only
/// zoom transitions do.
#[must_use]
pub fn set_window(state: &ChartState, from: DateTime<Utc>, to: DateTime<Utc>) -> ChartState {
    if from > to {
        warn!(%from, %to, "rejecting window: start is after end");
        return state.clone();
    }

    let range = state.all_samples_range;
    if from < range.min_time {
        warn!(%from, range_min = %range.min_time, "rejecting window: start before range");
        return state.clone();
    }
    if to > range.max_time {
        warn!(%to, range_max = %range.max_time, "rejecting window: end after range");
        return state.clone();
    }

    ChartState {
        window: TimeWindow {
            from,
            to,
            ..state.window
        },
        ..state.clone()
    }
}

/// Replaces the minimal selectable window width.
///
/// Unconditional: the host UI owns the sanity of this value, the core does
/// not second-guess it.
#[must_use]
pub fn set_minimal_width_minutes(state: &ChartState, minutes: f64) -> ChartState {
    ChartState {
        window: TimeWindow {
            minimal_width_minutes: minutes,
            ..state.window
        },
        ..state.clone()
    }
}

/// Switches to `target`, recording or restoring that level's bounds.
///
/// Direction is the strict ordinal comparison `target > current`: anything
/// deeper counts as zooming in, including non-adjacent jumps such as
/// `NoZoom -> Level2`. Zooming in records the current window as the target
/// level's bounds and divides the minimal width by 10; zooming out or moving
/// laterally keeps recorded bounds and restores the minimal width to the span
/// of the window currently in view. Only the entered level's cache entry is
/// rebuilt; `NoZoom` keeps its initial full-series entry.
#[must_use]
pub fn set_zoom_level(state: &ChartState, target: ZoomLevel) -> ChartState {
    let zooming_in = state.zoom.came_by_zooming_in(target);
    debug!(
        current = ?state.zoom.selected,
        ?target,
        zooming_in,
        "zoom transition"
    );

    match target {
        ZoomLevel::NoZoom => {
            let mut next = state.clone();
            next.zoom = next.zoom.with_selected(ZoomLevel::NoZoom);
            next.window.minimal_width_minutes = next.window.span_minutes();
            next
        }
        ZoomLevel::Level1 | ZoomLevel::Level2 => {
            let mut next = state.clone();
            if zooming_in {
                next.zoom = next
                    .zoom
                    .with_bounds(target, WindowBounds::of_window(next.window))
                    .with_selected(target);
                next.window.minimal_width_minutes /= 10.0;
            } else {
                // Reachable for Level1 only: Level2 is the deepest level, so
                // entering it is always a zoom-in under the ordinal rule.
                next.zoom = next.zoom.with_selected(target);
                next.window.minimal_width_minutes = next.window.span_minutes();
            }
            next.cache = next.cache.rebuilt_for(
                target,
                &next.all_samples,
                next.zoom,
                next.all_samples_range,
                next.point_budget,
            );
            next
        }
    }
}
