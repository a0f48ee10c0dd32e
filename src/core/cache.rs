use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GlobalRange, Sample, ZoomLevel, ZoomSettings, decimate};

/// Per-zoom-level store of the decimated sequence appropriate to that level's
/// recorded bounds.
///
/// Entries are replaced wholesale, never patched: entering a level re-runs
/// decimation for that level only, while the other levels keep whatever they
/// last held until they are entered again. An empty entry is a valid
/// "nothing to draw" state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SampleCache {
    no_zoom: Vec<Sample>,
    level1: Vec<Sample>,
    level2: Vec<Sample>,
}

impl SampleCache {
    /// Builds the `NoZoom` entry by decimating across the entire series.
    #[must_use]
    pub fn prepare_initial(samples: &[Sample], range: GlobalRange, point_budget: usize) -> Self {
        let no_zoom = decimate(samples, range.min_time, range.max_time, point_budget);
        debug!(
            sample_count = samples.len(),
            cached_count = no_zoom.len(),
            point_budget,
            "prepared initial sample cache"
        );
        Self {
            no_zoom,
            level1: Vec::new(),
            level2: Vec::new(),
        }
    }

    /// Decimated sequence for `level`.
    #[must_use]
    pub fn samples_for(&self, level: ZoomLevel) -> &[Sample] {
        match level {
            ZoomLevel::NoZoom => &self.no_zoom,
            ZoomLevel::Level1 => &self.level1,
            ZoomLevel::Level2 => &self.level2,
        }
    }

    /// Returns a cache with `level`'s entry re-decimated over the bounds
    /// recorded for it in `zoom`; other entries are left untouched.
    ///
    /// A level without recorded bounds (never entered by zooming in) falls
    /// back to the full global range.
    #[must_use]
    pub fn rebuilt_for(
        &self,
        level: ZoomLevel,
        samples: &[Sample],
        zoom: ZoomSettings,
        range: GlobalRange,
        point_budget: usize,
    ) -> Self {
        let (from, to) = match zoom.bounds_for(level) {
            Some(bounds) => (bounds.from, bounds.to),
            None => (range.min_time, range.max_time),
        };
        let rebuilt = decimate(samples, from, to, point_budget);
        debug!(
            ?level,
            cached_count = rebuilt.len(),
            point_budget,
            "rebuilt sample cache entry"
        );

        let mut next = self.clone();
        match level {
            ZoomLevel::NoZoom => next.no_zoom = rebuilt,
            ZoomLevel::Level1 => next.level1 = rebuilt,
            ZoomLevel::Level2 => next.level2 = rebuilt,
        }
        next
    }
}
