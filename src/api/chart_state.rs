use std::sync::Arc;

use crate::core::{
    GlobalRange, Sample, SampleCache, TimeWindow, ZoomLevel, ZoomSettings, canonicalize_samples,
};
use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

/// The complete, immutable chart core state.
///
/// Every transition in [`super::controller`] produces a new value; nothing is
/// mutated in place, so a renderer holding a previous state never observes a
/// partial update. The raw series is shared read-only across states and cache
/// rebuilds.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    pub(crate) window: TimeWindow,
    pub(crate) zoom: ZoomSettings,
    pub(crate) cache: SampleCache,
    pub(crate) all_samples: Arc<[Sample]>,
    pub(crate) all_samples_range: GlobalRange,
    pub(crate) point_budget: usize,
}

impl ChartState {
    /// Builds the initial state from a raw series and configuration.
    ///
    /// The series is canonicalized (finite values, ascending unique
    /// timestamps, first-seen wins on duplicates), the global range is derived
    /// from it, and the `NoZoom` cache entry is decimated across the full
    /// series. The configured initial window must lie within the derived
    /// range.
    pub fn from_samples(samples: Vec<Sample>, config: &ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let samples = canonicalize_samples(samples);
        let range = GlobalRange::from_samples(&samples)?;

        if !range.contains(config.window_from, config.window_to) {
            return Err(ChartError::InvalidConfig(
                "initial window must lie within the series time range".to_owned(),
            ));
        }

        let window = TimeWindow::new(
            config.window_from,
            config.window_to,
            config.minimal_width_minutes,
        )?;
        let cache = SampleCache::prepare_initial(&samples, range, config.point_budget);

        Ok(Self {
            window,
            zoom: ZoomSettings::default(),
            cache,
            all_samples: samples.into(),
            all_samples_range: range,
            point_budget: config.point_budget,
        })
    }

    /// Currently visible window.
    #[must_use]
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Currently selected zoom level.
    #[must_use]
    pub fn zoom_level(&self) -> ZoomLevel {
        self.zoom.selected
    }

    /// Zoom settings including per-level recorded bounds.
    #[must_use]
    pub fn zoom_settings(&self) -> ZoomSettings {
        self.zoom
    }

    /// Minimal width the selection may be shrunk to, in minutes.
    #[must_use]
    pub fn minimal_width_minutes(&self) -> f64 {
        self.window.minimal_width_minutes
    }

    /// Decimated samples for the currently selected zoom level.
    ///
    /// This is the only series a renderer should draw; an empty slice means
    /// "nothing to draw", not an error.
    #[must_use]
    pub fn visible_samples(&self) -> &[Sample] {
        self.cache.samples_for(self.zoom.selected)
    }

    /// Fixed time bounds of the whole dataset.
    #[must_use]
    pub fn global_range(&self) -> GlobalRange {
        self.all_samples_range
    }

    /// Number of raw samples backing the chart.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.all_samples.len()
    }
}
