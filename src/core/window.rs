use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Sample;
use crate::error::{ChartError, ChartResult};

/// Fixed time bounds of the entire dataset.
///
/// Derived once from the canonical series at load time and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalRange {
    pub min_time: DateTime<Utc>,
    pub max_time: DateTime<Utc>,
}

impl GlobalRange {
    /// Derives the range from an ascending-sorted, non-empty series.
    pub fn from_samples(samples: &[Sample]) -> ChartResult<Self> {
        let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
            return Err(ChartError::InvalidData(
                "global range cannot be derived from an empty series".to_owned(),
            ));
        };
        Ok(Self {
            min_time: first.time,
            max_time: last.time,
        })
    }

    #[must_use]
    pub fn contains(self, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
        from >= self.min_time && to <= self.max_time
    }
}

/// The currently visible time range plus the minimal width the selection may
/// be shrunk to.
///
/// `minimal_width_minutes` is a target the host UI enforces on its selection
/// slider; the core only guarantees range containment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub minimal_width_minutes: f64,
}

impl TimeWindow {
    pub fn new(
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        minimal_width_minutes: f64,
    ) -> ChartResult<Self> {
        if from > to {
            return Err(ChartError::InvalidData(
                "window start must be <= window end".to_owned(),
            ));
        }
        if !minimal_width_minutes.is_finite() {
            return Err(ChartError::InvalidData(
                "minimal window width must be finite".to_owned(),
            ));
        }
        Ok(Self {
            from,
            to,
            minimal_width_minutes,
        })
    }

    /// Span of the window in minutes.
    #[must_use]
    pub fn span_minutes(self) -> f64 {
        span_minutes(self.from, self.to)
    }
}

/// Minutes between two instants, fractional seconds preserved.
#[must_use]
pub fn span_minutes(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 60_000.0
}
