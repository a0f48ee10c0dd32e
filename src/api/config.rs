use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Bootstrap configuration for the initial chart state.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. It replaces module-level
/// constants: the date range itself always comes from the loaded series, never
/// from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Initially visible window start.
    pub window_from: DateTime<Utc>,
    /// Initially visible window end.
    pub window_to: DateTime<Utc>,
    #[serde(default = "default_minimal_width_minutes")]
    pub minimal_width_minutes: f64,
    #[serde(default = "default_point_budget")]
    pub point_budget: usize,
}

impl ChartConfig {
    /// Creates a config with the default minimal width and point budget.
    #[must_use]
    pub fn new(window_from: DateTime<Utc>, window_to: DateTime<Utc>) -> Self {
        Self {
            window_from,
            window_to,
            minimal_width_minutes: default_minimal_width_minutes(),
            point_budget: default_point_budget(),
        }
    }

    /// Sets the minimal width the selection may be shrunk to, in minutes.
    #[must_use]
    pub fn with_minimal_width_minutes(mut self, minutes: f64) -> Self {
        self.minimal_width_minutes = minutes;
        self
    }

    /// Sets the rendering point budget used by decimation.
    #[must_use]
    pub fn with_point_budget(mut self, point_budget: usize) -> Self {
        self.point_budget = point_budget;
        self
    }

    pub(crate) fn validate(self) -> ChartResult<Self> {
        if self.window_from > self.window_to {
            return Err(ChartError::InvalidConfig(
                "initial window start must be <= end".to_owned(),
            ));
        }
        if !self.minimal_width_minutes.is_finite() || self.minimal_width_minutes <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "minimal window width must be finite and > 0".to_owned(),
            ));
        }
        if self.point_budget < 2 {
            return Err(ChartError::InvalidConfig(
                "point budget must be >= 2".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_minimal_width_minutes() -> f64 {
    24.0 * 60.0
}

fn default_point_budget() -> usize {
    1000
}
