//! zoomchart: windowing and zoom state machine for large time-series charts.
//!
//! This crate owns the non-visual core of a pannable, zoomable linear chart:
//! the visible time window, the three-level zoom state machine, and the
//! per-level decimated sample cache that keeps render cost bounded no matter
//! how large the underlying series is. Rendering, widgets, and event plumbing
//! live in host applications that consume the immutable [`ChartState`] value
//! through [`apply`].

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartAction, ChartConfig, ChartState, apply};
pub use error::{ChartError, ChartResult};
