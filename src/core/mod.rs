pub mod cache;
pub mod decimate;
pub mod sample;
pub mod window;
pub mod zoom;

pub use cache::SampleCache;
pub use decimate::decimate;
pub use sample::{Sample, canonicalize_samples};
pub use window::{GlobalRange, TimeWindow};
pub use zoom::{WindowBounds, ZoomLevel, ZoomSettings};
