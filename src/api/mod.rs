pub mod actions;
pub mod chart_state;
pub mod config;
pub mod controller;

pub use actions::ChartAction;
pub use chart_state::ChartState;
pub use config::ChartConfig;
pub use controller::{apply, set_minimal_width_minutes, set_window, set_zoom_level};
