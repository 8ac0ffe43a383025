//! Variation check and chart rendering
//!
//! A chart is only worth drawing when the series moves: [`has_variation`] gates the call
//! to [`render`], which turns the observations into a PNG line chart.

mod chart_options;
mod render;
mod render_error;
mod series;

pub use chart_options::{ChartOptions, MAX_DIMENSION};
pub use render::render;
pub use render_error::RenderError;
pub use series::{Point, has_variation, points};
