use thiserror::Error;

/// Failures producing the chart image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unable to draw the chart: {0}")]
    Rasterization(String),

    #[error("unable to encode the chart as PNG")]
    Encode(#[from] image::ImageError),
}
