use super::{ChartOptions, Point, RenderError, points};
use crate::store::Observation;
use core::fmt::Display;
use core::ops::Range;
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use std::io::Cursor;

const LOG_TARGET: &str = "     chart";

const MARGIN: u32 = 20;
const MARKER_SIZE: u32 = 3;
const LINE_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);

/// Draw the observations as a line chart and return it as PNG bytes.
pub fn render(observations: &[Observation], options: &ChartOptions) -> Result<Vec<u8>, RenderError> {
    let points = points(observations, options.shift_back_one_day);
    let (x_range, y_range) = bounds(&points);

    let pixel_count = options.width as usize * options.height as usize * 3;
    let mut pixels = vec![0_u8; pixel_count];

    {
        let root = BitMapBackend::with_buffer(&mut pixels, (options.width, options.height)).into_drawing_area();
        root.fill(&WHITE).map_err(rasterization)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(MARGIN)
            .build_cartesian_2d(x_range, y_range)
            .map_err(rasterization)?;

        // no label areas are reserved, so the mesh draws grid lines only
        chart.configure_mesh().draw().map_err(rasterization)?;

        let _ = chart
            .draw_series(LineSeries::new(points.iter().map(|p| (p.x, p.y)), LINE_COLOR.stroke_width(2)))
            .map_err(rasterization)?;

        let _ = chart
            .draw_series(points.iter().map(|p| Circle::new((p.x, p.y), MARKER_SIZE, LINE_COLOR.filled())))
            .map_err(rasterization)?;

        root.present().map_err(rasterization)?;
    }

    let image = RgbImage::from_raw(options.width, options.height, pixels)
        .ok_or_else(|| RenderError::Rasterization("pixel buffer does not match the chart size".to_string()))?;

    let mut png = Cursor::new(Vec::new());
    image.write_to(&mut png, ImageFormat::Png)?;

    log::debug!(target: LOG_TARGET, "Rendered {} point(s) into {} bytes of PNG", points.len(), png.get_ref().len());
    Ok(png.into_inner())
}

fn rasterization(e: impl Display) -> RenderError {
    RenderError::Rasterization(e.to_string())
}

/// Axis ranges covering all points, widened so that neither range is empty.
fn bounds(points: &[Point]) -> (Range<i64>, Range<f64>) {
    let x_min = points.iter().map(|p| p.x).min().unwrap_or(0);
    let x_max = points.iter().map(|p| p.x).max().unwrap_or(0);
    let y_min = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    let x_range = if x_max > x_min { x_min..x_max } else { x_min..x_min + 1 };

    let y_range = if y_min.is_finite() && y_max.is_finite() {
        let pad = if y_max > y_min { (y_max - y_min) * 0.05 } else { 1.0 };
        (y_min - pad)..(y_max + pad)
    } else {
        0.0..1.0
    };

    (x_range, y_range)
}
