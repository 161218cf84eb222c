use log::{debug, warn};

use crate::error::Result;
use crate::line::{draw_segment, draw_segment_clipped};
use crate::pixel_buffer::{PixelBuffer, Rgb};
use crate::point2::PixelPoint;

/// What to do with polyline points that fall outside of the pixel buffer.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum OutOfBoundsPolicy {
    /// Fail with `OutOfBoundsCoordinate` for the first point outside of the
    /// buffer. The buffer is left untouched.
    #[default]
    Reject,
    /// Draw every segment as if the buffer were unbounded and skip the pixels
    /// that fall outside of it.
    Clip,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RasterConfig {
    pub color: Rgb,
    pub out_of_bounds: OutOfBoundsPolicy,
}

impl Default for RasterConfig {
    fn default() -> Self {
        RasterConfig {
            color: Rgb::WHITE,
            out_of_bounds: OutOfBoundsPolicy::default(),
        }
    }
}

impl RasterConfig {
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_out_of_bounds(mut self, policy: OutOfBoundsPolicy) -> Self {
        self.out_of_bounds = policy;
        self
    }
}

/// Connects consecutive points with single pixel wide straight segments.
///
/// No segment is added between the last and the first point: a closed outline
/// has to be expressed by the point sequence itself.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PolylineRasterizer {
    config: RasterConfig,
}

impl PolylineRasterizer {
    pub fn new(config: RasterConfig) -> Self {
        PolylineRasterizer { config }
    }

    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    pub fn draw(&self, buffer: &mut PixelBuffer, points: &[PixelPoint]) -> Result<()> {
        let color = self.config.color;
        debug!(
            "drawing polyline of {} points into {}x{} buffer",
            points.len(),
            buffer.width(),
            buffer.height()
        );

        match self.config.out_of_bounds {
            OutOfBoundsPolicy::Reject => {
                // validate up front so a rejected polyline leaves no partial stroke
                if let Some(p) = points.iter().find(|p| !buffer.contains(**p)) {
                    warn!("rejecting polyline, point ({}, {}) is outside of the buffer", p.x, p.y);
                    return Err(buffer.out_of_bounds(*p));
                }
                for pair in points.windows(2) {
                    draw_segment(buffer, pair[0], pair[1], color)?;
                }
            }
            OutOfBoundsPolicy::Clip => {
                if points.iter().any(|p| !buffer.contains(*p)) {
                    warn!("polyline leaves the buffer, clipping");
                }
                for pair in points.windows(2) {
                    draw_segment_clipped(buffer, pair[0], pair[1], color);
                }
            }
        }
        Ok(())
    }
}

/// Draws `points` as a polyline in `color`, rejecting points outside of the buffer.
pub fn draw_polyline(buffer: &mut PixelBuffer, points: &[PixelPoint], color: Rgb) -> Result<()> {
    PolylineRasterizer::new(RasterConfig::default().with_color(color)).draw(buffer, points)
}

/// Draws `points` as a polyline using the color and out-of-bounds policy of `config`.
pub fn draw_polyline_with(
    buffer: &mut PixelBuffer,
    points: &[PixelPoint],
    config: &RasterConfig,
) -> Result<()> {
    PolylineRasterizer::new(*config).draw(buffer, points)
}
