use crate::control_polygon::ControlPolygon;
use crate::error::Result;
use crate::pixel_buffer::PixelBuffer;
use crate::rasterizer::{PolylineRasterizer, RasterConfig};
use crate::sampler::{CurveSampler, SampleSequence, SamplerConfig};

/// Samples a quadratic curve and rasterizes the resulting polyline in one go.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct CurveRenderer {
    sampler: CurveSampler,
    rasterizer: PolylineRasterizer,
}

impl CurveRenderer {
    pub fn new(sampler: SamplerConfig, raster: RasterConfig) -> Self {
        CurveRenderer {
            sampler: CurveSampler::new(sampler),
            rasterizer: PolylineRasterizer::new(raster),
        }
    }

    pub fn sampler(&self) -> &CurveSampler {
        &self.sampler
    }

    pub fn rasterizer(&self) -> &PolylineRasterizer {
        &self.rasterizer
    }

    /// Draws the curve of `polygon` into `buffer` and returns the samples that were drawn.
    pub fn draw(
        &self,
        buffer: &mut PixelBuffer,
        polygon: &ControlPolygon,
    ) -> Result<SampleSequence> {
        let points = self.sampler.sample(polygon)?;
        self.rasterizer.draw(buffer, &points)?;
        Ok(points)
    }
}

pub fn draw_quadratic_curve(
    buffer: &mut PixelBuffer,
    polygon: &ControlPolygon,
    sampler: &SamplerConfig,
    raster: &RasterConfig,
) -> Result<()> {
    CurveRenderer::new(*sampler, *raster).draw(buffer, polygon)?;
    Ok(())
}
