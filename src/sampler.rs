use core::ops::Deref;

use log::debug;
use tinyvec::TinyVec;

use crate::control_polygon::ControlPolygon;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::point2::{PixelPoint, Rounding};
use crate::NativeFloat;

/// Number of interior samples used when nothing else is configured,
/// i.e. `t` runs over 0.01, 0.02, ..., 0.99.
pub const DEFAULT_STEP_COUNT: usize = 99;

/// Sequences up to this length are stored inline without allocating.
const INLINE_SAMPLES: usize = 16;

/// Ordered pixel positions along a sampled curve.
///
/// Always holds `step_count + 2` points: the curve's start, the interior
/// samples in increasing `t`, and the curve's true endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleSequence {
    points: TinyVec<[PixelPoint; INLINE_SAMPLES]>,
}

impl SampleSequence {
    pub fn as_slice(&self) -> &[PixelPoint] {
        &self.points
    }

    /// Euclidean length of the polyline through all points.
    pub fn length(&self) -> NativeFloat {
        self.points
            .windows(2)
            .map(|pair| pair[0].to_native().distance(pair[1].to_native()))
            .sum()
    }
}

impl Deref for SampleSequence {
    type Target = [PixelPoint];

    fn deref(&self) -> &[PixelPoint] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a SampleSequence {
    type Item = &'a PixelPoint;
    type IntoIter = core::slice::Iter<'a, PixelPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Number of interior parameter steps, must be at least 1.
    pub step_count: usize,
    /// How fractional curve positions are narrowed to pixels.
    pub rounding: Rounding,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            step_count: DEFAULT_STEP_COUNT,
            rounding: Rounding::default(),
        }
    }
}

impl SamplerConfig {
    pub fn with_step_count(mut self, step_count: usize) -> Self {
        self.step_count = step_count;
        self
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }
}

/// Evaluates the quadratic curve of a [`ControlPolygon`] at evenly spaced
/// interior parameters `t = i / (step_count + 1)` for `i` in `1..=step_count`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CurveSampler {
    config: SamplerConfig,
}

impl CurveSampler {
    pub fn new(config: SamplerConfig) -> Self {
        CurveSampler { config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn sample(&self, polygon: &ControlPolygon) -> Result<SampleSequence> {
        let step_count = self.config.step_count;
        if step_count == 0 {
            return Err(Error::InvalidStepCount);
        }

        let curve = polygon.to_curve();
        let mut points = TinyVec::with_capacity(step_count.saturating_add(2));

        // the start is copied instead of evaluated at t=0 so it is exact
        points.push(polygon.start());
        let denominator = (step_count + 1) as NativeFloat;
        for i in 1..=step_count {
            let t = i as NativeFloat / denominator;
            points.push(curve.eval(t).to_pixel(self.config.rounding));
        }
        // the last interior sample need not coincide with the endpoint
        points.push(polygon.end());

        let samples = SampleSequence { points };
        debug!(
            "sampled quadratic curve ({}, {}) -> ({}, {}) into {} points, polyline length {:.1}",
            polygon.start().x,
            polygon.start().y,
            polygon.end().x,
            polygon.end().y,
            samples.len(),
            samples.length()
        );
        Ok(samples)
    }
}

/// Samples `polygon` with `step_count` interior steps and nearest rounding.
pub fn sample(polygon: &ControlPolygon, step_count: usize) -> Result<SampleSequence> {
    CurveSampler::new(SamplerConfig::default().with_step_count(step_count)).sample(polygon)
}

/// Like [`sample`] but takes the control points as a slice `[P0, P1, P2]`,
/// failing with `InvalidControlPolygon` unless it holds exactly three points.
pub fn sample_slice(points: &[PixelPoint], step_count: usize) -> Result<SampleSequence> {
    let polygon = ControlPolygon::try_from(points)?;
    sample(&polygon, step_count)
}
