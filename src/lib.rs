//! Quadratic Bézier curve rasterization into RGB pixel buffers.
//!
//! The pipeline has two stages:
//! 1. [`CurveSampler`] evaluates a quadratic Bézier curve given by a
//!    [`ControlPolygon`] at `step_count` interior parameter values and returns a
//!    [`SampleSequence`] that always starts at the curve's start point and ends
//!    at its true endpoint.
//! 2. [`PolylineRasterizer`] connects consecutive samples with single pixel wide
//!    Bresenham segments inside a [`PixelBuffer`].
//!
//! ```
//! use quadraster::{draw_polyline, sample, ControlPolygon, PixelBuffer, Point2, Rgb};
//!
//! let mut buffer = PixelBuffer::new(200, 200);
//! let polygon = ControlPolygon::from([
//!     Point2::new(20, 20),
//!     Point2::new(70, 80),
//!     Point2::new(120, 20),
//! ]);
//! let points = sample(&polygon, 99).unwrap();
//! draw_polyline(&mut buffer, &points, Rgb::WHITE).unwrap();
//! assert_eq!(buffer.pixel(Point2::new(70, 50)), Some(Rgb::WHITE));
//! ```
//!
//! Sampling runs in [`NativeFloat`] and sample positions are rounded back to
//! integer pixel coordinates according to [`Rounding`]. Coordinates outside the
//! buffer are handled according to [`OutOfBoundsPolicy`].
//!
//! The camera preview loop in [`preview`] drives the same pipeline over frames
//! coming from a [`CameraSource`] and hands them to a [`DisplaySink`].
#![no_std]

extern crate alloc;

/// The floating point type used for curve evaluation
pub type NativeFloat = f64;

pub mod control_polygon;
pub mod curve;
pub mod error;
pub mod line;
pub mod pixel_buffer;
pub mod point;
pub mod point2;
pub mod preview;
pub mod quadratic_bezier;
pub mod rasterizer;
pub mod sampler;

pub use control_polygon::ControlPolygon;
pub use curve::{draw_quadratic_curve, CurveRenderer};
pub use error::{Error, Result};
pub use line::{draw_segment, LinePixels, LineSegment};
pub use pixel_buffer::{Frame, PixelBuffer, Rgb};
pub use point::Point;
pub use point2::{PixelPoint, Point2, Rounding};
pub use preview::{CameraSource, DisplaySink, Key, Preview, PreviewConfig, PreviewError};
pub use quadratic_bezier::QuadraticBezier;
pub use rasterizer::{
    draw_polyline, draw_polyline_with, OutOfBoundsPolicy, PolylineRasterizer, RasterConfig,
};
pub use sampler::{sample, sample_slice, CurveSampler, SampleSequence, SamplerConfig};
