use thiserror::Error;

/// Errors produced while sampling or rasterizing a curve.
///
/// All of them are local to a single call and are never retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A control polygon needs exactly three points (end, control, start).
    #[error("control polygon must contain exactly 3 points, got {len}")]
    InvalidControlPolygon { len: usize },

    /// At least one interior sample is required.
    #[error("step count must be at least 1")]
    InvalidStepCount,

    /// A point fell outside of the `width` x `height` pixel buffer.
    #[error("coordinate ({x}, {y}) is outside of the {width}x{height} buffer")]
    OutOfBoundsCoordinate {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// Raw pixel data did not match the requested buffer dimensions.
    #[error("expected {expected} pixels, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
