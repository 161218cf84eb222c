use core::ops::{Add, Sub};

use num_traits::Float;

/// Trait defined over generic 2D points P whose coordinates are of type `Scalar`.
/// Many libraries already provide Point-types and the mathematical operations
/// needed for evaluating curves, so that implementing it requires mostly wrapping.
/// Scaling by a scalar (`Mul<Self::Scalar>`) is required separately where a curve needs it.
pub trait Point: Add<Output = Self> + Sub<Output = Self> + Copy + PartialEq + Default {
    type Scalar: Float;

    fn x(&self) -> Self::Scalar;

    fn y(&self) -> Self::Scalar;

    /// Returns the euclidean distance between the two Points self and other
    fn distance(&self, other: Self) -> Self::Scalar {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        (dx * dx + dy * dy).sqrt()
    }
}
