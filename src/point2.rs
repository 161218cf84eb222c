use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use super::point::Point;
use super::NativeFloat;

/// Two dimensional point, used both for integer pixel coordinates
/// ([`PixelPoint`]) and for curve evaluation in [`NativeFloat`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point2<T> {
    pub(crate) x: T,
    pub(crate) y: T,
}

/// Integer pixel coordinate. Wider than any buffer index so that points left
/// of or above the buffer stay representable until they are bounds checked.
pub type PixelPoint = Point2<i32>;

impl<T: Copy> Point2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<Point2<T>> for (T, T) {
    fn from(p: Point2<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T, U> Mul<U> for Point2<T>
where
    // Scaling multiplies each coordinate T * U => T
    T: Mul<U, Output = T>,
    U: Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: U) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> Point for Point2<T>
where
    T: Float + Default,
{
    type Scalar = T;

    fn x(&self) -> Self::Scalar {
        self.x
    }

    fn y(&self) -> Self::Scalar {
        self.y
    }
}

/// Rule used to narrow a fractional sample position to an integer pixel.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Rounding {
    /// Round to the nearest integer, halfway cases away from zero.
    #[default]
    Nearest,
    /// Round towards negative infinity.
    Floor,
    /// Drop the fractional part (round towards zero).
    Truncate,
}

impl Rounding {
    pub fn apply<F: Float>(self, value: F) -> F {
        match self {
            Rounding::Nearest => value.round(),
            Rounding::Floor => value.floor(),
            Rounding::Truncate => value.trunc(),
        }
    }
}

impl PixelPoint {
    /// Widens the pixel coordinate into the float space used for curve evaluation.
    pub fn to_native(self) -> Point2<NativeFloat> {
        Point2 {
            x: NativeFloat::from(self.x),
            y: NativeFloat::from(self.y),
        }
    }
}

impl Point2<NativeFloat> {
    /// Narrows an evaluated curve position to a pixel coordinate.
    /// Values beyond the `i32` range saturate.
    pub fn to_pixel(self, rounding: Rounding) -> PixelPoint {
        Point2 {
            x: rounding.apply(self.x) as i32,
            y: rounding.apply(self.y) as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_pythagorean_triple() {
        let a = Point2::new(0.0f64, 1.0);
        let b = Point2::new(3.0f64, 5.0);
        assert_relative_eq!(Point::distance(&a, b), 5.0);
    }

    #[test]
    fn arithmetic() {
        let a = Point2::new(1.5f64, -2.0);
        let b = Point2::new(0.5f64, 4.0);
        assert_eq!(a + b, Point2::new(2.0, 2.0));
        assert_eq!(a - b, Point2::new(1.0, -6.0));
        assert_eq!(a * 2.0, Point2::new(3.0, -4.0));
    }

    #[test]
    fn rounding_modes_differ_on_halves_and_negatives() {
        assert_eq!(Rounding::Nearest.apply(2.5f64), 3.0);
        assert_eq!(Rounding::Floor.apply(2.5f64), 2.0);
        assert_eq!(Rounding::Truncate.apply(2.5f64), 2.0);

        assert_eq!(Rounding::Nearest.apply(-1.5f64), -2.0);
        assert_eq!(Rounding::Floor.apply(-1.5f64), -2.0);
        assert_eq!(Rounding::Truncate.apply(-1.5f64), -1.0);
    }

    #[test]
    fn pixel_round_trip() {
        let p: PixelPoint = (300, -7).into();
        assert_eq!(p.to_native(), Point2::new(300.0, -7.0));
        assert_eq!(p.to_native().to_pixel(Rounding::Nearest), p);
        assert_eq!(
            Point2::new(69.6f64, 49.4).to_pixel(Rounding::Nearest),
            Point2::new(70, 49)
        );
        assert_eq!(
            Point2::new(69.6f64, 49.4).to_pixel(Rounding::Floor),
            Point2::new(69, 49)
        );
    }

    #[test]
    fn pixel_conversion_saturates() {
        let far = Point2::new(1e12f64, -1e12);
        assert_eq!(far.to_pixel(Rounding::Nearest), Point2::new(i32::MAX, i32::MIN));
    }
}
