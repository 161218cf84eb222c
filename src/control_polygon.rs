use crate::error::Error;
use crate::point2::{PixelPoint, Point2};
use crate::quadratic_bezier::QuadraticBezier;
use crate::NativeFloat;

/// The three points defining a quadratic curve, stored in the order
/// `[P0, P1, P2]` where `P2` is the curve's start, `P1` its control point
/// and `P0` its end.
///
/// Collinear or coincident points are allowed and produce a straight or
/// degenerate curve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ControlPolygon {
    points: [PixelPoint; 3],
}

impl ControlPolygon {
    /// Builds the polygon from the curve's start, control and end point.
    pub fn from_endpoints(start: PixelPoint, ctrl: PixelPoint, end: PixelPoint) -> Self {
        ControlPolygon {
            points: [end, ctrl, start],
        }
    }

    /// `[P0, P1, P2]`, i.e. `[end, ctrl, start]`
    pub fn points(&self) -> [PixelPoint; 3] {
        self.points
    }

    pub fn start(&self) -> PixelPoint {
        self.points[2]
    }

    pub fn ctrl(&self) -> PixelPoint {
        self.points[1]
    }

    pub fn end(&self) -> PixelPoint {
        self.points[0]
    }

    /// The curve described by this polygon in floating point coordinates.
    pub fn to_curve(&self) -> QuadraticBezier<Point2<NativeFloat>> {
        QuadraticBezier::new(
            self.start().to_native(),
            self.ctrl().to_native(),
            self.end().to_native(),
        )
    }
}

impl From<[PixelPoint; 3]> for ControlPolygon {
    fn from(points: [PixelPoint; 3]) -> Self {
        ControlPolygon { points }
    }
}

impl TryFrom<&[PixelPoint]> for ControlPolygon {
    type Error = Error;

    fn try_from(points: &[PixelPoint]) -> Result<Self, Self::Error> {
        <[PixelPoint; 3]>::try_from(points)
            .map(ControlPolygon::from)
            .map_err(|_| Error::InvalidControlPolygon { len: points.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_roles() {
        let polygon = ControlPolygon::from([
            Point2::new(20, 20),
            Point2::new(70, 80),
            Point2::new(120, 20),
        ]);
        assert_eq!(polygon.end(), Point2::new(20, 20));
        assert_eq!(polygon.ctrl(), Point2::new(70, 80));
        assert_eq!(polygon.start(), Point2::new(120, 20));
        assert_eq!(
            polygon,
            ControlPolygon::from_endpoints(
                Point2::new(120, 20),
                Point2::new(70, 80),
                Point2::new(20, 20)
            )
        );

        let curve = polygon.to_curve();
        assert_eq!(curve.start(), Point2::new(120.0, 20.0));
        assert_eq!(curve.end(), Point2::new(20.0, 20.0));
    }

    #[test]
    fn requires_exactly_three_points() {
        let points = [Point2::new(0, 0); 4];
        for len in [0, 1, 2, 4] {
            assert_eq!(
                ControlPolygon::try_from(&points[..len]),
                Err(Error::InvalidControlPolygon { len })
            );
        }
        assert!(ControlPolygon::try_from(&points[..3]).is_ok());
    }
}
