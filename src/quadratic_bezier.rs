use core::ops::Mul;

use num_traits::{Float, One};

use super::point::Point;

/// Quadratic Bézier curve defined by its start point, a single control point
/// and its end point. Points on the curve are evaluated with an interpolation
/// parameter `t` in the interval [0,1].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl: P,
    pub(crate) end: P,
}

impl<P> QuadraticBezier<P>
where
    P: Point + Mul<<P as Point>::Scalar, Output = P>,
{
    pub fn new(start: P, ctrl: P, end: P) -> Self {
        QuadraticBezier { start, ctrl, end }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn ctrl(&self) -> P {
        self.ctrl
    }

    pub fn end(&self) -> P {
        self.end
    }

    /// Evaluate the curve at `t` using the polynomial (Bernstein) form
    /// `B(t) = (1-t)^2 * start + 2t(1-t) * ctrl + t^2 * end`
    pub fn eval(&self, t: P::Scalar) -> P {
        let one = P::Scalar::one();
        let two = one + one;
        let one_t = one - t;

        self.start * (one_t * one_t) + self.ctrl * (two * one_t * t) + self.end * (t * t)
    }

    /// Evaluate the curve at `t` using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: P::Scalar) -> P {
        // first iteration interpolates start->ctrl (ab) and ctrl->end (bc)
        let ctrl_1ab = self.start + (self.ctrl - self.start) * t;
        let ctrl_1bc = self.ctrl + (self.end - self.ctrl) * t;
        // second iteration, final point on the curve
        ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t
    }

    /// Return the bounding box of the control points as ((xmin, ymin), (xmax, ymax)).
    /// The curve is contained in the convex hull of its control points, so this box
    /// also contains every point of the curve.
    pub fn bounding_box(&self) -> ((P::Scalar, P::Scalar), (P::Scalar, P::Scalar)) {
        let xs = [self.start.x(), self.ctrl.x(), self.end.x()];
        let ys = [self.start.y(), self.ctrl.y(), self.end.y()];
        let min = |v: [P::Scalar; 3]| v[0].min(v[1]).min(v[2]);
        let max = |v: [P::Scalar; 3]| v[0].max(v[1]).max(v[2]);

        ((min(xs), min(ys)), (max(xs), max(ys)))
    }
}
