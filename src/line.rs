use core::iter::Take;

use log::trace;

use crate::error::Result;
use crate::pixel_buffer::{PixelBuffer, Rgb};
use crate::point2::{PixelPoint, Point2};

/// Straight segment between two integer pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineSegment {
    pub(crate) start: PixelPoint,
    pub(crate) end: PixelPoint,
}

impl LineSegment {
    pub fn new(start: PixelPoint, end: PixelPoint) -> Self {
        LineSegment { start, end }
    }

    pub fn start(&self) -> PixelPoint {
        self.start
    }

    pub fn end(&self) -> PixelPoint {
        self.end
    }

    /// The 8-connected pixels covered by the segment, from start to end inclusive.
    pub fn pixels(&self) -> LinePixels {
        LinePixels::new(self.start, self.end)
    }

    /// The pixels of [`pixels`](Self::pixels) that fall inside of a
    /// `width` x `height` buffer, found without walking the ones outside.
    pub fn visible_pixels(&self, width: usize, height: usize) -> Take<LinePixels> {
        let pixels = self.pixels();
        match pixels.visible_steps(width, height) {
            Some((first, last)) => {
                // the visible run is at most max(width, height) pixels long
                let count = usize::try_from(last - first + 1).unwrap_or(usize::MAX);
                LinePixels::starting_at(self.start, self.end, first).take(count)
            }
            None => pixels.take(0),
        }
    }
}

/// Iterator over the pixels of a segment using Bresenham's algorithm.
/// State is kept in `i64` so that segments spanning the whole `i32` range
/// cannot overflow the error term.
#[derive(Clone, Debug)]
pub struct LinePixels {
    x: i64,
    y: i64,
    end_x: i64,
    end_y: i64,
    dx: i64,
    // stored negated
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl LinePixels {
    fn new(start: PixelPoint, end: PixelPoint) -> Self {
        let (x0, y0) = (i64::from(start.x), i64::from(start.y));
        let (x1, y1) = (i64::from(end.x), i64::from(end.y));
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        LinePixels {
            x: x0,
            y: y0,
            end_x: x1,
            end_y: y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }

    /// Creates the iterator as it would be after `k` steps from `start`
    /// without visiting the pixels in between.
    fn starting_at(start: PixelPoint, end: PixelPoint, k: i64) -> Self {
        let mut pixels = LinePixels::new(start, end);
        if k > 0 {
            let (n, m) = pixels.offsets_at(k);
            pixels.x += pixels.sx * n;
            pixels.y += pixels.sy * m;
            // err = dx + dy + n * dy + m * dx, stays within the dx/dy magnitudes
            let err = i128::from(pixels.dx + pixels.dy)
                + i128::from(n) * i128::from(pixels.dy)
                + i128::from(m) * i128::from(pixels.dx);
            pixels.err = err as i64;
        }
        pixels
    }

    /// Number of steps from the start to the end pixel.
    fn length(&self) -> i64 {
        self.dx.max(-self.dy)
    }

    /// Steps taken along x and along y after `k` iterations from the start.
    ///
    /// The major axis advances every iteration, the minor axis after
    /// `floor((2 * minor * k + major) / (2 * major))` iterations.
    fn offsets_at(&self, k: i64) -> (i64, i64) {
        let (dx, dy, k) = (i128::from(self.dx), i128::from(-self.dy), i128::from(k));
        if dx >= dy {
            if dx == 0 {
                return (0, 0);
            }
            (k as i64, ((2 * dy * k + dx) / (2 * dx)) as i64)
        } else {
            (((2 * dx * k + dy) / (2 * dy)) as i64, k as i64)
        }
    }

    /// Inclusive range of steps whose pixels lie in `[0, width) x [0, height)`.
    /// Both coordinates move monotonically, so the visible pixels are contiguous.
    fn visible_steps(&self, width: usize, height: usize) -> Option<(i64, i64)> {
        if width == 0 || height == 0 {
            return None;
        }
        let x_max = i64::try_from(width).unwrap_or(i64::MAX) - 1;
        let y_max = i64::try_from(height).unwrap_or(i64::MAX) - 1;
        let (n_lo, n_hi) = offset_range(self.x, self.sx, x_max);
        let (m_lo, m_hi) = offset_range(self.y, self.sy, y_max);

        let length = self.length();
        let first = partition_point(0, length, |k| {
            let (n, m) = self.offsets_at(k);
            n >= n_lo && m >= m_lo
        });
        let last = partition_point(0, length, |k| {
            let (n, m) = self.offsets_at(k);
            n > n_hi || m > m_hi
        }) - 1;

        (first <= last).then_some((first, last))
    }

    fn remaining(&self) -> usize {
        if self.done {
            return 0;
        }
        let steps = (self.end_x - self.x).abs().max((self.end_y - self.y).abs());
        usize::try_from(steps).map_or(usize::MAX, |s| s.saturating_add(1))
    }
}

impl Iterator for LinePixels {
    type Item = PixelPoint;

    fn next(&mut self) -> Option<PixelPoint> {
        if self.done {
            return None;
        }
        // x and y always lie between the i32 endpoints
        let current = Point2::new(self.x as i32, self.y as i32);
        if self.x == self.end_x && self.y == self.end_y {
            self.done = true;
        } else {
            let e2 = 2 * self.err;
            if e2 >= self.dy {
                self.err += self.dy;
                self.x += self.sx;
            }
            if e2 <= self.dx {
                self.err += self.dx;
                self.y += self.sy;
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePixels {}

impl core::iter::FusedIterator for LinePixels {}

/// Offsets along an axis that keep `start + step * offset` within `[0, max]`.
fn offset_range(start: i64, step: i64, max: i64) -> (i64, i64) {
    if step > 0 {
        (-start, max - start)
    } else {
        (start - max, start)
    }
}

/// Smallest `k` in `[lo, hi]` for which `pred` holds, `hi + 1` if there is none.
/// `pred` must be false up to some `k` and true from there on.
fn partition_point(lo: i64, hi: i64, pred: impl Fn(i64) -> bool) -> i64 {
    let (mut lo, mut hi) = (lo, hi + 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Draws a single pixel wide segment from `a` to `b` (both inclusive),
/// overwriting the covered pixels with `color`.
///
/// Both endpoints must lie inside of the buffer, otherwise an
/// `OutOfBoundsCoordinate` error is returned and nothing is written.
/// Every pixel of the segment is then inside as well since the segment
/// never leaves the bounding box of its endpoints.
pub fn draw_segment(
    buffer: &mut PixelBuffer,
    a: PixelPoint,
    b: PixelPoint,
    color: Rgb,
) -> Result<()> {
    for p in [a, b] {
        if !buffer.contains(p) {
            return Err(buffer.out_of_bounds(p));
        }
    }
    trace!("segment ({}, {}) -> ({}, {})", a.x, a.y, b.x, b.y);
    for p in LineSegment::new(a, b).pixels() {
        buffer.set_if_inside(p, color);
    }
    Ok(())
}

/// Draws the part of the segment from `a` to `b` that lies inside of the buffer.
/// The visible pixels are identical to drawing it on an unbounded canvas, but
/// only they are visited. Returns the number of pixels written.
pub(crate) fn draw_segment_clipped(
    buffer: &mut PixelBuffer,
    a: PixelPoint,
    b: PixelPoint,
    color: Rgb,
) -> usize {
    LineSegment::new(a, b)
        .visible_pixels(buffer.width(), buffer.height())
        .filter(|p| buffer.set_if_inside(*p, color))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use alloc::vec::Vec;

    fn collect(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
        LineSegment::new(a.into(), b.into())
            .pixels()
            .map(Into::into)
            .collect()
    }

    #[test]
    fn diagonal() {
        assert_eq!(
            collect((0, 0), (4, 4)),
            [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]
        );
    }

    #[test]
    fn single_point() {
        assert_eq!(collect((3, 7), (3, 7)), [(3, 7)]);
    }

    #[test]
    fn horizontal_and_vertical_in_both_directions() {
        assert_eq!(collect((0, 2), (3, 2)), [(0, 2), (1, 2), (2, 2), (3, 2)]);
        assert_eq!(collect((3, 2), (0, 2)), [(3, 2), (2, 2), (1, 2), (0, 2)]);
        assert_eq!(collect((1, 3), (1, 0)), [(1, 3), (1, 2), (1, 1), (1, 0)]);
    }

    #[test]
    fn shallow_slope_is_8_connected_and_inclusive() {
        let pixels = collect((0, 0), (7, 3));
        assert_eq!(pixels.first(), Some(&(0, 0)));
        assert_eq!(pixels.last(), Some(&(7, 3)));
        // one pixel per column on a shallow line
        assert_eq!(pixels.len(), 8);
        for w in pixels.windows(2) {
            let (dx, dy) = (w[1].0 - w[0].0, w[1].1 - w[0].1);
            assert!(dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0));
        }
    }

    #[test]
    fn exact_size() {
        let segment = LineSegment::new(Point2::new(-2, 5), Point2::new(4, -4));
        let pixels = segment.pixels();
        assert_eq!(pixels.len(), 10);
        assert_eq!(pixels.count(), 10);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let segment = LineSegment::new(Point2::new(i32::MIN, 0), Point2::new(i32::MAX, 0));
        let mut pixels = segment.pixels();
        assert_eq!(pixels.next(), Some(Point2::new(i32::MIN, 0)));
        assert_eq!(pixels.next(), Some(Point2::new(i32::MIN + 1, 0)));
    }

    #[test]
    fn draw_segment_rejects_outside_endpoints() {
        let mut buffer = PixelBuffer::new(5, 5);
        assert_eq!(
            draw_segment(&mut buffer, Point2::new(0, 0), Point2::new(5, 5), Rgb::WHITE),
            Err(Error::OutOfBoundsCoordinate {
                x: 5,
                y: 5,
                width: 5,
                height: 5
            })
        );
        assert!(buffer.pixels().iter().all(|p| *p == Rgb::BLACK));
    }

    #[test]
    fn clipped_segment_skips_outside_pixels() {
        let mut buffer = PixelBuffer::new(3, 3);
        let written =
            draw_segment_clipped(&mut buffer, Point2::new(-2, -2), Point2::new(5, 5), Rgb::RED);
        assert_eq!(written, 3);
        for i in 0..3 {
            assert_eq!(buffer.get(i, i), Some(Rgb::RED));
        }
    }

    #[test]
    fn skipping_ahead_matches_walking() {
        let ends = [(0, 0), (7, 3), (-5, 11), (13, -2), (3, -9), (-8, -8), (0, 6), (9, 0)];
        for &a in &ends {
            for &b in &ends {
                let walked = collect(a, b);
                for (k, pixel) in walked.iter().enumerate() {
                    let skipped = LinePixels::starting_at(a.into(), b.into(), k as i64);
                    assert_eq!(skipped.map(Into::into).collect::<Vec<(i32, i32)>>(), walked[k..]);
                    assert_eq!(
                        LinePixels::starting_at(a.into(), b.into(), k as i64).next(),
                        Some(Point2::from(*pixel))
                    );
                }
            }
        }
    }

    #[test]
    fn visible_pixels_equal_filtered_walk() {
        let (width, height) = (7usize, 5usize);
        let inside = |p: &PixelPoint| {
            (0..width as i32).contains(&p.x) && (0..height as i32).contains(&p.y)
        };
        for x0 in -3..=9 {
            for y0 in -3..=9 {
                for x1 in -3..=9 {
                    for y1 in -3..=9 {
                        let segment = LineSegment::new(Point2::new(x0, y0), Point2::new(x1, y1));
                        let expected: Vec<_> = segment.pixels().filter(inside).collect();
                        let visible: Vec<_> = segment.visible_pixels(width, height).collect();
                        assert_eq!(visible, expected, "({x0}, {y0}) -> ({x1}, {y1})");
                    }
                }
            }
        }
    }

    #[test]
    fn empty_buffer_has_no_visible_pixels() {
        let segment = LineSegment::new(Point2::new(0, 0), Point2::new(3, 3));
        assert_eq!(segment.visible_pixels(0, 4).count(), 0);
        assert_eq!(segment.visible_pixels(4, 0).count(), 0);
    }

    #[test]
    fn clipping_far_endpoint_only_visits_visible_pixels() {
        let mut buffer = PixelBuffer::new(200, 200);
        let far = Point2::new(i32::MAX, 25);
        let segment = LineSegment::new(Point2::new(20, 20), far);

        let mut visible = segment.visible_pixels(200, 200);
        assert_eq!(visible.len(), 180);
        assert!(visible.all(|p| p.y() == 20));

        let written = draw_segment_clipped(&mut buffer, Point2::new(20, 20), far, Rgb::RED);
        assert_eq!(written, 180);
        let written = draw_segment_clipped(&mut buffer, far, Point2::new(i32::MIN, -7), Rgb::RED);
        assert!(written <= 200);
    }
}
