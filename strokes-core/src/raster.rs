/// Line rasterization.
///
/// Implements the slope-intercept stepping variant of Bresenham's algorithm:
/// one pixel per integer step along the dominant axis, followed by the exact
/// endpoint.
use crate::geometry::{Color, Point2};
use crate::surface::Surface;

/// Draw a line from `start` to `end`, inclusive of both endpoints.
///
/// Produces an 8-connected, gap-free approximation of the segment. A
/// zero-length segment writes its single pixel exactly once.
pub fn draw_line<S: Surface + ?Sized>(surface: &mut S, start: Point2, end: Point2, color: Color) {
    for point in LinePixels::new(start, end) {
        surface.draw_pixel(point, color);
    }
}

/// Iterator over the pixels of a line, in drawing order.
///
/// Stepping runs in `i64` so endpoints anywhere in the `i32` range work.
#[derive(Debug, Clone)]
pub struct LinePixels {
    start: Point2,
    end: Point2,
    /// Iterating along y (line is at least as tall as it is wide)
    steep: bool,
    cursor: i64,
    step: i64,
    finished: bool,
}

impl LinePixels {
    pub fn new(start: Point2, end: Point2) -> Self {
        let dx = i64::from(end.x) - i64::from(start.x);
        let dy = i64::from(end.y) - i64::from(start.y);
        let steep = dx.abs() <= dy.abs();
        let (cursor, delta) = if steep { (start.y, dy) } else { (start.x, dx) };

        Self {
            start,
            end,
            steep,
            cursor: i64::from(cursor),
            step: if delta < 0 { -1 } else { 1 },
            finished: false,
        }
    }

    fn target(&self) -> i64 {
        i64::from(if self.steep { self.end.y } else { self.end.x })
    }

    /// Pixels left to emit, including the endpoint
    fn remaining(&self) -> u64 {
        if self.finished {
            0
        } else {
            (self.target() - self.cursor).unsigned_abs() + 1
        }
    }

    fn point_at(&self, t: i64) -> Point2 {
        let (s, e) = (self.start, self.end);
        // The cursor only ever lies between the two endpoints
        let major = t as i32;
        if self.steep {
            Point2::new(interpolate(t, s.y, e.y, s.x, e.x), major)
        } else {
            Point2::new(major, interpolate(t, s.x, e.x, s.y, e.y))
        }
    }
}

impl Iterator for LinePixels {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        if self.finished {
            return None;
        }

        if self.cursor == self.target() {
            self.finished = true;
            return Some(self.end);
        }

        let point = self.point_at(self.cursor);
        self.cursor += self.step;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for LinePixels {}

/// Value of the dependent axis at `t`, rounded to nearest with ties toward +inf.
///
/// Evaluates `u0 + (u1 - u0) * (t - t0) / (t1 - t0)` as an exact rational, so
/// the result is the same whichever endpoint the line was started from. The
/// product of two full-range `i32` spans needs more than 64 bits.
/// Requires `t0 != t1`.
#[inline]
fn interpolate(t: i64, t0: i32, t1: i32, u0: i32, u1: i32) -> i32 {
    let mut den = i128::from(t1) - i128::from(t0);
    let mut num = i128::from(u0) * den + (i128::from(u1) - i128::from(u0)) * (i128::from(t) - i128::from(t0));
    if den < 0 {
        num = -num;
        den = -den;
    }
    (2 * num + den).div_euclid(2 * den) as i32
}
