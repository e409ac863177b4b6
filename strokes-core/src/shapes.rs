/// Outline shapes built from [`draw_line`].
///
/// Every shape here is a fixed sequence of line draws; none of them fill.
use nalgebra::{Vector2, Vector3};

use crate::error::{Error, Result};
use crate::geometry::{Color, Point2};
use crate::raster::draw_line;
use crate::surface::Surface;
use crate::transform::{AnimationState, Transform, TRIANGLE_SPIN_STEP};

/// Samples taken along a quadratic curve, excluding `t = 0`
const CURVE_STEPS: u32 = 100;

/// Connect consecutive points with lines.
pub fn draw_polyline<S: Surface + ?Sized>(surface: &mut S, points: &[Point2], color: Color) {
    for pair in points.windows(2) {
        draw_line(surface, pair[0], pair[1], color);
    }
}

/// Draw the triangle `p1 -> p2 -> p3 -> p1`.
pub fn draw_triangle<S: Surface + ?Sized>(
    surface: &mut S,
    p1: Point2,
    p2: Point2,
    p3: Point2,
    color: Color,
) {
    draw_line(surface, p1, p2, color);
    draw_line(surface, p2, p3, color);
    draw_line(surface, p3, p1, color);
}

/// Advance `state` and draw the triangle rotated about the origin by the new
/// angle.
///
/// Calling this once per frame, feeding the returned state back in, spins the
/// triangle continuously.
pub fn draw_rotated_triangle<S: Surface + ?Sized>(
    surface: &mut S,
    p1: Point2,
    p2: Point2,
    p3: Point2,
    color: Color,
    state: AnimationState,
) -> AnimationState {
    let state = state.advance(TRIANGLE_SPIN_STEP);
    let rotation = Transform::rotation_2d(state.angle());

    draw_triangle(
        surface,
        Transform::rotate_point(p1, &rotation),
        Transform::rotate_point(p2, &rotation),
        Transform::rotate_point(p3, &rotation),
        color,
    );
    state
}

/// Draw the outline of an axis-aligned rectangle from `position` to
/// `position + dimensions`.
pub fn draw_rectangle<S: Surface + ?Sized>(
    surface: &mut S,
    dimensions: Vector2<i32>,
    position: Point2,
    color: Color,
) {
    let top_right = Point2::new(position.x + dimensions.x, position.y);
    let bottom_right = position + dimensions;
    let bottom_left = Point2::new(position.x, position.y + dimensions.y);

    draw_line(surface, position, top_right, color);
    draw_line(surface, top_right, bottom_right, color);
    draw_line(surface, bottom_right, bottom_left, color);
    draw_line(surface, bottom_left, position, color);
}

/// Points on a circle at every whole degree from 0 to 360 inclusive.
///
/// The first and last samples coincide, closing the loop.
pub fn circle_points(center: Point2, radius: i32) -> Vec<Point2> {
    let r = radius as f32;
    (0..=360)
        .map(|degrees: i32| {
            let (sin, cos) = (degrees as f32).to_radians().sin_cos();
            Point2::new(
                center.x + (cos * r).round() as i32,
                center.y + (sin * r).round() as i32,
            )
        })
        .collect()
}

/// Draw a circle as a 360-sided polygon.
pub fn draw_circle<S: Surface + ?Sized>(surface: &mut S, center: Point2, radius: i32, color: Color) {
    draw_polyline(surface, &circle_points(center, radius), color);
}

/// Draw a 2.5D box: two rectangles offset by `depth` on both axes, plus
/// the four connecting corner edges.
///
/// `dimensions` is `(width, height, depth)`.
pub fn draw_fake_cube<S: Surface + ?Sized>(
    surface: &mut S,
    dimensions: Vector3<i32>,
    position: Point2,
    color: Color,
) {
    let face = Vector2::new(dimensions.x, dimensions.y);
    let depth = Vector2::new(dimensions.z, dimensions.z);
    let back = position + depth;

    draw_rectangle(surface, face, position, color);
    draw_rectangle(surface, face, back, color);

    let corners = [
        Vector2::new(0, 0),
        Vector2::new(face.x, 0),
        face,
        Vector2::new(0, face.y),
    ];
    for corner in corners {
        draw_line(surface, position + corner, back + corner, color);
    }
}

/// Quadratic Bézier blend of one axis at parameter `t`.
#[inline]
fn quadratic(start: f32, end: f32, control: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * start + 2.0 * t * u * control + t * t * end
}

/// Sample a quadratic Bézier curve at `t = i / 100` for `i` in `0..=100`.
///
/// Both `start` and `end` are always included exactly.
pub fn curve_points(start: Point2, end: Point2, control: Point2) -> Vec<Point2> {
    (0..=CURVE_STEPS)
        .map(|i| {
            let t = i as f32 / CURVE_STEPS as f32;
            Point2::new(
                quadratic(start.x as f32, end.x as f32, control.x as f32, t).round() as i32,
                quadratic(start.y as f32, end.y as f32, control.y as f32, t).round() as i32,
            )
        })
        .collect()
}

/// Draw a quadratic Bézier curve from `start` to `end`, bent towards `control`.
pub fn draw_curve<S: Surface + ?Sized>(
    surface: &mut S,
    start: Point2,
    end: Point2,
    control: Point2,
    color: Color,
) {
    draw_polyline(surface, &curve_points(start, end, control), color);
}

/// Leaf triangles of a Sierpinski subdivision, in depth-first order.
///
/// Generation 1 is the outer triangle itself; every further generation
/// replaces each triangle with its three corner triangles, leaving the
/// middle one empty. Yields `3^(generation - 1)` triangles lazily; the work
/// stack never holds more than `2 * generation - 1` entries.
///
/// # Errors
///
/// Returns [`Error::InvalidGeneration`] for generation 0.
pub fn sierpinski_triangles(
    a: Point2,
    b: Point2,
    c: Point2,
    generation: u32,
) -> Result<SierpinskiTriangles> {
    if generation == 0 {
        return Err(Error::InvalidGeneration { generation });
    }

    let mut pending = Vec::with_capacity(2 * generation as usize);
    pending.push(([a, b, c], generation));
    Ok(SierpinskiTriangles { pending })
}

/// Depth-first walk over the leaves of a Sierpinski subdivision
#[derive(Debug, Clone)]
pub struct SierpinskiTriangles {
    pending: Vec<([Point2; 3], u32)>,
}

impl Iterator for SierpinskiTriangles {
    type Item = [Point2; 3];

    fn next(&mut self) -> Option<[Point2; 3]> {
        while let Some(([x, y, z], depth)) = self.pending.pop() {
            if depth == 1 {
                return Some([x, y, z]);
            }

            let xy = x.midpoint(y);
            let yz = y.midpoint(z);
            let zx = z.midpoint(x);

            // Reverse push so the top corner is processed first
            self.pending.push(([zx, yz, z], depth - 1));
            self.pending.push(([xy, y, yz], depth - 1));
            self.pending.push(([x, xy, zx], depth - 1));
        }
        None
    }
}

/// Draw a Sierpinski triangle of the given generation.
///
/// # Errors
///
/// Returns [`Error::InvalidGeneration`] for generation 0; nothing is drawn.
pub fn draw_sierpinski_triangle<S: Surface + ?Sized>(
    surface: &mut S,
    a: Point2,
    b: Point2,
    c: Point2,
    generation: u32,
    color: Color,
) -> Result<()> {
    let mut drawn = 0u64;
    for [x, y, z] in sierpinski_triangles(a, b, c, generation)? {
        draw_triangle(surface, x, y, z, color);
        drawn += 1;
    }
    log::debug!("sierpinski generation {generation}: {drawn} leaf triangles");
    Ok(())
}
