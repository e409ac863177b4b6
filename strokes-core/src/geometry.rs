/// Geometry primitives for 2D rasterization and 3D wireframes
use nalgebra::{Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use crate::raster::LinePixels;

/// Screen-space pixel coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Integer midpoint, truncating toward zero
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }
}

impl Add<Vector2<i32>> for Point2 {
    type Output = Self;

    fn add(self, offset: Vector2<i32>) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

impl Sub<Vector2<i32>> for Point2 {
    type Output = Self;

    fn sub(self, offset: Vector2<i32>) -> Self {
        Self::new(self.x - offset.x, self.y - offset.y)
    }
}

impl Sub for Point2 {
    type Output = Vector2<i32>;

    fn sub(self, other: Self) -> Vector2<i32> {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(i32, i32)> for Point2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const CYAN: Self = Self::rgb(0, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A line between two screen-space points
///
/// Drawing is directionless: `start -> end` and `end -> start` cover the
/// same pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
}

impl LineSegment {
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Pixels covered by this segment, in drawing order
    pub fn pixels(&self) -> LinePixels {
        LinePixels::new(self.start, self.end)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
}

/// Object-space vertices joined by an explicit edge list
#[derive(Debug, Clone)]
pub struct Wireframe {
    pub vertices: Vec<Point3<f32>>,
    pub edges: Vec<(usize, usize)>,
}

impl Wireframe {
    pub fn new(vertices: Vec<Point3<f32>>, edges: Vec<(usize, usize)>) -> Self {
        Self { vertices, edges }
    }

    /// Rectangular prism anchored at the local origin
    ///
    /// Vertex `i` has bit 0 set for `+width`, bit 1 for `+depth` and bit 2
    /// for `+height`, so indices 0, 1, 4, 5 form the `z = 0` face.
    pub fn cuboid(dimensions: Vector3<i32>) -> Self {
        let d = dimensions.cast::<f32>();
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(d.x, 0.0, 0.0),
            Point3::new(0.0, 0.0, d.z),
            Point3::new(d.x, 0.0, d.z),
            Point3::new(0.0, d.y, 0.0),
            Point3::new(d.x, d.y, 0.0),
            Point3::new(0.0, d.y, d.z),
            Point3::new(d.x, d.y, d.z),
        ];

        Self::new(vertices, CUBOID_EDGES.to_vec())
    }
}

/// The 12 edges of a prism built by [`Wireframe::cuboid`]
pub const CUBOID_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 3),
    (2, 3),
    (4, 0),
    (2, 0),
    (2, 6),
    (4, 6),
    (6, 7),
    (5, 7),
    (3, 7),
    (4, 5),
    (1, 5),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_point_offset_arithmetic() {
        let p = Point2::new(50, 50) + Vector2::new(700, 500);
        assert_eq!(p, Point2::new(750, 550));
        assert_eq!(p - Point2::new(50, 50), Vector2::new(700, 500));
        assert_eq!(p - Vector2::new(50, 50), Point2::new(700, 500));
    }

    #[test]
    fn test_midpoint_truncates() {
        assert_eq!(Point2::new(0, 0).midpoint(Point2::new(5, 3)), Point2::new(2, 1));
        assert_eq!(Point2::new(-5, 0).midpoint(Point2::new(0, 0)), Point2::new(-2, 0));
    }

    #[test]
    fn test_cuboid_edges_are_prism_edges() {
        let cube = Wireframe::cuboid(Vector3::new(2, 3, 4));
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.edges.len(), 12);

        let unique: HashSet<(usize, usize)> =
            cube.edges.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect();
        assert_eq!(unique.len(), 12);

        // Every edge is axis-aligned: its endpoints differ in exactly one coordinate
        for &(a, b) in &cube.edges {
            let delta = cube.vertices[a] - cube.vertices[b];
            let changed = [delta.x, delta.y, delta.z].iter().filter(|c| **c != 0.0).count();
            assert_eq!(changed, 1, "edge ({a}, {b}) is a diagonal");
        }

        // Each corner of a prism touches three edges
        for v in 0..8 {
            let degree = cube.edges.iter().filter(|&&(a, b)| a == v || b == v).count();
            assert_eq!(degree, 3);
        }
    }
}
