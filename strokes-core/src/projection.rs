/// Perspective projection and viewport mapping for wireframes
use nalgebra::{Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::geometry::{Color, Point2, Wireframe};
use crate::raster::draw_line;
use crate::surface::Surface;
use crate::transform::{AnimationState, Transform, CUBE_SPIN_STEP};

/// Perspective frustum bounds, in view space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Frustum {
    fn default() -> Self {
        Self {
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

/// Screen rectangle normalized device coordinates map onto
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
        }
    }

    /// Map NDC to screen space, with y growing downwards
    pub fn to_screen(&self, ndc_x: f32, ndc_y: f32) -> (f32, f32) {
        (
            self.x + (ndc_x + 1.0) * 0.5 * self.width,
            self.y + (1.0 - ndc_y) * 0.5 * self.height,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Projects and draws a rotating cuboid wireframe
#[derive(Debug, Clone, Copy, Default)]
pub struct CubeProjector {
    pub frustum: Frustum,
    pub viewport: Viewport,
}

impl CubeProjector {
    pub fn new(frustum: Frustum, viewport: Viewport) -> Self {
        Self { frustum, viewport }
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Transform::frustum(&self.frustum)
    }

    /// Project an object-space point to screen space
    ///
    /// Returns `None` for points on or behind the camera plane, where the
    /// perspective divide is undefined or mirrors the point. No other
    /// clipping is done.
    pub fn project_point(&self, point: &Point3<f32>, mvp: &Matrix4<f32>) -> Option<(f32, f32)> {
        let clip = mvp * point.to_homogeneous();

        if clip.w < 1e-6 {
            return None;
        }

        Some(self.viewport.to_screen(clip.x / clip.w, clip.y / clip.w))
    }

    /// Screen positions of the 8 cuboid corners at the given rotation angle
    ///
    /// Indices follow [`Wireframe::cuboid`].
    pub fn project_cube(
        &self,
        dimensions: Vector3<i32>,
        position: Vector3<i32>,
        angle: f32,
    ) -> Vec<Option<Point2>> {
        let cube = Wireframe::cuboid(dimensions);
        self.project_wireframe(&cube, position, angle)
    }

    /// Screen positions of every wireframe vertex, rotated about the local
    /// y axis and then translated to `position`
    pub fn project_wireframe(
        &self,
        wireframe: &Wireframe,
        position: Vector3<i32>,
        angle: f32,
    ) -> Vec<Option<Point2>> {
        let model = Transform::translation_matrix(&position.cast::<f32>());
        let model = Transform::model_rotation(&model, &Transform::rotation_y(angle));
        let mvp = Transform::mvp_matrix(&model, &self.projection_matrix());

        wireframe
            .vertices
            .iter()
            .enumerate()
            .map(|(i, vertex)| {
                let projected = self.project_point(vertex, &mvp);
                if projected.is_none() {
                    log::debug!("vertex {i} at {vertex:?} is not in front of the camera, skipping");
                }
                projected.map(|(x, y)| Point2::new(x.round() as i32, y.round() as i32))
            })
            .collect()
    }

    /// Draw every edge whose endpoints both projected
    pub fn draw_wireframe<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        wireframe: &Wireframe,
        position: Vector3<i32>,
        angle: f32,
        color: Color,
    ) {
        let screen = self.project_wireframe(wireframe, position, angle);
        for &(a, b) in &wireframe.edges {
            if let (Some(Some(start)), Some(Some(end))) = (screen.get(a), screen.get(b)) {
                draw_line(surface, *start, *end, color);
            }
        }
    }

    /// Advance the spin and draw the cube for this frame
    ///
    /// Projection is recomputed on every call from the new angle.
    pub fn render_cube<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        dimensions: Vector3<i32>,
        position: Vector3<i32>,
        color: Color,
        state: AnimationState,
    ) -> AnimationState {
        let state = state.advance(CUBE_SPIN_STEP);
        let cube = Wireframe::cuboid(dimensions);
        self.draw_wireframe(surface, &cube, position, state.angle(), color);
        state
    }
}
