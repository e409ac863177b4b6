/// Transformation matrices and animation state
use nalgebra::{Matrix2, Matrix4, Rotation2, Vector2, Vector3};
use std::f32::consts::TAU;

use crate::geometry::Point2;
use crate::projection::Frustum;

/// Per-frame angle increment of the spinning triangle (radians)
pub const TRIANGLE_SPIN_STEP: f32 = 0.025;

/// Per-frame angle increment of the 3D cube (radians)
pub const CUBE_SPIN_STEP: f32 = 0.05;

/// Rotation angle of an animated shape, in radians
///
/// Always kept inside `[0, 2π)` so it can be advanced for an unbounded number
/// of frames without losing precision.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationState {
    angle: f32,
}

impl AnimationState {
    pub fn new(angle: f32) -> Self {
        Self {
            angle: wrap_angle(angle),
        }
    }

    pub fn zero() -> Self {
        Self { angle: 0.0 }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Return the state one step further on
    pub fn advance(self, step: f32) -> Self {
        let raw = self.angle + step;
        if !(0.0..TAU).contains(&raw) {
            log::trace!("animation angle wrapped at {raw}");
        }
        Self::new(raw)
    }
}

fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Transform builder for 2D and 3D transformations
pub struct Transform;

impl Transform {
    /// Counter-clockwise 2D rotation matrix
    pub fn rotation_2d(angle: f32) -> Matrix2<f32> {
        Rotation2::new(angle).into_inner()
    }

    /// Rotate a screen point about the origin, rounding to the nearest pixel
    pub fn rotate_point(point: Point2, rotation: &Matrix2<f32>) -> Point2 {
        let rotated = rotation * Vector2::new(point.x as f32, point.y as f32);
        Point2::new(rotated.x.round() as i32, rotated.y.round() as i32)
    }

    /// Rotation about the vertical (y) axis
    pub fn rotation_y(angle: f32) -> Matrix4<f32> {
        Matrix4::from_axis_angle(&Vector3::y_axis(), angle)
    }

    /// Create a translation matrix
    pub fn translation_matrix(offset: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_translation(offset)
    }

    /// Rotate in object space, then place with the model matrix
    pub fn model_rotation(model: &Matrix4<f32>, rotation: &Matrix4<f32>) -> Matrix4<f32> {
        model * rotation
    }

    /// Perspective frustum for a camera at the origin looking down +z
    ///
    /// Clip-space `w` equals view-space `z`, so points further away shrink
    /// after the perspective divide.
    ///
    /// This is a left-handed frustum. Compared with the usual right-handed
    /// OpenGL one (camera looking down -z) the image is mirrored in x, so a
    /// positive `rotation_y` turns the cube the other way on screen.
    pub fn frustum(f: &Frustum) -> Matrix4<f32> {
        let (rl, tb, fln) = (f.right - f.left, f.top - f.bottom, f.far - f.near);
        Matrix4::new(
            2.0 * f.near / rl, 0.0, -(f.right + f.left) / rl, 0.0,
            0.0, 2.0 * f.near / tb, -(f.top + f.bottom) / tb, 0.0,
            0.0, 0.0, (f.far + f.near) / fln, -2.0 * f.far * f.near / fln,
            0.0, 0.0, 1.0, 0.0,
        )
    }

    /// Create a model-view-projection matrix
    pub fn mvp_matrix(model: &Matrix4<f32>, projection: &Matrix4<f32>) -> Matrix4<f32> {
        projection * model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector4};

    #[test]
    fn test_animation_state_advances() {
        let state = AnimationState::zero().advance(0.1).advance(0.2);
        assert_relative_eq!(state.angle(), 0.3, epsilon = 1e-6);
    }

    #[test]
    fn test_animation_state_wraps() {
        let mut state = AnimationState::new(TAU - 0.01);
        state = state.advance(CUBE_SPIN_STEP);
        assert_relative_eq!(state.angle(), CUBE_SPIN_STEP - 0.01, epsilon = 1e-5);

        assert_relative_eq!(AnimationState::new(-0.5).angle(), TAU - 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_animation_state_stays_bounded() {
        let mut state = AnimationState::zero();
        for _ in 0..100_000 {
            state = state.advance(TRIANGLE_SPIN_STEP);
            assert!((0.0..TAU).contains(&state.angle()));
        }
    }

    #[test]
    fn test_rotation_2d_quarter_turn() {
        let rotation = Transform::rotation_2d(std::f32::consts::FRAC_PI_2);
        assert_eq!(Transform::rotate_point(Point2::new(100, 0), &rotation), Point2::new(0, 100));
        assert_eq!(Transform::rotate_point(Point2::new(0, 100), &rotation), Point2::new(-100, 0));
    }

    #[test]
    fn test_identity_rotation() {
        let matrix = Transform::rotation_y(0.0);
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_rotation_y_keeps_height() {
        let rotated = Transform::rotation_y(1.0).transform_point(&Point3::new(3.0, 7.0, 2.0));
        assert_relative_eq!(rotated.y, 7.0, epsilon = 1e-5);
        assert_relative_eq!(rotated.coords.xz().norm(), (13.0f32).sqrt(), epsilon = 1e-5);
    }

    #[test]
    fn test_frustum_divides_by_depth() {
        let projection = Transform::frustum(&Frustum::default());
        let clip = projection * Vector4::new(10.0, -5.0, 20.0, 1.0);
        assert_relative_eq!(clip.w, 20.0);
        assert_relative_eq!(clip.x / clip.w, 0.5);
        assert_relative_eq!(clip.y / clip.w, -0.25);

        // Near plane maps to -1, far plane to +1
        let near = projection * Vector4::new(0.0, 0.0, 1.0, 1.0);
        let far = projection * Vector4::new(0.0, 0.0, 100.0, 1.0);
        assert_relative_eq!(near.z / near.w, -1.0, epsilon = 1e-5);
        assert_relative_eq!(far.z / far.w, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_model_rotation_order() {
        let model = Transform::translation_matrix(&Vector3::new(0.0, 0.0, 300.0));
        let m = Transform::model_rotation(&model, &Transform::rotation_y(std::f32::consts::PI));
        let p = m.transform_point(&Point3::new(10.0, 0.0, 0.0));
        assert_relative_eq!(p.x, -10.0, epsilon = 1e-4);
        assert_relative_eq!(p.z, 300.0, epsilon = 1e-4);
    }

    #[test]
    fn test_positive_spin_moves_near_face_left() {
        let model = Transform::model_rotation(
            &Transform::translation_matrix(&Vector3::new(0.0, 0.0, 300.0)),
            &Transform::rotation_y(0.1),
        );
        let mvp = Transform::mvp_matrix(&model, &Transform::frustum(&Frustum::default()));
        let clip = mvp * Vector4::new(0.0, 0.0, -100.0, 1.0);
        assert!(clip.w > 0.0);
        assert!(clip.x / clip.w < 0.0);
    }
}
