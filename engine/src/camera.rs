//! 3D camera record and the tags that go with it.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Angular speed of the orbital camera mode, in radians per second.
pub const ORBITAL_SPEED: f32 = 0.5;

/// Projection tag. Discriminants match raylib's `CameraProjection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    #[default]
    Perspective = 0,
    Orthographic = 1,
}

impl Projection {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Movement mode for the camera update helper. Discriminants match raylib's
/// `CameraMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    Custom = 0,
    Free = 1,
    Orbital = 2,
    FirstPerson = 3,
    ThirdPerson = 4,
}

impl CameraMode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera3D {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees (perspective) or near-plane width
    /// (orthographic).
    pub fovy: f32,
    #[serde(default)]
    pub projection: Projection,
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::perspective(Vec3::splat(5.0), Vec3::ZERO, 45.0)
    }
}

impl Camera3D {
    /// Y-up perspective camera.
    pub fn perspective(position: Vec3, target: Vec3, fovy: f32) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fovy,
            projection: Projection::Perspective,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.target.is_finite()
            && self.up.is_finite()
            && self.fovy.is_finite()
    }

    /// Rotate the position about the target around the up axis.
    ///
    /// Distance to the target is preserved. A degenerate up vector leaves
    /// the camera untouched.
    pub fn orbit(&mut self, angle: f32) {
        let axis = self.up.normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }
        let view = self.position - self.target;
        self.position = self.target + Quat::from_axis_angle(axis, angle) * view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_keeps_distance_and_height() {
        let mut cam = Camera3D::default();
        let before = cam.position.distance(cam.target);
        for _ in 0..100 {
            cam.orbit(ORBITAL_SPEED / 60.0);
        }
        assert!((cam.position.distance(cam.target) - before).abs() < 1e-4);
        assert!((cam.position.y - 5.0).abs() < 1e-4);
        assert_eq!(cam.target, Vec3::ZERO);
    }

    #[test]
    fn quarter_turn_about_y() {
        let mut cam = Camera3D::perspective(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, 45.0);
        cam.orbit(std::f32::consts::FRAC_PI_2);
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-5));
    }

    #[test]
    fn degenerate_up_is_noop() {
        let mut cam = Camera3D::default();
        cam.up = Vec3::ZERO;
        cam.orbit(1.0);
        assert_eq!(cam.position, Vec3::splat(5.0));
    }

    #[test]
    fn tags_match_raylib_codes() {
        assert_eq!(Projection::Perspective.code(), 0);
        assert_eq!(Projection::Orthographic.code(), 1);
        assert_eq!(CameraMode::Orbital.code(), 2);
        assert_eq!(CameraMode::ThirdPerson.code(), 4);
    }

    #[test]
    fn nan_is_not_finite() {
        let mut cam = Camera3D::default();
        assert!(cam.is_finite());
        cam.fovy = f32::NAN;
        assert!(!cam.is_finite());
    }
}
