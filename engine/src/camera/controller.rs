//! Terrain Camera Controller
//!
//! First-person camera that walks over a [`HeightField`]. Orientation is a
//! yaw/pitch pair in degrees; position is a point on the map plane, and the
//! eye sits a fixed offset above the terrain under it.
//!
//! Key features:
//! - Arrow keys turn the camera a fixed step per tick
//! - Mouse deltas add directly to yaw/pitch (no smoothing)
//! - Pitch is hard-clamped to [-90, 90] degrees after every change
//! - Moves that would leave the map are rejected outright, not clamped
//!
//! ## Coordinate System
//! - World X/Y = map plane, +Z = up
//! - yaw = 0 faces +Y; positive yaw turns toward -X
//! - pitch = 0 looks straight down, pitch = 90 looks at the horizon

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec2, Vec3};
use serde::Deserialize;

use crate::input::{MovementKeys, RotationKeys};
use crate::world::HeightField;

/// Pitch limit in degrees (applied symmetrically)
pub const PITCH_LIMIT: f32 = 90.0;

/// Tunable camera constants.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Scale of the per-tick arrow-key rotation step
    pub key_sensitivity: f32,
    /// Degrees of rotation per pointer unit
    pub mouse_sensitivity: f32,
    /// Distance moved per tick for each held movement key
    pub move_speed: f32,
    /// Eye height above the terrain surface
    pub eye_offset: f32,
    /// Initial pitch in degrees
    pub initial_pitch: f32,
    /// Vertical field of view in degrees
    pub fov_y: f32,
    /// Near clip plane distance
    pub near: f32,
    /// Far clip plane distance
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            key_sensitivity: 0.005,
            mouse_sensitivity: 0.1,
            move_speed: 0.02,
            eye_offset: 1.8,
            initial_pitch: 20.0,
            fov_y: 90.0,
            near: 0.1,
            far: 80.0,
        }
    }
}

/// Camera state and update rules.
#[derive(Clone, Debug)]
pub struct CameraController {
    /// Position on the map plane
    pub position: Vec2,
    /// Horizontal angle in degrees, unrestricted
    pub yaw: f32,
    /// Vertical angle in degrees, clamped to [-90, 90]
    pitch: f32,
    /// Absolute eye height, refreshed on every committed move
    pub eye_height: f32,
    pub settings: CameraSettings,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl CameraController {
    /// Camera at the map origin, yaw 0, pitch from the settings.
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            position: Vec2::ZERO,
            yaw: 0.0,
            pitch: settings.initial_pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            eye_height: 0.0,
            settings,
        }
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the pitch in degrees (clamped).
    #[inline]
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Eye position in world space.
    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.position.extend(self.eye_height)
    }

    /// Turn by one tick's worth of held arrow keys.
    pub fn apply_rotation_keys(&mut self, keys: &RotationKeys) {
        let s = self.settings.key_sensitivity;

        if keys.left {
            self.yaw += 90.0 * s;
        }
        if keys.right {
            self.yaw -= 90.0 * s;
        }
        if keys.up {
            self.pitch -= 45.0 * s;
        }
        if keys.down {
            self.pitch += 45.0 * s;
        }

        self.set_pitch(self.pitch);
    }

    /// Apply a pointer delta (previous minus new position).
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.settings.mouse_sensitivity;
        self.set_pitch(self.pitch + dy * self.settings.mouse_sensitivity);
    }

    /// Planar velocity for one tick of held movement keys.
    ///
    /// Contributions add up, so diagonal movement is faster than straight.
    pub fn movement_velocity(&self, keys: &MovementKeys) -> Vec2 {
        let facing = -self.yaw.to_radians();
        let speed = self.settings.move_speed;
        let heading = |angle: f32| Vec2::new(angle.sin(), angle.cos()) * speed;

        let mut velocity = Vec2::ZERO;
        if keys.forward {
            velocity += heading(facing);
        }
        if keys.backward {
            velocity -= heading(facing);
        }
        if keys.left {
            velocity += heading(facing - FRAC_PI_2);
        }
        if keys.right {
            velocity += heading(facing + FRAC_PI_2);
        }
        velocity
    }

    /// Move for one tick and follow the terrain.
    ///
    /// Returns `true` if the move was committed. A candidate position off the
    /// map leaves position and eye height untouched.
    pub fn movement_tick(&mut self, keys: &MovementKeys, terrain: &HeightField) -> bool {
        let candidate = self.position + self.movement_velocity(keys);
        if !terrain.on_map(candidate.x, candidate.y) {
            return false;
        }

        self.position = candidate;
        self.eye_height = terrain.height_at(candidate.x, candidate.y) + self.settings.eye_offset;
        true
    }

    /// World-to-view transform: pitch about X, then yaw about Z, then
    /// translation to the eye. The order matters.
    pub fn view_transform(&self) -> Mat4 {
        Mat4::from_rotation_x(-self.pitch.to_radians())
            * Mat4::from_rotation_z(-self.yaw.to_radians())
            * Mat4::from_translation(-self.eye())
    }

    /// Perspective projection for the given aspect ratio.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.settings.fov_y.to_radians(),
            aspect.max(f32::EPSILON),
            self.settings.near,
            self.settings.far,
        )
    }

    /// Combined projection and view matrix.
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view_transform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let camera = CameraController::default();
        assert_eq!(camera.position, Vec2::ZERO);
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch(), 20.0);
        assert_eq!(camera.eye_height, 0.0);
    }

    #[test]
    fn test_rotation_step_sizes() {
        let mut camera = CameraController::default();
        let keys = RotationKeys {
            left: true,
            up: true,
            ..Default::default()
        };
        camera.apply_rotation_keys(&keys);

        assert!((camera.yaw - 0.45).abs() < 1e-6);
        assert!((camera.pitch() - (20.0 - 0.225)).abs() < 1e-5);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut camera = CameraController::default();
        let keys = RotationKeys {
            left: true,
            right: true,
            up: true,
            down: true,
        };
        camera.apply_rotation_keys(&keys);
        assert!(camera.yaw.abs() < 1e-6);
        assert!((camera.pitch() - 20.0).abs() < 1e-5);
    }

    #[test]
    fn test_mouse_delta_scaling() {
        let mut camera = CameraController::default();
        camera.apply_mouse_delta(10.0, -50.0);
        assert!((camera.yaw - 1.0).abs() < 1e-6);
        assert!((camera.pitch() - 15.0).abs() < 1e-5);
    }

    #[test]
    fn test_pitch_clamping() {
        let mut camera = CameraController::default();
        camera.apply_mouse_delta(0.0, 100_000.0);
        assert_eq!(camera.pitch(), 90.0);
        camera.apply_mouse_delta(0.0, -100_000.0);
        assert_eq!(camera.pitch(), -90.0);
    }

    #[test]
    fn test_forward_at_zero_yaw_is_plus_y() {
        let camera = CameraController::default();
        let keys = MovementKeys {
            forward: true,
            ..Default::default()
        };
        let v = camera.movement_velocity(&keys);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_strafe_directions() {
        let camera = CameraController::default();
        let left = camera.movement_velocity(&MovementKeys {
            left: true,
            ..Default::default()
        });
        let right = camera.movement_velocity(&MovementKeys {
            right: true,
            ..Default::default()
        });
        assert!((left.x + 0.02).abs() < 1e-6);
        assert!((right.x - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let camera = CameraController::default();
        let keys = MovementKeys {
            forward: true,
            right: true,
            ..Default::default()
        };
        let speed = camera.movement_velocity(&keys).length();
        assert!((speed - 0.02 * 2.0_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_yaw_turns_heading() {
        let mut camera = CameraController::default();
        camera.yaw = 90.0;
        let v = camera.movement_velocity(&MovementKeys {
            forward: true,
            ..Default::default()
        });
        // facing = -90 degrees -> heading (-1, 0)
        assert!((v.x + 0.02).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn test_view_transform_maps_eye_to_origin() {
        let mut camera = CameraController::default();
        camera.position = Vec2::new(3.0, 4.0);
        camera.eye_height = 2.5;
        camera.yaw = 37.0;

        let eye = camera.view_transform().transform_point3(camera.eye());
        assert!(eye.length() < 1e-5);
    }

    #[test]
    fn test_view_transform_order() {
        let mut camera = CameraController::default();
        camera.yaw = 30.0;
        camera.set_pitch(45.0);
        camera.eye_height = 1.0;

        let expected = Mat4::from_rotation_x(-45.0_f32.to_radians())
            * Mat4::from_rotation_z(-30.0_f32.to_radians())
            * Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0));
        assert!(camera.view_transform().abs_diff_eq(expected, 1e-6));
    }
}
