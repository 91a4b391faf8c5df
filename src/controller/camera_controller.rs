use glam::Vec3;

use super::input::InputSnapshot;
use crate::model::camera::PITCH_LIMIT;
use crate::model::Camera;

const FOV_MIN_DEG: f32 = 1.0;
const FOV_MAX_DEG: f32 = 90.0;

/// Applies one frame of accumulated input to the camera.
pub struct CameraController {
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    /// Radians of fov change per scroll line
    pub zoom_sensitivity: f32,
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            move_speed: 5.0,
            mouse_sensitivity: 0.002,
            zoom_sensitivity: 2f32.to_radians(),
        }
    }

    pub fn update(&self, camera: &mut Camera, input: &InputSnapshot, dt: f32) {
        // Mouse look
        camera.yaw += input.look.0 * self.mouse_sensitivity;
        camera.pitch =
            (camera.pitch - input.look.1 * self.mouse_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        // Scroll zoom
        camera.fov_y = (camera.fov_y - input.scroll * self.zoom_sensitivity)
            .clamp(FOV_MIN_DEG.to_radians(), FOV_MAX_DEG.to_radians());

        // Movement along the camera's own axes, scaled by elapsed time so
        // speed is independent of frame rate
        let mut movement = Vec3::ZERO;
        if input.forward {
            movement += camera.forward();
        }
        if input.backward {
            movement -= camera.forward();
        }

        let right_axis = camera.right();
        if input.left {
            movement -= right_axis;
        }
        if input.right {
            movement += right_axis;
        }

        if movement.length_squared() > 0.0 {
            camera.eye += movement.normalize() * self.move_speed * dt;
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(forward: bool, backward: bool, left: bool, right: bool) -> InputSnapshot {
        InputSnapshot {
            forward,
            backward,
            left,
            right,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_movement_at_zero_dt() {
        let controller = CameraController::new();
        let mut camera = Camera::new(800, 600);
        let start = camera.eye;

        controller.update(&mut camera, &held(true, false, false, false), 0.0);

        assert_eq!(camera.eye, start);
        assert!(camera.eye.is_finite());
    }

    #[test]
    fn test_forward_displacement_is_speed_times_dt() {
        let controller = CameraController::new();
        let mut camera = Camera::new(800, 600);
        let start = camera.eye;
        let forward = camera.forward();
        let dt = 1.0 / 60.0;

        controller.update(&mut camera, &held(true, false, false, false), dt);

        let moved = camera.eye - start;
        let expected = controller.move_speed * dt;
        assert!((moved.length() - expected).abs() < 1e-5);
        assert!((moved.normalize() - forward).length() < 1e-5);
    }

    #[test]
    fn test_opposing_keys_cancel_without_nan() {
        let controller = CameraController::new();
        let mut camera = Camera::new(800, 600);
        let start = camera.eye;

        controller.update(&mut camera, &held(true, true, false, false), 1.0 / 60.0);

        assert_eq!(camera.eye, start);
        assert!(camera.eye.is_finite());
    }

    #[test]
    fn test_strafe_moves_along_right_axis() {
        let controller = CameraController::new();
        let mut camera = Camera::new(800, 600);
        let start = camera.eye;
        let right_axis = camera.right();

        controller.update(&mut camera, &held(false, false, false, true), 1.0 / 60.0);

        let moved = (camera.eye - start).normalize();
        assert!((moved - right_axis).length() < 1e-5);
    }

    #[test]
    fn test_pitch_clamped_under_extreme_look() {
        let controller = CameraController::new();
        let mut camera = Camera::new(800, 600);

        for _ in 0..100 {
            let snap = InputSnapshot {
                look: (0.0, -10_000.0),
                ..Default::default()
            };
            controller.update(&mut camera, &snap, 1.0 / 60.0);
        }
        assert!(camera.pitch <= PITCH_LIMIT);
        assert!((camera.forward().length() - 1.0).abs() < 1e-5);

        for _ in 0..100 {
            let snap = InputSnapshot {
                look: (0.0, 10_000.0),
                ..Default::default()
            };
            controller.update(&mut camera, &snap, 1.0 / 60.0);
        }
        assert!(camera.pitch >= -PITCH_LIMIT);
        assert!((camera.forward().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_fov_clamped_under_extreme_scroll() {
        let controller = CameraController::new();
        let mut camera = Camera::new(800, 600);

        for _ in 0..100 {
            let snap = InputSnapshot {
                scroll: 1_000.0,
                ..Default::default()
            };
            controller.update(&mut camera, &snap, 1.0 / 60.0);
        }
        assert!(camera.fov_y >= FOV_MIN_DEG.to_radians() - 1e-6);

        for _ in 0..100 {
            let snap = InputSnapshot {
                scroll: -1_000.0,
                ..Default::default()
            };
            controller.update(&mut camera, &snap, 1.0 / 60.0);
        }
        assert!(camera.fov_y <= FOV_MAX_DEG.to_radians() + 1e-6);
    }
}
