use glam::{Mat4, Vec3};

/// Maximum pitch magnitude, slightly less than π/2 to avoid gimbal lock
pub const PITCH_LIMIT: f32 = 1.5533;

/// Fly camera. View and projection are always derived fresh from this state,
/// never cached, so there is nothing that can go stale.
pub struct Camera {
    pub eye: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::new(0.0, 2.0, 8.0),
            yaw: 0.0,
            pitch: 0.0,
            up: Vec3::Y,
            fov_y: 45f32.to_radians(),
            aspect: width as f32 / height as f32,
            z_near: 0.1,
            z_far: 100.0,
        }
    }

    /// Unit forward vector from yaw/pitch. Yaw 0, pitch 0 faces -Z.
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT).sin_cos();
        Vec3::new(sy * cp, sp, -cy * cp).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize()
    }

    pub fn target(&self) -> Vec3 {
        self.eye + self.forward()
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target(), self.up)
    }

    pub fn proj(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far)
    }
}
