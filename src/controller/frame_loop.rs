use glam::Mat4;

use super::camera_controller::CameraController;
use super::input::InputState;
use crate::model::{Camera, Scene};
use crate::view::{GpuContext, RenderState};

/// The two phases of a frame, always draw first and update second. A frame
/// therefore renders with the camera matrices uploaded by the previous
/// frame's update; the very first frame uses the matrices written at setup.
pub struct FramePipeline {
    pub camera_controller: CameraController,
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view: camera.view().to_cols_array_2d(),
            proj: camera.proj().to_cols_array_2d(),
        }
    }
}

impl FramePipeline {
    pub fn new() -> Self {
        Self {
            camera_controller: CameraController::new(),
        }
    }

    /// Draw phase: clear, then one draw call per object in insertion order.
    pub fn draw(
        &self,
        gpu: &GpuContext,
        render: &RenderState,
        scene: &Scene,
    ) -> Result<(), wgpu::SurfaceError> {
        render.draw_frame(gpu, scene)
    }

    /// Update phase: advance the camera from this frame's input and upload
    /// fresh matrices for the next draw.
    pub fn update(
        &self,
        queue: &wgpu::Queue,
        render: &RenderState,
        scene: &mut Scene,
        input: &mut InputState,
    ) {
        let dt = scene.clock.elapsed();
        let snapshot = input.snapshot();
        self.camera_controller
            .update(&mut scene.camera, &snapshot, dt);

        let uniform = CameraUniform::from_camera(&scene.camera);
        queue.write_buffer(&render.camera_buffer, 0, bytemuck::bytes_of(&uniform));

        // Slow spin on the cube (object 0)
        let angle = 0.3 * scene.clock.total();
        if let Some(cube) = scene.objects_mut().first_mut() {
            cube.set_model(queue, Mat4::from_rotation_y(angle));
        }
    }
}

impl Default for FramePipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::input::InputSnapshot;
    use glam::Vec3;

    #[test]
    fn test_camera_uniform_is_two_matrices() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 128);
    }

    #[test]
    fn test_matrix_upload_is_column_major() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let cols = m.to_cols_array();
        assert_eq!(cols.len(), 16);
        assert_eq!(&cols[12..15], &[1.0, 2.0, 3.0]);

        // Same bytes the queue writes for a model upload
        let cols_2d = m.to_cols_array_2d();
        let bytes: &[u8] = bytemuck::cast_slice(&cols_2d);
        assert_eq!(bytes.len(), 64);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &cols);
    }

    #[test]
    fn test_draw_consumes_previous_frame_camera() {
        // What a draw sees is whatever was uploaded before it; the update
        // only moves the camera for the frame after.
        let pipeline = FramePipeline::new();
        let mut camera = Camera::new(800, 600);

        let uploaded_before_draw = CameraUniform::from_camera(&camera);

        let snap = InputSnapshot {
            forward: true,
            ..Default::default()
        };
        let start = camera.eye;
        let forward = camera.forward();
        pipeline
            .camera_controller
            .update(&mut camera, &snap, 1.0 / 60.0);

        let uploaded_after_update = CameraUniform::from_camera(&camera);
        assert!(uploaded_before_draw.view != uploaded_after_update.view);

        let moved = camera.eye - start;
        let expected = pipeline.camera_controller.move_speed / 60.0;
        assert!((moved.length() - expected).abs() < 1e-5);
        assert!((moved.normalize() - forward).length() < 1e-5);
    }
}
