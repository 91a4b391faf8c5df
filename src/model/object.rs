use glam::Mat4;
use wgpu::util::DeviceExt;

use super::mesh::{Mesh, MeshBuffer};

/// One drawable thing: a mesh plus its world transform and the GPU-side
/// uniform binding for that transform.
pub struct RenderObject {
    pub mesh: MeshBuffer,
    model: Mat4,
    model_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl RenderObject {
    /// Uploads the mesh and binds an identity model matrix, so a draw issued
    /// before any update already renders correctly positioned geometry.
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, mesh: &Mesh) -> Self {
        let model = Mat4::IDENTITY;
        let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("model_buffer"),
            contents: bytemuck::cast_slice(&model.to_cols_array_2d()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("model_bind_group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: model_buffer.as_entire_binding(),
            }],
        });

        Self {
            mesh: mesh.upload(device),
            model,
            model_buffer,
            bind_group,
        }
    }

    pub fn model(&self) -> Mat4 {
        self.model
    }

    /// Replaces the model matrix and uploads it right away; there is no lazy
    /// sync between CPU and GPU state.
    pub fn set_model(&mut self, queue: &wgpu::Queue, model: Mat4) {
        self.model = model;
        queue.write_buffer(
            &self.model_buffer,
            0,
            bytemuck::cast_slice(&model.to_cols_array_2d()),
        );
    }
}
