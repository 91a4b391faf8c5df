use bytemuck::NoUninit;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Debug, Clone, Copy, NoUninit)]
pub struct Vertex {
    pub pos: [f32; 3],
}

/// CPU-side geometry. Uploaded once at scene setup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn unindexed(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            indices: Vec::new(),
        }
    }

    /// Triangle count as drawn. Truncates when the vertex data is not a
    /// multiple of three; callers pass well-formed tables.
    pub fn triangle_count(&self) -> u32 {
        if self.indices.is_empty() {
            self.vertices.len() as u32 / 3
        } else {
            self.indices.len() as u32 / 3
        }
    }

    pub fn upload(&self, device: &wgpu::Device) -> MeshBuffer {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_vertex_buffer"),
            contents: bytemuck::cast_slice(&self.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = if self.indices.is_empty() {
            None
        } else {
            Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh_index_buffer"),
                contents: bytemuck::cast_slice(&self.indices),
                usage: wgpu::BufferUsages::INDEX,
            }))
        };

        MeshBuffer {
            vertex_buffer,
            index_buffer,
            vertex_count: self.vertices.len() as u32,
            index_count: self.indices.len() as u32,
        }
    }
}

/// GPU-side mesh: a vertex buffer, an optional index buffer and the counts
/// needed to cover them with a single draw call.
pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: Option<wgpu::Buffer>,
    pub vertex_count: u32,
    pub index_count: u32,
}

impl MeshBuffer {
    pub fn triangle_count(&self) -> u32 {
        if self.index_buffer.is_some() {
            self.index_count / 3
        } else {
            self.vertex_count / 3
        }
    }

    /// Issues exactly one draw call covering the whole buffer.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index_buffer {
            Some(indices) => {
                pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..self.index_count, 0, 0..1);
            }
            None => pass.draw(0..self.vertex_count, 0..1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 12);
    }

    #[test]
    fn test_unindexed_triangle_count() {
        let mesh = Mesh::unindexed(vec![Vertex { pos: [0.0; 3] }; 36]);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_triangle_count_truncates_partial_triangle() {
        let mesh = Mesh::unindexed(vec![Vertex { pos: [0.0; 3] }; 4]);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_indexed_triangle_count_uses_indices() {
        let mesh = Mesh {
            vertices: vec![Vertex { pos: [0.0; 3] }; 4],
            indices: vec![0, 1, 2, 2, 3, 0],
        };
        assert_eq!(mesh.triangle_count(), 2);
    }
}
