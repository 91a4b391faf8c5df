// MODEL: scene data and per-frame state
pub mod camera;
pub mod clock;
pub mod geometry;
pub mod mesh;
pub mod object;
pub mod scene;

pub use camera::Camera;
pub use clock::FrameClock;
pub use mesh::{Mesh, MeshBuffer, Vertex};
pub use object::RenderObject;
pub use scene::Scene;
