use super::camera::Camera;
use super::clock::FrameClock;
use super::object::RenderObject;

/// Everything one frame operates on. GPU resource ownership lives in the
/// objects; the scene only strings them together in draw order.
pub struct Scene {
    pub clock: FrameClock,
    pub camera: Camera,
    objects: Vec<RenderObject>,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            clock: FrameClock::new(),
            camera,
            objects: Vec::new(),
        }
    }

    /// Objects draw in insertion order.
    pub fn push(&mut self, object: RenderObject) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[RenderObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [RenderObject] {
        &mut self.objects
    }
}
