// CONTROLLER: input handling and the per-frame update
pub mod camera_controller;
pub mod frame_loop;
pub mod input;

pub use camera_controller::CameraController;
pub use frame_loop::{CameraUniform, FramePipeline};
pub use input::{InputSnapshot, InputState, KeyBindings};
