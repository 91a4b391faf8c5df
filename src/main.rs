use std::sync::Arc;

use anyhow::Context;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use cubelet::controller::{CameraUniform, FramePipeline, InputState};
use cubelet::logging;
use cubelet::model::{geometry, Camera, RenderObject, Scene};
use cubelet::view::{GpuContext, RenderState};

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

struct App {
    window: Arc<Window>,
    gpu: GpuContext,
    render: RenderState,
    scene: Scene,
    input: InputState,
    pipeline: FramePipeline,
    size: winit::dpi::PhysicalSize<u32>,
}

impl App {
    async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let gpu = GpuContext::new(window.clone(), size.width, size.height).await?;
        let render = RenderState::new(&gpu);

        let camera = Camera::new(size.width, size.height);
        let mut scene = Scene::new(camera);
        scene.push(RenderObject::new(
            &gpu.device,
            &render.object_layout,
            &geometry::cube(),
        ));
        scene.push(RenderObject::new(
            &gpu.device,
            &render.object_layout,
            &geometry::floor(),
        ));

        // The first frame draws before the first update runs, so the camera
        // matrices have to be on the GPU already
        let uniform = CameraUniform::from_camera(&scene.camera);
        gpu.queue
            .write_buffer(&render.camera_buffer, 0, bytemuck::bytes_of(&uniform));

        Ok(Self {
            window,
            gpu,
            render,
            scene,
            input: InputState::new(),
            pipeline: FramePipeline::new(),
            size,
        })
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key,
                        ..
                    },
                ..
            } => {
                if let PhysicalKey::Code(code) = physical_key {
                    match state {
                        ElementState::Pressed => {
                            self.input.key_pressed(*code);
                            if *code == KeyCode::Escape {
                                self.release_cursor();
                            }
                        }
                        ElementState::Released => self.input.key_released(*code),
                    }
                }
                true
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.grab_cursor();
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
                };
                self.input.scroll(dy);
                true
            }
            WindowEvent::Focused(false) => {
                self.input.clear_keys();
                true
            }
            _ => false,
        }
    }

    fn grab_cursor(&mut self) {
        self.input.cursor_grabbed = true;
        self.window.set_cursor_visible(false);
        let _ = self
            .window
            .set_cursor_grab(winit::window::CursorGrabMode::Locked)
            .or_else(|_| {
                self.window
                    .set_cursor_grab(winit::window::CursorGrabMode::Confined)
            });
    }

    fn release_cursor(&mut self) {
        self.input.cursor_grabbed = false;
        self.window.set_cursor_visible(true);
        let _ = self
            .window
            .set_cursor_grab(winit::window::CursorGrabMode::None);
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.gpu.reconfigure(new_size.width, new_size.height);
            self.render
                .resize(&self.gpu.device, new_size.width, new_size.height);
            self.scene.camera.set_aspect(new_size.width, new_size.height);
        }
    }

    /// One frame: advance the clock, draw with the previous frame's camera
    /// state, then apply this frame's input for the next draw.
    fn frame(&mut self, elwt: &winit::event_loop::ActiveEventLoop) {
        self.scene.clock.tick();

        match self.pipeline.draw(&self.gpu, &self.render, &self.scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => self.resize(self.size),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                tracing::error!("surface out of memory, exiting");
                elwt.exit();
            }
            Err(e) => tracing::warn!("dropped frame: {e:?}"),
        }

        self.pipeline
            .update(&self.gpu.queue, &self.render, &mut self.scene, &mut self.input);
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window_attributes = Window::default_attributes()
        .with_title("cubelet")
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
    #[allow(deprecated)]
    let window = Arc::new(
        event_loop
            .create_window(window_attributes)
            .context("failed to create window")?,
    );

    let mut app = pollster::block_on(App::new(window))?;

    #[allow(deprecated)]
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == app.window.id() => {
            if !app.input(event) {
                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(physical_size) => app.resize(*physical_size),
                    WindowEvent::RedrawRequested => app.frame(elwt),
                    _ => {}
                }
            }
        }
        Event::DeviceEvent {
            event: DeviceEvent::MouseMotion { delta },
            ..
        } => {
            app.input.mouse_motion(delta.0 as f32, delta.1 as f32);
        }
        Event::AboutToWait => app.window.request_redraw(),
        _ => {}
    })?;

    Ok(())
}
