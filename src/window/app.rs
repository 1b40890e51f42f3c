use crate::clock::Clock;
use crate::config::DemoConfig;
use crate::context::Context;
use crate::demo::RobotDemo;
use crate::error::WindowError;
use crate::input::KeyboardState;
use crate::renderer::{CubeRenderer, ShaderSources};
use crate::window::events::{translate_action, translate_key};
use crate::window::Canvas;
use log::{error, info, warn};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

/// Opens the demo window and runs it until it is closed.
pub fn run(config: DemoConfig) -> Result<(), WindowError> {
    let event_loop = EventLoop::new()?;
    let mut app = DemoApp::new(config);
    event_loop.run_app(&mut app)?;
    app.into_result()
}

struct Gpu {
    canvas: Canvas,
    ctxt: Context,
    renderer: CubeRenderer,
}

/// The winit application driving a [`RobotDemo`].
///
/// The GPU state is created on the first `resumed` event. Every redraw runs
/// one demo frame, draws it and asks for the next redraw.
pub struct DemoApp {
    config: DemoConfig,
    demo: RobotDemo,
    keyboard: KeyboardState,
    clock: Clock,
    gpu: Option<Gpu>,
    error: Option<WindowError>,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Self {
        DemoApp {
            demo: RobotDemo::new(&config),
            config,
            keyboard: KeyboardState::new(),
            clock: Clock::start(),
            gpu: None,
            error: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub fn into_result(self) -> Result<(), WindowError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: WindowError) {
        error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }

    fn open(&self, event_loop: &ActiveEventLoop) -> Result<Gpu, WindowError> {
        let attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(attributes)?);

        let (canvas, ctxt) = pollster::block_on(Canvas::open(window, self.config.vsync))?;

        let sources = match &self.config.shaders {
            Some(paths) => ShaderSources::load(&paths.vertex, &paths.fragment)?,
            None => ShaderSources::builtin(),
        };
        let renderer = CubeRenderer::new(&ctxt, &sources)?;

        Ok(Gpu {
            canvas,
            ctxt,
            renderer,
        })
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        let time = self.clock.tick();
        let frame = self.demo.frame(&self.keyboard, time);
        if frame.quit {
            event_loop.exit();
            return;
        }

        frame.render(&mut gpu.renderer);

        match gpu.canvas.acquire() {
            Ok(surface_texture) => {
                let view = surface_texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                gpu.renderer
                    .flush(&gpu.ctxt, &view, gpu.canvas.depth_view());
                gpu.canvas.window().pre_present_notify();
                surface_texture.present();
            }
            Err(err @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                warn!("Surface {}, reconfiguring", err);
                gpu.canvas.reconfigure(&gpu.ctxt);
            }
            Err(wgpu::SurfaceError::Timeout) => warn!("Surface timeout, skipping frame"),
            Err(err) => {
                error!("Failed to acquire the next frame: {}", err);
                event_loop.exit();
                return;
            }
        }

        gpu.canvas.window().request_redraw();
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }

        match self.open(event_loop) {
            Ok(gpu) => {
                let (width, height) = gpu.canvas.size();
                self.demo.set_framebuffer_size(width, height);
                gpu.canvas.window().request_redraw();
                self.gpu = Some(gpu);
                self.clock = Clock::start();
                info!("{} started", self.config.title);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.canvas.resize(&gpu.ctxt, size.width, size.height);
                    self.demo.set_framebuffer_size(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard
                    .set(translate_key(event.physical_key), translate_action(event.state));
            }
            // Keys released while unfocused would otherwise stay held.
            WindowEvent::Focused(false) => self.keyboard.release_all(),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
