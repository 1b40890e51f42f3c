//! The window surface, its depth buffer and the wgpu device behind them.

use crate::context::Context;
use crate::error::WindowError;
use log::info;
use std::sync::Arc;
use winit::window::Window;

/// A window together with its configured wgpu surface.
pub struct Canvas {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    // Dropped after the surface.
    _instance: wgpu::Instance,
}

impl Canvas {
    /// Creates the wgpu instance, adapter and device for `window`, and
    /// configures its surface.
    pub async fn open(window: Arc<Window>, vsync: bool) -> Result<(Canvas, Context), WindowError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("cubebot device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await?;

        // Non-sRGB formats are preferred: the shaders output final colors.
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(WindowError::NoSurfaceFormat)?;

        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let present_mode = if vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let depth_view = Self::create_depth_view(&device, width, height);
        let ctxt = Context::new(device, queue, &adapter, surface_format);
        info!("Using adapter: {}", ctxt.adapter_name);

        Ok((
            Canvas {
                window,
                surface,
                surface_config,
                depth_view,
                _instance: instance,
            },
            ctxt,
        ))
    }

    /// The view keeps its texture alive.
    fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Context::depth_format(),
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    #[inline]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The surface size, in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    /// Resizes the surface and the depth buffer. Zero sizes (minimized
    /// windows) are ignored.
    pub fn resize(&mut self, ctxt: &Context, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure(ctxt);
    }

    /// Configures the surface again, after it was lost or became outdated.
    pub fn reconfigure(&mut self, ctxt: &Context) {
        self.surface.configure(&ctxt.device, &self.surface_config);

        self.depth_view = Self::create_depth_view(
            &ctxt.device,
            self.surface_config.width,
            self.surface_config.height,
        );
    }

    /// Gets the surface texture to draw the next frame into.
    pub fn acquire(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    #[inline]
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_view
    }
}
