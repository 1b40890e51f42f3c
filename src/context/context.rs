//! The GPU device shared by the canvas and the renderers.

use std::sync::Arc;
use wgpu::util::DeviceExt;

/// The wgpu device and queue the demo draws with.
///
/// Cloning is cheap: the handles are reference-counted. The context is
/// created by [`Canvas::open`](crate::window::Canvas::open) together with the
/// surface it is compatible with.
#[derive(Clone, Debug)]
pub struct Context {
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
    /// Name of the adapter the device was created on.
    pub adapter_name: String,
    /// Texture format of the window surface, and of every color target.
    pub surface_format: wgpu::TextureFormat,
}

impl Context {
    pub fn new(
        device: wgpu::Device,
        queue: wgpu::Queue,
        adapter: &wgpu::Adapter,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        Context {
            device: Arc::new(device),
            queue: Arc::new(queue),
            adapter_name: adapter.get_info().name,
            surface_format,
        }
    }

    /// Creates an uninitialized buffer.
    pub fn create_buffer_simple(
        &self,
        label: Option<&str>,
        size: u64,
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        self.device.create_buffer(&wgpu::BufferDescriptor {
            label,
            size,
            usage,
            mapped_at_creation: false,
        })
    }

    /// Creates a buffer filled with `contents`.
    pub fn create_buffer_init(
        &self,
        label: Option<&str>,
        contents: &[u8],
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label,
                contents,
                usage,
            })
    }

    #[inline]
    pub fn write_buffer(&self, buffer: &wgpu::Buffer, offset: u64, data: &[u8]) {
        self.queue.write_buffer(buffer, offset, data);
    }

    pub fn create_shader_module(&self, label: Option<&str>, wgsl: &str) -> wgpu::ShaderModule {
        self.device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label,
                source: wgpu::ShaderSource::Wgsl(wgsl.into()),
            })
    }

    pub fn create_command_encoder(&self, label: Option<&str>) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label })
    }

    pub fn submit<I: IntoIterator<Item = wgpu::CommandBuffer>>(&self, command_buffers: I) {
        self.queue.submit(command_buffers);
    }

    /// Smallest allowed stride between two dynamic uniform buffer offsets.
    pub fn uniform_offset_alignment(&self) -> u64 {
        self.device.limits().min_uniform_buffer_offset_alignment as u64
    }

    /// Format of the depth buffer every pipeline tests against.
    #[inline]
    pub fn depth_format() -> wgpu::TextureFormat {
        wgpu::TextureFormat::Depth32Float
    }
}
