//! Error types of the renderer and the window loop.
//!
//! The robot core (joints, pose solver, animation drivers) cannot fail; only
//! the GPU and windowing collaborators report errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while preparing or issuing GPU work.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A shader source file could not be read.
    #[error("failed to read shader {path}: {source}")]
    ShaderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A shader module failed to parse or validate.
    #[error("failed to compile {label} shader: {message}")]
    ShaderCompilation { label: &'static str, message: String },

    /// The linked pipeline was rejected by the device.
    #[error("failed to create render pipeline: {0}")]
    Pipeline(String),
}

/// Failures of the window and its surface.
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Os(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    /// The surface reports no supported texture format for the adapter.
    #[error("the surface is not supported by the adapter")]
    NoSurfaceFormat,

    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_shader() {
        let err = RenderError::ShaderCompilation {
            label: "vertex",
            message: "expected `;`".to_string(),
        };
        assert_eq!(err.to_string(), "failed to compile vertex shader: expected `;`");

        let err = WindowError::from(err);
        assert!(err.to_string().contains("vertex shader"));
    }

    #[test]
    fn read_errors_keep_their_source() {
        use std::error::Error as _;

        let err = RenderError::ShaderRead {
            path: PathBuf::from("missing.wgsl"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("failed to read shader missing.wgsl"));
        assert!(err.source().is_some());
    }
}
