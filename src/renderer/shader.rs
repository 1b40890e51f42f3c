//! Shader sources and compiled shader programs.

use crate::context::Context;
use crate::error::RenderError;
use log::error;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// The built-in vertex shader.
pub const BUILTIN_VERTEX_SHADER: &str = include_str!("../builtin/cube_vertex.wgsl");
/// The built-in fragment shader.
pub const BUILTIN_FRAGMENT_SHADER: &str = include_str!("../builtin/cube_fragment.wgsl");

/// Name of the vertex entry point every vertex shader must define.
pub const VERTEX_ENTRY_POINT: &str = "vs_main";
/// Name of the fragment entry point every fragment shader must define.
pub const FRAGMENT_ENTRY_POINT: &str = "fs_main";

/// The WGSL text of a vertex and a fragment shader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: Cow<'static, str>,
    pub fragment: Cow<'static, str>,
}

impl Default for ShaderSources {
    fn default() -> Self {
        ShaderSources::builtin()
    }
}

impl ShaderSources {
    /// The shaders shipped with the crate.
    pub fn builtin() -> Self {
        ShaderSources {
            vertex: Cow::Borrowed(BUILTIN_VERTEX_SHADER),
            fragment: Cow::Borrowed(BUILTIN_FRAGMENT_SHADER),
        }
    }

    pub fn new(vertex: impl Into<Cow<'static, str>>, fragment: impl Into<Cow<'static, str>>) -> Self {
        ShaderSources {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Reads both shaders from disk.
    pub fn load(
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, RenderError> {
        Ok(ShaderSources {
            vertex: Cow::Owned(read_source(vertex_path.as_ref())?),
            fragment: Cow::Owned(read_source(fragment_path.as_ref())?),
        })
    }
}

fn read_source(path: &Path) -> Result<String, RenderError> {
    fs::read_to_string(path).map_err(|source| RenderError::ShaderRead {
        path: path.to_path_buf(),
        source,
    })
}

/// A vertex and a fragment shader module, both validated by the device.
#[derive(Debug)]
pub struct ShaderProgram {
    vertex: wgpu::ShaderModule,
    fragment: wgpu::ShaderModule,
}

impl ShaderProgram {
    /// Compiles both shaders.
    ///
    /// Parse and validation errors are reported as
    /// [`RenderError::ShaderCompilation`] instead of reaching the device's
    /// uncaptured error handler.
    pub fn compile(ctxt: &Context, sources: &ShaderSources) -> Result<Self, RenderError> {
        let vertex = compile_module(ctxt, "vertex", &sources.vertex)?;
        let fragment = compile_module(ctxt, "fragment", &sources.fragment)?;
        Ok(ShaderProgram { vertex, fragment })
    }

    #[inline]
    pub fn vertex(&self) -> &wgpu::ShaderModule {
        &self.vertex
    }

    #[inline]
    pub fn fragment(&self) -> &wgpu::ShaderModule {
        &self.fragment
    }
}

fn compile_module(
    ctxt: &Context,
    label: &'static str,
    source: &str,
) -> Result<wgpu::ShaderModule, RenderError> {
    ctxt.device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = ctxt.create_shader_module(Some(label), source);

    match pollster::block_on(ctxt.device.pop_error_scope()) {
        Some(err) => {
            error!("{} shader compilation failed", label);
            Err(RenderError::ShaderCompilation {
                label,
                message: err.to_string(),
            })
        }
        None => Ok(module),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_shaders_define_their_entry_points() {
        let sources = ShaderSources::builtin();
        assert!(sources.vertex.contains(&format!("fn {VERTEX_ENTRY_POINT}(")));
        assert!(sources.fragment.contains(&format!("fn {FRAGMENT_ENTRY_POINT}(")));
    }

    #[test]
    fn load_reads_both_files() {
        let dir = std::env::temp_dir().join(format!("cubebot-shaders-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let vs = dir.join("vs.wgsl");
        let fs_path = dir.join("fs.wgsl");
        fs::write(&vs, "// vertex").unwrap();
        fs::write(&fs_path, "// fragment").unwrap();

        let sources = ShaderSources::load(&vs, &fs_path).unwrap();
        assert_eq!(sources, ShaderSources::new("// vertex", "// fragment"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_reported() {
        let err = ShaderSources::load("no/such/vertex.wgsl", "no/such/fragment.wgsl").unwrap_err();
        match err {
            RenderError::ShaderRead { path, .. } => {
                assert_eq!(path, Path::new("no/such/vertex.wgsl"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
