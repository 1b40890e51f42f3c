//! Structures responsible for drawing the robot.

pub use self::cube_renderer::CubeRenderer;
pub use self::draw_list::{DrawCall, DrawList};
pub use self::renderer::{FrameUniforms, Renderer};
pub use self::shader::{
    ShaderProgram, ShaderSources, BUILTIN_FRAGMENT_SHADER, BUILTIN_VERTEX_SHADER,
    FRAGMENT_ENTRY_POINT, VERTEX_ENTRY_POINT,
};

mod cube_renderer;
mod draw_list;
mod renderer;
mod shader;
