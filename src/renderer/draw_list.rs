use crate::color::Color;
use crate::renderer::{FrameUniforms, Renderer};
use glamx::Mat4;

/// One queued cube.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub transform: Mat4,
    pub color: Color,
}

/// A renderer that only records what it is asked to draw.
///
/// Useful to inspect frames without a GPU.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    frame: Option<FrameUniforms>,
    calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The parameters of the current frame, if one was started.
    pub fn frame(&self) -> Option<&FrameUniforms> {
        self.frame.as_ref()
    }

    /// The draws of the current frame, in submission order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl Renderer for DrawList {
    fn begin_frame(&mut self, frame: &FrameUniforms) {
        self.frame = Some(*frame);
        self.calls.clear();
    }

    fn draw_cube(&mut self, transform: &Mat4, color: Color) {
        self.calls.push(DrawCall {
            transform: *transform,
            color,
        });
    }
}
