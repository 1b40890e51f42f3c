use crate::color::Color;
use crate::light::Light;
use crate::robot::{Pose, PosedSegment};
use glamx::{Mat4, Vec3};

/// Everything a renderer needs to know about the frame before drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameUniforms {
    /// World to camera space.
    pub view: Mat4,
    /// Camera space to clip space.
    pub projection: Mat4,
    /// World-space camera position, for specular highlights.
    pub eye: Vec3,
    pub light: Light,
    /// Clear color.
    pub background: Color,
}

/// Trait implemented by everything that can draw the robot.
///
/// A frame is one call to [`Renderer::begin_frame`] followed by any number of
/// cube draws. Every draw is the shared unit cube placed by a transform.
pub trait Renderer {
    /// Starts a new frame, discarding the draws of the previous one.
    fn begin_frame(&mut self, frame: &FrameUniforms);

    /// Queues one unit cube, placed by `transform`, in a flat `color`.
    fn draw_cube(&mut self, transform: &Mat4, color: Color);

    /// Queues one posed body segment.
    fn draw_segment(&mut self, segment: &PosedSegment) {
        self.draw_cube(&segment.transform, segment.color)
    }

    /// Queues every segment of `pose`, in drawing order.
    fn draw_pose(&mut self, pose: &Pose) {
        for segment in pose.iter() {
            self.draw_segment(segment);
        }
    }
}
