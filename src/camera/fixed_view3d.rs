use crate::camera::Camera3d;
use crate::clock::FrameTime;
use crate::input::KeyboardState;
use glamx::Vec3;

/// A camera that cannot move.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedView3d {
    eye: Vec3,
    at: Vec3,
}

impl Default for FixedView3d {
    /// The front view of the robot.
    fn default() -> Self {
        FixedView3d::new(Vec3::new(0.0, 2.5, 8.0), Vec3::new(0.0, 1.5, 0.0))
    }
}

impl FixedView3d {
    /// Create a new static camera at `eye` looking at `at`.
    pub fn new(eye: Vec3, at: Vec3) -> FixedView3d {
        FixedView3d { eye, at }
    }
}

impl Camera3d for FixedView3d {
    fn eye(&self) -> Vec3 {
        self.eye
    }

    fn target(&self) -> Vec3 {
        self.at
    }

    fn update(&mut self, _: FrameTime, _: &KeyboardState) {}
}
