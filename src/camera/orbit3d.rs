use crate::camera::Camera3d;
use crate::clock::FrameTime;
use crate::input::KeyboardState;
use glamx::Vec3;

/// A camera circling the vertical axis at a constant angular speed.
///
/// The angle is a function of the elapsed time only, so the camera does not
/// react to the keyboard.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrbitCamera3d {
    radius: f32,
    speed: f32,
    height: f32,
    at: Vec3,
    time: f32,
}

impl Default for OrbitCamera3d {
    fn default() -> Self {
        OrbitCamera3d::new(6.0, 0.4, 3.0, Vec3::new(0.0, 1.0, 0.0))
    }
}

impl OrbitCamera3d {
    /// Creates an orbit camera.
    ///
    /// # Arguments
    /// * `radius` - Horizontal distance to the vertical axis through `at`
    /// * `speed` - Angular speed, in radians per second
    /// * `height` - Height of the eye above the ground
    /// * `at` - The point looked at
    pub fn new(radius: f32, speed: f32, height: f32, at: Vec3) -> Self {
        OrbitCamera3d {
            radius,
            speed,
            height,
            at,
            time: 0.0,
        }
    }

    /// The eye position at `elapsed` seconds.
    pub fn eye_at(&self, elapsed: f32) -> Vec3 {
        let angle = self.speed * elapsed;
        Vec3::new(
            self.radius * angle.sin(),
            self.height,
            self.radius * angle.cos(),
        )
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Camera3d for OrbitCamera3d {
    fn eye(&self) -> Vec3 {
        self.eye_at(self.time)
    }

    fn target(&self) -> Vec3 {
        self.at
    }

    fn update(&mut self, time: FrameTime, _: &KeyboardState) {
        self.time = time.elapsed;
    }
}
