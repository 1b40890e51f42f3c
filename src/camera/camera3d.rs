use crate::clock::FrameTime;
use crate::input::KeyboardState;
use glamx::{Mat4, Vec3};

/// Trait that all camera implementations must implement.
///
/// A camera owns a viewpoint and turns it into a view matrix. The projection
/// is shared by every camera and lives in [`Projection`](crate::camera::Projection).
///
/// # Implementations
/// - [`OrbitCamera3d`](crate::camera::OrbitCamera3d) - Circles the robot over time (default)
/// - [`FixedView3d`](crate::camera::FixedView3d) - Static front view
/// - [`FreeCamera3d`](crate::camera::FreeCamera3d) - Keyboard-driven fly camera
pub trait Camera3d {
    /// Returns the camera's position in world space.
    fn eye(&self) -> Vec3;

    /// Returns the point the camera looks at.
    fn target(&self) -> Vec3;

    /// Returns the camera's view transformation.
    ///
    /// This transforms world coordinates into camera space, with `+Y` up.
    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target(), Vec3::Y)
    }

    /// Updates the camera state for the current frame.
    ///
    /// # Arguments
    /// * `time` - Elapsed and frame time
    /// * `keyboard` - The keys held down this frame
    fn update(&mut self, time: FrameTime, keyboard: &KeyboardState);
}
