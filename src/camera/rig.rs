use crate::camera::{Camera3d, FixedView3d, FreeCamera3d, OrbitCamera3d};
use crate::clock::FrameTime;
use crate::input::KeyboardState;
use glamx::{Mat4, Vec3};
use std::f32;

/// The three available viewpoints.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CameraMode {
    /// Circles the robot.
    #[default]
    Orbit,
    /// Fixed front view.
    Static,
    /// Keyboard-driven fly camera.
    Free,
}

impl CameraMode {
    /// Every mode, in cycling order.
    pub const ALL: [CameraMode; 3] = [CameraMode::Orbit, CameraMode::Static, CameraMode::Free];

    /// The mode after this one, wrapping around.
    pub fn next(self) -> CameraMode {
        match self {
            CameraMode::Orbit => CameraMode::Static,
            CameraMode::Static => CameraMode::Free,
            CameraMode::Free => CameraMode::Orbit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CameraMode::Orbit => "Orbit Mode",
            CameraMode::Static => "Static Front Mode",
            CameraMode::Free => "Free Mode (WASD + Arrow Keys)",
        }
    }
}

/// A right-handed perspective projection with a `[0, 1]` depth range.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    fov: f32,
    znear: f32,
    zfar: f32,
    aspect: f32,
}

impl Default for Projection {
    /// 45° vertical field of view, 4:3, clipping at 0.1 and 100.
    fn default() -> Self {
        Projection::new(f32::consts::PI / 4.0, 0.1, 100.0)
    }
}

impl Projection {
    /// A projection with the given vertical field of view (radians) and clip planes.
    pub fn new(fov: f32, znear: f32, zfar: f32) -> Self {
        Projection {
            fov,
            znear,
            zfar,
            aspect: 800.0 / 600.0,
        }
    }

    /// Adapts the aspect ratio to a framebuffer. Degenerate sizes are ignored.
    pub fn set_framebuffer_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Returns the near and far clipping plane distances.
    #[inline]
    pub fn clip_planes(&self) -> (f32, f32) {
        (self.znear, self.zfar)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.znear, self.zfar)
    }
}

/// Holds one camera per [`CameraMode`] and the shared projection.
///
/// Switching modes keeps the state of every camera, so the free camera
/// resumes where it was left.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraRig {
    mode: CameraMode,
    orbit: OrbitCamera3d,
    fixed: FixedView3d,
    free: FreeCamera3d,
    projection: Projection,
}

impl CameraRig {
    /// A rig with default cameras, starting in `mode`.
    pub fn new(mode: CameraMode) -> Self {
        CameraRig {
            mode,
            ..CameraRig::default()
        }
    }

    #[inline]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
    }

    /// Switches to the next mode and returns it.
    pub fn next_mode(&mut self) -> CameraMode {
        self.mode = self.mode.next();
        self.mode
    }

    /// The active camera.
    pub fn camera(&self) -> &dyn Camera3d {
        match self.mode {
            CameraMode::Orbit => &self.orbit,
            CameraMode::Static => &self.fixed,
            CameraMode::Free => &self.free,
        }
    }

    fn camera_mut(&mut self) -> &mut dyn Camera3d {
        match self.mode {
            CameraMode::Orbit => &mut self.orbit,
            CameraMode::Static => &mut self.fixed,
            CameraMode::Free => &mut self.free,
        }
    }

    pub fn free_camera(&self) -> &FreeCamera3d {
        &self.free
    }

    #[inline]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    #[inline]
    pub fn projection_mut(&mut self) -> &mut Projection {
        &mut self.projection
    }

    /// Updates the active camera only.
    pub fn update(&mut self, time: FrameTime, keyboard: &KeyboardState) {
        self.camera_mut().update(time, keyboard)
    }

    pub fn eye(&self) -> Vec3 {
        self.camera().eye()
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera().view_matrix()
    }
}
