//! Start-up options of the demo.

use crate::animation::DEFAULT_MANUAL_SPEED;
use crate::camera::CameraMode;
use crate::scene::ScenePreset;
use std::path::PathBuf;

/// Paths of a vertex and a fragment WGSL file replacing the built-in shaders.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

/// Options of a demo run.
///
/// # Example
/// ```
/// # use cubebot::config::DemoConfig;
/// # use cubebot::scene::ScenePreset;
/// let config = DemoConfig::default()
///     .with_title("robot")
///     .with_scene(ScenePreset::Sunset);
/// assert_eq!(config.width, 800);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemoConfig {
    /// Window title.
    pub title: String,
    /// Initial window width, in physical pixels.
    pub width: u32,
    /// Initial window height, in physical pixels.
    pub height: u32,
    /// Is vsync enabled?
    pub vsync: bool,
    /// Lighting scene shown at start-up.
    pub scene: ScenePreset,
    /// Camera mode at start-up.
    pub camera: CameraMode,
    /// Manual joint speed, in degrees per second.
    pub manual_speed: f32,
    /// Shader files to load instead of the built-in shaders.
    pub shaders: Option<ShaderPaths>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            title: "Cube Robot".to_string(),
            width: 800,
            height: 600,
            vsync: true,
            scene: ScenePreset::Day,
            camera: CameraMode::Orbit,
            manual_speed: DEFAULT_MANUAL_SPEED,
            shaders: None,
        }
    }
}

impl DemoConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn with_scene(mut self, scene: ScenePreset) -> Self {
        self.scene = scene;
        self
    }

    pub fn with_camera(mut self, camera: CameraMode) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_manual_speed(mut self, speed: f32) -> Self {
        self.manual_speed = speed;
        self
    }

    /// Loads the shaders from `vertex` and `fragment` instead of using the
    /// built-in ones.
    pub fn with_shaders(mut self, vertex: impl Into<PathBuf>, fragment: impl Into<PathBuf>) -> Self {
        self.shaders = Some(ShaderPaths {
            vertex: vertex.into(),
            fragment: fragment.into(),
        });
        self
    }
}
