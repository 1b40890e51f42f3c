//! Lighting scenes.

pub use self::scene::{Scene, ScenePreset, GROUND_EXTENT, GROUND_LEVEL, GROUND_THICKNESS};
pub use self::scene_manager::SceneManager;

mod scene;
mod scene_manager;
