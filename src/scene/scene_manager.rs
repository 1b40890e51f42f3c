use crate::scene::{Scene, ScenePreset};

/// Tracks the active lighting scene.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneManager {
    current: ScenePreset,
}

impl SceneManager {
    /// A manager starting on `preset`.
    pub fn new(preset: ScenePreset) -> Self {
        SceneManager { current: preset }
    }

    pub fn set_scene(&mut self, preset: ScenePreset) {
        self.current = preset;
    }

    /// Selects the scene at `index`. Out-of-range indices are ignored.
    pub fn set_scene_index(&mut self, index: usize) -> bool {
        match ScenePreset::from_index(index) {
            Some(preset) => {
                self.current = preset;
                true
            }
            None => false,
        }
    }

    /// Switches to the next scene, wrapping around, and returns it.
    pub fn next_scene(&mut self) -> ScenePreset {
        self.current = self.current.next();
        self.current
    }

    #[inline]
    pub fn preset(&self) -> ScenePreset {
        self.current
    }

    /// The active scene parameters.
    pub fn current(&self) -> Scene {
        self.current.scene()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current.index()
    }
}
