use crate::color::{self, Color};
use crate::light::Light;
use glamx::{Mat4, Vec3};

/// Height of the top face of the ground slab: the soles of the feet at rest.
pub const GROUND_LEVEL: f32 = -1.8;
/// Thickness of the ground slab.
pub const GROUND_THICKNESS: f32 = 0.1;
/// Side length of the square ground slab.
pub const GROUND_EXTENT: f32 = 20.0;

/// A lighting environment: clear color, point light and ground color.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scene {
    /// Display name, logged on scene changes.
    pub name: &'static str,
    /// Clear color of the frame.
    pub background: Color,
    /// The single light of the scene.
    pub light: Light,
    /// Color of the ground slab under the robot.
    pub ground: Color,
}

impl Scene {
    /// Transform of the unit cube drawn as the ground slab.
    pub fn ground_transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, GROUND_LEVEL - GROUND_THICKNESS * 0.5, 0.0))
            * Mat4::from_scale(Vec3::new(GROUND_EXTENT, GROUND_THICKNESS, GROUND_EXTENT))
    }
}

/// The built-in lighting environments.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScenePreset {
    /// Bright daylight under a sky-blue background.
    #[default]
    Day,
    /// Cool moonlight on a dark blue background.
    Night,
    /// Low, warm orange light.
    Sunset,
}

impl ScenePreset {
    /// Every preset, in cycling order.
    pub const ALL: [ScenePreset; 3] = [ScenePreset::Day, ScenePreset::Night, ScenePreset::Sunset];

    /// Position of this preset in [`ScenePreset::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The preset at `index`, if any.
    pub fn from_index(index: usize) -> Option<ScenePreset> {
        ScenePreset::ALL.get(index).copied()
    }

    /// The preset after this one, wrapping around.
    pub fn next(self) -> ScenePreset {
        ScenePreset::ALL[(self.index() + 1) % ScenePreset::ALL.len()]
    }

    pub fn scene(self) -> Scene {
        match self {
            ScenePreset::Day => Scene {
                name: "Day Scene",
                background: color::SKY_BLUE,
                light: Light::at(Vec3::new(5.0, 8.0, 5.0)).with_color(Color::new(1.0, 1.0, 0.95)),
                ground: Color::new(0.4, 0.7, 0.4),
            },
            ScenePreset::Night => Scene {
                name: "Night Scene",
                background: Color::new(0.02, 0.02, 0.15),
                light: Light::at(Vec3::new(3.0, 6.0, 4.0)).with_color(Color::new(0.4, 0.5, 0.8)),
                ground: Color::new(0.15, 0.15, 0.25),
            },
            ScenePreset::Sunset => Scene {
                name: "Sunset Scene",
                background: Color::new(0.85, 0.45, 0.25),
                light: Light::at(Vec3::new(7.0, 3.0, 5.0)).with_color(Color::new(1.0, 0.6, 0.3)),
                ground: Color::new(0.5, 0.35, 0.25),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::{Pose, Segment};

    #[test]
    fn presets_cycle_through_all_scenes() {
        assert_eq!(ScenePreset::Day.next(), ScenePreset::Night);
        assert_eq!(ScenePreset::Night.next(), ScenePreset::Sunset);
        assert_eq!(ScenePreset::Sunset.next(), ScenePreset::Day);
        assert_eq!(ScenePreset::from_index(3), None);
    }

    #[test]
    fn feet_rest_on_the_ground() {
        let scene = ScenePreset::Day.scene();
        let top = scene
            .ground_transform()
            .transform_point3(Vec3::new(0.0, 0.5, 0.0));
        assert!((top.y - GROUND_LEVEL).abs() < 1.0e-5);

        let pose = Pose::default();
        let sole = pose
            .get(Segment::ShinLeft)
            .transform
            .transform_point3(Vec3::new(0.0, -0.5, 0.0));
        assert!((sole.y - GROUND_LEVEL).abs() < 1.0e-4, "{}", sole.y);
    }
}
