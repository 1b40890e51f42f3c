//! Lighting of the robot.
//!
//! Each scene has a single point light at a fixed world position. Its
//! contribution is not attenuated with distance.

use crate::color::{self, Color};
use glamx::Vec3;

/// A point light.
///
/// # Examples
/// ```
/// # use cubebot::light::Light;
/// # use cubebot::color::Color;
/// # use cubebot::glamx::Vec3;
/// let sun = Light::at(Vec3::new(5.0, 8.0, 5.0))
///     .with_color(Color::new(1.0, 1.0, 0.95));
/// assert_eq!(sun.position.y, 8.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Light {
    /// World-space position of the light.
    pub position: Vec3,
    /// The color of the light (each component 0.0-1.0).
    pub color: Color,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(5.0, 8.0, 5.0),
            color: color::WHITE,
        }
    }
}

impl Light {
    /// Creates a white point light at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Sets the light color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
