//! Colors used by the robot segments and the lighting scenes.
//!
//! All colors are linear RGB with `f32` components in the range [0.0, 1.0].
//!
//! # Example
//! ```
//! # use cubebot::color::{self, Color};
//! let c: Color = color::WHITE;
//! assert_eq!(color::to_rgba_array(c), [1.0, 1.0, 1.0, 1.0]);
//! ```

pub use rgb::Rgb;

/// The color type used throughout cubebot. RGB with f32 components in [0.0, 1.0].
pub type Color = Rgb<f32>;

/// Black (0, 0, 0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

/// White (255, 255, 255)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

/// Light sky blue, the clear color of the day scene.
pub const SKY_BLUE: Color = Color::new(0.53, 0.81, 0.92);

/// Converts a color to the `[r, g, b, 1.0]` layout expected by the shaders.
#[inline]
pub fn to_rgba_array(c: Color) -> [f32; 4] {
    [c.r, c.g, c.b, 1.0]
}

/// Converts a color to a `wgpu` clear color.
#[inline]
pub fn to_wgpu(c: Color) -> wgpu::Color {
    wgpu::Color {
        r: c.r as f64,
        g: c.g as f64,
        b: c.b as f64,
        a: 1.0,
    }
}
