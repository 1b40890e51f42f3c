//! GPU context shared by the canvas and the renderers.

pub use self::context::Context;

mod context;
