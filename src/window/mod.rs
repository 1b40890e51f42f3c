//! The window, its GPU surface and the event loop.

pub use self::app::{run, DemoApp};
pub use self::canvas::Canvas;
pub use self::events::{translate_action, translate_key};

mod app;
mod canvas;
mod events;
