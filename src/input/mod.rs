//! Keyboard state, key bindings and per-frame input sampling.

pub use self::binder::{FrameInput, InputBinder};
pub use self::bindings::{Bindings, JointKeys, Triggers};
pub use self::key::{Action, Key, KEY_COUNT};
pub use self::keyboard::KeyboardState;

mod binder;
mod bindings;
mod key;
mod keyboard;
