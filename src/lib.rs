/*!
# Cubebot

An articulated robot made of cubes, animated procedurally.

The robot is ten boxes (torso, head, two two-part arms and two two-part legs)
driven by ten joint angles. Every frame, the angles are written by the
keyboard and by a handful of animation drivers, then a forward-kinematics
solver turns them into one world transform per box.

## Features

* a fixed joint hierarchy solved in a single pass, with no scene graph.
* toggleable procedural drivers: idle walk, arm wave, head bob and torso sway.
* a one-shot step cycle moving the left leg forward and back in one second.
* manual control of every joint with held keys.
* three lighting scenes and three cameras (orbit, static front and free).

Everything except the window is usable headless. Driving the robot for one
frame and inspecting the result is a few lines:

```
use cubebot::prelude::*;

let mut demo = RobotDemo::default();
let mut keyboard = KeyboardState::new();
keyboard.press(Key::P); // start a step

let frame = demo.frame(&keyboard, FrameTime { elapsed: 0.1, dt: 0.1 });
assert!(demo.controller().step().is_active());
assert!(frame.joints.hip_left > 0.0);
```

The `cubebot` binary opens a window with the default key bindings:

* `Space`: idle walk, `P`: step, `W`: arm wave, `B`: head bob, `T`: torso sway.
* `R`: reset every joint and stop every animation.
* `1`, `2`, `3`: day, night and sunset scenes.
* `O`, `I`, `U`: orbit, static and free cameras.
* `Escape`: quit.
*/
#![allow(clippy::module_inception)]
#![allow(clippy::too_many_arguments)]

pub use glamx;

pub mod animation;
pub mod camera;
pub mod clock;
pub mod color;
pub mod config;
pub mod context;
pub mod demo;
pub mod error;
pub mod input;
pub mod light;
pub mod procedural;
pub mod renderer;
pub mod resource;
pub mod robot;
pub mod scene;
pub mod window;

pub mod prelude {
    pub use crate::animation::*;
    pub use crate::camera::*;
    pub use crate::clock::*;
    pub use crate::color::*;
    pub use crate::config::*;
    pub use crate::demo::*;
    pub use crate::error::*;
    pub use crate::input::*;
    pub use crate::light::*;
    pub use crate::renderer::*;
    pub use crate::robot::*;
    pub use crate::scene::*;
    pub use glamx::{Mat4, Vec3};
}
