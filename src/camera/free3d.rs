use crate::camera::Camera3d;
use crate::clock::FrameTime;
use crate::input::{Key, KeyboardState};
use glamx::Vec3;

/// Keys driving a [`FreeCamera3d`]. Any of them can be unbound.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FreeCameraKeys {
    pub forward: Option<Key>,
    pub backward: Option<Key>,
    pub left: Option<Key>,
    pub right: Option<Key>,
    pub rise: Option<Key>,
    pub sink: Option<Key>,
    pub turn_left: Option<Key>,
    pub turn_right: Option<Key>,
    pub look_up: Option<Key>,
    pub look_down: Option<Key>,
}

impl Default for FreeCameraKeys {
    fn default() -> Self {
        FreeCameraKeys {
            forward: Some(Key::W),
            backward: Some(Key::S),
            left: Some(Key::A),
            right: Some(Key::D),
            rise: Some(Key::Q),
            sink: Some(Key::E),
            turn_left: Some(Key::Left),
            turn_right: Some(Key::Right),
            look_up: Some(Key::Up),
            look_down: Some(Key::Down),
        }
    }
}

/// A keyboard-driven fly camera.
///
/// The view direction is given by a yaw (about `+Y`, measured from `+X`) and
/// a pitch, both in degrees. Movement is in the view plane; rising and
/// sinking follow the world vertical.
///
/// # Example
/// ```
/// # use cubebot::camera::{Camera3d, FreeCamera3d};
/// # use cubebot::glamx::Vec3;
/// let camera = FreeCamera3d::new(Vec3::new(0.0, 1.0, 5.0), -90.0, 0.0);
/// assert!((camera.front() - Vec3::NEG_Z).length() < 1.0e-6);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FreeCamera3d {
    eye: Vec3,
    yaw: f32,
    pitch: f32,
    move_speed: f32,
    turn_speed: f32,
    keys: FreeCameraKeys,
}

/// Pitch limit, in degrees, keeping the view away from the vertical.
pub const MAX_PITCH: f32 = 89.0;

impl Default for FreeCamera3d {
    fn default() -> Self {
        FreeCamera3d::new(Vec3::new(5.0, 3.0, 5.0), -135.0, -10.0)
    }
}

impl FreeCamera3d {
    /// Creates a free camera at `eye` with the given yaw and pitch, in degrees.
    ///
    /// The camera moves at 3 units per second and turns at 100° per second.
    pub fn new(eye: Vec3, yaw: f32, pitch: f32) -> Self {
        FreeCamera3d {
            eye,
            yaw,
            pitch: pitch.clamp(-MAX_PITCH, MAX_PITCH),
            move_speed: 3.0,
            turn_speed: 100.0,
            keys: FreeCameraKeys::default(),
        }
    }

    /// Sets the movement speed, in units per second.
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Sets the turning speed, in degrees per second.
    pub fn with_turn_speed(mut self, speed: f32) -> Self {
        self.turn_speed = speed;
        self
    }

    pub fn with_keys(mut self, keys: FreeCameraKeys) -> Self {
        self.keys = keys;
        self
    }

    /// The keys driving this camera.
    pub fn keys(&self) -> &FreeCameraKeys {
        &self.keys
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// The unit view direction.
    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    /// The direction the camera moves when strafing right.
    pub fn right(&self) -> Vec3 {
        self.front().cross(Vec3::Y).normalize()
    }

    /// Whether any key driving this camera is held.
    pub fn is_driven(&self, keyboard: &KeyboardState) -> bool {
        let k = &self.keys;
        [
            k.forward,
            k.backward,
            k.left,
            k.right,
            k.rise,
            k.sink,
            k.turn_left,
            k.turn_right,
            k.look_up,
            k.look_down,
        ]
        .into_iter()
        .any(|key| keyboard.is_optional_pressed(key))
    }
}

impl Camera3d for FreeCamera3d {
    fn eye(&self) -> Vec3 {
        self.eye
    }

    fn target(&self) -> Vec3 {
        self.eye + self.front()
    }

    fn update(&mut self, time: FrameTime, keyboard: &KeyboardState) {
        let held = |key| keyboard.is_optional_pressed(key);
        let keys = self.keys;

        let front = self.front();
        let right = self.right();
        let step = self.move_speed * time.dt;

        if held(keys.forward) {
            self.eye += front * step;
        }
        if held(keys.backward) {
            self.eye -= front * step;
        }
        if held(keys.left) {
            self.eye -= right * step;
        }
        if held(keys.right) {
            self.eye += right * step;
        }
        if held(keys.rise) {
            self.eye.y += step;
        }
        if held(keys.sink) {
            self.eye.y -= step;
        }

        let turn = self.turn_speed * time.dt;

        if held(keys.turn_left) {
            self.yaw -= turn;
        }
        if held(keys.turn_right) {
            self.yaw += turn;
        }
        if held(keys.look_up) {
            self.pitch += turn;
        }
        if held(keys.look_down) {
            self.pitch -= turn;
        }

        self.pitch = self.pitch.clamp(-MAX_PITCH, MAX_PITCH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(dt: f32) -> FrameTime {
        FrameTime::default().next(dt)
    }

    #[test]
    fn default_looks_toward_the_robot() {
        let camera = FreeCamera3d::default();
        let to_origin = (Vec3::new(0.0, 1.0, 0.0) - camera.eye()).normalize();
        assert!(camera.front().dot(to_origin) > 0.95);
    }

    #[test]
    fn moves_forward_at_constant_speed() {
        let mut camera = FreeCamera3d::default();
        let start = camera.eye();
        let front = camera.front();

        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::W);
        camera.update(frame(0.5), &keyboard);

        assert!((camera.eye() - (start + front * 1.5)).length() < 1.0e-5);
        assert_eq!(camera.yaw(), -135.0);
    }

    #[test]
    fn speeds_are_configurable() {
        let mut camera = FreeCamera3d::default()
            .with_move_speed(1.0)
            .with_turn_speed(10.0);
        let start = camera.eye();

        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::Q);
        keyboard.press(Key::Left);
        camera.update(frame(1.0), &keyboard);

        assert_eq!(camera.eye(), start + Vec3::Y);
        assert_eq!(camera.yaw(), -145.0);
    }

    #[test]
    fn rise_follows_world_up() {
        let mut camera = FreeCamera3d::default();
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::Q);
        camera.update(frame(1.0), &keyboard);
        assert_eq!(camera.eye(), Vec3::new(5.0, 6.0, 5.0));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = FreeCamera3d::default();
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::Up);

        for _ in 0..10 {
            camera.update(frame(0.5), &keyboard);
        }
        assert_eq!(camera.pitch(), MAX_PITCH);

        keyboard.release(Key::Up);
        keyboard.press(Key::Down);
        for _ in 0..10 {
            camera.update(frame(0.5), &keyboard);
        }
        assert_eq!(camera.pitch(), -MAX_PITCH);
    }

    #[test]
    fn arrows_turn() {
        let mut camera = FreeCamera3d::default();
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::Right);
        camera.update(frame(0.25), &keyboard);
        assert_eq!(camera.yaw(), -110.0);
        assert!(camera.is_driven(&keyboard));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let keys = FreeCameraKeys {
            forward: None,
            ..FreeCameraKeys::default()
        };
        let mut camera = FreeCamera3d::default().with_keys(keys);
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::W);
        camera.update(frame(1.0), &keyboard);

        assert_eq!(camera.eye(), FreeCamera3d::default().eye());
        assert!(!camera.is_driven(&keyboard));
    }
}
