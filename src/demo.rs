//! Per-frame orchestration of the robot demo, independent of any window.

use crate::animation::{AnimationController, Drivers, ManualDrive};
use crate::camera::{CameraMode, CameraRig};
use crate::clock::FrameTime;
use crate::config::DemoConfig;
use crate::input::{Bindings, FrameInput, InputBinder, KeyboardState, Triggers};
use crate::renderer::{FrameUniforms, Renderer};
use crate::robot::{JointState, JointStore, Pose};
use crate::scene::{Scene, ScenePreset, SceneManager};
use glamx::{Mat4, Vec3};
use log::info;

const LEG_TOGGLES: [(Triggers, Drivers); 1] = [(Triggers::TOGGLE_IDLE_WALK, Drivers::IDLE_WALK)];

const UPPER_BODY_TOGGLES: [(Triggers, Drivers); 3] = [
    (Triggers::TOGGLE_ARM_WAVE, Drivers::ARM_WAVE),
    (Triggers::TOGGLE_HEAD_BOB, Drivers::HEAD_BOB),
    (Triggers::TOGGLE_TORSO_SWAY, Drivers::TORSO_SWAY),
];

const SCENE_TRIGGERS: [(Triggers, ScenePreset); 3] = [
    (Triggers::SCENE_DAY, ScenePreset::Day),
    (Triggers::SCENE_NIGHT, ScenePreset::Night),
    (Triggers::SCENE_SUNSET, ScenePreset::Sunset),
];

const CAMERA_TRIGGERS: [(Triggers, CameraMode); 3] = [
    (Triggers::CAMERA_ORBIT, CameraMode::Orbit),
    (Triggers::CAMERA_STATIC, CameraMode::Static),
    (Triggers::CAMERA_FREE, CameraMode::Free),
];

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// The solved robot.
    pub pose: Pose,
    /// The joint angles the pose was solved from.
    pub joints: JointState,
    pub view: Mat4,
    pub projection: Mat4,
    /// World-space camera position.
    pub eye: Vec3,
    pub scene: Scene,
    /// Set when the quit key went down this frame.
    pub quit: bool,
}

impl Frame {
    /// The frame parameters handed to [`Renderer::begin_frame`].
    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            view: self.view,
            projection: self.projection,
            eye: self.eye,
            light: self.scene.light,
            background: self.scene.background,
        }
    }

    /// Draws the ground slab, then every robot segment.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.begin_frame(&self.uniforms());
        renderer.draw_cube(&self.scene.ground_transform(), self.scene.ground);
        renderer.draw_pose(&self.pose);
    }
}

/// The robot, its animation state, the cameras and the lighting scenes.
///
/// Each call to [`RobotDemo::frame`] runs one iteration of the loop:
/// input sampling, manual drive, commands, animation drivers, camera update
/// and pose solve.
#[derive(Clone, Debug)]
pub struct RobotDemo {
    joints: JointStore,
    controller: AnimationController,
    binder: InputBinder,
    manual: ManualDrive,
    camera: CameraRig,
    scenes: SceneManager,
}

impl Default for RobotDemo {
    fn default() -> Self {
        RobotDemo::new(&DemoConfig::default())
    }
}

impl RobotDemo {
    pub fn new(config: &DemoConfig) -> Self {
        let mut camera = CameraRig::new(config.camera);
        camera
            .projection_mut()
            .set_framebuffer_size(config.width, config.height);

        RobotDemo {
            joints: JointStore::new(),
            controller: AnimationController::new(),
            binder: InputBinder::new(Bindings::default()),
            manual: ManualDrive::new(config.manual_speed),
            camera,
            scenes: SceneManager::new(config.scene),
        }
    }

    #[inline]
    pub fn joints(&self) -> &JointStore {
        &self.joints
    }

    #[inline]
    pub fn controller(&self) -> &AnimationController {
        &self.controller
    }

    #[inline]
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    #[inline]
    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    /// The key map, for rebinding.
    pub fn bindings_mut(&mut self) -> &mut Bindings {
        self.binder.bindings_mut()
    }

    /// Updates the projection aspect ratio after a resize.
    pub fn set_framebuffer_size(&mut self, width: u32, height: u32) {
        self.camera
            .projection_mut()
            .set_framebuffer_size(width, height);
    }

    /// Advances the demo by one frame.
    pub fn frame(&mut self, keyboard: &KeyboardState, time: FrameTime) -> Frame {
        let input = self.binder.sample(keyboard);

        // The free camera reads the same letter keys.
        if self.camera.mode() != CameraMode::Free {
            self.manual.apply(&mut self.joints, &input.holds, time.dt);
        }

        self.handle_triggers(&input);
        self.controller.update(&mut self.joints, time);
        self.camera.update(time, keyboard);

        let joints = self.joints.state();
        Frame {
            pose: Pose::solve(&joints),
            joints,
            view: self.camera.view_matrix(),
            projection: self.camera.projection().matrix(),
            eye: self.camera.eye(),
            scene: self.scenes.current(),
            quit: input.triggers.contains(Triggers::QUIT),
        }
    }

    fn handle_triggers(&mut self, input: &FrameInput) {
        let triggers = input.triggers;

        for (trigger, preset) in SCENE_TRIGGERS {
            if triggers.contains(trigger) {
                self.scenes.set_scene(preset);
                info!("Scene: {}", preset.scene().name);
            }
        }

        for (trigger, mode) in CAMERA_TRIGGERS {
            if triggers.contains(trigger) {
                self.camera.set_mode(mode);
                info!("Camera: {}", mode.label());
            }
        }

        // Leg commands, then reset, then the upper-body toggles.
        self.toggle_drivers(triggers, &LEG_TOGGLES);

        if triggers.contains(Triggers::STEP) && self.controller.trigger_step() {
            info!("Step: started");
        }

        if triggers.contains(Triggers::RESET) {
            self.controller.reset(&mut self.joints);
            info!("Reset: All animations stopped");
        }

        self.toggle_drivers(triggers, &UPPER_BODY_TOGGLES);
    }

    fn toggle_drivers(&mut self, triggers: Triggers, toggles: &[(Triggers, Drivers)]) {
        for &(trigger, drivers) in toggles {
            if triggers.contains(trigger) {
                let on = self.controller.toggle(drivers);
                info!("{}: {}", drivers.label(), if on { "ON" } else { "OFF" });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::robot::Joint;

    const DT: f32 = 1.0 / 60.0;

    fn press_once(demo: &mut RobotDemo, time: &mut FrameTime, key: Key) -> Frame {
        let mut keyboard = KeyboardState::new();
        keyboard.press(key);
        *time = time.next(DT);
        let frame = demo.frame(&keyboard, *time);
        keyboard.release(key);
        *time = time.next(DT);
        demo.frame(&keyboard, *time);
        frame
    }

    #[test]
    fn held_key_drives_its_joint() {
        let mut demo = RobotDemo::default();
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::D);

        let mut time = FrameTime::default();
        for _ in 0..30 {
            time = time.next(DT);
            demo.frame(&keyboard, time);
        }

        assert!((demo.joints().joint(Joint::HipLeft) - 30.0).abs() < 1.0e-3);
    }

    #[test]
    fn manual_drive_is_ignored_in_free_camera_mode() {
        let mut demo = RobotDemo::new(&DemoConfig::default().with_camera(CameraMode::Free));
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::Q);

        let frame = demo.frame(&keyboard, FrameTime::default().next(DT));
        assert_eq!(frame.joints, JointState::ZERO);
    }

    #[test]
    fn toggles_fire_once_per_press() {
        let mut demo = RobotDemo::default();
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::B);

        let mut time = FrameTime::default();
        for _ in 0..5 {
            time = time.next(DT);
            demo.frame(&keyboard, time);
        }

        assert!(demo.controller().is_enabled(Drivers::HEAD_BOB));
    }

    #[test]
    fn scene_and_camera_keys() {
        let mut demo = RobotDemo::default();
        let mut time = FrameTime::default();

        let frame = press_once(&mut demo, &mut time, Key::Key2);
        assert_eq!(frame.scene, ScenePreset::Night.scene());
        assert_eq!(demo.scenes().current_index(), 1);

        press_once(&mut demo, &mut time, Key::I);
        assert_eq!(demo.camera().mode(), CameraMode::Static);
    }

    #[test]
    fn reset_sits_between_leg_and_upper_body_commands() {
        let mut demo = RobotDemo::default();
        let mut time = FrameTime::default();
        press_once(&mut demo, &mut time, Key::B);
        press_once(&mut demo, &mut time, Key::P);
        assert_ne!(demo.joints().joint(Joint::Neck), 0.0);

        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::R);
        keyboard.press(Key::W);
        time = time.next(DT);
        let frame = demo.frame(&keyboard, time);

        assert_eq!(demo.controller().enabled(), Drivers::ARM_WAVE);
        assert!(!demo.controller().step().is_active());
        assert_eq!(frame.joints.neck, 0.0);
        assert_eq!(frame.joints.hip_left, 0.0);
        let (left, right) = crate::animation::arm_wave(time.elapsed);
        assert_eq!(frame.joints.shoulder_left, left);
        assert_eq!(frame.joints.shoulder_right, right);

        // Idle walk and step requests on the reset frame are cancelled by it.
        let mut keyboard = KeyboardState::new();
        time = time.next(DT);
        demo.frame(&keyboard, time);
        keyboard.press(Key::R);
        keyboard.press(Key::Space);
        keyboard.press(Key::P);
        time = time.next(DT);
        let frame = demo.frame(&keyboard, time);

        assert_eq!(demo.controller().enabled(), Drivers::empty());
        assert!(!demo.controller().step().is_active());
        assert_eq!(frame.joints.hip_left, 0.0);
    }

    #[test]
    fn escape_requests_quit() {
        let mut demo = RobotDemo::default();
        let mut time = FrameTime::default();
        assert!(press_once(&mut demo, &mut time, Key::Escape).quit);
        time = time.next(DT);
        assert!(!demo.frame(&KeyboardState::new(), time).quit);
    }
}
