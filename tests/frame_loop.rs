use cubebot::prelude::*;

const DT: f32 = 1.0 / 128.0;

struct Harness {
    demo: RobotDemo,
    keyboard: KeyboardState,
    time: FrameTime,
}

impl Harness {
    fn new() -> Self {
        Harness {
            demo: RobotDemo::default(),
            keyboard: KeyboardState::new(),
            time: FrameTime::default(),
        }
    }

    fn frame(&mut self) -> Frame {
        self.time = self.time.next(DT);
        self.demo.frame(&self.keyboard, self.time)
    }

    /// Presses `key` for one frame, then releases it.
    fn tap(&mut self, key: Key) -> Frame {
        self.keyboard.press(key);
        let frame = self.frame();
        self.keyboard.release(key);
        frame
    }

    fn run(&mut self, frames: usize) -> Frame {
        let mut frame = self.frame();
        for _ in 1..frames {
            frame = self.frame();
        }
        frame
    }
}

#[test]
fn step_takes_one_second_and_returns_to_neutral() {
    let mut h = Harness::new();
    h.tap(Key::P);
    assert!(h.demo.controller().step().is_active());

    let mut frames = 1;
    let mut peak_hip = 0.0f32;
    while h.demo.controller().step().is_active() {
        let frame = h.frame();
        peak_hip = peak_hip.max(frame.joints.hip_left);
        frames += 1;
        assert!(frames < 1000, "step never ended");
    }

    let duration = frames as f32 * DT;
    assert!((duration - 1.0).abs() <= 4.0 * DT, "step took {duration}s");
    assert!((peak_hip - STEP_HIP_DEG).abs() < 1.0e-3);

    let joints = h.demo.joints().state();
    assert!(joints.hip_left.abs() < 1.0e-4);
    assert!(joints.knee_left.abs() < 1.0e-4);
}

#[test]
fn step_key_held_does_not_restart_the_step() {
    let mut h = Harness::new();
    h.keyboard.press(Key::P);
    h.run(64);

    let step = h.demo.controller().step();
    assert_eq!(step.phase(), StepPhase::HoldForward);
}

#[test]
fn reset_stops_everything() {
    let mut h = Harness::new();
    for key in [Key::Space, Key::W, Key::B, Key::T, Key::P] {
        h.tap(key);
    }
    h.keyboard.press(Key::K);
    h.run(20);
    h.keyboard.release(Key::K);

    assert!(h.demo.controller().is_enabled(Drivers::ARM_WAVE));
    assert_ne!(h.demo.joints().state(), JointState::ZERO);

    let frame = h.tap(Key::R);
    assert_eq!(frame.joints, JointState::ZERO);
    assert_eq!(h.demo.controller().enabled(), Drivers::empty());
    assert!(!h.demo.controller().step().is_active());

    // Nothing moves afterwards.
    let frame = h.run(30);
    assert_eq!(frame.joints, JointState::ZERO);
}

#[test]
fn disabling_a_driver_zeroes_its_joints_on_the_next_frame() {
    let mut h = Harness::new();
    h.tap(Key::T);
    h.run(50);
    assert_ne!(h.demo.joints().joint(Joint::TorsoRotation), 0.0);

    let frame = h.tap(Key::T);
    assert_eq!(frame.joints.torso_rotation, 0.0);
}

#[test]
fn manual_angle_survives_a_disabled_driver() {
    let mut h = Harness::new();
    h.keyboard.press(Key::Q);
    h.run(64);
    h.keyboard.release(Key::Q);

    let neck = h.run(10).joints.neck;
    assert!((neck - 30.0).abs() < 1.0e-3, "neck {neck}");
}

#[test]
fn scene_and_camera_switching() {
    let mut h = Harness::new();
    assert_eq!(h.frame().scene, ScenePreset::Day.scene());

    let frame = h.tap(Key::Key3);
    assert_eq!(frame.scene.name, "Sunset Scene");

    h.tap(Key::I);
    assert_eq!(h.demo.camera().mode(), CameraMode::Static);
    let frame = h.frame();
    assert_eq!(frame.eye, Vec3::new(0.0, 2.5, 8.0));

    h.tap(Key::U);
    assert_eq!(h.demo.camera().mode(), CameraMode::Free);
    h.tap(Key::O);
    assert_eq!(h.demo.camera().mode(), CameraMode::Orbit);
}

#[test]
fn frame_draws_ground_then_every_segment() {
    let mut h = Harness::new();
    h.tap(Key::Key2);
    let frame = h.frame();

    let mut list = DrawList::new();
    frame.render(&mut list);

    assert_eq!(list.len(), 1 + SEGMENT_COUNT);
    assert_eq!(list.calls()[0].color, ScenePreset::Night.scene().ground);
    for (call, segment) in list.calls()[1..].iter().zip(frame.pose.iter()) {
        assert_eq!(call.transform, segment.transform);
    }

    let uniforms = list.frame().copied().unwrap();
    assert_eq!(uniforms.background, ScenePreset::Night.scene().background);
    assert_eq!(uniforms.eye, frame.eye);
}

#[test]
fn idle_walk_overrides_held_leg_keys() {
    let mut h = Harness::new();
    h.tap(Key::Space);
    h.keyboard.press(Key::D);
    h.keyboard.press(Key::C);

    for _ in 0..64 {
        let frame = h.frame();
        let (hip, knee) = idle_walk(h.time.elapsed);
        assert_eq!(frame.joints.hip_left, hip);
        assert_eq!(frame.joints.knee_left, knee);
    }
}

#[test]
fn moving_step_overrides_held_leg_keys() {
    let mut plain = Harness::new();
    plain.tap(Key::P);
    let mut held = Harness::new();
    held.tap(Key::P);
    held.keyboard.press(Key::D);
    held.keyboard.press(Key::C);

    while held.demo.controller().step().phase() == StepPhase::MoveForward {
        let expected = plain.frame().joints;
        let frame = held.frame();
        assert_eq!(frame.joints.hip_left, expected.hip_left);
        assert_eq!(frame.joints.knee_left, expected.knee_left);
    }
}

#[test]
fn step_holds_keep_the_leg_still_under_held_keys() {
    let mut h = Harness::new();
    h.tap(Key::P);
    while h.demo.controller().step().phase() != StepPhase::HoldForward {
        h.frame();
    }

    h.keyboard.press(Key::D);
    h.keyboard.press(Key::C);
    while h.demo.controller().step().phase() == StepPhase::HoldForward {
        let frame = h.frame();
        assert_eq!(frame.joints.hip_left, STEP_HIP_DEG);
        assert_eq!(frame.joints.knee_left, STEP_KNEE_DEG);
    }

    while h.demo.controller().step().phase() != StepPhase::HoldNeutral {
        h.frame();
    }
    h.keyboard.release(Key::D);
    h.keyboard.press(Key::F);
    while h.demo.controller().step().is_active() {
        let frame = h.frame();
        assert_eq!(frame.joints.hip_left, 0.0);
        assert_eq!(frame.joints.knee_left, 0.0);
    }

    // Once the step is over, the keys move the leg again.
    let frame = h.run(8);
    assert!(frame.joints.hip_left < 0.0);
    assert!(frame.joints.knee_left > 0.0);
}
