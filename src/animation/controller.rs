use crate::animation::{arm_wave, head_bob, idle_walk, torso_sway, StepCycle};
use crate::clock::FrameTime;
use crate::robot::{JointStore, Side};

bitflags::bitflags! {
    /// The toggleable animation drivers.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Drivers: u8 {
        /// Swings the left leg (hip and knee).
        const IDLE_WALK = 1 << 0;
        /// Swings both shoulders in opposition.
        const ARM_WAVE = 1 << 1;
        /// Turns the head left and right.
        const HEAD_BOB = 1 << 2;
        /// Turns the torso left and right.
        const TORSO_SWAY = 1 << 3;
    }
}

impl Drivers {
    /// A human-readable name for a single driver flag. Empty and combined
    /// sets are named `"Drivers"`.
    pub fn label(self) -> &'static str {
        match self {
            Drivers::IDLE_WALK => "Idle walk",
            Drivers::ARM_WAVE => "Arm wave",
            Drivers::HEAD_BOB => "Head bob",
            Drivers::TORSO_SWAY => "Torso sway",
            _ => "Drivers",
        }
    }
}

/// Enable flags of the toggleable drivers and the state of the step cycle.
///
/// Drivers write into the joint store in a fixed order, so that later writers
/// win: idle walk, step, arm wave, head bob, torso sway. Manual drive must be
/// applied before [`AnimationController::update`].
///
/// When arm wave, head bob or torso sway goes from enabled to disabled, its
/// joints are set back to 0° on the next update. Joints of a driver that stays
/// disabled are left alone.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationController {
    enabled: Drivers,
    applied: Drivers,
    step: StepCycle,
}

impl AnimationController {
    /// A controller with every driver off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips `drivers` on or off. Returns `true` if they are now enabled.
    pub fn toggle(&mut self, drivers: Drivers) -> bool {
        self.enabled.toggle(drivers);
        self.enabled.contains(drivers)
    }

    pub fn set_enabled(&mut self, drivers: Drivers, enabled: bool) {
        self.enabled.set(drivers, enabled);
    }

    #[inline]
    pub fn is_enabled(&self, drivers: Drivers) -> bool {
        self.enabled.contains(drivers)
    }

    /// The set of drivers currently enabled.
    #[inline]
    pub fn enabled(&self) -> Drivers {
        self.enabled
    }

    /// Starts a single step. Ignored, returning `false`, while a step is running.
    pub fn trigger_step(&mut self) -> bool {
        self.step.trigger()
    }

    #[inline]
    pub fn step(&self) -> &StepCycle {
        &self.step
    }

    /// Zeroes every joint, stops the step and disables every driver.
    pub fn reset(&mut self, joints: &mut JointStore) {
        joints.reset();
        self.step.cancel();
        self.enabled = Drivers::empty();
        self.applied = Drivers::empty();
    }

    /// Runs every driver for one frame.
    pub fn update(&mut self, joints: &mut JointStore, time: FrameTime) {
        let t = time.elapsed;
        let released = self.applied - self.enabled;

        if self.enabled.contains(Drivers::IDLE_WALK) {
            let (hip, knee) = idle_walk(t);
            joints.set_leg_joints(Side::Left, hip, knee);
        }

        if let Some((hip, knee)) = self.step.update(time.dt) {
            joints.set_leg_joints(Side::Left, hip, knee);
        }

        if self.enabled.contains(Drivers::ARM_WAVE) {
            let (left, right) = arm_wave(t);
            joints.set_arm_pair(left, right);
        } else if released.contains(Drivers::ARM_WAVE) {
            joints.set_arm_pair(0.0, 0.0);
        }

        if self.enabled.contains(Drivers::HEAD_BOB) {
            joints.set_neck(head_bob(t));
        } else if released.contains(Drivers::HEAD_BOB) {
            joints.set_neck(0.0);
        }

        if self.enabled.contains(Drivers::TORSO_SWAY) {
            joints.set_torso_rotation(torso_sway(t));
        } else if released.contains(Drivers::TORSO_SWAY) {
            joints.set_torso_rotation(0.0);
        }

        self.applied = self.enabled;
    }
}
