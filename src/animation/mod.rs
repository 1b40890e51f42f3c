//! Procedural animation drivers writing into the joint store.

pub use self::controller::{AnimationController, Drivers};
pub use self::manual::{JointHolds, ManualDrive, DEFAULT_MANUAL_SPEED};
pub use self::oscillators::{arm_wave, head_bob, idle_walk, torso_sway};
pub use self::step::{
    ease, StepCycle, StepPhase, STEP_HIP_DEG, STEP_HOLD_DURATION, STEP_KNEE_DEG,
    STEP_MOVE_DURATION,
};

mod controller;
mod manual;
mod oscillators;
mod step;
