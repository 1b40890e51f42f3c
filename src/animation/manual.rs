//! Key-hold joint drive.

use crate::robot::{Joint, JointStore, JOINT_COUNT};

/// Default manual drive speed, in degrees per second.
pub const DEFAULT_MANUAL_SPEED: f32 = 60.0;

/// The increase/decrease signals held this frame, per joint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct JointHolds {
    increase: [bool; JOINT_COUNT],
    decrease: [bool; JOINT_COUNT],
}

impl JointHolds {
    /// No joint held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `joint` as pushed up (`increase = true`) or down.
    pub fn hold(&mut self, joint: Joint, increase: bool) {
        if increase {
            self.increase[joint.index()] = true;
        } else {
            self.decrease[joint.index()] = true;
        }
    }

    /// Builder-style [`JointHolds::hold`].
    pub fn with(mut self, joint: Joint, increase: bool) -> Self {
        self.hold(joint, increase);
        self
    }

    /// `1.0`, `-1.0`, or `0.0` when neither or both directions are held.
    #[inline]
    pub fn direction(&self, joint: Joint) -> f32 {
        let i = joint.index();
        match (self.increase[i], self.decrease[i]) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.increase.iter().chain(self.decrease.iter()).any(|h| *h)
    }
}

/// Integrates held joint signals at a constant angular speed.
///
/// Angles are accumulated without any limit.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManualDrive {
    speed: f32,
}

impl Default for ManualDrive {
    fn default() -> Self {
        ManualDrive::new(DEFAULT_MANUAL_SPEED)
    }
}

impl ManualDrive {
    /// A drive moving joints at `speed` degrees per second.
    pub fn new(speed: f32) -> Self {
        ManualDrive { speed }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Adds `±speed · dt` to every held joint.
    pub fn apply(&self, joints: &mut JointStore, holds: &JointHolds, dt: f32) {
        let step = self.speed * dt;

        for joint in Joint::ALL {
            let direction = holds.direction(joint);
            if direction != 0.0 {
                joints.add_to(joint, direction * step);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::JointState;

    #[test]
    fn held_joints_move_at_constant_speed() {
        let mut joints = JointStore::new();
        let drive = ManualDrive::default();
        let holds = JointHolds::new()
            .with(Joint::ElbowLeft, true)
            .with(Joint::KneeRight, false);

        for _ in 0..8 {
            drive.apply(&mut joints, &holds, 0.125);
        }

        assert_eq!(joints.joint(Joint::ElbowLeft), 60.0);
        assert_eq!(joints.joint(Joint::KneeRight), -60.0);
        assert_eq!(joints.joint(Joint::Neck), 0.0);
    }

    #[test]
    fn opposite_holds_cancel() {
        let holds = JointHolds::new()
            .with(Joint::Neck, true)
            .with(Joint::Neck, false);
        assert_eq!(holds.direction(Joint::Neck), 0.0);

        let mut joints = JointStore::new();
        ManualDrive::default().apply(&mut joints, &holds, 1.0);
        assert_eq!(joints.state(), JointState::ZERO);
    }

    #[test]
    fn angles_are_unbounded() {
        let mut joints = JointStore::new();
        let holds = JointHolds::new().with(Joint::TorsoRotation, true);

        for _ in 0..10 {
            ManualDrive::new(90.0).apply(&mut joints, &holds, 1.0);
        }
        assert_eq!(joints.joint(Joint::TorsoRotation), 900.0);
    }

    #[test]
    fn empty_holds() {
        assert!(JointHolds::new().is_empty());
        assert!(!JointHolds::new().with(Joint::HipLeft, false).is_empty());
    }
}
