//! Joint angles of the robot.

/// Number of rotational degrees of freedom of the robot.
pub const JOINT_COUNT: usize = 10;

/// A side of the body.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The robot's left side (negative X).
    Left,
    /// The robot's right side (positive X).
    Right,
}

impl Side {
    /// Sign of the X offset of this side's anchors: `-1.0` on the left, `1.0` on the right.
    #[inline]
    pub fn x_sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// A named rotational degree of freedom of the robot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Joint {
    Neck,
    ShoulderLeft,
    ElbowLeft,
    ShoulderRight,
    ElbowRight,
    HipLeft,
    KneeLeft,
    HipRight,
    KneeRight,
    /// Yaw of the whole torso about the vertical axis.
    TorsoRotation,
}

impl Joint {
    /// Every joint, in declaration order.
    pub const ALL: [Joint; JOINT_COUNT] = [
        Joint::Neck,
        Joint::ShoulderLeft,
        Joint::ElbowLeft,
        Joint::ShoulderRight,
        Joint::ElbowRight,
        Joint::HipLeft,
        Joint::KneeLeft,
        Joint::HipRight,
        Joint::KneeRight,
        Joint::TorsoRotation,
    ];

    /// Position of this joint in [`Joint::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// A human-readable name, used in log messages.
    pub fn name(self) -> &'static str {
        match self {
            Joint::Neck => "neck",
            Joint::ShoulderLeft => "left shoulder",
            Joint::ElbowLeft => "left elbow",
            Joint::ShoulderRight => "right shoulder",
            Joint::ElbowRight => "right elbow",
            Joint::HipLeft => "left hip",
            Joint::KneeLeft => "left knee",
            Joint::HipRight => "right hip",
            Joint::KneeRight => "right knee",
            Joint::TorsoRotation => "torso",
        }
    }
}

/// The angle, in degrees, of every joint of the robot.
///
/// Angles are not clamped: manual input may accumulate them without bound.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointState {
    pub neck: f32,
    pub shoulder_left: f32,
    pub elbow_left: f32,
    pub shoulder_right: f32,
    pub elbow_right: f32,
    pub hip_left: f32,
    pub knee_left: f32,
    pub hip_right: f32,
    pub knee_right: f32,
    pub torso_rotation: f32,
}

impl JointState {
    /// The rest pose: every angle at zero.
    pub const ZERO: JointState = JointState {
        neck: 0.0,
        shoulder_left: 0.0,
        elbow_left: 0.0,
        shoulder_right: 0.0,
        elbow_right: 0.0,
        hip_left: 0.0,
        knee_left: 0.0,
        hip_right: 0.0,
        knee_right: 0.0,
        torso_rotation: 0.0,
    };

    /// The angle of `joint`, in degrees.
    #[inline]
    pub fn get(&self, joint: Joint) -> f32 {
        match joint {
            Joint::Neck => self.neck,
            Joint::ShoulderLeft => self.shoulder_left,
            Joint::ElbowLeft => self.elbow_left,
            Joint::ShoulderRight => self.shoulder_right,
            Joint::ElbowRight => self.elbow_right,
            Joint::HipLeft => self.hip_left,
            Joint::KneeLeft => self.knee_left,
            Joint::HipRight => self.hip_right,
            Joint::KneeRight => self.knee_right,
            Joint::TorsoRotation => self.torso_rotation,
        }
    }

    /// A mutable reference to the angle of `joint`.
    #[inline]
    pub fn get_mut(&mut self, joint: Joint) -> &mut f32 {
        match joint {
            Joint::Neck => &mut self.neck,
            Joint::ShoulderLeft => &mut self.shoulder_left,
            Joint::ElbowLeft => &mut self.elbow_left,
            Joint::ShoulderRight => &mut self.shoulder_right,
            Joint::ElbowRight => &mut self.elbow_right,
            Joint::HipLeft => &mut self.hip_left,
            Joint::KneeLeft => &mut self.knee_left,
            Joint::HipRight => &mut self.hip_right,
            Joint::KneeRight => &mut self.knee_right,
            Joint::TorsoRotation => &mut self.torso_rotation,
        }
    }
}

/// The single owner of the robot's [`JointState`].
///
/// Writers (manual input and the animation drivers) go through the named
/// setters; the pose solver reads a copy through [`JointStore::state`].
/// No range validation is performed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JointStore {
    state: JointState,
}

impl JointStore {
    /// Creates a store with every joint at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hip and knee angles of one leg.
    pub fn set_leg_joints(&mut self, side: Side, hip_deg: f32, knee_deg: f32) {
        match side {
            Side::Left => {
                self.state.hip_left = hip_deg;
                self.state.knee_left = knee_deg;
            }
            Side::Right => {
                self.state.hip_right = hip_deg;
                self.state.knee_right = knee_deg;
            }
        }
    }

    /// Sets both shoulder angles at once.
    pub fn set_arm_pair(&mut self, left_shoulder_deg: f32, right_shoulder_deg: f32) {
        self.state.shoulder_left = left_shoulder_deg;
        self.state.shoulder_right = right_shoulder_deg;
    }

    /// Sets the neck yaw.
    pub fn set_neck(&mut self, deg: f32) {
        self.state.neck = deg;
    }

    /// Sets the torso yaw.
    pub fn set_torso_rotation(&mut self, deg: f32) {
        self.state.torso_rotation = deg;
    }

    /// Adds `delta_deg` to the angle of `joint`.
    pub fn add_to(&mut self, joint: Joint, delta_deg: f32) {
        *self.state.get_mut(joint) += delta_deg;
    }

    /// The current angle of `joint`.
    #[inline]
    pub fn joint(&self, joint: Joint) -> f32 {
        self.state.get(joint)
    }

    /// A snapshot of every joint angle.
    #[inline]
    pub fn state(&self) -> JointState {
        self.state
    }

    /// Puts every joint back at zero.
    pub fn reset(&mut self) {
        self.state = JointState::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_starts_at_rest() {
        assert_eq!(JointStore::new().state(), JointState::ZERO);
    }

    #[test]
    fn leg_setter_only_touches_one_side() {
        let mut store = JointStore::new();
        store.set_leg_joints(Side::Right, 12.0, -7.0);

        let state = store.state();
        assert_eq!(state.hip_right, 12.0);
        assert_eq!(state.knee_right, -7.0);
        assert_eq!(state.hip_left, 0.0);
        assert_eq!(state.knee_left, 0.0);
    }

    #[test]
    fn named_setters_write_their_joints() {
        let mut store = JointStore::new();
        store.set_arm_pair(10.0, -10.0);
        store.set_neck(5.0);
        store.set_torso_rotation(400.0);

        assert_eq!(store.joint(Joint::ShoulderLeft), 10.0);
        assert_eq!(store.joint(Joint::ShoulderRight), -10.0);
        assert_eq!(store.joint(Joint::Neck), 5.0);
        // No clamping, even past a full turn.
        assert_eq!(store.joint(Joint::TorsoRotation), 400.0);
    }

    #[test]
    fn keyed_access_matches_fields() {
        let mut state = JointState::ZERO;
        for (i, joint) in Joint::ALL.iter().enumerate() {
            assert_eq!(joint.index(), i);
            *state.get_mut(*joint) = i as f32 + 1.0;
        }

        assert_eq!(state.neck, 1.0);
        assert_eq!(state.knee_right, 9.0);
        assert_eq!(state.torso_rotation, 10.0);
        for joint in Joint::ALL {
            assert_eq!(state.get(joint), joint.index() as f32 + 1.0);
        }
    }

    #[test]
    fn add_to_accumulates_and_reset_clears() {
        let mut store = JointStore::new();
        store.add_to(Joint::ElbowLeft, 30.0);
        store.add_to(Joint::ElbowLeft, 30.0);
        assert_eq!(store.joint(Joint::ElbowLeft), 60.0);

        store.reset();
        assert_eq!(store.state(), JointState::ZERO);
    }
}
