use crate::input::Key;
use crate::robot::Joint;

bitflags::bitflags! {
    /// One-shot commands fired by a key press.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Triggers: u16 {
        const TOGGLE_IDLE_WALK = 1 << 0;
        const STEP = 1 << 1;
        const RESET = 1 << 2;
        const TOGGLE_ARM_WAVE = 1 << 3;
        const TOGGLE_HEAD_BOB = 1 << 4;
        const TOGGLE_TORSO_SWAY = 1 << 5;
        const SCENE_DAY = 1 << 6;
        const SCENE_NIGHT = 1 << 7;
        const SCENE_SUNSET = 1 << 8;
        const CAMERA_ORBIT = 1 << 9;
        const CAMERA_STATIC = 1 << 10;
        const CAMERA_FREE = 1 << 11;
        const QUIT = 1 << 12;
    }
}

/// The pair of keys driving one joint up and down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointKeys {
    pub joint: Joint,
    pub increase: Key,
    pub decrease: Key,
}

/// The key map of the demo.
///
/// A key may drive a joint and fire a trigger at the same time; with the
/// default map `R`, `W`, `B` and `T` do not collide with any joint key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bindings {
    joints: Vec<JointKeys>,
    triggers: Vec<(Key, Triggers)>,
}

impl Default for Bindings {
    fn default() -> Self {
        let joints = [
            (Joint::Neck, Key::Q, Key::E),
            (Joint::ShoulderLeft, Key::A, Key::S),
            (Joint::ElbowLeft, Key::Z, Key::X),
            (Joint::ShoulderRight, Key::K, Key::J),
            (Joint::ElbowRight, Key::M, Key::N),
            (Joint::HipLeft, Key::D, Key::F),
            (Joint::KneeLeft, Key::C, Key::V),
            (Joint::HipRight, Key::H, Key::G),
            (Joint::KneeRight, Key::Comma, Key::Period),
            (Joint::TorsoRotation, Key::LBracket, Key::RBracket),
        ]
        .into_iter()
        .map(|(joint, increase, decrease)| JointKeys {
            joint,
            increase,
            decrease,
        })
        .collect();

        let triggers = vec![
            (Key::Space, Triggers::TOGGLE_IDLE_WALK),
            (Key::P, Triggers::STEP),
            (Key::R, Triggers::RESET),
            (Key::W, Triggers::TOGGLE_ARM_WAVE),
            (Key::B, Triggers::TOGGLE_HEAD_BOB),
            (Key::T, Triggers::TOGGLE_TORSO_SWAY),
            (Key::Key1, Triggers::SCENE_DAY),
            (Key::Key2, Triggers::SCENE_NIGHT),
            (Key::Key3, Triggers::SCENE_SUNSET),
            (Key::O, Triggers::CAMERA_ORBIT),
            (Key::I, Triggers::CAMERA_STATIC),
            (Key::U, Triggers::CAMERA_FREE),
            (Key::Escape, Triggers::QUIT),
        ];

        Bindings { joints, triggers }
    }
}

impl Bindings {
    /// A key map with nothing bound.
    pub fn empty() -> Self {
        Bindings {
            joints: Vec::new(),
            triggers: Vec::new(),
        }
    }

    /// Binds `joint` to a pair of keys, replacing its previous binding.
    pub fn bind_joint(&mut self, joint: Joint, increase: Key, decrease: Key) {
        self.joints.retain(|keys| keys.joint != joint);
        self.joints.push(JointKeys {
            joint,
            increase,
            decrease,
        });
    }

    /// Binds `key` to fire `triggers`, replacing its previous binding.
    pub fn bind_trigger(&mut self, key: Key, triggers: Triggers) {
        self.triggers.retain(|(k, _)| *k != key);
        self.triggers.push((key, triggers));
    }

    pub fn joint_keys(&self) -> &[JointKeys] {
        &self.joints
    }

    pub fn trigger_keys(&self) -> &[(Key, Triggers)] {
        &self.triggers
    }

    /// The keys bound to `joint`, if any.
    pub fn keys_for_joint(&self, joint: Joint) -> Option<JointKeys> {
        self.joints.iter().copied().find(|keys| keys.joint == joint)
    }

    /// The first key firing `trigger`, if any.
    pub fn key_for_trigger(&self, trigger: Triggers) -> Option<Key> {
        self.triggers
            .iter()
            .find(|(_, t)| t.contains(trigger))
            .map(|(k, _)| *k)
    }
}
