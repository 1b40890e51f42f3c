use crate::animation::JointHolds;
use crate::input::{Bindings, KeyboardState, Triggers};

/// What the keyboard asks for during one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Commands whose key went down since the previous sample.
    pub triggers: Triggers,
    /// Joints whose keys are held down right now.
    pub holds: JointHolds,
}

/// Turns raw keyboard state into per-frame [`FrameInput`].
///
/// Triggers fire on the rising edge only: a key held over many frames fires
/// once.
#[derive(Clone, Debug, Default)]
pub struct InputBinder {
    bindings: Bindings,
    previous: KeyboardState,
}

impl InputBinder {
    pub fn new(bindings: Bindings) -> Self {
        InputBinder {
            bindings,
            previous: KeyboardState::new(),
        }
    }

    #[inline]
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    #[inline]
    pub fn bindings_mut(&mut self) -> &mut Bindings {
        &mut self.bindings
    }

    /// Samples `keyboard` for the current frame.
    pub fn sample(&mut self, keyboard: &KeyboardState) -> FrameInput {
        let mut input = FrameInput::default();

        for (key, triggers) in self.bindings.trigger_keys() {
            if keyboard.is_pressed(*key) && !self.previous.is_pressed(*key) {
                input.triggers |= *triggers;
            }
        }

        for keys in self.bindings.joint_keys() {
            if keyboard.is_pressed(keys.increase) {
                input.holds.hold(keys.joint, true);
            }
            if keyboard.is_pressed(keys.decrease) {
                input.holds.hold(keys.joint, false);
            }
        }

        self.previous.clone_from(keyboard);
        input
    }
}
