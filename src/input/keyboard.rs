use crate::input::{Action, Key, KEY_COUNT};

/// The last known [`Action`] of every key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [Action; KEY_COUNT],
}

impl Default for KeyboardState {
    fn default() -> Self {
        KeyboardState {
            keys: [Action::Release; KEY_COUNT],
        }
    }
}

impl KeyboardState {
    /// Every key released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key event.
    #[inline]
    pub fn set(&mut self, key: Key, action: Action) {
        self.keys[key as usize] = action;
    }

    /// Presses `key`.
    #[inline]
    pub fn press(&mut self, key: Key) {
        self.set(key, Action::Press)
    }

    /// Releases `key`.
    #[inline]
    pub fn release(&mut self, key: Key) {
        self.set(key, Action::Release)
    }

    /// Releases every key, e.g., when the window loses focus.
    pub fn release_all(&mut self) {
        self.keys = [Action::Release; KEY_COUNT];
    }

    #[inline]
    pub fn get(&self, key: Key) -> Action {
        self.keys[key as usize]
    }

    /// Whether `key` is currently held down. `Key::Unknown` never is.
    #[inline]
    pub fn is_pressed(&self, key: Key) -> bool {
        key != Key::Unknown && self.get(key) == Action::Press
    }

    /// Whether `key`, if any, is held down.
    #[inline]
    pub fn is_optional_pressed(&self, key: Option<Key>) -> bool {
        key.is_some_and(|key| self.is_pressed(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut keyboard = KeyboardState::new();
        assert!(!keyboard.is_pressed(Key::W));

        keyboard.press(Key::W);
        assert!(keyboard.is_pressed(Key::W));
        assert_eq!(keyboard.get(Key::W), Action::Press);

        keyboard.release(Key::W);
        assert!(!keyboard.is_pressed(Key::W));
    }

    #[test]
    fn unknown_key_is_never_pressed() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::Unknown);
        assert!(!keyboard.is_pressed(Key::Unknown));
        assert!(!keyboard.is_optional_pressed(None));
    }

    #[test]
    fn release_all() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::A);
        keyboard.press(Key::Escape);
        keyboard.release_all();
        assert_eq!(keyboard, KeyboardState::new());
    }
}
