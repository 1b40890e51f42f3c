//! Keyboard key and action identifiers.

/// Key pressed or released.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// The key was pressed.
    Press,
    /// The key was released.
    #[default]
    Release,
}

/// The keyboard keys the demo reacts to.
///
/// Keys are identified by their physical position (US layout names).
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum Key {
    Key1,
    Key2,
    Key3,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Space,
    Comma,
    Period,
    LBracket,
    RBracket,
    Left,
    Up,
    Right,
    Down,
    Escape,
    /// Any other key.
    Unknown,
}

/// Number of distinct [`Key`] values, `Unknown` included.
pub const KEY_COUNT: usize = Key::Unknown as usize + 1;

impl Key {
    /// Every known key, `Unknown` excluded.
    pub const ALL: [Key; KEY_COUNT - 1] = [
        Key::Key1,
        Key::Key2,
        Key::Key3,
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
        Key::Space,
        Key::Comma,
        Key::Period,
        Key::LBracket,
        Key::RBracket,
        Key::Left,
        Key::Up,
        Key::Right,
        Key::Down,
        Key::Escape,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keys_are_distinct_and_ordered() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(*key as usize, i);
        }
        assert_eq!(Key::Unknown as usize, KEY_COUNT - 1);
    }
}
