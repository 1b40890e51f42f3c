//! The rigid, cube-shaped body parts of the robot.

use crate::color::Color;
use crate::robot::Side;
use glamx::Vec3;

/// Number of segments drawn each frame.
pub const SEGMENT_COUNT: usize = 10;

/// Full extents of the torso cube.
pub const TORSO_SIZE: Vec3 = Vec3::new(1.0, 1.6, 0.5);
/// Full extents of the head cube.
pub const HEAD_SIZE: Vec3 = Vec3::new(0.5, 0.5, 0.5);
/// Full extents of an upper arm.
pub const UPPER_ARM_SIZE: Vec3 = Vec3::new(0.35, 0.9, 0.35);
/// Full extents of a forearm.
pub const FOREARM_SIZE: Vec3 = Vec3::new(0.30, 0.9, 0.30);
/// Full extents of a thigh.
pub const THIGH_SIZE: Vec3 = Vec3::new(0.45, 1.0, 0.45);
/// Full extents of a shin.
pub const SHIN_SIZE: Vec3 = Vec3::new(0.40, 1.0, 0.40);

/// A body part of the robot.
///
/// The topology is fixed: every segment knows its parent, size and color at
/// compile time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    Torso,
    Head,
    UpperArmLeft,
    ForearmLeft,
    UpperArmRight,
    ForearmRight,
    ThighLeft,
    ShinLeft,
    ThighRight,
    ShinRight,
}

impl Segment {
    /// Every segment, in drawing order.
    pub const ALL: [Segment; SEGMENT_COUNT] = [
        Segment::Torso,
        Segment::Head,
        Segment::UpperArmLeft,
        Segment::ForearmLeft,
        Segment::UpperArmRight,
        Segment::ForearmRight,
        Segment::ThighLeft,
        Segment::ShinLeft,
        Segment::ThighRight,
        Segment::ShinRight,
    ];

    /// Position of this segment in [`Segment::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Segment::Torso => "torso",
            Segment::Head => "head",
            Segment::UpperArmLeft => "upper-arm-L",
            Segment::ForearmLeft => "forearm-L",
            Segment::UpperArmRight => "upper-arm-R",
            Segment::ForearmRight => "forearm-R",
            Segment::ThighLeft => "thigh-L",
            Segment::ShinLeft => "shin-L",
            Segment::ThighRight => "thigh-R",
            Segment::ShinRight => "shin-R",
        }
    }

    /// The segment this one hangs from in the body hierarchy.
    ///
    /// Thighs report the torso as their parent, but their hip anchors are
    /// resolved in the world frame and do not follow the torso's rotation
    /// (see [`Segment::follows_torso_rotation`]).
    pub fn parent(self) -> Option<Segment> {
        match self {
            Segment::Torso => None,
            Segment::Head
            | Segment::UpperArmLeft
            | Segment::UpperArmRight
            | Segment::ThighLeft
            | Segment::ThighRight => Some(Segment::Torso),
            Segment::ForearmLeft => Some(Segment::UpperArmLeft),
            Segment::ForearmRight => Some(Segment::UpperArmRight),
            Segment::ShinLeft => Some(Segment::ThighLeft),
            Segment::ShinRight => Some(Segment::ThighRight),
        }
    }

    /// Whether the torso yaw moves this segment.
    pub fn follows_torso_rotation(self) -> bool {
        !matches!(
            self,
            Segment::ThighLeft | Segment::ShinLeft | Segment::ThighRight | Segment::ShinRight
        )
    }

    /// The side of the body this segment belongs to, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Segment::Torso | Segment::Head => None,
            Segment::UpperArmLeft | Segment::ForearmLeft | Segment::ThighLeft | Segment::ShinLeft => {
                Some(Side::Left)
            }
            Segment::UpperArmRight
            | Segment::ForearmRight
            | Segment::ThighRight
            | Segment::ShinRight => Some(Side::Right),
        }
    }

    /// Full extents of the unit cube once scaled for this segment.
    pub fn size(self) -> Vec3 {
        match self {
            Segment::Torso => TORSO_SIZE,
            Segment::Head => HEAD_SIZE,
            Segment::UpperArmLeft | Segment::UpperArmRight => UPPER_ARM_SIZE,
            Segment::ForearmLeft | Segment::ForearmRight => FOREARM_SIZE,
            Segment::ThighLeft | Segment::ThighRight => THIGH_SIZE,
            Segment::ShinLeft | Segment::ShinRight => SHIN_SIZE,
        }
    }

    /// The flat base color of this segment. Left limbs are red/green, right
    /// limbs blue/darker green.
    pub fn color(self) -> Color {
        match self {
            Segment::Torso => Color::new(0.75, 0.75, 0.85),
            Segment::Head => Color::new(0.9, 0.8, 0.7),
            Segment::UpperArmLeft => Color::new(0.8, 0.3, 0.3),
            Segment::ForearmLeft => Color::new(0.85, 0.4, 0.4),
            Segment::UpperArmRight => Color::new(0.3, 0.3, 0.8),
            Segment::ForearmRight => Color::new(0.4, 0.4, 0.85),
            Segment::ThighLeft => Color::new(0.3, 0.7, 0.3),
            Segment::ShinLeft => Color::new(0.35, 0.8, 0.35),
            Segment::ThighRight => Color::new(0.2, 0.65, 0.2),
            Segment::ShinRight => Color::new(0.25, 0.7, 0.25),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawing_order_matches_indices() {
        for (i, segment) in Segment::ALL.iter().enumerate() {
            assert_eq!(segment.index(), i);
        }
    }

    #[test]
    fn parents_precede_children_in_drawing_order() {
        for segment in Segment::ALL {
            if let Some(parent) = segment.parent() {
                assert!(parent.index() < segment.index(), "{}", segment.name());
            }
        }
    }

    #[test]
    fn limbs_are_mirrored() {
        let pairs = [
            (Segment::UpperArmLeft, Segment::UpperArmRight),
            (Segment::ForearmLeft, Segment::ForearmRight),
            (Segment::ThighLeft, Segment::ThighRight),
            (Segment::ShinLeft, Segment::ShinRight),
        ];

        for (left, right) in pairs {
            assert_eq!(left.size(), right.size());
            assert_eq!(left.side(), Some(Side::Left));
            assert_eq!(right.side(), Some(Side::Right));
            assert_ne!(left.color(), right.color());
        }
    }

    #[test]
    fn only_legs_ignore_torso_rotation() {
        let detached: Vec<_> = Segment::ALL
            .iter()
            .filter(|s| !s.follows_torso_rotation())
            .collect();
        assert_eq!(detached.len(), 4);
        assert!(Segment::Head.follows_torso_rotation());
        assert!(Segment::ForearmRight.follows_torso_rotation());
    }
}
