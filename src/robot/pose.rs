//! Forward kinematics: from joint angles to world-space cube placements.

use crate::color::Color;
use crate::robot::{
    Joint, JointState, Segment, Side, HEAD_SIZE, JOINT_COUNT, SEGMENT_COUNT, TORSO_SIZE,
    UPPER_ARM_SIZE,
};
use glamx::{Mat4, Vec3};

/// Height of the torso center above the ground plane.
pub const BASE_HEIGHT: f32 = 1.0;
/// Shoulder anchor height, as a fraction of the torso height above its center.
pub const SHOULDER_HEIGHT_RATIO: f32 = 0.35;
/// Fraction of the upper-arm half width that sticks out of the torso side.
pub const ARM_INSET: f32 = 0.9;
/// Hip anchor X offset, as a fraction of the torso width.
pub const HIP_SPREAD_RATIO: f32 = 0.3;

/// A body segment placed in the world for the current frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PosedSegment {
    /// The body part.
    pub segment: Segment,
    /// Maps the unit cube (extents `[-0.5, 0.5]`) to the segment's world placement,
    /// scale included.
    pub transform: Mat4,
    /// Flat base color.
    pub color: Color,
}

impl PosedSegment {
    /// World position of the segment center.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.transform.transform_point3(Vec3::ZERO)
    }
}

/// The solved placement of every segment for one joint state.
#[derive(Clone, Debug, PartialEq)]
pub struct Pose {
    segments: [PosedSegment; SEGMENT_COUNT],
    pivots: [Vec3; JOINT_COUNT],
}

fn deg_x(deg: f32) -> Mat4 {
    Mat4::from_rotation_x(deg.to_radians())
}

fn deg_y(deg: f32) -> Mat4 {
    Mat4::from_rotation_y(deg.to_radians())
}

fn deg_z(deg: f32) -> Mat4 {
    Mat4::from_rotation_z(deg.to_radians())
}

fn drop_by(length: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, -length, 0.0))
}

fn posed(segment: Segment, frame: Mat4) -> PosedSegment {
    PosedSegment {
        segment,
        transform: frame * Mat4::from_scale(segment.size()),
        color: segment.color(),
    }
}

/// A two-segment chain hanging down from `anchor`.
///
/// Returns the posed upper and lower segments and the world position of the
/// middle joint (elbow or knee).
fn limb(
    anchor: Mat4,
    upper: Segment,
    upper_rotation: Mat4,
    lower: Segment,
    lower_rotation: Mat4,
) -> (PosedSegment, PosedSegment, Vec3) {
    let upper_len = upper.size().y;
    let lower_len = lower.size().y;

    let upper_frame = anchor * upper_rotation;
    let middle = upper_frame * drop_by(upper_len);
    let lower_frame = middle * lower_rotation;

    (
        posed(upper, upper_frame * drop_by(upper_len * 0.5)),
        posed(lower, lower_frame * drop_by(lower_len * 0.5)),
        middle.transform_point3(Vec3::ZERO),
    )
}

/// Local offset of a shoulder anchor in the torso frame.
pub fn shoulder_offset(side: Side) -> Vec3 {
    let x = TORSO_SIZE.x * 0.5 + UPPER_ARM_SIZE.x * 0.5 * ARM_INSET;
    Vec3::new(side.x_sign() * x, TORSO_SIZE.y * SHOULDER_HEIGHT_RATIO, 0.0)
}

/// World position of a hip anchor. Hips do not follow the torso yaw.
pub fn hip_position(side: Side) -> Vec3 {
    Vec3::new(
        side.x_sign() * TORSO_SIZE.x * HIP_SPREAD_RATIO,
        BASE_HEIGHT - TORSO_SIZE.y * 0.5,
        0.0,
    )
}

impl Pose {
    /// Computes the world placement of every segment.
    ///
    /// This is a pure function of `joints`: calling it twice with the same
    /// state yields bit-identical results.
    ///
    /// Left limbs rotate by `+angle` and right limbs by `-angle` about Z,
    /// except for the left leg which swings about X.
    pub fn solve(joints: &JointState) -> Pose {
        let mut pivots = [Vec3::ZERO; JOINT_COUNT];

        // Torso.
        let torso_base =
            Mat4::from_translation(Vec3::new(0.0, BASE_HEIGHT, 0.0)) * deg_y(joints.torso_rotation);
        pivots[Joint::TorsoRotation.index()] = torso_base.transform_point3(Vec3::ZERO);
        let torso = posed(Segment::Torso, torso_base);

        // Head.
        let neck = torso_base * Mat4::from_translation(Vec3::new(0.0, TORSO_SIZE.y * 0.5, 0.0));
        pivots[Joint::Neck.index()] = neck.transform_point3(Vec3::ZERO);
        let head = posed(
            Segment::Head,
            neck * deg_y(joints.neck)
                * Mat4::from_translation(Vec3::new(0.0, HEAD_SIZE.y * 0.5, 0.0)),
        );

        // Arms.
        let shoulder_l = torso_base * Mat4::from_translation(shoulder_offset(Side::Left));
        let shoulder_r = torso_base * Mat4::from_translation(shoulder_offset(Side::Right));
        pivots[Joint::ShoulderLeft.index()] = shoulder_l.transform_point3(Vec3::ZERO);
        pivots[Joint::ShoulderRight.index()] = shoulder_r.transform_point3(Vec3::ZERO);

        let (upper_arm_l, forearm_l, elbow_l) = limb(
            shoulder_l,
            Segment::UpperArmLeft,
            deg_z(joints.shoulder_left),
            Segment::ForearmLeft,
            deg_z(joints.elbow_left),
        );
        let (upper_arm_r, forearm_r, elbow_r) = limb(
            shoulder_r,
            Segment::UpperArmRight,
            deg_z(-joints.shoulder_right),
            Segment::ForearmRight,
            deg_z(-joints.elbow_right),
        );
        pivots[Joint::ElbowLeft.index()] = elbow_l;
        pivots[Joint::ElbowRight.index()] = elbow_r;

        // Legs, anchored in the world frame.
        let hip_l = hip_position(Side::Left);
        let hip_r = hip_position(Side::Right);
        pivots[Joint::HipLeft.index()] = hip_l;
        pivots[Joint::HipRight.index()] = hip_r;

        let (thigh_l, shin_l, knee_l) = limb(
            Mat4::from_translation(hip_l),
            Segment::ThighLeft,
            deg_x(joints.hip_left),
            Segment::ShinLeft,
            deg_x(joints.knee_left),
        );
        let (thigh_r, shin_r, knee_r) = limb(
            Mat4::from_translation(hip_r),
            Segment::ThighRight,
            deg_z(-joints.hip_right),
            Segment::ShinRight,
            deg_z(-joints.knee_right),
        );
        pivots[Joint::KneeLeft.index()] = knee_l;
        pivots[Joint::KneeRight.index()] = knee_r;

        Pose {
            segments: [
                torso,
                head,
                upper_arm_l,
                forearm_l,
                upper_arm_r,
                forearm_r,
                thigh_l,
                shin_l,
                thigh_r,
                shin_r,
            ],
            pivots,
        }
    }

    /// The posed segments, in drawing order.
    #[inline]
    pub fn segments(&self) -> &[PosedSegment] {
        &self.segments
    }

    /// The posed placement of `segment`.
    #[inline]
    pub fn get(&self, segment: Segment) -> &PosedSegment {
        &self.segments[segment.index()]
    }

    /// World position of the pivot `joint` rotates about.
    #[inline]
    pub fn pivot(&self, joint: Joint) -> Vec3 {
        self.pivots[joint.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PosedSegment> {
        self.segments.iter()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::solve(&JointState::ZERO)
    }
}
