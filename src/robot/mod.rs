//! The articulated robot: joints, body segments and the pose solver.

pub use self::joints::{Joint, JointState, JointStore, Side, JOINT_COUNT};
pub use self::pose::{
    hip_position, shoulder_offset, Pose, PosedSegment, ARM_INSET, BASE_HEIGHT, HIP_SPREAD_RATIO,
    SHOULDER_HEIGHT_RATIO,
};
pub use self::segment::{
    Segment, FOREARM_SIZE, HEAD_SIZE, SEGMENT_COUNT, SHIN_SIZE, THIGH_SIZE, TORSO_SIZE,
    UPPER_ARM_SIZE,
};

mod joints;
mod pose;
mod segment;
