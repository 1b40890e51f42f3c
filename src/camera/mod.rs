//! Camera trait with the three viewpoints of the demo.

pub use self::camera3d::Camera3d;
pub use self::fixed_view3d::FixedView3d;
pub use self::free3d::{FreeCamera3d, FreeCameraKeys, MAX_PITCH};
pub use self::orbit3d::OrbitCamera3d;
pub use self::rig::{CameraMode, CameraRig, Projection};

mod camera3d;
mod fixed_view3d;
mod free3d;
mod orbit3d;
mod rig;
