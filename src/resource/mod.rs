//! GPU resources.

pub use self::dynamic_buffer::{aligned_size_of, DynamicUniformBuffer};

mod dynamic_buffer;
