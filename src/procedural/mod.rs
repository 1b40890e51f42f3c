//! Procedural mesh generation.

pub use self::cuboid::{unit_cube, CubeVertex, CUBE_VERTEX_COUNT};

mod cuboid;
