use bytemuck::{Pod, Zeroable};
use glamx::Vec3;

/// Number of vertices of the unit cube: 6 faces, 2 triangles each.
pub const CUBE_VERTEX_COUNT: usize = 36;

/// A vertex of the cube mesh, as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Outward normal, then the two in-face axes with `u × v = normal`.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
];

/// Corner signs along `(u, v)` of the two triangles of a face.
const QUAD: [(f32, f32); 6] = [
    (-1.0, -1.0),
    (1.0, -1.0),
    (1.0, 1.0),
    (-1.0, -1.0),
    (1.0, 1.0),
    (-1.0, 1.0),
];

/// Generates the unit cube as a non-indexed triangle list.
///
/// The cube is centered at the origin with extents 1 (coordinates in
/// `[-0.5, 0.5]`). Every face has a flat outward normal and its triangles are
/// counter-clockwise when seen from outside.
///
/// # Example
/// ```
/// # use cubebot::procedural::unit_cube;
/// let cube = unit_cube();
/// assert_eq!(cube.len(), 36);
/// ```
pub fn unit_cube() -> [CubeVertex; CUBE_VERTEX_COUNT] {
    let mut vertices = [CubeVertex::default(); CUBE_VERTEX_COUNT];

    for (f, (normal, u, v)) in FACES.iter().enumerate() {
        for (c, (su, sv)) in QUAD.iter().enumerate() {
            let position = (*normal + *u * *su + *v * *sv) * 0.5;
            vertices[f * QUAD.len() + c] = CubeVertex {
                position: position.to_array(),
                normal: normal.to_array(),
            };
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_lie_on_the_unit_cube() {
        for vertex in unit_cube() {
            for coord in vertex.position {
                assert_eq!(coord.abs(), 0.5);
            }
            let n = Vec3::from_array(vertex.normal);
            assert_eq!(Vec3::from_array(vertex.position).dot(n), 0.5);
        }
    }

    #[test]
    fn triangles_wind_outward() {
        let cube = unit_cube();

        for triangle in cube.chunks(3) {
            let [a, b, c] = [0, 1, 2].map(|i| Vec3::from_array(triangle[i].position));
            let face_normal = (b - a).cross(c - a).normalize();
            assert_eq!(face_normal, Vec3::from_array(triangle[0].normal));
        }
    }

    #[test]
    fn every_face_is_covered() {
        let cube = unit_cube();
        let mut normals: Vec<_> = cube.iter().map(|v| v.normal).collect();
        normals.dedup();
        assert_eq!(normals.len(), 6);
    }
}
