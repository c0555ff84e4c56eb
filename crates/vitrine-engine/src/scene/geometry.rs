use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// GPU vertex: position + normal, tightly packed.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Shared solid geometry for the whole field.
///
/// Built exactly once; every instance references the same vertex data. The
/// mesh is non-indexed: each face carries its own three vertices with the
/// face normal, giving the faceted (flat-shaded) look.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    vertices: Vec<Vertex>,
}

// Icosahedron construction: 12 base vertices from three orthogonal golden
// rectangles, 20 triangular faces, every vertex pushed out to `radius`.
const PHI: f32 = 1.618034;

const BASE_VERTICES: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

const FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

impl Geometry {
    /// Builds a fixed-subdivision icosahedron of the given radius.
    ///
    /// Pure construction; no failure modes.
    pub fn icosahedron(radius: f32) -> Self {
        let corners: Vec<Vec3> = BASE_VERTICES
            .iter()
            .map(|v| Vec3::from_array(*v).normalize() * radius)
            .collect();

        let mut vertices = Vec::with_capacity(FACES.len() * 3);
        for [a, b, c] in FACES {
            let (pa, pb, pc) = (corners[a], corners[b], corners[c]);
            let normal = (pb - pa).cross(pc - pa).normalize();
            for p in [pa, pb, pc] {
                vertices.push(Vertex {
                    position: p.to_array(),
                    normal: normal.to_array(),
                });
            }
        }

        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn icosahedron_has_twenty_faces() {
        let geo = Geometry::icosahedron(1.0);
        assert_eq!(geo.vertex_count(), 60);
    }

    #[test]
    fn all_vertices_lie_on_radius_sphere() {
        let radius = 0.1;
        let geo = Geometry::icosahedron(radius);
        for v in geo.vertices() {
            let len = Vec3::from_array(v.position).length();
            assert_relative_eq!(len, radius, max_relative = 1e-4);
        }
    }

    #[test]
    fn normals_are_unit_and_outward() {
        let geo = Geometry::icosahedron(1.0);
        for face in geo.vertices().chunks_exact(3) {
            let n = Vec3::from_array(face[0].normal);
            assert_relative_eq!(n.length(), 1.0, max_relative = 1e-4);

            // A convex solid centered at the origin: the face normal points
            // away from the center, so it agrees with the face centroid.
            let centroid = face
                .iter()
                .map(|v| Vec3::from_array(v.position))
                .sum::<Vec3>()
                / 3.0;
            assert!(n.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn face_vertices_share_the_face_normal() {
        let geo = Geometry::icosahedron(2.0);
        for face in geo.vertices().chunks_exact(3) {
            assert_eq!(face[0].normal, face[1].normal);
            assert_eq!(face[1].normal, face[2].normal);
        }
    }
}
