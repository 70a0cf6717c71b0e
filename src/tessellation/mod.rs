mod tessellate_brush;

pub use tessellate_brush::TessellateBrushes;

use crate::math::{Point2, Point3, Vector3};

/// A triangle mesh approximation of a set of brushes.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Appends `other`, offsetting its indices.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = u32::try_from(self.vertices.len()).unwrap_or(u32::MAX);
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices
            .extend(other.indices.iter().map(|tri| tri.map(|i| i + offset)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle(x: f64) -> TriangleMesh {
        TriangleMesh {
            vertices: vec![
                Point3::new(x, 0.0, 0.0),
                Point3::new(x + 1.0, 0.0, 0.0),
                Point3::new(x, 1.0, 0.0),
            ],
            normals: vec![Vector3::z(); 3],
            uvs: vec![Point2::origin(); 3],
            indices: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn merge_offsets_indices() {
        let mut mesh = single_triangle(0.0);
        mesh.merge(&single_triangle(5.0));
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.normals.len(), 6);
        assert_eq!(mesh.uvs.len(), 6);
        assert_eq!(mesh.indices, vec![[0, 1, 2], [3, 4, 5]]);
        assert_eq!(mesh.triangle_count(), 2);
    }
}
