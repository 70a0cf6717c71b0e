use crate::brush::{Brush, BrushId, BrushStore, Polygon};
use crate::error::Result;
use crate::math::TOLERANCE;

use super::TriangleMesh;

/// Tessellates brushes into one combined triangle mesh.
///
/// Each face contributes four unshared vertices (normals are flat) and two
/// triangles fanned from slot 0. Collapsed faces, recognisable by their zero
/// normal, are skipped.
pub struct TessellateBrushes<'a> {
    brushes: &'a [BrushId],
}

impl<'a> TessellateBrushes<'a> {
    /// Creates a new `TessellateBrushes` operation.
    #[must_use]
    pub fn new(brushes: &'a [BrushId]) -> Self {
        Self { brushes }
    }

    /// Executes the tessellation, returning a combined triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if a brush is missing from the store.
    pub fn execute(&self, store: &BrushStore) -> Result<TriangleMesh> {
        let mut combined = TriangleMesh::default();
        for &id in self.brushes {
            combined.merge(&tessellate_brush(store.brush(id)?));
        }
        Ok(combined)
    }
}

fn tessellate_brush(brush: &Brush) -> TriangleMesh {
    let mut mesh = TriangleMesh::default();
    for polygon in brush.polygons() {
        if polygon.normal().norm() < TOLERANCE {
            continue;
        }
        push_quad(&mut mesh, polygon);
    }
    mesh
}

#[allow(clippy::cast_possible_truncation)]
fn push_quad(mesh: &mut TriangleMesh, polygon: &Polygon) {
    let base = mesh.vertices.len() as u32;
    for vertex in polygon.vertices() {
        mesh.vertices.push(vertex.position);
        mesh.normals.push(vertex.normal);
        mesh.uvs.push(vertex.uv);
    }
    mesh.indices.push([base, base + 1, base + 2]);
    mesh.indices.push([base, base + 2, base + 3]);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::brush::FaceRole;
    use crate::geometry::PlanarProjection;
    use crate::math::Vector3;
    use crate::shape::{CurvedStair, StairParams};

    #[test]
    fn cube_gives_twelve_triangles() {
        let mut store = BrushStore::new();
        let id = store.add_brush(Brush::unit_cube());
        let mesh = TessellateBrushes::new(&[id]).execute(&store).unwrap();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn triangles_wind_with_their_normals() {
        let mut store = BrushStore::new();
        let mut stair = CurvedStair::new(StairParams::new().with_counter_clockwise(true));
        stair
            .regenerate(&mut store, &PlanarProjection::default())
            .unwrap();
        let mesh = TessellateBrushes::new(stair.brushes()).execute(&store).unwrap();
        assert_eq!(mesh.triangle_count(), 4 * 12);
        for tri in &mesh.indices {
            let [a, b, c] = tri.map(|i| mesh.vertices[i as usize]);
            let geometric = (b - a).cross(&(c - a));
            assert!(geometric.dot(&mesh.normals[tri[0] as usize]) > 0.0);
        }
    }

    #[test]
    fn collapsed_faces_are_skipped() {
        let mut brush = Brush::unit_cube();
        for v in brush.polygon_mut(FaceRole::Bottom).vertices_mut() {
            v.normal = Vector3::zeros();
        }
        let mut store = BrushStore::new();
        let id = store.add_brush(brush);
        let mesh = TessellateBrushes::new(&[id]).execute(&store).unwrap();
        assert_eq!(mesh.triangle_count(), 10);
        for n in &mesh.normals {
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn missing_brush_is_an_error() {
        let mut store = BrushStore::new();
        let id = store.add_brush(Brush::unit_cube());
        store.remove_brush(id);
        assert!(TessellateBrushes::new(&[id]).execute(&store).is_err());
    }
}
