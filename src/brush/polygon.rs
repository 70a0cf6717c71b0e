use crate::error::Result;
use crate::geometry::Plane;
use crate::math::{Point3, Vector3};

use super::Vertex;

/// Number of corners of every brush face.
pub const QUAD_VERTEX_COUNT: usize = 4;

/// A planar quadrilateral face of a brush.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: [Vertex; QUAD_VERTEX_COUNT],
}

impl Polygon {
    /// Creates a polygon from its four corners.
    #[must_use]
    pub fn new(vertices: [Vertex; QUAD_VERTEX_COUNT]) -> Self {
        Self { vertices }
    }

    /// Returns the corners in slot order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex; QUAD_VERTEX_COUNT] {
        &self.vertices
    }

    /// Returns the corners in slot order for in-place editing.
    pub fn vertices_mut(&mut self) -> &mut [Vertex; QUAD_VERTEX_COUNT] {
        &mut self.vertices
    }

    /// Returns the corner positions in slot order.
    #[must_use]
    pub fn positions(&self) -> [Point3; QUAD_VERTEX_COUNT] {
        self.vertices.map(|v| v.position)
    }

    /// Returns the shared face normal (taken from slot 0).
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.vertices[0].normal
    }

    /// Average of the corner positions.
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v.position.coords);
        Point3::from(sum / 4.0)
    }

    /// The plane through slots 1, 2 and 3.
    ///
    /// Slot 0 is ignored, so the result follows slot order rather than the
    /// visual winding of the loop.
    ///
    /// # Errors
    ///
    /// Returns an error if those three corners are collinear or coincident.
    pub fn plane(&self) -> Result<Plane> {
        Plane::from_points(
            &self.vertices[1].position,
            &self.vertices[2].position,
            &self.vertices[3].position,
        )
    }
}
