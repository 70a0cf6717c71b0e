use crate::math::{Point2, Point3, Vector3};

/// A polygon corner with its render attributes.
///
/// `position` is authoritative; `normal` and `uv` are derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// The 3D position of the vertex.
    pub position: Point3,
    /// Shading normal.
    pub normal: Vector3,
    /// Texture coordinate.
    pub uv: Point2,
}

impl Vertex {
    /// Creates a new vertex with all attributes given.
    #[must_use]
    pub fn new(position: Point3, normal: Vector3, uv: Point2) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Creates a vertex at `position` with a zero normal and UV at the origin.
    #[must_use]
    pub fn at(position: Point3) -> Self {
        Self::new(position, Vector3::zeros(), Point2::origin())
    }
}
