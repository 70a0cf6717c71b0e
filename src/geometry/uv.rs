use crate::brush::Polygon;
use crate::math::{Point2, Point3};

use super::Plane;

/// Maps positions on a face to texture coordinates.
pub trait UvProjection {
    /// Returns the UV coordinate for `position`, which lies on `polygon`.
    fn uv_for_position(&self, polygon: &Polygon, position: &Point3) -> Point2;
}

/// World-aligned planar projection.
///
/// Positions are projected onto the basis of the face plane through the world
/// origin, so neighbouring coplanar faces tile seamlessly and texel density
/// does not depend on face size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarProjection {
    /// World units covered by one UV unit.
    pub scale: f64,
}

impl PlanarProjection {
    /// Creates a projection covering `scale` world units per UV unit.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }
}

impl Default for PlanarProjection {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl UvProjection for PlanarProjection {
    fn uv_for_position(&self, polygon: &Polygon, position: &Point3) -> Point2 {
        let Ok(face_plane) = polygon.plane() else {
            return Point2::origin();
        };
        let Ok(world_plane) = Plane::from_normal(Point3::origin(), *face_plane.normal()) else {
            return Point2::origin();
        };
        let uv = world_plane.project_to_uv(position);
        Point2::from(uv.coords / self.scale)
    }
}
