use tracing::debug;

use crate::brush::Polygon;
use crate::geometry::UvProjection;
use crate::math::Vector3;

/// Assigns one flat normal to every corner of `polygon`.
///
/// The normal is that of the plane through slots 1, 2 and 3. When those
/// corners are collinear the face has collapsed and the normal is zero.
/// Returns `false` in that case.
pub fn flat_normal(polygon: &mut Polygon) -> bool {
    let (normal, ok) = match polygon.plane() {
        Ok(plane) => (*plane.normal(), true),
        Err(err) => {
            debug!(%err, "collapsed face, writing zero normal");
            (Vector3::zeros(), false)
        }
    };
    for vertex in polygon.vertices_mut() {
        vertex.normal = normal;
    }
    ok
}

/// Recomputes every corner's UV from its final position.
pub fn reproject_uvs<P: UvProjection + ?Sized>(polygon: &mut Polygon, projection: &P) {
    let face: &Polygon = polygon;
    let uvs = face
        .vertices()
        .map(|v| projection.uv_for_position(face, &v.position));
    for (vertex, uv) in polygon.vertices_mut().iter_mut().zip(uvs) {
        vertex.uv = uv;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::brush::Vertex;
    use crate::geometry::PlanarProjection;
    use crate::math::{Point2, Point3};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn floor_quad(y: f64) -> Polygon {
        Polygon::new(
            [p(0.0, y, 0.0), p(0.0, y, 1.0), p(1.0, y, 1.0), p(1.0, y, 0.0)].map(Vertex::at),
        )
    }

    #[test]
    fn flat_normal_is_shared_by_all_corners() {
        let mut quad = floor_quad(0.0);
        assert!(flat_normal(&mut quad));
        for v in quad.vertices() {
            assert_relative_eq!(v.normal, Vector3::y(), epsilon = 1e-12);
        }
    }

    #[test]
    fn collapsed_face_gets_zero_normal() {
        let mut quad = Polygon::new(
            [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(3.0, 0.0, 0.0)]
                .map(Vertex::at),
        );
        quad.vertices_mut()[0].normal = Vector3::x();
        assert!(!flat_normal(&mut quad));
        for v in quad.vertices() {
            assert_eq!(v.normal, Vector3::zeros());
        }
    }

    #[test]
    fn uvs_follow_positions() {
        let mut quad = floor_quad(2.0);
        let proj = PlanarProjection::default();
        reproject_uvs(&mut quad, &proj);
        let uvs = quad.vertices().map(|v| v.uv);
        assert_ne!(uvs[0], uvs[2]);

        let mut moved = floor_quad(2.0);
        for v in moved.vertices_mut() {
            v.position.x += 1.0;
        }
        reproject_uvs(&mut moved, &proj);
        for (a, b) in uvs.iter().zip(moved.vertices()) {
            assert_relative_eq!((b.uv - a).norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn uvs_of_collapsed_face_are_zero() {
        let mut quad = Polygon::new([p(0.5, 0.5, 0.5); 4].map(Vertex::at));
        reproject_uvs(&mut quad, &PlanarProjection::default());
        for v in quad.vertices() {
            assert_eq!(v.uv, Point2::origin());
        }
    }
}
