use super::{Point3, Vector3, TOLERANCE};

/// Newell normal of a polygon loop.
///
/// Robust against a single collinear corner, unlike a three-point normal.
/// Returns `None` when the loop encloses no area.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Option<Vector3> {
    let n = points.len();
    if n < 3 {
        return None;
    }
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    let len = normal.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(normal / len)
}

/// Largest distance of any point from the plane through `origin` with unit `normal`.
#[must_use]
pub fn max_plane_deviation(points: &[Point3], origin: &Point3, normal: &Vector3) -> f64 {
    points
        .iter()
        .map(|pt| (pt - origin).dot(normal).abs())
        .fold(0.0, f64::max)
}
