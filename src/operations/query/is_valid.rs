use crate::brush::Brush;
use crate::math::polygon_3d::{max_plane_deviation, newell_normal};
use crate::math::TOLERANCE;

/// Planarity tolerance for brush faces.
const PLANARITY_TOLERANCE: f64 = 1e-9;

/// Checks that a brush is fit to hand to a boolean solver.
///
/// A brush is valid when every corner position is finite, every face is
/// planar, and every stored normal is either unit length or exactly zero.
/// Zero normals are the accepted output for collapsed faces.
pub struct IsValid<'a> {
    brush: &'a Brush,
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(brush: &'a Brush) -> Self {
        Self { brush }
    }

    /// Executes the validation, returning `true` if the brush is valid.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.brush.polygons().iter().all(|polygon| {
            let positions = polygon.positions();
            if positions.iter().any(|pt| !pt.coords.iter().all(|c| c.is_finite())) {
                return false;
            }
            if let Some(normal) = newell_normal(&positions) {
                if max_plane_deviation(&positions, &positions[0], &normal) > PLANARITY_TOLERANCE {
                    return false;
                }
            }
            polygon.vertices().iter().all(|v| {
                let len = v.normal.norm();
                len < TOLERANCE || (len - 1.0).abs() < PLANARITY_TOLERANCE
            })
        })
    }
}
