use crate::brush::{Brush, FaceRole, QUAD_VERTEX_COUNT};
use crate::math::{Point3, Vector3};
use crate::shape::StairParams;

use super::sample::{CurveRange, CurveSamples};

/// Slot order for clockwise staircases.
const PLAIN_WINDING: [usize; QUAD_VERTEX_COUNT] = [0, 1, 2, 3];

/// Slot order for mirrored staircases: slots 0 and 2 swap, reversing the loop.
const MIRRORED_WINDING: [usize; QUAD_VERTEX_COUNT] = [2, 1, 0, 3];

/// Returns the slot permutation used for a staircase turning the given way.
#[must_use]
pub fn winding(counter_clockwise: bool) -> [usize; QUAD_VERTEX_COUNT] {
    if counter_clockwise {
        MIRRORED_WINDING
    } else {
        PLAIN_WINDING
    }
}

/// Writes the corner positions of one step into a brush.
///
/// Only positions are touched; normals, UVs and flags are left to the caller.
///
/// For step `i`, top-curve offsets `2i + 1` and `2i + 2` are the front and
/// rear corners of the tread (both at the tread height), and bottom-curve
/// offsets `i` and `i + 1` are the floor below them.
pub struct AssembleStep<'a> {
    samples: &'a CurveSamples,
    params: &'a StairParams,
    step: usize,
}

impl<'a> AssembleStep<'a> {
    /// Creates a new `AssembleStep` operation for step `step`.
    #[must_use]
    pub fn new(samples: &'a CurveSamples, params: &'a StairParams, step: usize) -> Self {
        Self {
            samples,
            params,
            step,
        }
    }

    /// Executes the assembly, overwriting all six faces of `brush`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not below the sampled step count.
    pub fn execute(&self, brush: &mut Brush) {
        let i = self.step;
        let inner = |k: usize| self.samples.at(CurveRange::InnerTop, 2 * i + k);
        let outer = |k: usize| self.samples.at(CurveRange::OuterTop, 2 * i + k);
        let floor_inner = |k: usize| self.samples.at(CurveRange::InnerBottom, i + k);
        let floor_outer = |k: usize| self.samples.at(CurveRange::OuterBottom, i + k);
        let rise = Vector3::new(0.0, self.params.step_height(), 0.0);
        let fill = self.params.fill_to_bottom();

        let top = [outer(2), outer(1), inner(1), inner(2)];

        let front = if fill {
            [outer(1), floor_outer(0), floor_inner(0), inner(1)]
        } else {
            [outer(1), outer(1) - rise, inner(1) - rise, inner(1)]
        };

        let left = if fill {
            [floor_inner(1), inner(2), inner(1), floor_inner(0)]
        } else {
            [inner(2) - rise, inner(2), inner(1), inner(1) - rise]
        };

        let right = if fill {
            [outer(2), floor_outer(1), floor_outer(0), outer(1)]
        } else {
            [outer(2), outer(2) - rise, outer(1) - rise, outer(1)]
        };

        let bottom = if fill {
            [floor_outer(0), floor_outer(1), floor_inner(1), floor_inner(0)]
        } else {
            [outer(1) - rise, outer(2) - rise, inner(2) - rise, inner(1) - rise]
        };

        let back = if fill {
            [floor_outer(1), outer(2), inner(2), floor_inner(1)]
        } else {
            [outer(2) - rise, outer(2), inner(2), inner(2) - rise]
        };

        let order = winding(self.params.counter_clockwise());
        write_face(brush, FaceRole::Top, &order, top);
        write_face(brush, FaceRole::Front, &order, front);
        write_face(brush, FaceRole::Left, &order, left);
        write_face(brush, FaceRole::Right, &order, right);
        write_face(brush, FaceRole::Bottom, &order, bottom);
        write_face(brush, FaceRole::Back, &order, back);
    }
}

fn write_face(
    brush: &mut Brush,
    role: FaceRole,
    order: &[usize; QUAD_VERTEX_COUNT],
    corners: [Point3; QUAD_VERTEX_COUNT],
) {
    let vertices = brush.polygon_mut(role).vertices_mut();
    for (slot, corner) in order.iter().zip(corners) {
        vertices[*slot].position = corner;
    }
}
