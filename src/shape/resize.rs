use tracing::debug;

use crate::math::{Point3, Vector3};

use super::StairParams;

/// Extents closer than this to the snapshot count as unchanged.
pub const EXTENT_TOLERANCE: f64 = 1e-5;

/// What [`ResizeTracker::reconcile`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAction {
    /// Extents matched the snapshot.
    Unchanged,
    /// The box grew vertically; one step was added.
    AddedStep,
    /// The box shrank vertically; one step was removed (never below one).
    RemovedStep,
    /// Only the horizontal extents changed; the position was put back.
    PositionRestored,
}

/// Infers drag-resize gestures from changes to a shape's bounding box.
///
/// The host has no dedicated resize event: it edits the bounds (and usually
/// the position) directly and asks for regeneration. A taller box means
/// "one more step", a shorter one "one fewer", and the shape itself must
/// not move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeTracker {
    last_extents: Vector3,
    last_position: Point3,
}

impl ResizeTracker {
    /// Creates a tracker seeded with the shape's current extents and position.
    #[must_use]
    pub fn new(extents: Vector3, position: Point3) -> Self {
        Self {
            last_extents: extents,
            last_position: position,
        }
    }

    /// Extents at the last snapshot.
    #[must_use]
    pub fn last_extents(&self) -> &Vector3 {
        &self.last_extents
    }

    /// Position at the last snapshot.
    #[must_use]
    pub fn last_position(&self) -> &Point3 {
        &self.last_position
    }

    /// Records the state after a successful regeneration.
    pub fn snapshot(&mut self, extents: Vector3, position: Point3) {
        self.last_extents = extents;
        self.last_position = position;
    }

    /// Compares `extents` to the snapshot and adjusts the step count.
    ///
    /// When the extents differ, `position` is reset to the snapshot and the
    /// step count moves by at most one. A vertical change also makes the new
    /// extents the reference, so calling again with them does nothing.
    pub fn reconcile(
        &mut self,
        extents: Vector3,
        position: &mut Point3,
        params: &mut StairParams,
    ) -> ResizeAction {
        if (extents - self.last_extents).norm() < EXTENT_TOLERANCE {
            return ResizeAction::Unchanged;
        }

        *position = self.last_position;

        let action = if extents.y > self.last_extents.y {
            params.set_num_steps(params.num_steps() + 1);
            ResizeAction::AddedStep
        } else if extents.y < self.last_extents.y {
            params.set_num_steps(params.num_steps().saturating_sub(1));
            ResizeAction::RemovedStep
        } else {
            debug!(?extents, "horizontal resize ignored");
            return ResizeAction::PositionRestored;
        };
        debug!(
            ?action,
            num_steps = params.num_steps(),
            from = self.last_extents.y,
            to = extents.y,
            "vertical resize"
        );
        self.last_extents = extents;
        action
    }
}
