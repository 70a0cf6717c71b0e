mod params;
mod resize;

pub use params::StairParams;
pub use resize::{ResizeAction, ResizeTracker, EXTENT_TOLERANCE};

use tracing::{debug, instrument};

use crate::brush::{BrushId, BrushSettings, BrushStore};
use crate::error::Result;
use crate::geometry::UvProjection;
use crate::math::Point3;
use crate::operations::query::Aabb;
use crate::operations::Generate;

/// A curved staircase built from one brush per step.
///
/// The shape owns its parameters and the ids of its brushes; the brushes
/// themselves live in a [`BrushStore`]. Call [`CurvedStair::regenerate`]
/// after changing parameters or after the host edits the bounds.
#[derive(Debug, Clone)]
pub struct CurvedStair {
    params: StairParams,
    settings: BrushSettings,
    brushes: Vec<BrushId>,
    local_position: Point3,
    local_bounds: Aabb,
    tracker: ResizeTracker,
}

impl CurvedStair {
    /// Creates a shape at the origin. No brushes exist until the first regeneration.
    #[must_use]
    pub fn new(params: StairParams) -> Self {
        Self::with_position(params, Point3::origin())
    }

    /// Creates a shape at `local_position`.
    #[must_use]
    pub fn with_position(params: StairParams, local_position: Point3) -> Self {
        let local_bounds = Aabb::empty();
        Self {
            params,
            settings: BrushSettings::default(),
            brushes: Vec::new(),
            local_position,
            local_bounds,
            tracker: ResizeTracker::new(local_bounds.extents(), local_position),
        }
    }

    /// Number of brushes the shape needs: one per step.
    #[must_use]
    pub fn brush_count(&self) -> usize {
        self.params.num_steps()
    }

    /// Returns the shape parameters.
    #[must_use]
    pub fn params(&self) -> &StairParams {
        &self.params
    }

    /// Returns the shape parameters for editing.
    pub fn params_mut(&mut self) -> &mut StairParams {
        &mut self.params
    }

    /// Returns the flags copied to every brush.
    #[must_use]
    pub fn settings(&self) -> &BrushSettings {
        &self.settings
    }

    /// Returns the flags copied to every brush for editing.
    pub fn settings_mut(&mut self) -> &mut BrushSettings {
        &mut self.settings
    }

    /// Ids of the generated brushes, one per step in step order.
    #[must_use]
    pub fn brushes(&self) -> &[BrushId] {
        &self.brushes
    }

    /// Position of the shape in its parent's space.
    #[must_use]
    pub fn local_position(&self) -> &Point3 {
        &self.local_position
    }

    /// Moves the shape.
    pub fn set_local_position(&mut self, local_position: Point3) {
        self.local_position = local_position;
    }

    /// Bounds of all brushes after the last regeneration, or as set by the host.
    #[must_use]
    pub fn local_bounds(&self) -> &Aabb {
        &self.local_bounds
    }

    /// Replaces the bounds, as a resize handle does.
    ///
    /// The next [`CurvedStair::regenerate`] turns a vertical change into a
    /// step count change.
    pub fn set_local_bounds(&mut self, local_bounds: Aabb) {
        self.local_bounds = local_bounds;
    }

    /// Resize-tracking state.
    #[must_use]
    pub fn tracker(&self) -> &ResizeTracker {
        &self.tracker
    }

    /// Rebuilds every brush from the parameters.
    ///
    /// Order: resize reconciliation, brush allocation, geometry, bounds, and
    /// finally the resize snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the store loses a brush between allocation and use.
    #[instrument(skip_all)]
    pub fn regenerate<P: UvProjection + ?Sized>(
        &mut self,
        store: &mut BrushStore,
        projection: &P,
    ) -> Result<Aabb> {
        let action = self.tracker.reconcile(
            self.local_bounds.extents(),
            &mut self.local_position,
            &mut self.params,
        );
        if action != ResizeAction::Unchanged {
            debug!(?action, num_steps = self.params.num_steps(), "bounds edited by host");
        }

        let count = self.brush_count();
        store.ensure_brushes(&mut self.brushes, count);
        let mut brushes = store.brushes_mut(&self.brushes)?;
        let bounds = Generate::new(&self.params, &self.settings, projection).execute(&mut brushes)?;

        self.local_bounds = bounds;
        self.tracker.snapshot(bounds.extents(), self.local_position);
        Ok(bounds)
    }
}

impl Default for CurvedStair {
    fn default() -> Self {
        Self::new(StairParams::default())
    }
}
