pub mod hexahedron;
pub mod polygon;
pub mod settings;
pub mod vertex;

pub use hexahedron::{Brush, FaceRole, BRUSH_FACE_COUNT};
pub use polygon::{Polygon, QUAD_VERTEX_COUNT};
pub use settings::{BrushMode, BrushSettings};
pub use vertex::Vertex;

use std::collections::HashMap;

use crate::error::BrushError;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Unique identifier for a brush in the brush store.
    pub struct BrushId;
}

/// Central arena that owns all brushes.
///
/// Compound shapes hold [`BrushId`]s rather than references, so a brush keeps
/// its identity while its geometry is rewritten in place.
#[derive(Debug, Default)]
pub struct BrushStore {
    brushes: SlotMap<BrushId, Brush>,
}

impl BrushStore {
    /// Creates a new, empty brush store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a brush and returns its ID.
    pub fn add_brush(&mut self, brush: Brush) -> BrushId {
        self.brushes.insert(brush)
    }

    /// Removes a brush, returning it if it existed.
    pub fn remove_brush(&mut self, id: BrushId) -> Option<Brush> {
        self.brushes.remove(id)
    }

    /// Returns a reference to the brush, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the brush is not in the store.
    pub fn brush(&self, id: BrushId) -> Result<&Brush, BrushError> {
        self.brushes.get(id).ok_or(BrushError::BrushNotFound(id))
    }

    /// Returns a mutable reference to the brush, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the brush is not in the store.
    pub fn brush_mut(&mut self, id: BrushId) -> Result<&mut Brush, BrushError> {
        self.brushes
            .get_mut(id)
            .ok_or(BrushError::BrushNotFound(id))
    }

    /// Returns `true` if the brush is in the store.
    #[must_use]
    pub fn contains(&self, id: BrushId) -> bool {
        self.brushes.contains_key(id)
    }

    /// Number of brushes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.brushes.len()
    }

    /// Returns `true` if the store holds no brushes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }

    /// Makes `ids` name exactly `count` live brushes.
    ///
    /// Ids that are still in the store keep their position and identity.
    /// Stale ids are dropped, surplus brushes are removed from the store, and
    /// missing ones are filled with fresh unit cubes.
    pub fn ensure_brushes(&mut self, ids: &mut Vec<BrushId>, count: usize) {
        ids.retain(|id| self.brushes.contains_key(*id));
        for id in ids.drain(count.min(ids.len())..) {
            self.brushes.remove(id);
        }
        while ids.len() < count {
            ids.push(self.brushes.insert(Brush::unit_cube()));
        }
    }

    /// Borrows several distinct brushes mutably at once, in the order of `ids`.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is missing from the store or listed twice.
    pub fn brushes_mut(&mut self, ids: &[BrushId]) -> Result<Vec<&mut Brush>, BrushError> {
        let mut order: HashMap<BrushId, usize> = HashMap::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            if order.insert(*id, i).is_some() {
                return Err(BrushError::DuplicateBrush(*id));
            }
        }
        let mut slots: Vec<Option<&mut Brush>> = ids.iter().map(|_| None).collect();
        for (id, brush) in &mut self.brushes {
            if let Some(&i) = order.get(&id) {
                slots[i] = Some(brush);
            }
        }
        slots
            .into_iter()
            .zip(ids)
            .map(|(slot, id)| slot.ok_or(BrushError::BrushNotFound(*id)))
            .collect()
    }
}
