use crate::brush::{BrushId, BrushStore};
use crate::error::Result;
use crate::math::{Point3, Vector3};

/// An axis-aligned bounding box.
///
/// An empty box has `min = +inf` and `max = -inf`, so encapsulating the first
/// point yields a zero-size box at that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a box from its corners.
    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Creates a box from its centre and half extents.
    #[must_use]
    pub fn from_center_extents(center: Point3, extents: Vector3) -> Self {
        Self::new(center - extents, center + extents)
    }

    /// A box containing nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Returns `true` if nothing has been encapsulated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grows the box to contain `point`.
    pub fn encapsulate_point(&mut self, point: &Point3) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// Grows the box to contain `other`. Empty boxes are ignored.
    pub fn encapsulate(&mut self, other: &Aabb) {
        if other.is_empty() {
            return;
        }
        self.encapsulate_point(&other.min);
        self.encapsulate_point(&other.max);
    }

    /// Centre of the box. The origin for an empty box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        if self.is_empty() {
            return Point3::origin();
        }
        nalgebra::center(&self.min, &self.max)
    }

    /// Full edge lengths. Zero for an empty box.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        if self.is_empty() {
            return Vector3::zeros();
        }
        self.max - self.min
    }

    /// Half edge lengths. Zero for an empty box.
    #[must_use]
    pub fn extents(&self) -> Vector3 {
        self.size() * 0.5
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

/// Computes the union of the bounds of several brushes.
pub struct BoundingBox<'a> {
    brushes: &'a [BrushId],
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(brushes: &'a [BrushId]) -> Self {
        Self { brushes }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if any brush is missing from the store.
    pub fn execute(&self, store: &BrushStore) -> Result<Aabb> {
        let mut bounds = Aabb::empty();
        for &id in self.brushes {
            bounds.encapsulate(&store.brush(id)?.bounds());
        }
        Ok(bounds)
    }
}
