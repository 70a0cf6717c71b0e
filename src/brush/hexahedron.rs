use crate::math::{Point2, Point3, Vector3};
use crate::operations::query::Aabb;

use super::{BrushMode, BrushSettings, Polygon, Vertex};

/// Number of faces of every brush.
pub const BRUSH_FACE_COUNT: usize = 6;

/// Role of a face within a brush. The discriminant is the face's array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceRole {
    Back = 0,
    Left = 1,
    Right = 2,
    Front = 3,
    Bottom = 4,
    Top = 5,
}

impl FaceRole {
    /// All roles in array order.
    pub const ALL: [FaceRole; BRUSH_FACE_COUNT] = [
        FaceRole::Back,
        FaceRole::Left,
        FaceRole::Right,
        FaceRole::Front,
        FaceRole::Bottom,
        FaceRole::Top,
    ];

    /// Index of this face in [`Brush::polygons`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A convex hexahedron: six quadrilateral faces in [`FaceRole`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    polygons: [Polygon; BRUSH_FACE_COUNT],
    settings: BrushSettings,
}

impl Brush {
    /// Creates a brush from six faces in [`FaceRole`] order.
    #[must_use]
    pub fn new(polygons: [Polygon; BRUSH_FACE_COUNT], settings: BrushSettings) -> Self {
        Self { polygons, settings }
    }

    /// An axis-aligned cube of edge length 1 centred on the origin.
    ///
    /// Back faces +Z, front -Z, right +X, left -X, top +Y, bottom -Y.
    /// Every face winds counter-clockwise about its outward normal.
    #[must_use]
    pub fn unit_cube() -> Self {
        let h = 0.5;
        let c = |x: f64, y: f64, z: f64| Point3::new(x * h, y * h, z * h);
        let face = |corners: [Point3; 4], normal: Vector3| {
            let uvs = [
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ];
            Polygon::new([0, 1, 2, 3].map(|i| Vertex::new(corners[i], normal, uvs[i])))
        };

        let polygons = [
            face(
                [c(-1.0, -1.0, 1.0), c(1.0, -1.0, 1.0), c(1.0, 1.0, 1.0), c(-1.0, 1.0, 1.0)],
                Vector3::z(),
            ),
            face(
                [c(-1.0, -1.0, -1.0), c(-1.0, -1.0, 1.0), c(-1.0, 1.0, 1.0), c(-1.0, 1.0, -1.0)],
                -Vector3::x(),
            ),
            face(
                [c(1.0, -1.0, -1.0), c(1.0, 1.0, -1.0), c(1.0, 1.0, 1.0), c(1.0, -1.0, 1.0)],
                Vector3::x(),
            ),
            face(
                [c(-1.0, -1.0, -1.0), c(-1.0, 1.0, -1.0), c(1.0, 1.0, -1.0), c(1.0, -1.0, -1.0)],
                -Vector3::z(),
            ),
            face(
                [c(-1.0, -1.0, -1.0), c(1.0, -1.0, -1.0), c(1.0, -1.0, 1.0), c(-1.0, -1.0, 1.0)],
                -Vector3::y(),
            ),
            face(
                [c(-1.0, 1.0, -1.0), c(-1.0, 1.0, 1.0), c(1.0, 1.0, 1.0), c(1.0, 1.0, -1.0)],
                Vector3::y(),
            ),
        ];

        Self::new(polygons, BrushSettings::default())
    }

    /// Returns all faces in [`FaceRole`] order.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon; BRUSH_FACE_COUNT] {
        &self.polygons
    }

    /// Returns the face with the given role.
    #[must_use]
    pub fn polygon(&self, role: FaceRole) -> &Polygon {
        &self.polygons[role.index()]
    }

    /// Returns the face with the given role for in-place editing.
    pub fn polygon_mut(&mut self, role: FaceRole) -> &mut Polygon {
        &mut self.polygons[role.index()]
    }

    /// Returns the brush flags.
    #[must_use]
    pub fn settings(&self) -> &BrushSettings {
        &self.settings
    }

    /// Replaces all brush flags at once.
    pub fn apply_settings(&mut self, settings: &BrushSettings) {
        self.settings = *settings;
    }

    /// Returns the boolean mode.
    #[must_use]
    pub fn mode(&self) -> BrushMode {
        self.settings.mode
    }

    /// Sets the boolean mode.
    pub fn set_mode(&mut self, mode: BrushMode) {
        self.settings.mode = mode;
    }

    /// Returns `true` if the brush is drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.settings.visible
    }

    /// Sets whether the brush is drawn.
    pub fn set_visible(&mut self, visible: bool) {
        self.settings.visible = visible;
    }

    /// Returns `true` if the brush takes part in collision.
    #[must_use]
    pub fn has_collision(&self) -> bool {
        self.settings.has_collision
    }

    /// Sets whether the brush takes part in collision.
    pub fn set_has_collision(&mut self, has_collision: bool) {
        self.settings.has_collision = has_collision;
    }

    /// Returns `true` if the brush is excluded from boolean evaluation.
    #[must_use]
    pub fn is_no_csg(&self) -> bool {
        self.settings.no_csg
    }

    /// Sets whether the brush is excluded from boolean evaluation.
    pub fn set_no_csg(&mut self, no_csg: bool) {
        self.settings.no_csg = no_csg;
    }

    /// Axis-aligned bounds of all face corners.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let mut bounds = Aabb::empty();
        for polygon in &self.polygons {
            for vertex in polygon.vertices() {
                bounds.encapsulate_point(&vertex.position);
            }
        }
        bounds
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::unit_cube()
    }
}
