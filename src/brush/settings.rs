/// How a brush participates in the boolean solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushMode {
    /// The volume is added to the solid.
    #[default]
    Additive,
    /// The volume is carved out of the solid.
    Subtractive,
}

/// Per-brush flags copied from a compound shape to each of its brushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushSettings {
    /// Boolean mode.
    pub mode: BrushMode,
    /// Whether the brush is drawn.
    pub visible: bool,
    /// Whether the brush takes part in collision.
    pub has_collision: bool,
    /// If `true`, the brush is excluded from boolean evaluation.
    pub no_csg: bool,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            mode: BrushMode::Additive,
            visible: true,
            has_collision: true,
            no_csg: false,
        }
    }
}
