pub mod brush;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod shape;
pub mod tessellation;

pub use brush::{Brush, BrushId, BrushStore};
pub use error::{Result, StairError};
pub use shape::{CurvedStair, StairParams};
