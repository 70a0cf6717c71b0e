mod plane;
mod uv;

pub use plane::Plane;
pub use uv::{PlanarProjection, UvProjection};
