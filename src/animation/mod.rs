pub mod displacement;
pub mod line;
pub mod motion;
pub mod timeline;
pub mod transform;

// Re-export commonly used types and functions for convenience
pub use line::calculate_line;
pub use motion::{BouncingMotion, MotionFrame, ResizeMotion, ShadowMotion};
pub use timeline::{MotionKind, Sequence, Timeline};
pub use transform::Transform3d;
