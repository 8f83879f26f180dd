//! # Marker bounce
//!
//! Animation math of a bouncing map marker, inspired by the Leaflet
//! smooth-bouncing plugin.
//!
//! The crate precomputes everything needed to play the animation: the steps
//! of the bounce and when they happen ([`animation::timeline`]), and where the
//! icon and its shadow are drawn at each step ([`animation::displacement`]),
//! either as 3D transforms or as plain pixel positions. Playing the timeline
//! back is left to the caller's frame scheduler.

pub mod animation;
pub mod core;
pub mod layers;
pub mod prelude;
pub use crate::core::constants;

// Re-export public API
pub use animation::{
    calculate_line, BouncingMotion, MotionFrame, MotionKind, Timeline, Transform3d,
};

pub use crate::core::{
    config::BouncingOptions,
    geo::{Point, Size},
};

pub use layers::{marker::BouncingMarker, registry::BouncingRegistry};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, BounceError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum BounceError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Invalid icon height: {0}, must be greater than zero")]
    InvalidIconHeight(u32),
}

/// Error type alias for convenience
pub type Error = BounceError;
