//! Bounce defaults taken from the Leaflet bouncing-marker conventions.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

use std::f64::consts::FRAC_PI_4;

/// How high a marker bounces (px).
pub const DEFAULT_BOUNCE_HEIGHT: u32 = 15;

/// How much a marker contracts when it lands (px).
pub const DEFAULT_CONTRACT_HEIGHT: u32 = 12;

/// Bouncing speed coefficient (ms spent on the step next to the apex).
pub const DEFAULT_BOUNCE_SPEED: u32 = 52;

/// Contracting speed coefficient.
pub const DEFAULT_CONTRACT_SPEED: u32 = 52;

/// Shadow inclination angle (radians), up and to the right.
pub const DEFAULT_SHADOW_ANGLE: f64 = -FRAC_PI_4;

/// Marker icon default size (regular PNG).
pub const MARKER_ICON_SIZE: (u32, u32) = (25, 41);

