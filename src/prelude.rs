//! Prelude module for common marker-bounce types and functions
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use marker_bounce::prelude::*;`

pub use crate::core::{
    config::BouncingOptions,
    geo::{Point, Size},
};

pub use crate::animation::{
    displacement::{
        icon_move_points, icon_move_transforms, icon_resize_transforms, shadow_move_points,
        shadow_move_transforms,
    },
    line::calculate_line,
    motion::{BouncingMotion, MotionFrame, ResizeMotion, ShadowMotion},
    timeline::{calculate_delays, calculate_steps, MotionKind, Sequence, Timeline},
    transform::Transform3d,
};

pub use crate::layers::{marker::BouncingMarker, registry::BouncingRegistry};

pub use crate::{BounceError, Result};

pub use std::{num::NonZeroU32, sync::Arc};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
