//! Everything a playback driver needs to bounce one marker

use crate::animation::displacement::{
    icon_move_points, icon_move_transforms, icon_resize_transforms, shadow_move_points,
    shadow_move_transforms,
};
use crate::animation::timeline::{MotionKind, Sequence, Timeline};
use crate::animation::transform::Transform3d;
use crate::core::config::BouncingOptions;
use crate::core::geo::Point;
use std::num::NonZeroU32;

/// Precomputed timeline and displacements of one bouncing marker.
///
/// Both the transform and the point representation are exposed; the driver
/// picks the one its rendering surface supports.
#[derive(Debug, Clone)]
pub struct BouncingMotion {
    pub move_steps: Sequence,
    pub move_delays: Sequence,
    pub icon_move_transforms: Vec<Transform3d>,
    pub icon_move_points: Vec<Point>,
    pub resize: Option<ResizeMotion>,
    pub shadow: Option<ShadowMotion>,
}

/// Elastic contraction of the icon at the end of a bounce
#[derive(Debug, Clone)]
pub struct ResizeMotion {
    pub steps: Sequence,
    pub delays: Sequence,
    pub transforms: Vec<Transform3d>,
}

#[derive(Debug, Clone)]
pub struct ShadowMotion {
    pub transforms: Vec<Transform3d>,
    pub points: Vec<Point>,
}

/// State of the move animation at one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    /// Height of the icon above its rest position
    pub step: u32,
    /// Time from the start of the animation (ms)
    pub delay: u32,
    pub icon_transform: Transform3d,
    pub icon_point: Point,
    pub shadow_transform: Option<Transform3d>,
    pub shadow_point: Option<Point>,
}

impl BouncingMotion {
    /// Calculates the motion using the process-wide timeline cache.
    pub fn calculate(
        options: &BouncingOptions,
        icon_position: Point,
        icon_height: NonZeroU32,
        shadow_position: Option<Point>,
    ) -> Self {
        Self::calculate_with(
            Timeline::global(),
            options,
            icon_position,
            icon_height,
            shadow_position,
        )
    }

    pub fn calculate_with(
        timeline: &Timeline,
        options: &BouncingOptions,
        icon_position: Point,
        icon_height: NonZeroU32,
        shadow_position: Option<Point>,
    ) -> Self {
        let Point { x, y } = icon_position;
        let bounce_height = options.bounce_height;

        let resize = options.elastic.then(|| ResizeMotion {
            steps: timeline.steps(options.contract_height, MotionKind::Resize),
            delays: timeline.delays(
                options.contract_height,
                options.contract_speed,
                MotionKind::Resize,
            ),
            transforms: icon_resize_transforms(x, y, icon_height, options.contract_height),
        });

        let shadow = shadow_position.map(|shadow| ShadowMotion {
            transforms: shadow_move_transforms(
                shadow.x,
                shadow.y,
                bounce_height,
                options.shadow_angle,
            ),
            points: shadow_move_points(shadow.x, shadow.y, bounce_height, options.shadow_angle),
        });

        log::debug!(
            "calculated bouncing motion at ({}, {}): height {}, elastic {}, shadow {}",
            x,
            y,
            bounce_height,
            resize.is_some(),
            shadow.is_some()
        );

        Self {
            move_steps: timeline.steps(bounce_height, MotionKind::Move),
            move_delays: timeline.delays(bounce_height, options.bounce_speed, MotionKind::Move),
            icon_move_transforms: icon_move_transforms(x, y, bounce_height),
            icon_move_points: icon_move_points(x, y, bounce_height),
            resize,
            shadow,
        }
    }

    /// Number of frames of the move animation
    pub fn frame_count(&self) -> usize {
        self.move_steps.len()
    }

    /// Total duration of the move animation (ms)
    pub fn duration(&self) -> u32 {
        self.move_delays.last().copied().unwrap_or(0)
    }

    /// Resolves frame `index` of the move animation to what must be drawn.
    pub fn frame(&self, index: usize) -> Option<MotionFrame> {
        let step = *self.move_steps.get(index)?;
        let delay = *self.move_delays.get(index)?;
        let offset = step as usize;

        Some(MotionFrame {
            step,
            delay,
            icon_transform: *self.icon_move_transforms.get(offset)?,
            icon_point: *self.icon_move_points.get(offset)?,
            shadow_transform: self
                .shadow
                .as_ref()
                .and_then(|shadow| shadow.transforms.get(offset).copied()),
            shadow_point: self
                .shadow
                .as_ref()
                .and_then(|shadow| shadow.points.get(offset).copied()),
        })
    }

    pub fn frames(&self) -> impl Iterator<Item = MotionFrame> + '_ {
        (0..self.frame_count()).filter_map(move |index| self.frame(index))
    }
}
