//! Per-step positions of the marker icon and its shadow
//!
//! Every sequence is indexed by animation step, index 0 being the rest
//! position. The point variants serve surfaces that can only be positioned,
//! the transform variants are derived from the same points for surfaces
//! supporting 3D transforms, so both paths render identically.

use crate::animation::line::{calculate_line, saturate};
use crate::animation::transform::Transform3d;
use crate::core::geo::Point;
use std::num::NonZeroU32;

/// Points of a straight vertical lift from `(x, y)` up to `bounce_height` px.
///
/// Positions saturate at the top of the `i32` range.
pub fn icon_move_points(x: i32, y: i32, bounce_height: u32) -> Vec<Point> {
    (0..=bounce_height)
        .map(|dh| Point::new(x, saturate(i64::from(y) - i64::from(dh))))
        .collect()
}

/// Points of the shadow movement.
///
/// With an angle the shadow slides along a line of `bounce_height + 1`
/// points, without one it stays at `(x, y)` for every step.
pub fn shadow_move_points(x: i32, y: i32, bounce_height: u32, angle: Option<f64>) -> Vec<Point> {
    let length = bounce_height as usize + 1;
    match angle {
        Some(angle) => calculate_line(x, y, angle, length),
        None => vec![Point::new(x, y); length],
    }
}

/// Translation transforms of the icon movement.
pub fn icon_move_transforms(x: i32, y: i32, bounce_height: u32) -> Vec<Transform3d> {
    to_transforms(icon_move_points(x, y, bounce_height))
}

/// Translation transforms of the shadow movement.
pub fn shadow_move_transforms(
    x: i32,
    y: i32,
    bounce_height: u32,
    angle: Option<f64>,
) -> Vec<Transform3d> {
    to_transforms(shadow_move_points(x, y, bounce_height, angle))
}

/// Transforms squashing the icon as it lands.
///
/// Step `i` moves the icon down to `(x, y + i)` and scales its height by
/// `(icon_height - i) / icon_height`.
pub fn icon_resize_transforms(
    x: i32,
    y: i32,
    icon_height: NonZeroU32,
    contract_height: u32,
) -> Vec<Transform3d> {
    let height = f64::from(icon_height.get());

    (0..=contract_height)
        .map(|i| {
            let dh = f64::from(i);
            let scale_y = (height - dh) / height;
            Transform3d::translation_scale_y(f64::from(x), f64::from(y) + dh, scale_y)
        })
        .collect()
}

fn to_transforms(points: Vec<Point>) -> Vec<Transform3d> {
    points.into_iter().map(Transform3d::from_point).collect()
}
