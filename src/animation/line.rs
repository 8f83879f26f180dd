use crate::core::geo::Point;

/// Rounds half-way cases towards positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Narrows a coordinate to `i32`, saturating at its bounds.
pub(crate) fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Calculates the points of a continuous line starting at `(x, y)` and
/// heading along `angle` (radians). Uses the Bresenham algorithm.
///
/// Exactly `length` points are returned, the first one being the origin.
/// The notional endpoint lies `2 * length` pixels away so the walk never runs
/// out of line before enough points are visited. A zero `length` still
/// yields the origin. Coordinates saturate at the `i32` bounds.
pub fn calculate_line(x: i32, y: i32, angle: f64, length: usize) -> Vec<Point> {
    let reach = (length as f64) * 2.0;
    // Float to int casts saturate, so the endpoint stays in the i32 range.
    let x_d = i64::from(round_half_up(f64::from(x) + angle.cos() * reach) as i32);
    let y_d = i64::from(round_half_up(f64::from(y) + angle.sin() * reach) as i32);
    let (mut x, mut y) = (i64::from(x), i64::from(y));

    let dx = (x_d - x).abs();
    let dy = (y_d - y).abs();
    let sx = if x < x_d { 1 } else { -1 };
    let sy = if y < y_d { 1 } else { -1 };

    // Error term kept doubled so the initial half pixel stays integral.
    let mut err = if dx > dy { dx } else { -dy };

    let mut points = Vec::with_capacity(length.max(1));

    loop {
        points.push(Point::new(saturate(x), saturate(y)));
        if points.len() >= length {
            break;
        }

        let e2 = err;
        if e2 > -2 * dx {
            err -= 2 * dy;
            x += sx;
        }
        if e2 < 2 * dy {
            err += 2 * dx;
            y += sy;
        }
    }

    points
}
