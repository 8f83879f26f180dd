use crate::core::geo::Point;
use nalgebra::Matrix4;
use std::fmt;

/// A 3D affine transform applied to a marker element for one animation frame.
///
/// Only translation and a vertical scale are ever produced, i.e.
/// `translate(x, y) scale(1, s)`, but the full homogeneous matrix is kept so
/// it can be handed to a renderer as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3d {
    matrix: Matrix4<f64>,
}

impl Transform3d {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Pure translation to `(x, y)`
    pub fn translation(x: f64, y: f64) -> Self {
        Self::translation_scale_y(x, y, 1.0)
    }

    /// Translation to `(x, y)` combined with a vertical scale factor
    pub fn translation_scale_y(x: f64, y: f64, scale_y: f64) -> Self {
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            1.0, 0.0,     0.0, x,
            0.0, scale_y, 0.0, y,
            0.0, 0.0,     1.0, 0.0,
            0.0, 0.0,     0.0, 1.0,
        );
        Self { matrix }
    }

    pub fn from_point(point: Point) -> Self {
        Self::translation(f64::from(point.x), f64::from(point.y))
    }

    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    pub fn translate_x(&self) -> f64 {
        self.matrix[(0, 3)]
    }

    pub fn translate_y(&self) -> f64 {
        self.matrix[(1, 3)]
    }

    pub fn scale_y(&self) -> f64 {
        self.matrix[(1, 1)]
    }

    /// Applies the transform to a point of the element's local space
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.matrix * nalgebra::Vector4::new(x, y, 0.0, 1.0);
        (p.x, p.y)
    }

    /// CSS `matrix3d()` value, ready to be put in a `transform` style property
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Default for Transform3d {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Transform3d {
    /// Writes ` matrix3d(a1,b1,c1,d1,...) ` in column-major order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" matrix3d(")?;
        for (i, value) in self.matrix.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(") ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_css() {
        let transform = Transform3d::translation(100.0, 85.0);
        assert_eq!(
            transform.to_css(),
            " matrix3d(1,0,0,0,0,1,0,0,0,0,1,0,100,85,0,1) "
        );
    }

    #[test]
    fn test_scaled_css() {
        let transform = Transform3d::translation_scale_y(100.0, 101.0, 40.0 / 41.0);
        assert_eq!(
            transform.to_css(),
            " matrix3d(1,0,0,0,0,0.975609756097561,0,0,0,0,1,0,100,101,0,1) "
        );
        assert_eq!(transform.translate_x(), 100.0);
        assert_eq!(transform.translate_y(), 101.0);
        assert_eq!(transform.scale_y(), 40.0 / 41.0);
    }

    #[test]
    fn test_apply_scales_then_translates() {
        let transform = Transform3d::translation_scale_y(10.0, 20.0, 0.5);
        assert_eq!(transform.apply(2.0, 8.0), (12.0, 24.0));
        assert_eq!(Transform3d::identity().apply(3.0, 4.0), (3.0, 4.0));
    }

    #[test]
    fn test_negative_translation() {
        let transform = Transform3d::from_point(Point::new(-5, -12));
        assert_eq!(
            transform.to_string(),
            " matrix3d(1,0,0,0,0,1,0,0,0,0,1,0,-5,-12,0,1) "
        );
    }
}
