use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Minimum-area rotated rectangle enclosing a detected blob.
///
/// `angle_deg` follows the OpenCV `minAreaRect` convention: degrees,
/// measured from the horizontal, in `(-90, 0]` for axis-aligned boxes.
/// The box is a per-frame value; it is never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrientedBox {
    pub center: Point2<f64>,
    pub width: f64,
    pub height: f64,
    pub angle_deg: f64,
}

impl OrientedBox {
    pub fn new(center: Point2<f64>, width: f64, height: f64, angle_deg: f64) -> Self {
        Self {
            center,
            width,
            height,
            angle_deg,
        }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The four vertices of the box, in the same order OpenCV's
    /// `RotatedRect::points` produces them (bottom-left first, then
    /// clockwise for a zero-angle box).
    pub fn corners(&self) -> [Point2<f64>; 4] {
        let rad = self.angle_deg.to_radians();
        let b = rad.cos() * 0.5;
        let a = rad.sin() * 0.5;

        let p0 = Point2::new(
            self.center.x - a * self.height - b * self.width,
            self.center.y + b * self.height - a * self.width,
        );
        let p1 = Point2::new(
            self.center.x + a * self.height - b * self.width,
            self.center.y - b * self.height - a * self.width,
        );
        let c = Vector2::new(self.center.x, self.center.y);
        let p2 = Point2::from(2.0 * c - Vector2::new(p0.x, p0.y));
        let p3 = Point2::from(2.0 * c - Vector2::new(p1.x, p1.y));

        [p0, p1, p2, p3]
    }
}
