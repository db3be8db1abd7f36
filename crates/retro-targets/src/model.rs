use std::sync::LazyLock;

use nalgebra::Point3;

/// Physical geometry of the two-piece target: each half is a 2×5.5 in
/// reflective strip tilted 14.5° off vertical, mirrored about the
/// centerline. Coordinates are inches in the target's local frame,
/// origin between the two inner bottom corners, all points at z = 0.
///
/// Point order is outer-top, inner-upper, inner-lower, outer-bottom,
/// left/right interleaved — the exact order
/// [`TargetPair::image_points`](crate::TargetPair::image_points)
/// produces, which is what makes the PnP correspondence line up.
static TARGET_MODEL: LazyLock<[Point3<f64>; 8]> = LazyLock::new(|| {
    let s = (14.5_f64).to_radians().sin();
    let c = (14.5_f64).to_radians().cos();
    [
        Point3::new(-4.0 - 2.0 * c, -5.0 * c - 2.0 * s, 0.0),
        Point3::new(4.0 + 2.0 * c, -5.0 * c - 2.0 * s, 0.0),
        Point3::new(-4.0, -5.0 * c, 0.0),
        Point3::new(4.0, -5.0 * c, 0.0),
        Point3::new(-4.0 - 5.0 * s - 2.0 * c, -2.0 * s, 0.0),
        Point3::new(4.0 + 5.0 * s + 2.0 * c, -2.0 * s, 0.0),
        Point3::new(-4.0 - 5.0 * s, 0.0, 0.0),
        Point3::new(4.0 + 5.0 * s, 0.0, 0.0),
    ]
});

/// Loose quad around the whole target, for overlay rendering.
static TARGET_OUTLINE: LazyLock<[Point3<f64>; 4]> = LazyLock::new(|| {
    [
        Point3::new(-8.0, -6.0, 0.0),
        Point3::new(8.0, -6.0, 0.0),
        Point3::new(-8.0, 1.0, 0.0),
        Point3::new(8.0, 1.0, 0.0),
    ]
});

/// The 8-point physical target model used for pose solving.
pub fn target_model_points() -> &'static [Point3<f64>; 8] {
    &TARGET_MODEL
}

/// The 4-point outline quad consumed by the external renderer.
pub fn target_outline_points() -> &'static [Point3<f64>; 4] {
    &TARGET_OUTLINE
}
