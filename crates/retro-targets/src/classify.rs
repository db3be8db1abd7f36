use retro_targets_core::OrientedBox;
use serde::{Deserialize, Serialize};

/// Which physical target half an oriented box belongs to.
///
/// The two halves are mirror-image parallelograms tilted in opposite
/// directions; handedness is inferred purely from the reported tilt
/// and aspect ratio.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

/// Classify a box as a left- or right-leaning target half.
///
/// With a positive tangent of the tilt, the left half reports
/// `width <= height`; with a non-positive tangent (zero included) the
/// rectangle fit swaps axes and the left half reports
/// `width > height`. `width == height` falls through the inequality of
/// whichever branch applies; there is no further tie-break.
pub fn classify(b: &OrientedBox) -> Handedness {
    let leaning_left = if b.angle_deg.to_radians().tan() > 0.0 {
        b.width <= b.height
    } else {
        b.width > b.height
    };
    if leaning_left {
        Handedness::Left
    } else {
        Handedness::Right
    }
}
