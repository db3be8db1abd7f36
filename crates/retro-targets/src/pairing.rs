use nalgebra::Point2;

use retro_targets_core::OrientedBox;

use crate::classify::{classify, Handedness};

/// One matched left+right pair of oriented boxes, a physical target
/// candidate. Lives for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetPair {
    left: OrientedBox,
    right: OrientedBox,
}

impl TargetPair {
    /// Build a pair, normalizing so `left` is the physically-left box.
    pub fn new(left: OrientedBox, right: OrientedBox) -> Self {
        if left.center.x > right.center.x {
            Self {
                left: right,
                right: left,
            }
        } else {
            Self { left, right }
        }
    }

    pub fn left(&self) -> &OrientedBox {
        &self.left
    }

    pub fn right(&self) -> &OrientedBox {
        &self.right
    }

    /// The 8 image corners of the pair, in the fixed order the physical
    /// target model expects: each box's 4 corners sorted top to bottom,
    /// then interleaved left[i], right[i].
    pub fn image_points(&self) -> [Point2<f64>; 8] {
        let mut left = self.left.corners();
        let mut right = self.right.corners();
        sort_by_y(&mut left);
        sort_by_y(&mut right);

        let mut pts = [Point2::new(0.0, 0.0); 8];
        for i in 0..4 {
            pts[2 * i] = left[i];
            pts[2 * i + 1] = right[i];
        }
        pts
    }
}

fn sort_by_y(pts: &mut [Point2<f64>; 4]) {
    pts.sort_by(|a, b| a.y.total_cmp(&b.y));
}

/// Group classified boxes into target pairs.
///
/// Boxes below `min_area` are dropped, the rest are sorted by center
/// x and swept once left to right: a LEFT box becomes the pending
/// left half (silently replacing any unmatched one), a RIGHT box
/// closes the pending left into a pair or is discarded when nothing
/// is pending. One sweep, no backtracking, at most `n / 2` pairs.
pub fn pair_boxes(boxes: &[OrientedBox], min_area: f64) -> Vec<TargetPair> {
    let mut kept: Vec<&OrientedBox> = boxes.iter().filter(|b| b.area() >= min_area).collect();
    kept.sort_by(|a, b| a.center.x.total_cmp(&b.center.x));

    let mut pairs = Vec::new();
    let mut pending_left: Option<&OrientedBox> = None;
    for b in kept {
        match classify(b) {
            Handedness::Left => pending_left = Some(b),
            Handedness::Right => {
                if let Some(left) = pending_left.take() {
                    pairs.push(TargetPair::new(*left, *b));
                }
            }
        }
    }
    pairs
}
