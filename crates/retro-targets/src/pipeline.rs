use std::sync::Arc;

use retro_targets_core::{solve_planar_pnp, CameraIntrinsics, FrameView, OrientedBox};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::model::target_model_points;
use crate::pairing::pair_boxes;
use crate::params::{ParamSource, PipelineParams};
use crate::pose::PoseResult;
use crate::snapshot::{FrameSnapshot, SnapshotCell};

/// Segmentation backend: turns one color frame into oriented boxes,
/// one per reflective blob. Thresholding, morphology, and contour
/// tracing all live behind this seam.
pub trait BlobExtractor {
    fn extract(&mut self, frame: &FrameView<'_>, params: &PipelineParams) -> Vec<OrientedBox>;
}

/// Anything that can consume one frame. The target pipeline is one
/// implementation among others (crosshair overlays, recorders, ...)
/// that a camera loop drives uniformly.
pub trait Pipeline {
    fn process(&mut self, frame: &FrameView<'_>);
}

/// The per-frame target pipeline: extract blobs, pair the halves,
/// solve each pair's pose, publish the frame's snapshot.
pub struct FramePipeline<E, P> {
    extractor: E,
    params: P,
    snapshot: Arc<SnapshotCell>,
}

impl<E: BlobExtractor, P: ParamSource> FramePipeline<E, P> {
    pub fn new(extractor: E, params: P) -> Self {
        Self {
            extractor,
            params,
            snapshot: Arc::new(SnapshotCell::new()),
        }
    }

    /// Shared handle to the published snapshot, for the renderer or
    /// telemetry consumer on another thread.
    pub fn snapshot_cell(&self) -> Arc<SnapshotCell> {
        Arc::clone(&self.snapshot)
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> FrameSnapshot {
        self.snapshot.load()
    }

    fn run_frame(&mut self, frame: &FrameView<'_>) {
        let params = self.params.current();
        let boxes = self.extractor.extract(frame, &params);
        let pairs = pair_boxes(&boxes, params.min_area);

        // Rebuilt every frame: dimensions may differ from the last one.
        let camera = CameraIntrinsics::from_frame(params.focal_length, frame.width, frame.height);

        let mut results: Vec<PoseResult> = Vec::with_capacity(pairs.len());
        for pair in &pairs {
            match solve_planar_pnp(target_model_points(), &pair.image_points(), &camera) {
                Ok(pose) => results.push(PoseResult::new(pose.tvec, pose.rvec)),
                Err(err) => {
                    // One bad pair never takes the frame down.
                    log::debug!("dropping pair at x={:.1}: {err}", pair.left().center.x);
                }
            }
        }

        // Most peripheral targets first.
        results.sort_by(|a, b| b.x().abs().total_cmp(&a.x().abs()));

        log::trace!(
            "frame {}x{}: {} boxes, {} pairs, {} poses",
            frame.width,
            frame.height,
            boxes.len(),
            pairs.len(),
            results.len()
        );

        self.snapshot.publish(results);
    }
}

impl<E: BlobExtractor, P: ParamSource> Pipeline for FramePipeline<E, P> {
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, frame), fields(width = frame.width, height = frame.height))
    )]
    fn process(&mut self, frame: &FrameView<'_>) {
        self.run_frame(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FixedParams;
    use nalgebra::Point2;

    struct CannedBoxes(Vec<OrientedBox>);

    impl BlobExtractor for CannedBoxes {
        fn extract(&mut self, _: &FrameView<'_>, _: &PipelineParams) -> Vec<OrientedBox> {
            self.0.clone()
        }
    }

    fn frame_pixels() -> Vec<u8> {
        vec![0u8; 640 * 480 * 3]
    }

    #[test]
    fn empty_frame_publishes_empty_snapshot() {
        let mut p = FramePipeline::new(
            CannedBoxes(Vec::new()),
            FixedParams(PipelineParams::default()),
        );
        let pixels = frame_pixels();
        p.process(&FrameView::new(640, 480, 3, &pixels));
        assert!(p.snapshot().is_empty());
    }

    #[test]
    fn a_lone_half_yields_no_result() {
        let boxes = vec![OrientedBox::new(Point2::new(300.0, 240.0), 20.0, 50.0, 14.5)];
        let mut p = FramePipeline::new(CannedBoxes(boxes), FixedParams(PipelineParams::default()));
        let pixels = frame_pixels();
        p.process(&FrameView::new(640, 480, 3, &pixels));
        assert!(p.snapshot().is_empty());
    }

    #[test]
    fn snapshot_replaces_on_every_frame() {
        let boxes = vec![
            OrientedBox::new(Point2::new(280.0, 240.0), 20.0, 50.0, 14.5),
            OrientedBox::new(Point2::new(360.0, 240.0), 20.0, 50.0, -14.5),
        ];
        let mut p = FramePipeline::new(CannedBoxes(boxes), FixedParams(PipelineParams::default()));
        let pixels = frame_pixels();

        p.process(&FrameView::new(640, 480, 3, &pixels));
        assert_eq!(p.snapshot().len(), 1);

        // Reader holds on to the first frame's list.
        let held = p.snapshot();

        let mut empty = FramePipeline::new(
            CannedBoxes(Vec::new()),
            FixedParams(PipelineParams::default()),
        );
        empty.process(&FrameView::new(640, 480, 3, &pixels));
        assert_eq!(held.len(), 1);
    }
}
