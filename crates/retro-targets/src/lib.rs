//! Paired retroreflective target detection and pose estimation.
//!
//! A physical target is two mirror-image reflective strips tilted
//! ±14.5°. Per frame, an external segmentation backend supplies one
//! [`OrientedBox`] per reflective blob; this crate classifies each box
//! as a left- or right-leaning half, pairs adjacent halves left to
//! right, lifts each pair to 8 ordered image corners, solves a planar
//! PnP against the known strip geometry, and publishes the resulting
//! poses as an immutable per-frame snapshot for a concurrent consumer.
//!
//! ## Quickstart
//!
//! ```
//! use retro_targets::{FixedParams, FramePipeline, OrientedBox, Pipeline, PipelineParams};
//! use retro_targets_core::FrameView;
//!
//! // A segmentation backend; real ones threshold and trace contours.
//! struct NoBlobs;
//! impl retro_targets::BlobExtractor for NoBlobs {
//!     fn extract(&mut self, _frame: &FrameView<'_>, _params: &PipelineParams) -> Vec<OrientedBox> {
//!         Vec::new()
//!     }
//! }
//!
//! let mut pipeline = FramePipeline::new(NoBlobs, FixedParams(PipelineParams::default()));
//! let pixels = vec![0u8; 640 * 480 * 3];
//! pipeline.process(&FrameView::new(640, 480, 3, &pixels));
//! assert!(pipeline.snapshot().is_empty());
//! ```

mod classify;
mod model;
mod pairing;
mod params;
mod pipeline;
mod pose;
mod snapshot;

pub use classify::{classify, Handedness};
pub use model::{target_model_points, target_outline_points};
pub use pairing::{pair_boxes, TargetPair};
pub use params::{FixedParams, ParamSource, PipelineParams, SharedParams};
pub use pipeline::{BlobExtractor, FramePipeline, Pipeline};
pub use pose::{PoseError, PoseResult};
pub use snapshot::{FrameSnapshot, SnapshotCell};

pub use retro_targets_core::{CameraIntrinsics, FrameView, OrientedBox};
