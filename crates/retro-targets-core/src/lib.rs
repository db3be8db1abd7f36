//! Geometric primitives for retroreflective vision-target detection.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete camera, segmentation backend, or image codec:
//! it provides the rotated-rectangle, camera-intrinsics, homography and
//! planar-PnP building blocks that the target-level crate composes into
//! a frame pipeline.

mod camera;
mod frame;
mod homography;
mod logger;
mod obox;
mod pnp;

pub use camera::{project_points, CameraIntrinsics};
pub use frame::FrameView;
pub use homography::homography_from_correspondences;
pub use obox::OrientedBox;
pub use pnp::{solve_planar_pnp, PlanarPose, PnpError};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
