use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Tunable pipeline settings.
///
/// The HSV bounds travel through to the segmentation backend; the
/// pipeline itself only consumes `min_area` and `focal_length`. All
/// values are read fresh at the start of each frame so a live tuning
/// store can change them between frames.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Lower HSV segmentation bound.
    #[serde(default = "default_lower_bound")]
    pub lower_bound: [f64; 3],
    /// Upper HSV segmentation bound.
    #[serde(default = "default_upper_bound")]
    pub upper_bound: [f64; 3],
    /// Minimum oriented-box area, in pixels², for a blob to count.
    #[serde(default = "default_min_area")]
    pub min_area: f64,
    /// Camera focal length, in pixels.
    #[serde(default = "default_focal_length")]
    pub focal_length: f64,
}

fn default_lower_bound() -> [f64; 3] {
    [30.0, 200.0, 100.0]
}

fn default_upper_bound() -> [f64; 3] {
    [80.0, 255.0, 255.0]
}

fn default_min_area() -> f64 {
    20.0
}

fn default_focal_length() -> f64 {
    100.0
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            lower_bound: default_lower_bound(),
            upper_bound: default_upper_bound(),
            min_area: default_min_area(),
            focal_length: default_focal_length(),
        }
    }
}

/// Where the pipeline reads its settings each frame.
pub trait ParamSource {
    fn current(&self) -> PipelineParams;
}

/// Fixed settings, handed in once.
pub struct FixedParams(pub PipelineParams);

impl ParamSource for FixedParams {
    fn current(&self) -> PipelineParams {
        self.0
    }
}

/// Settings shared with a tuning UI or network store; writers update
/// the inner value, the pipeline picks it up on the next frame.
#[derive(Clone, Default)]
pub struct SharedParams(Arc<RwLock<PipelineParams>>);

impl SharedParams {
    pub fn new(params: PipelineParams) -> Self {
        Self(Arc::new(RwLock::new(params)))
    }

    pub fn set(&self, params: PipelineParams) {
        if let Ok(mut guard) = self.0.write() {
            *guard = params;
        }
    }
}

impl ParamSource for SharedParams {
    fn current(&self) -> PipelineParams {
        self.0
            .read()
            .map(|guard| *guard)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }
}
