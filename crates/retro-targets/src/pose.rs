use nalgebra::{Matrix3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// Errors returned by [`PoseResult`] construction.
#[derive(thiserror::Error, Debug)]
pub enum PoseError {
    #[error("{name} is not a 3-component vector (got {len} components)")]
    BadVector { name: &'static str, len: usize },
}

/// Position and orientation of one target in camera space.
///
/// `translation` is inches, `rotation` a Rodrigues vector, both as the
/// PnP solver produced them. Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoseResult {
    tvec: Vector3<f64>,
    rvec: Vector3<f64>,
}

impl PoseResult {
    pub fn new(tvec: Vector3<f64>, rvec: Vector3<f64>) -> Self {
        Self { tvec, rvec }
    }

    /// Build a result from raw solver output slices. Both slices must
    /// hold exactly 3 components; anything else is rejected outright,
    /// never truncated or padded.
    pub fn from_slices(tvec: &[f64], rvec: &[f64]) -> Result<Self, PoseError> {
        if tvec.len() != 3 {
            return Err(PoseError::BadVector {
                name: "tvec",
                len: tvec.len(),
            });
        }
        if rvec.len() != 3 {
            return Err(PoseError::BadVector {
                name: "rvec",
                len: rvec.len(),
            });
        }
        Ok(Self {
            tvec: Vector3::new(tvec[0], tvec[1], tvec[2]),
            rvec: Vector3::new(rvec[0], rvec[1], rvec[2]),
        })
    }

    pub fn translation(&self) -> Vector3<f64> {
        self.tvec
    }

    pub fn rotation(&self) -> Vector3<f64> {
        self.rvec
    }

    /// The 3×3 rotation matrix equivalent of the stored Rodrigues
    /// vector.
    pub fn rotation_matrix(&self) -> Matrix3<f64> {
        Rotation3::from_scaled_axis(self.rvec).into_inner()
    }

    /// Target x in camera space, inches. Positive is to the camera's
    /// right.
    pub fn x(&self) -> f64 {
        self.tvec.x
    }

    /// Target y in camera space, inches. Positive is below the camera.
    pub fn y(&self) -> f64 {
        self.tvec.y
    }

    /// Target z in camera space, inches. Positive is in front of the
    /// camera.
    pub fn z(&self) -> f64 {
        self.tvec.z
    }

    /// Bearing of the camera as seen from the target, in degrees.
    ///
    /// Positive means the observer stands to the target's left,
    /// negative to its right. The value depends only on the camera's
    /// position relative to the target and on the target's
    /// orientation — not on camera tilt, height, or robot heading,
    /// which are not encoded in this pose at all.
    pub fn top_down_angle(&self) -> f64 {
        // Camera position in the target's frame: -(R^T * t).
        let v = -(self.rotation_matrix().transpose() * self.tvec);
        v.x.atan2(-v.z).to_degrees()
    }
}
