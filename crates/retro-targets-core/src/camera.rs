use nalgebra::{Matrix3, Point2, Point3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// Pinhole camera intrinsics with zero distortion.
///
/// The principal point is the frame center, so the model is rebuilt
/// from the current frame dimensions before every solve rather than
/// cached: frame dimensions are not assumed constant across frames.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    pub focal_length: f64,
    pub cx: f64,
    pub cy: f64,
}

impl CameraIntrinsics {
    pub fn from_frame(focal_length: f64, width: usize, height: usize) -> Self {
        Self {
            focal_length,
            cx: width as f64 / 2.0,
            cy: height as f64 / 2.0,
        }
    }

    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.focal_length,
            0.0,
            self.cx,
            0.0,
            self.focal_length,
            self.cy,
            0.0,
            0.0,
            1.0,
        )
    }
}

/// Project 3D model points into the image with a Rodrigues rotation
/// vector and a translation, pinhole model, no distortion.
///
/// Points that land behind the camera project through the plane at
/// `z == 0` and come out mirrored; callers are expected to hand in
/// poses with positive depth.
pub fn project_points(
    model: &[Point3<f64>],
    rvec: &Vector3<f64>,
    tvec: &Vector3<f64>,
    camera: &CameraIntrinsics,
) -> Vec<Point2<f64>> {
    let rot = Rotation3::from_scaled_axis(*rvec);
    model
        .iter()
        .map(|p| {
            let c = rot * p.coords + tvec;
            Point2::new(
                camera.focal_length * c.x / c.z + camera.cx,
                camera.focal_length * c.y / c.z + camera.cy,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn principal_point_is_half_frame() {
        let cam = CameraIntrinsics::from_frame(100.0, 640, 480);
        assert_relative_eq!(cam.cx, 320.0);
        assert_relative_eq!(cam.cy, 240.0);
        let k = cam.matrix();
        assert_relative_eq!(k[(0, 0)], 100.0);
        assert_relative_eq!(k[(1, 1)], 100.0);
        assert_relative_eq!(k[(2, 2)], 1.0);
    }

    #[test]
    fn identity_pose_projects_through_center() {
        let cam = CameraIntrinsics::from_frame(100.0, 640, 480);
        let pts = project_points(
            &[Point3::new(0.0, 0.0, 0.0)],
            &Vector3::zeros(),
            &Vector3::new(0.0, 0.0, 50.0),
            &cam,
        );
        assert_relative_eq!(pts[0].x, 320.0, epsilon = 1e-9);
        assert_relative_eq!(pts[0].y, 240.0, epsilon = 1e-9);
    }

    #[test]
    fn lateral_offset_moves_the_projection() {
        let cam = CameraIntrinsics::from_frame(100.0, 640, 480);
        let pts = project_points(
            &[Point3::new(5.0, 0.0, 0.0)],
            &Vector3::zeros(),
            &Vector3::new(0.0, 0.0, 50.0),
            &cam,
        );
        // x' = f * X / Z + cx = 100 * 5 / 50 + 320
        assert_relative_eq!(pts[0].x, 330.0, epsilon = 1e-9);
        assert_relative_eq!(pts[0].y, 240.0, epsilon = 1e-9);
    }
}
