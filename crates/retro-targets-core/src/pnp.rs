use nalgebra::{Matrix3, Point2, Point3, Rotation3, Vector3};

use crate::camera::CameraIntrinsics;
use crate::homography::homography_from_correspondences;

/// Errors returned by the planar PnP solver.
#[derive(thiserror::Error, Debug)]
pub enum PnpError {
    #[error("point count mismatch (model {model}, image {image})")]
    PointCountMismatch { model: usize, image: usize },

    #[error("too few correspondences for a planar solve (got {got}, need 4)")]
    TooFewPoints { got: usize },

    #[error("model points are not coplanar with z == 0")]
    NonPlanarModel,

    #[error("degenerate correspondence, no pose solution")]
    Degenerate,
}

/// A solved planar pose: Rodrigues rotation vector plus translation,
/// both mapping model coordinates into camera coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarPose {
    pub rvec: Vector3<f64>,
    pub tvec: Vector3<f64>,
}

const PLANARITY_EPS: f64 = 1e-9;

/// Solve for the pose of a planar model (all points at `z == 0`) seen
/// at the given image points.
///
/// The solve goes through a normalized-DLT homography which is then
/// decomposed against the intrinsics, IPPE style: the first two
/// rotation columns come from the scaled `K^-1 * H` columns, the third
/// from their cross product, and the nearest proper rotation is taken.
/// The sign ambiguity of the decomposition is resolved by requiring
/// the target in front of the camera (`t.z > 0`).
///
/// Degenerate input (collinear points, rank-deficient system, points
/// behind the camera plane) is an error, never a silently defaulted
/// pose.
pub fn solve_planar_pnp(
    model: &[Point3<f64>],
    image: &[Point2<f64>],
    camera: &CameraIntrinsics,
) -> Result<PlanarPose, PnpError> {
    if model.len() != image.len() {
        return Err(PnpError::PointCountMismatch {
            model: model.len(),
            image: image.len(),
        });
    }
    if model.len() < 4 {
        return Err(PnpError::TooFewPoints { got: model.len() });
    }
    if model.iter().any(|p| p.z.abs() > PLANARITY_EPS) {
        return Err(PnpError::NonPlanarModel);
    }

    let obj_xy: Vec<Point2<f64>> = model.iter().map(|p| Point2::new(p.x, p.y)).collect();
    let h = homography_from_correspondences(&obj_xy, image).ok_or(PnpError::Degenerate)?;

    let k_inv = camera.matrix().try_inverse().ok_or(PnpError::Degenerate)?;
    let a = k_inv * h;

    let a1 = a.column(0).into_owned();
    let a2 = a.column(1).into_owned();
    let a3 = a.column(2).into_owned();

    let n1 = a1.norm();
    let n2 = a2.norm();
    if n1 < PLANARITY_EPS || n2 < PLANARITY_EPS {
        return Err(PnpError::Degenerate);
    }
    let lambda = 2.0 / (n1 + n2);
    if !lambda.is_finite() {
        return Err(PnpError::Degenerate);
    }

    let mut r1 = a1 * lambda;
    let mut r2 = a2 * lambda;
    let mut t = a3 * lambda;

    // Homography sign ambiguity: pick the solution with the model in
    // front of the camera.
    if t.z < 0.0 {
        r1 = -r1;
        r2 = -r2;
        t = -t;
    }
    let r3 = r1.cross(&r2);

    let approx = Matrix3::from_columns(&[r1, r2, r3]);
    if !approx.iter().all(|v| v.is_finite()) {
        return Err(PnpError::Degenerate);
    }
    let rot = Rotation3::from_matrix(&approx);

    Ok(PlanarPose {
        rvec: rot.scaled_axis(),
        tvec: Vector3::new(t.x, t.y, t.z),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::project_points;
    use approx::assert_relative_eq;

    fn square_model() -> Vec<Point3<f64>> {
        vec![
            Point3::new(-4.0, -3.0, 0.0),
            Point3::new(4.0, -3.0, 0.0),
            Point3::new(4.0, 3.0, 0.0),
            Point3::new(-4.0, 3.0, 0.0),
            Point3::new(-2.0, -1.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
        ]
    }

    fn assert_pose_close(found: &PlanarPose, rvec: &Vector3<f64>, tvec: &Vector3<f64>) {
        assert_relative_eq!(found.tvec.x, tvec.x, epsilon = 1e-4);
        assert_relative_eq!(found.tvec.y, tvec.y, epsilon = 1e-4);
        assert_relative_eq!(found.tvec.z, tvec.z, epsilon = 1e-4);
        assert_relative_eq!(found.rvec.x, rvec.x, epsilon = 1e-4);
        assert_relative_eq!(found.rvec.y, rvec.y, epsilon = 1e-4);
        assert_relative_eq!(found.rvec.z, rvec.z, epsilon = 1e-4);
    }

    #[test]
    fn recovers_a_frontal_pose() {
        let cam = CameraIntrinsics::from_frame(100.0, 640, 480);
        let rvec = Vector3::zeros();
        let tvec = Vector3::new(2.0, -1.0, 60.0);
        let model = square_model();
        let image = project_points(&model, &rvec, &tvec, &cam);

        let pose = solve_planar_pnp(&model, &image, &cam).unwrap();
        assert_pose_close(&pose, &rvec, &tvec);
    }

    #[test]
    fn recovers_a_yawed_pose() {
        let cam = CameraIntrinsics::from_frame(100.0, 640, 480);
        let rvec = Vector3::new(0.0, 0.35, 0.0);
        let tvec = Vector3::new(-3.0, 2.0, 80.0);
        let model = square_model();
        let image = project_points(&model, &rvec, &tvec, &cam);

        let pose = solve_planar_pnp(&model, &image, &cam).unwrap();
        assert_pose_close(&pose, &rvec, &tvec);
    }

    #[test]
    fn rejects_count_mismatch() {
        let cam = CameraIntrinsics::from_frame(100.0, 640, 480);
        let model = square_model();
        let image = vec![Point2::new(0.0, 0.0); 3];
        assert!(matches!(
            solve_planar_pnp(&model, &image, &cam),
            Err(PnpError::PointCountMismatch { .. })
        ));
    }

    #[test]
    fn rejects_non_planar_model() {
        let cam = CameraIntrinsics::from_frame(100.0, 640, 480);
        let mut model = square_model();
        model[0].z = 1.0;
        let image = vec![Point2::new(0.0, 0.0); model.len()];
        assert!(matches!(
            solve_planar_pnp(&model, &image, &cam),
            Err(PnpError::NonPlanarModel)
        ));
    }

    #[test]
    fn degenerate_correspondence_is_an_error() {
        let cam = CameraIntrinsics::from_frame(100.0, 640, 480);
        let model = square_model();
        // Every image point collapsed to one pixel.
        let image = vec![Point2::new(320.0, 240.0); model.len()];
        assert!(solve_planar_pnp(&model, &image, &cam).is_err());
    }
}
