use nalgebra::{DMatrix, Matrix3, Point2, Vector3};

fn normalization_transform(pts: &[Point2<f64>]) -> Matrix3<f64> {
    // Hartley normalization: translate to centroid, scale so the mean
    // distance from it becomes sqrt(2).
    let n = pts.len() as f64;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for p in pts {
        cx += p.x;
        cy += p.y;
    }
    cx /= n;
    cy /= n;

    let mut mean_dist = 0.0;
    for p in pts {
        mean_dist += ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt();
    }
    mean_dist /= n;

    let s = if mean_dist > 1e-12 {
        (2.0_f64).sqrt() / mean_dist
    } else {
        1.0
    };

    Matrix3::new(s, 0.0, -s * cx, 0.0, s, -s * cy, 0.0, 0.0, 1.0)
}

fn apply_transform(t: &Matrix3<f64>, p: &Point2<f64>) -> Point2<f64> {
    let v = t * Vector3::new(p.x, p.y, 1.0);
    Point2::new(v[0] / v[2], v[1] / v[2])
}

/// Estimate H such that `img ~ H * obj` from N >= 4 planar
/// correspondences, by normalized DLT.
///
/// Returns `None` when the system is rank-deficient (collinear or
/// coincident points) or the resulting matrix cannot be scaled to
/// `h33 == 1`.
pub fn homography_from_correspondences(
    obj_pts: &[Point2<f64>],
    img_pts: &[Point2<f64>],
) -> Option<Matrix3<f64>> {
    if obj_pts.len() != img_pts.len() || obj_pts.len() < 4 {
        return None;
    }

    let t_obj = normalization_transform(obj_pts);
    let t_img = normalization_transform(img_pts);

    let n = obj_pts.len();
    let mut a = DMatrix::<f64>::zeros(2 * n, 9);

    for k in 0..n {
        let o = apply_transform(&t_obj, &obj_pts[k]);
        let i = apply_transform(&t_img, &img_pts[k]);
        let (x, y) = (o.x, o.y);
        let (u, v) = (i.x, i.y);

        // [ -x -y -1   0  0  0   u*x u*y u ]
        a[(2 * k, 0)] = -x;
        a[(2 * k, 1)] = -y;
        a[(2 * k, 2)] = -1.0;
        a[(2 * k, 6)] = u * x;
        a[(2 * k, 7)] = u * y;
        a[(2 * k, 8)] = u;

        // [ 0  0  0  -x -y -1   v*x v*y v ]
        a[(2 * k + 1, 3)] = -x;
        a[(2 * k + 1, 4)] = -y;
        a[(2 * k + 1, 5)] = -1.0;
        a[(2 * k + 1, 6)] = v * x;
        a[(2 * k + 1, 7)] = v * y;
        a[(2 * k + 1, 8)] = v;
    }

    // Ah = 0: h is the right singular vector of the smallest singular value.
    let svd = a.svd(true, true);
    let vt = svd.v_t?;
    let last = vt.nrows().checked_sub(1)?;
    let h = vt.row(last);

    let hn = Matrix3::from_row_slice(&[h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7], h[8]]);

    // Denormalize: H = T_img^{-1} * Hn * T_obj, then scale to h33 == 1.
    let h_den = t_img.try_inverse()? * hn * t_obj;
    let s = h_den[(2, 2)];
    if s.abs() < 1e-12 {
        return None;
    }
    Some(h_den / s)
}
