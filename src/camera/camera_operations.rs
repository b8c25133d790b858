//! Camera operations - Pure DOP functions
//!
//! All functions are pure: they take data, return new data, no side effects.
//! No methods, no self, just transformations.

use super::camera_data::{CameraConfig, CameraData, CameraError, CameraUniform};
use crate::constants::camera::DEGENERATE_EPSILON;
use cgmath::{EuclideanSpace, InnerSpace, Point3, Vector3};

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Build an orthonormal basis looking from `eye` towards `target`
///
/// `view = normalize(target - eye)`, `right = normalize(view × up)`,
/// `up' = normalize(right × view)`.
pub fn try_look_at(
    eye: Point3<f32>,
    target: Point3<f32>,
    up: Vector3<f32>,
) -> Result<CameraData, CameraError> {
    for (input, finite) in [
        ("eye", is_finite(eye.to_vec())),
        ("target", is_finite(target.to_vec())),
        ("up", is_finite(up)),
    ] {
        if !finite {
            return Err(CameraError::NonFinite { input });
        }
    }
    let forward = target - eye;
    if forward.magnitude() < DEGENERATE_EPSILON {
        return Err(CameraError::CoincidentEyeTarget);
    }
    basis_from_view(eye, forward.normalize(), up)
}

/// Infallible look-at
///
/// Degenerate inputs are logged and repaired: coincident eye and target look
/// down -Z, and an up hint parallel to the view is replaced by the world axis
/// least aligned with the view. Non-finite inputs give the axis-aligned
/// camera looking down -Z, placed at the origin if the eye itself is unusable.
pub fn look_at(eye: Point3<f32>, target: Point3<f32>, up: Vector3<f32>) -> CameraData {
    let view = match try_look_at(eye, target, up) {
        Ok(camera) => return camera,
        Err(err @ CameraError::NonFinite { .. }) => {
            log::warn!("[Camera] {}, falling back to an axis-aligned view", err);
            let position = if is_finite(eye.to_vec()) {
                eye
            } else {
                Point3::origin()
            };
            return CameraData {
                position,
                view: -Vector3::unit_z(),
                up: Vector3::unit_y(),
                right: Vector3::unit_x(),
            };
        }
        Err(CameraError::CoincidentEyeTarget) => {
            log::warn!(
                "[Camera] Eye and target coincide at ({:.3}, {:.3}, {:.3}), looking down -Z",
                eye.x,
                eye.y,
                eye.z
            );
            Vector3::new(0.0, 0.0, -1.0)
        }
        Err(CameraError::DegenerateBasis { .. }) => (target - eye).normalize(),
    };

    match basis_from_view(eye, view, up) {
        Ok(camera) => camera,
        Err(err) => {
            let alternate = least_aligned_axis(view);
            log::warn!(
                "[Camera] {}, using up ({}, {}, {}) instead",
                err,
                alternate.x,
                alternate.y,
                alternate.z
            );
            // The least aligned axis is never parallel to a unit view
            basis_from_view(eye, view, alternate).unwrap_or(CameraData {
                position: eye,
                view,
                up: Vector3::unit_y(),
                right: Vector3::unit_x(),
            })
        }
    }
}

/// Initialize camera from config
pub fn init_camera_from_config(config: &CameraConfig) -> CameraData {
    look_at(
        Point3::from(config.eye),
        Point3::from(config.target),
        Vector3::from(config.up),
    )
}

fn basis_from_view(
    eye: Point3<f32>,
    view: Vector3<f32>,
    up: Vector3<f32>,
) -> Result<CameraData, CameraError> {
    let right = view.cross(up);
    if right.magnitude() < DEGENERATE_EPSILON {
        return Err(CameraError::DegenerateBasis {
            up_x: up.x,
            up_y: up.y,
            up_z: up.z,
        });
    }
    let right = right.normalize();
    let up = right.cross(view).normalize();

    Ok(CameraData {
        position: eye,
        view,
        up,
        right,
    })
}

fn is_finite(v: Vector3<f32>) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

/// World axis with the smallest absolute component in `view` (first wins on ties)
fn least_aligned_axis(view: Vector3<f32>) -> Vector3<f32> {
    let (x, y, z) = (view.x.abs(), view.y.abs(), view.z.abs());
    if x <= y && x <= z {
        Vector3::unit_x()
    } else if y <= z {
        Vector3::unit_y()
    } else {
        Vector3::unit_z()
    }
}

// ============================================================================
// MOVEMENT
// ============================================================================

/// Move the eye by `delta` and look back at `target`
///
/// The only way a camera changes after creation. Orientation is always
/// rebuilt from scratch, so the basis never drifts.
pub fn translate_and_reorient(
    camera: &CameraData,
    delta: Vector3<f32>,
    target: Point3<f32>,
    world_up: Vector3<f32>,
) -> CameraData {
    look_at(camera.position + delta, target, world_up)
}

// ============================================================================
// GPU PACKING
// ============================================================================

/// Build camera uniform for GPU
pub fn build_camera_uniform(camera: &CameraData) -> CameraUniform {
    CameraUniform {
        pos: [camera.position.x, camera.position.y, camera.position.z, 1.0],
        view: [camera.view.x, camera.view.y, camera.view.z, 0.0],
        up: [camera.up.x, camera.up.y, camera.up.z, 0.0],
        right: [camera.right.x, camera.right.y, camera.right.z, 0.0],
    }
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Log camera context for debugging
pub fn log_camera_context(camera: &CameraData) {
    log::debug!(
        "[Camera] Position: ({:.2}, {:.2}, {:.2}) | View: ({:.3}, {:.3}, {:.3}) | Up: ({:.3}, {:.3}, {:.3})",
        camera.position.x,
        camera.position.y,
        camera.position.z,
        camera.view.x,
        camera.view.y,
        camera.view.z,
        camera.up.x,
        camera.up.y,
        camera.up.z
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(camera: &CameraData) {
        assert!((camera.view.magnitude() - 1.0).abs() < EPS);
        assert!((camera.up.magnitude() - 1.0).abs() < EPS);
        assert!((camera.right.magnitude() - 1.0).abs() < EPS);
        assert!(camera.view.dot(camera.up).abs() < EPS);
        assert!(camera.view.dot(camera.right).abs() < EPS);
        assert!(camera.up.dot(camera.right).abs() < EPS);
        // right × up points away from the view direction
        assert!((camera.right.cross(camera.up).dot(camera.view) + 1.0).abs() < EPS);
    }

    fn assert_vec_eq(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).magnitude() < EPS, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_default_camera_basis() {
        let camera = init_camera_from_config(&CameraConfig::default());
        assert_eq!(camera.position, Point3::new(10.0, 5.0, 24.0));
        assert_vec_eq(camera.view, Vector3::new(6.0, 11.0, -8.0) / 221.0f32.sqrt());
        assert_orthonormal(&camera);
        // World up keeps a positive share of the screen up
        assert!(camera.up.y > 0.0);
    }

    #[test]
    fn test_axis_aligned_look_at() {
        let camera = look_at(Point3::new(0.0, 0.0, 5.0), Point3::new(0.0, 0.0, 0.0), Vector3::unit_y());
        assert_vec_eq(camera.view, Vector3::new(0.0, 0.0, -1.0));
        assert_vec_eq(camera.right, Vector3::unit_x());
        assert_vec_eq(camera.up, Vector3::unit_y());
    }

    #[test]
    fn test_orthonormal_for_many_eyes() {
        let target = Point3::new(16.0, 16.0, 16.0);
        for i in 0..64 {
            let t = i as f32 * 0.37;
            let eye = Point3::new(16.0 + 20.0 * t.cos(), 16.0 + 7.0 * (t * 1.3).sin(), 16.0 + 20.0 * t.sin());
            assert_orthonormal(&look_at(eye, target, Vector3::unit_y()));
        }
    }

    #[test]
    fn test_try_look_at_rejects_coincident_points() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(try_look_at(p, p, Vector3::unit_y()), Err(CameraError::CoincidentEyeTarget));
    }

    #[test]
    fn test_try_look_at_rejects_parallel_up() {
        let result = try_look_at(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 5.0, 0.0), Vector3::unit_y());
        assert!(matches!(result, Err(CameraError::DegenerateBasis { .. })));
    }

    #[test]
    fn test_look_at_falls_back_on_parallel_up() {
        let camera = look_at(Point3::new(16.0, 0.0, 16.0), Point3::new(16.0, 16.0, 16.0), Vector3::unit_y());
        assert_vec_eq(camera.view, Vector3::unit_y());
        assert_orthonormal(&camera);
        assert!(camera.right.x.is_finite() && camera.up.x.is_finite());
    }

    #[test]
    fn test_look_at_falls_back_on_coincident_points() {
        let p = Point3::new(16.0, 16.0, 16.0);
        let camera = look_at(p, p, Vector3::unit_y());
        assert_eq!(camera.position, p);
        assert_vec_eq(camera.view, Vector3::new(0.0, 0.0, -1.0));
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_repeated_zero_delta_matches_fresh_look_at() {
        let target = Point3::new(16.0, 16.0, 16.0);
        let initial = init_camera_from_config(&CameraConfig::default());
        let fresh = look_at(initial.position, target, Vector3::unit_y());
        let mut camera = initial;
        for _ in 0..1000 {
            camera = translate_and_reorient(&camera, Vector3::new(0.0, 0.0, 0.0), target, Vector3::unit_y());
            assert_eq!(camera, fresh);
        }
    }

    #[test]
    fn test_try_look_at_rejects_non_finite_inputs() {
        let target = Point3::new(16.0, 16.0, 16.0);
        assert_eq!(
            try_look_at(Point3::new(f32::NAN, 5.0, 24.0), target, Vector3::unit_y()),
            Err(CameraError::NonFinite { input: "eye" })
        );
        assert_eq!(
            try_look_at(Point3::new(10.0, 5.0, 24.0), Point3::new(16.0, f32::INFINITY, 16.0), Vector3::unit_y()),
            Err(CameraError::NonFinite { input: "target" })
        );
        assert_eq!(
            try_look_at(Point3::new(10.0, 5.0, 24.0), target, Vector3::new(f32::INFINITY, 0.0, 0.0)),
            Err(CameraError::NonFinite { input: "up" })
        );
    }

    #[test]
    fn test_look_at_never_returns_nan() {
        let camera = look_at(Point3::new(f32::NAN, 5.0, 24.0), Point3::new(16.0, 16.0, 16.0), Vector3::unit_y());
        assert_eq!(camera.position, Point3::new(0.0, 0.0, 0.0));
        assert_vec_eq(camera.view, Vector3::new(0.0, 0.0, -1.0));
        assert_orthonormal(&camera);

        let eye = Point3::new(10.0, 5.0, 24.0);
        let camera = look_at(eye, Point3::new(16.0, 16.0, 16.0), Vector3::new(0.0, f32::NAN, 0.0));
        assert_eq!(camera.position, eye);
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_translate_keeps_looking_at_target() {
        let target = Point3::new(16.0, 16.0, 16.0);
        let camera = init_camera_from_config(&CameraConfig::default());
        let moved = translate_and_reorient(&camera, Vector3::new(-3.0, 1.0, 2.0), target, Vector3::unit_y());
        assert_eq!(moved.position, Point3::new(7.0, 6.0, 26.0));
        assert_vec_eq(moved.view, (target - moved.position).normalize());
        assert_orthonormal(&moved);
    }

    #[test]
    fn test_camera_uniform_packing() {
        let camera = look_at(Point3::new(0.0, 0.0, 5.0), Point3::new(0.0, 0.0, 0.0), Vector3::unit_y());
        let uniform = build_camera_uniform(&camera);
        assert_eq!(uniform.pos, [0.0, 0.0, 5.0, 1.0]);
        assert_eq!(uniform.view[3], 0.0);
        assert!((uniform.view[2] + 1.0).abs() < EPS);
        assert!((uniform.right[0] - 1.0).abs() < EPS);
        assert!((uniform.up[1] - 1.0).abs() < EPS);
    }
}
