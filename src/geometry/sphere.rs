//! Sphere data - Pure DOP
//!
//! NO METHODS. Just data and the functions that build it.

use cgmath::Point3;

/// Closed ball: every point at distance `<= radius` from `center`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereData {
    pub center: Point3<f32>,
    pub radius: f32,
}

/// Create a sphere from center and radius
///
/// Negative radii are clamped to zero, which leaves a single point.
pub fn create_sphere(center: Point3<f32>, radius: f32) -> SphereData {
    SphereData {
        center,
        radius: radius.max(0.0),
    }
}

/// Sphere used by the default scene
pub fn default_scene_sphere() -> SphereData {
    let [x, y, z] = crate::constants::scene::SPHERE_CENTER;
    create_sphere(Point3::new(x, y, z), crate::constants::scene::SPHERE_RADIUS)
}
