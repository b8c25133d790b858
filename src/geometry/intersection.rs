//! Intersection predicates
//!
//! These run once per grid cell during scene generation, so they stay
//! allocation-free and branch-light.

use super::aabb::{aabb_closest_point, aabb_contains_point, aabb_intersects, AABB};
use super::solid::Solid;
use super::sphere::SphereData;
use cgmath::MetricSpace;

/// Test if a box and a sphere overlap
///
/// Both shapes are closed, so a sphere that only touches a face, edge or
/// corner of the box counts as intersecting.
#[inline]
pub fn aabb_intersects_sphere(aabb: &AABB, sphere: &SphereData) -> bool {
    if aabb_contains_point(aabb, sphere.center) {
        return true;
    }
    let closest = aabb_closest_point(aabb, sphere.center);
    closest.distance2(sphere.center) <= sphere.radius * sphere.radius
}

/// Same predicate with the arguments swapped
#[inline]
pub fn sphere_intersects_aabb(sphere: &SphereData, aabb: &AABB) -> bool {
    aabb_intersects_sphere(aabb, sphere)
}

/// Test if a solid overlaps a box
#[inline]
pub fn solid_intersects_aabb(solid: &Solid, aabb: &AABB) -> bool {
    match solid {
        Solid::Sphere(sphere) => aabb_intersects_sphere(aabb, sphere),
        Solid::Box(solid_box) => aabb_intersects(solid_box, aabb),
    }
}
