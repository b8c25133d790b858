//! Solids that can be voxelized by the scene generator

use super::aabb::AABB;
use super::sphere::SphereData;

/// A single closed solid
///
/// The scene ships with a sphere; boxes share the same fill path so new
/// shapes only need a variant here and an arm in `solid_intersects_aabb`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solid {
    Sphere(SphereData),
    Box(AABB),
}

impl From<SphereData> for Solid {
    fn from(sphere: SphereData) -> Self {
        Solid::Sphere(sphere)
    }
}

impl From<AABB> for Solid {
    fn from(aabb: AABB) -> Self {
        Solid::Box(aabb)
    }
}
