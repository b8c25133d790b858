//! Geometry Module - DOP style
//!
//! - aabb.rs / sphere.rs / solid.rs: plain data plus constructors
//! - intersection.rs: pure overlap predicates used by scene generation

pub mod aabb;
pub mod intersection;
pub mod solid;
pub mod sphere;

pub use aabb::{
    aabb_center, aabb_closest_point, aabb_contains_point, aabb_from_center_half_extents,
    aabb_half_extents, aabb_intersects, AABB,
};
pub use intersection::{aabb_intersects_sphere, solid_intersects_aabb, sphere_intersects_aabb};
pub use solid::Solid;
pub use sphere::{create_sphere, default_scene_sphere, SphereData};
