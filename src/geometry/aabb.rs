//! Closed axis-aligned boxes
//!
//! Voxel cells are described by their center and a half extent of 0.5, so
//! the center/half-extent form is the primary one here.

use cgmath::{EuclideanSpace, Point3, Vector3};

/// Axis-aligned box; both bounds are inclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

pub fn aabb_from_center_half_extents(center: Point3<f32>, half_extents: Vector3<f32>) -> AABB {
    AABB {
        min: center - half_extents,
        max: center + half_extents,
    }
}

pub fn aabb_center(aabb: &AABB) -> Point3<f32> {
    aabb.min.midpoint(aabb.max)
}

pub fn aabb_half_extents(aabb: &AABB) -> Vector3<f32> {
    (aabb.max - aabb.min) * 0.5
}

/// Box/box overlap, separating-axis form (touching faces count)
pub fn aabb_intersects(a: &AABB, b: &AABB) -> bool {
    let gap = aabb_center(a) - aabb_center(b);
    let reach = aabb_half_extents(a) + aabb_half_extents(b);
    gap.x.abs() <= reach.x && gap.y.abs() <= reach.y && gap.z.abs() <= reach.z
}

pub fn aabb_contains_point(aabb: &AABB, point: Point3<f32>) -> bool {
    (0..3).all(|axis| aabb.min[axis] <= point[axis] && point[axis] <= aabb.max[axis])
}

/// Point of the box nearest to `point`
#[inline]
pub fn aabb_closest_point(aabb: &AABB, point: Point3<f32>) -> Point3<f32> {
    Point3::new(
        point.x.clamp(aabb.min.x, aabb.max.x),
        point.y.clamp(aabb.min.y, aabb.max.y),
        point.z.clamp(aabb.min.z, aabb.max.z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: f32, y: f32, z: f32) -> AABB {
        aabb_from_center_half_extents(Point3::new(x + 0.5, y + 0.5, z + 0.5), Vector3::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn test_center_and_half_extents() {
        let aabb = aabb_from_center_half_extents(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.5, 1.0, 2.0));
        assert_eq!(aabb.min, Point3::new(0.5, 1.0, 1.0));
        assert_eq!(aabb.max, Point3::new(1.5, 3.0, 5.0));
        assert_eq!(aabb_center(&aabb), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(aabb_half_extents(&aabb), Vector3::new(0.5, 1.0, 2.0));
    }

    #[test]
    fn test_cell_covers_coordinate() {
        let aabb = cell(3.0, 4.0, 5.0);
        assert_eq!(aabb.min, Point3::new(3.0, 4.0, 5.0));
        assert_eq!(aabb.max, Point3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_intersects_touching_faces() {
        let a = cell(0.0, 0.0, 0.0);
        let b = cell(1.0, 0.0, 0.0);
        let c = cell(2.0, 0.0, 0.0);
        let diagonal = cell(1.0, 1.0, 1.0);
        assert!(aabb_intersects(&a, &b));
        assert!(aabb_intersects(&b, &a));
        assert!(aabb_intersects(&a, &diagonal));
        assert!(!aabb_intersects(&a, &c));
    }

    #[test]
    fn test_contains_and_closest_point() {
        let aabb = cell(0.0, 0.0, 0.0);
        assert!(aabb_contains_point(&aabb, Point3::new(0.5, 1.0, 0.0)));
        assert!(!aabb_contains_point(&aabb, Point3::new(1.5, 0.5, 0.5)));

        let inside = Point3::new(0.25, 0.5, 0.75);
        assert_eq!(aabb_closest_point(&aabb, inside), inside);
        assert_eq!(
            aabb_closest_point(&aabb, Point3::new(-3.0, 0.5, 9.0)),
            Point3::new(0.0, 0.5, 1.0)
        );
    }
}
