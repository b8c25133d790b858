//! Supersampling sample pattern
//!
//! Four sub-pixel offsets forming a rotated grid. The 2×2 quadrant centers
//! are turned by `atan(1/2)` about the pixel center, then stretched by
//! `√5/2` so every sample lands on a distinct row and column of a 4×4
//! sub-grid.

use cgmath::{Matrix2, Rad, Vector2};

/// Pixel-space offsets in `[0, 1]²`, named by quadrant (column, row)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SsaaPattern {
    /// Top-left
    pub pos00: Vector2<f32>,
    /// Top-right
    pub pos10: Vector2<f32>,
    /// Bottom-left
    pub pos01: Vector2<f32>,
    /// Bottom-right
    pub pos11: Vector2<f32>,
}

/// Rotation applied to the quadrant centers
pub fn ssaa_rotation() -> Rad<f32> {
    Rad(0.5f32.atan())
}

/// Stretch applied after rotation
pub fn ssaa_scale() -> f32 {
    5.0f32.sqrt() * 0.5
}

/// Derive the four sample offsets
pub fn compute_ssaa_offsets() -> SsaaPattern {
    let center = Vector2::new(0.5f32, 0.5);
    let rotation = Matrix2::from_angle(ssaa_rotation());
    let scale = ssaa_scale();
    let place = |x: f32, y: f32| center + rotation * (Vector2::new(x, y) - center) * scale;

    SsaaPattern {
        pos00: place(0.25, 0.25),
        pos10: place(0.75, 0.25),
        pos01: place(0.25, 0.75),
        pos11: place(0.75, 0.75),
    }
}

/// Offsets in upload order: pos00, pos10, pos01, pos11
pub fn ssaa_offsets_array(pattern: &SsaaPattern) -> [[f32; 2]; 4] {
    [
        pattern.pos00.into(),
        pattern.pos10.into(),
        pattern.pos01.into(),
        pattern.pos11.into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    const EPS: f32 = 1e-6;

    fn assert_close(actual: Vector2<f32>, expected: (f32, f32)) {
        assert!(
            (actual.x - expected.0).abs() < EPS && (actual.y - expected.1).abs() < EPS,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_constants() {
        assert!((ssaa_rotation().0 - 0.463_647_6).abs() < EPS);
        assert!((ssaa_scale() - 1.118_034).abs() < EPS);
    }

    #[test]
    fn test_golden_offsets() {
        let pattern = compute_ssaa_offsets();
        assert_close(pattern.pos00, (0.375, 0.125));
        assert_close(pattern.pos10, (0.875, 0.375));
        assert_close(pattern.pos01, (0.125, 0.625));
        assert_close(pattern.pos11, (0.625, 0.875));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(compute_ssaa_offsets(), compute_ssaa_offsets());
    }

    #[test]
    fn test_offsets_are_distinct_rows_and_columns() {
        let samples = ssaa_offsets_array(&compute_ssaa_offsets());
        for (i, a) in samples.iter().enumerate() {
            for b in samples.iter().skip(i + 1) {
                assert!((a[0] - b[0]).abs() > 0.2);
                assert!((a[1] - b[1]).abs() > 0.2);
            }
        }
    }

    #[test]
    fn test_point_symmetric_about_pixel_center() {
        let p = compute_ssaa_offsets();
        let center = Vector2::new(0.5, 0.5);
        assert!(((p.pos00 - center) + (p.pos11 - center)).magnitude() < EPS);
        assert!(((p.pos10 - center) + (p.pos01 - center)).magnitude() < EPS);
    }

    #[test]
    fn test_offsets_stay_inside_pixel() {
        for [x, y] in ssaa_offsets_array(&compute_ssaa_offsets()) {
            assert!((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y));
        }
    }
}
