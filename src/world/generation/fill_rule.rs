//! Fill rules - what goes into each grid cell
//!
//! A fill rule maps a grid coordinate to a voxel. Scene generation only
//! knows about this trait, so new procedural content never touches the
//! grid layout or the upload path.

use crate::config::{FillConfig, FillKind};
use crate::constants::core::{BASE_COLOR, VOXEL_SIZE};
use crate::geometry::{aabb_from_center_half_extents, create_sphere, solid_intersects_aabb, Solid, AABB};
use crate::world::grid_operations::voxel_index;
use crate::world::voxel::{Voxel, VoxelPos};
use cgmath::{Point3, Vector3};
use noise::{NoiseFn, Perlin};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Universal fill interface
///
/// Implementations must be pure in `pos`: generation visits cells in any
/// order and from several threads at once.
pub trait FillRule: Send + Sync {
    /// Voxel stored at `pos`
    fn voxel_at(&self, pos: VoxelPos) -> Voxel;

    /// Short name for logging
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> FillRule for F
where
    F: Fn(VoxelPos) -> Voxel + Send + Sync,
{
    fn voxel_at(&self, pos: VoxelPos) -> Voxel {
        self(pos)
    }
}

/// Unit box occupied by the cell at `pos`
///
/// Cells cover the half-open cube starting at the integer coordinate, so the
/// box is centered at `pos + 0.5`.
#[inline]
pub fn cell_box(pos: VoxelPos) -> AABB {
    let half = VOXEL_SIZE * 0.5;
    aabb_from_center_half_extents(
        Point3::new(
            pos.x as f32 * VOXEL_SIZE + half,
            pos.y as f32 * VOXEL_SIZE + half,
            pos.z as f32 * VOXEL_SIZE + half,
        ),
        Vector3::new(half, half, half),
    )
}

// ============================================================================
// SOLID FILL
// ============================================================================

/// Marks every cell whose box overlaps `solid`
#[derive(Debug, Clone, Copy)]
pub struct SolidFill {
    pub solid: Solid,
    /// RGB in the top three bytes; the alpha byte is replaced by occupancy
    pub color: u32,
}

impl SolidFill {
    pub fn new(solid: impl Into<Solid>) -> Self {
        Self {
            solid: solid.into(),
            color: BASE_COLOR,
        }
    }
}

impl FillRule for SolidFill {
    #[inline]
    fn voxel_at(&self, pos: VoxelPos) -> Voxel {
        Voxel::with_occupancy(self.color, solid_intersects_aabb(&self.solid, &cell_box(pos)))
    }

    fn name(&self) -> &str {
        match self.solid {
            Solid::Sphere(_) => "sphere",
            Solid::Box(_) => "box",
        }
    }
}

// ============================================================================
// RANDOM FILL
// ============================================================================

/// Occupies each cell independently with probability `density`
///
/// Every cell draws from its own generator seeded by `(seed, index)`, which
/// keeps the result independent of visiting order and thread count.
#[derive(Debug, Clone, Copy)]
pub struct RandomFill {
    seed: u64,
    /// Always within 0..=1; only `new` sets it
    density: f64,
    pub color: u32,
}

impl RandomFill {
    /// `density` is clamped into 0..=1; NaN means empty
    pub fn new(seed: u64, density: f64) -> Self {
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        Self {
            seed,
            density,
            color: BASE_COLOR,
        }
    }

    pub fn density(&self) -> f64 {
        self.density
    }
}

impl FillRule for RandomFill {
    fn voxel_at(&self, pos: VoxelPos) -> Voxel {
        let index = voxel_index(pos) as u64;
        let mut rng = StdRng::seed_from_u64(self.seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Voxel::with_occupancy(self.color, rng.gen_bool(self.density))
    }

    fn name(&self) -> &str {
        "random"
    }
}

// ============================================================================
// NOISE FILL
// ============================================================================

/// Occupies cells where 3D Perlin noise sampled at the cell center exceeds
/// `threshold`
#[derive(Clone)]
pub struct NoiseFill {
    seed: u32,
    perlin: Perlin,
    pub frequency: f64,
    pub threshold: f64,
    pub color: u32,
}

impl NoiseFill {
    pub fn new(seed: u32, frequency: f64, threshold: f64) -> Self {
        Self {
            seed,
            perlin: Perlin::new(seed),
            frequency,
            threshold,
            color: BASE_COLOR,
        }
    }
}

impl std::fmt::Debug for NoiseFill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseFill")
            .field("seed", &self.seed)
            .field("frequency", &self.frequency)
            .field("threshold", &self.threshold)
            .field("color", &format_args!("{:#010x}", self.color))
            .finish()
    }
}

impl FillRule for NoiseFill {
    fn voxel_at(&self, pos: VoxelPos) -> Voxel {
        // Lattice points sample to exactly zero, so sample cell centers
        let sample = self.perlin.get([
            (pos.x as f64 + 0.5) * self.frequency,
            (pos.y as f64 + 0.5) * self.frequency,
            (pos.z as f64 + 0.5) * self.frequency,
        ]);
        Voxel::with_occupancy(self.color, sample > self.threshold)
    }

    fn name(&self) -> &str {
        "noise"
    }
}

// ============================================================================
// CONFIG
// ============================================================================

/// Build the fill rule selected by configuration
pub fn fill_rule_from_config(config: &FillConfig) -> Box<dyn FillRule> {
    match config.kind {
        FillKind::Sphere => {
            let [x, y, z] = config.sphere_center;
            Box::new(SolidFill::new(create_sphere(Point3::new(x, y, z), config.sphere_radius)))
        }
        FillKind::Random => Box::new(RandomFill::new(u64::from(config.seed), config.density)),
        FillKind::Noise => Box::new(NoiseFill::new(
            config.seed,
            config.noise_frequency,
            config.noise_threshold,
        )),
    }
}
