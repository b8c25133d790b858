//! Engine-wide constants
//!
//! Grouped by concern. Anything that is part of the contract with the
//! external traversal shader lives in `gpu::contract` instead.

/// Grid dimensions and voxel packing
pub mod core {
    /// Voxels per grid edge
    pub const WORLD_DIM: u32 = 32;

    /// Voxels in one z-slice (`WORLD_DIM²`)
    pub const VOXELS_PER_SLICE: u32 = WORLD_DIM * WORLD_DIM;

    /// Total voxels in the grid (`WORLD_DIM³`)
    pub const VOXELS_PER_WORLD: u32 = VOXELS_PER_SLICE * WORLD_DIM;

    /// Edge length of a single voxel in world units
    pub const VOXEL_SIZE: f32 = 1.0;

    /// Full-intensity RGB with zero alpha (`0xRRGGBBAA`)
    pub const BASE_COLOR: u32 = 0xFFFF_FF00;

    /// Alpha byte written into occupied cells
    pub const SOLID_ALPHA: u8 = 0xFF;
}

/// Default scene content
pub mod scene {
    /// Center of the default sphere, in grid coordinates
    pub const SPHERE_CENTER: [f32; 3] = [16.0, 16.0, 16.0];

    /// Radius of the default sphere, in voxels
    pub const SPHERE_RADIUS: f32 = 10.0;

    /// Fixed point the camera keeps looking at
    pub const LOOK_AT_TARGET: [f32; 3] = [16.0, 16.0, 16.0];

    /// Initial eye position
    pub const INITIAL_EYE: [f32; 3] = [10.0, 5.0, 24.0];

    /// World up hint used for every camera rebuild
    pub const WORLD_UP: [f32; 3] = [0.0, 1.0, 0.0];

    /// Default seed for the random and noise fill rules
    pub const DEFAULT_SEED: u32 = 0x5EED;
}

/// Camera movement integration
pub mod movement {
    /// Base velocity contribution per held key and step
    pub const MOVE_AMOUNT: f32 = 10.0;

    /// Multiplier applied while the boost modifier is held
    pub const BOOST_FACTOR: f32 = 3.0;

    /// Velocity is multiplied by this after every integration step
    pub const VELOCITY_DECAY: f32 = 0.5;

    /// Seconds that must elapse before an integration step runs (one 60Hz frame)
    pub const STEP_THRESHOLD_SECONDS: f32 = 0.01667;

    /// World-space direction driven by the lateral velocity component
    pub const LATERAL_AXIS: [f32; 3] = [-1.0, 0.0, 0.0];

    /// World-space direction driven by the forward velocity component
    pub const FORWARD_AXIS: [f32; 3] = [0.0, 0.0, -1.0];

    /// World-space direction driven by the vertical velocity component
    pub const VERTICAL_AXIS: [f32; 3] = [0.0, 1.0, 0.0];
}

/// Camera basis construction
pub mod camera {
    /// Below this length a vector is treated as zero when building a basis
    pub const DEGENERATE_EPSILON: f32 = 1e-6;
}

/// Window and process defaults
pub mod window {
    pub const DEFAULT_WIDTH: u32 = 1920;
    pub const DEFAULT_HEIGHT: u32 = 1080;
    pub const TITLE: &str = "Voxel rendering stuff";

    /// Shader used when `--shader` is not given
    pub const DEFAULT_SHADER_PATH: &str = "shaders/voxel/dda.wgsl";

    pub const MIN_DIMENSION: u32 = 1;
    pub const MAX_DIMENSION: u32 = 16384;
}
