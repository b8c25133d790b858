// Voxel DDA - Data-Oriented Programming (DOP) Architecture
//
// The host side of a GPU voxel ray marcher. The CPU builds a 32³ grid once,
// keeps a look-at camera moving, and feeds both to an external WGSL shader
// that does the per-pixel traversal.
//
// Layout follows the *_data / *_operations split: data structs carry no
// behavior, free functions transform them.

// Constants module
pub mod constants;

// Core modules
pub mod error;
pub mod geometry;
pub mod world;

// Scene view
pub mod camera;
pub mod movement;
pub mod sampling;

// GPU and host shell
pub mod app;
pub mod config;
pub mod gpu;
pub mod input;

pub use camera::{CameraData, CameraError, CameraUniform};
pub use config::{AppConfig, FillConfig, FillKind};
pub use error::{EngineError, EngineResult};
pub use geometry::{Solid, SphereData, AABB};
pub use gpu::{ContractError, FrameUniform, GpuError};
pub use sampling::{compute_ssaa_offsets, SsaaPattern};
pub use world::{FillRule, Voxel, VoxelGridData, VoxelPos};

// Re-export wgpu for callers embedding the GPU stage
pub use wgpu;
