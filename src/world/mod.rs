//! Voxel world
//!
//! # Architecture Overview
//!
//! - **voxel**: packed cell color and grid coordinates
//! - **grid_data / grid_operations**: the dense 32³ grid, DOP style
//! - **generation**: procedural filling of the grid
//!
//! The grid is allocated once, filled once by generation and then handed
//! read-only to the GPU stage for upload.

pub mod generation;
pub mod grid_data;
pub mod grid_operations;
pub mod voxel;

pub use generation::{
    fill_rule_from_config, generate, generate_scene, FillRule, GenerationStats, NoiseFill,
    RandomFill, SolidFill,
};
pub use grid_data::VoxelGridData;
pub use grid_operations::{
    create_grid, get_voxel, is_in_bounds, log_grid_stats, occupied_count, raw_buffer, set_voxel,
    voxel_index, voxel_position, voxels,
};
pub use voxel::{Voxel, VoxelPos};
