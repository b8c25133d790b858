//! Voxel Grid Operations - Pure DOP Functions
//!
//! No methods, no self, just transformations over `VoxelGridData`.

use super::grid_data::VoxelGridData;
use super::voxel::{Voxel, VoxelPos};
use crate::constants::core::{VOXELS_PER_SLICE, VOXELS_PER_WORLD, WORLD_DIM};

/// Create a grid with every cell empty
pub fn create_grid() -> VoxelGridData {
    VoxelGridData {
        voxels: vec![Voxel::EMPTY; VOXELS_PER_WORLD as usize].into_boxed_slice(),
    }
}

/// Check if a coordinate lies inside `[0, 32)` on every axis
#[inline]
pub fn is_in_bounds(pos: VoxelPos) -> bool {
    let dim = WORLD_DIM as i32;
    (0..dim).contains(&pos.x) && (0..dim).contains(&pos.y) && (0..dim).contains(&pos.z)
}

/// Linear index of a coordinate: `z * 1024 + y * 32 + x`
///
/// # Panics
/// If `pos` is outside the grid. Out-of-range access is a caller bug.
#[inline]
pub fn voxel_index(pos: VoxelPos) -> usize {
    assert!(
        is_in_bounds(pos),
        "[VoxelGrid] coordinate ({}, {}, {}) outside [0, {}) grid",
        pos.x,
        pos.y,
        pos.z,
        WORLD_DIM
    );
    (pos.z as u32 * VOXELS_PER_SLICE + pos.y as u32 * WORLD_DIM + pos.x as u32) as usize
}

/// Inverse of `voxel_index`
///
/// # Panics
/// If `index >= VOXELS_PER_WORLD`.
#[inline]
pub fn voxel_position(index: usize) -> VoxelPos {
    assert!(
        index < VOXELS_PER_WORLD as usize,
        "[VoxelGrid] index {} >= size {}",
        index,
        VOXELS_PER_WORLD
    );
    let index = index as u32;
    VoxelPos {
        x: (index % WORLD_DIM) as i32,
        y: ((index / WORLD_DIM) % WORLD_DIM) as i32,
        z: (index / VOXELS_PER_SLICE) as i32,
    }
}

/// Write a cell
///
/// # Panics
/// If `pos` is outside the grid; the write never wraps or clamps.
pub fn set_voxel(grid: &mut VoxelGridData, pos: VoxelPos, voxel: Voxel) {
    let index = voxel_index(pos);
    grid.voxels[index] = voxel;
}

/// Read a cell
///
/// # Panics
/// If `pos` is outside the grid.
pub fn get_voxel(grid: &VoxelGridData, pos: VoxelPos) -> Voxel {
    grid.voxels[voxel_index(pos)]
}

/// All cells in linear order
pub fn voxels(grid: &VoxelGridData) -> &[Voxel] {
    &grid.voxels
}

/// The grid as tightly packed 32-bit words, ready for upload
pub fn raw_buffer(grid: &VoxelGridData) -> &[u32] {
    bytemuck::cast_slice(&grid.voxels)
}

/// Number of occupied (non-zero alpha) cells
pub fn occupied_count(grid: &VoxelGridData) -> usize {
    grid.voxels.iter().filter(|voxel| voxel.is_solid()).count()
}

/// Log a one-line summary of the grid contents
pub fn log_grid_stats(grid: &VoxelGridData) {
    let occupied = occupied_count(grid);
    log::info!(
        "[VoxelGrid] {}³ grid: {} / {} cells occupied ({:.1}% filled, {} KB)",
        WORLD_DIM,
        occupied,
        VOXELS_PER_WORLD,
        occupied as f64 / VOXELS_PER_WORLD as f64 * 100.0,
        std::mem::size_of_val(raw_buffer(grid)) / 1024
    );
}
