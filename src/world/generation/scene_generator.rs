//! Scene generation - runs once at startup
//!
//! Every cell is written exactly once and cells never depend on each other,
//! so the grid is split into z-slices and filled in parallel.

use super::fill_rule::FillRule;
use crate::constants::core::{VOXELS_PER_SLICE, WORLD_DIM};
use crate::world::grid_data::VoxelGridData;
use crate::world::grid_operations::{create_grid, occupied_count, set_voxel};
use crate::world::voxel::VoxelPos;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Summary of one generation pass
#[derive(Debug, Clone, Copy)]
pub struct GenerationStats {
    pub occupied: usize,
    pub duration: Duration,
}

/// Fill every cell of `grid` from `rule`, in parallel over z-slices
pub fn generate<R: FillRule + ?Sized>(grid: &mut VoxelGridData, rule: &R) -> GenerationStats {
    let start = Instant::now();
    let dim = WORLD_DIM as usize;

    grid.voxels
        .par_chunks_mut(VOXELS_PER_SLICE as usize)
        .enumerate()
        .for_each(|(z, slice)| {
            for (offset, cell) in slice.iter_mut().enumerate() {
                let pos = VoxelPos::new((offset % dim) as i32, (offset / dim) as i32, z as i32);
                *cell = rule.voxel_at(pos);
            }
        });

    let stats = GenerationStats {
        occupied: occupied_count(grid),
        duration: start.elapsed(),
    };

    log::info!(
        "[SceneGenerator] '{}' fill: {} voxels occupied in {:.2}ms",
        rule.name(),
        stats.occupied,
        stats.duration.as_secs_f64() * 1000.0
    );

    stats
}

/// Single-threaded reference pass going through the bounds-checked writer
pub fn generate_sequential<R: FillRule + ?Sized>(grid: &mut VoxelGridData, rule: &R) -> GenerationStats {
    let start = Instant::now();
    let dim = WORLD_DIM as i32;

    for z in 0..dim {
        for y in 0..dim {
            for x in 0..dim {
                let pos = VoxelPos::new(x, y, z);
                set_voxel(grid, pos, rule.voxel_at(pos));
            }
        }
    }

    let stats = GenerationStats {
        occupied: occupied_count(grid),
        duration: start.elapsed(),
    };
    log::debug!(
        "[SceneGenerator] sequential '{}' fill: {} voxels occupied in {:.2}ms",
        rule.name(),
        stats.occupied,
        stats.duration.as_secs_f64() * 1000.0
    );
    stats
}

/// Allocate a fresh grid and fill it
pub fn generate_scene<R: FillRule + ?Sized>(rule: &R) -> VoxelGridData {
    let mut grid = create_grid();
    generate(&mut grid, rule);
    grid
}
