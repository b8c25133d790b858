//! Voxel Grid Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in grid_operations.rs

use super::voxel::Voxel;

/// Dense 32³ voxel grid
///
/// `voxels` always holds exactly `VOXELS_PER_WORLD` cells in
/// `z * 1024 + y * 32 + x` order. The field is private to the world module so
/// the length invariant cannot be broken from outside; read access goes
/// through `grid_operations`.
#[derive(Clone, PartialEq, Eq)]
pub struct VoxelGridData {
    pub(super) voxels: Box<[Voxel]>,
}

impl std::fmt::Debug for VoxelGridData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoxelGridData")
            .field("cells", &self.voxels.len())
            .field("occupied", &self.voxels.iter().filter(|v| v.is_solid()).count())
            .finish()
    }
}
