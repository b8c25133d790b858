use crate::constants::core::{BASE_COLOR, SOLID_ALPHA};
use bytemuck::{Pod, Zeroable};

/// Packed voxel color for GPU storage
/// Uses 32 bits per voxel, `0xRRGGBBAA`:
/// - Bits 24-31: Red
/// - Bits 16-23: Green
/// - Bits 8-15: Blue
/// - Bits 0-7: Alpha (0 = empty, anything else = solid)
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Voxel(pub u32);

impl Voxel {
    /// Freshly allocated cell: no color, not occupied
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Base color with the alpha byte selected by occupancy
    #[inline]
    pub const fn base(occupied: bool) -> Self {
        Self::with_occupancy(BASE_COLOR, occupied)
    }

    /// Replace the alpha byte of `rgb` (low byte ignored) by the occupancy flag
    #[inline]
    pub const fn with_occupancy(rgb: u32, occupied: bool) -> Self {
        let alpha = if occupied { SOLID_ALPHA as u32 } else { 0 };
        Self((rgb & 0xFFFF_FF00) | alpha)
    }

    #[inline]
    pub const fn red(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn green(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn blue(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn alpha(&self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn is_solid(&self) -> bool {
        self.alpha() != 0
    }
}

/// Integer grid coordinate
///
/// Signed so that out-of-range requests (including negative ones) can be
/// expressed and rejected by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}
