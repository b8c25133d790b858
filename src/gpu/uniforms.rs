//! Per-frame uniform data
//!
//! Layouts here are mirrored field for field by the traversal shader;
//! `contract::validate_shader_interface` checks the offsets.

use crate::constants::core::{VOXEL_SIZE, WORLD_DIM};
use crate::sampling::SsaaPattern;
use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;

/// Frame parameters uniform (binding 1)
///
/// `vec3` members are followed by a scalar so that the Rust layout equals the
/// WGSL uniform layout without explicit padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameUniform {
    /// Pointer position in pixels, y measured from the bottom; zw unused
    pub mouse: [f32; 4],
    pub resolution: [f32; 2],
    pub inv_resolution: [f32; 2],
    pub world_size: [f32; 3],
    /// Seconds since startup
    pub time: f32,
    pub voxel_size: [f32; 3],
    /// height / width
    pub aspect: f32,
    pub pos00: [f32; 2],
    pub pos10: [f32; 2],
    pub pos01: [f32; 2],
    pub pos11: [f32; 2],
}

const_assert_eq!(std::mem::size_of::<FrameUniform>(), 96);
const_assert_eq!(std::mem::size_of::<crate::camera::CameraUniform>(), 64);

/// Host-side values that change from frame to frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInputs {
    pub time: f32,
    /// Pointer position with y already flipped to count from the bottom
    pub mouse: [f32; 2],
    pub width: u32,
    pub height: u32,
}

/// Build frame uniform for GPU
pub fn build_frame_uniform(inputs: &FrameInputs, ssaa: &SsaaPattern) -> FrameUniform {
    let width = inputs.width.max(1) as f32;
    let height = inputs.height.max(1) as f32;
    let world = WORLD_DIM as f32;

    FrameUniform {
        mouse: [inputs.mouse[0], inputs.mouse[1], 0.0, 0.0],
        resolution: [width, height],
        inv_resolution: [1.0 / width, 1.0 / height],
        world_size: [world, world, world],
        time: inputs.time,
        voxel_size: [VOXEL_SIZE, VOXEL_SIZE, VOXEL_SIZE],
        aspect: height / width,
        pos00: ssaa.pos00.into(),
        pos10: ssaa.pos10.into(),
        pos01: ssaa.pos01.into(),
        pos11: ssaa.pos11.into(),
    }
}
