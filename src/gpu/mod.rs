//! GPU side
//!
//! - contract.rs: names, slots and layouts shared with the traversal shader
//! - uniforms.rs: per-frame uniform data
//! - stage.rs: wgpu device, pipeline and per-frame draw

pub mod contract;
pub mod stage;
pub mod uniforms;

pub use contract::{validate_shader_interface, validate_voxel_buffer, ContractError};
pub use stage::{GpuError, GpuStage};
pub use uniforms::{build_frame_uniform, FrameInputs, FrameUniform};
