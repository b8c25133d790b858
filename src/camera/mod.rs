/// Camera Module - Data-Oriented Programming (DOP) style
///
/// This module follows pure DOP principles:
/// - camera_data.rs: Pure data structures with NO methods
/// - camera_operations.rs: Pure functions that operate on data

pub mod camera_data;
pub mod camera_operations;

// Re-export data structures
pub use camera_data::{CameraConfig, CameraData, CameraError, CameraUniform};

// Re-export all operations
pub use camera_operations::{
    // Initialization
    init_camera_from_config,
    look_at,
    try_look_at,

    // Movement
    translate_and_reorient,

    // GPU packing
    build_camera_uniform,

    // Diagnostics
    log_camera_context,
};
