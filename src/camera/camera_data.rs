//! Camera data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in camera_operations.rs

use crate::constants::scene::{INITIAL_EYE, LOOK_AT_TARGET, WORLD_UP};
use cgmath::{Point3, Vector3};
use serde::Deserialize;

/// Look-at camera - pure data, no methods
///
/// `view`, `up` and `right` are unit length and mutually orthogonal, with
/// `right × up = -view`. Every value is produced by `look_at`, never edited
/// field by field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraData {
    /// Eye position in grid space
    pub position: Point3<f32>,

    /// Direction the camera faces
    pub view: Vector3<f32>,

    /// Screen-space up
    pub up: Vector3<f32>,

    /// Screen-space right
    pub right: Vector3<f32>,
}

/// Camera uniform buffer data for GPU
/// Must match shader layout exactly
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Camera position (vec3 + padding)
    pub pos: [f32; 4],

    /// Camera view vector (vec3 + padding)
    pub view: [f32; 4],

    /// Camera up vector (vec3 + padding)
    pub up: [f32; 4],

    /// Camera right vector (vec3 + padding)
    pub right: [f32; 4],
}

/// Camera configuration for initialization
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: INITIAL_EYE,
            target: LOOK_AT_TARGET,
            up: WORLD_UP,
        }
    }
}

/// Look-at inputs that do not define a basis
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("Camera {input} has a non-finite component")]
    NonFinite { input: &'static str },

    #[error("Camera eye and target coincide")]
    CoincidentEyeTarget,

    #[error("Camera up hint ({up_x}, {up_y}, {up_z}) is parallel to the view direction")]
    DegenerateBasis { up_x: f32, up_y: f32, up_z: f32 },
}
