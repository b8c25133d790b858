//! Host/shader data contract
//!
//! The traversal shader is loaded from disk at runtime, so nothing ties its
//! declarations to the Rust side at compile time. Everything the two sides
//! must agree on is listed here and checked with naga before any GPU work.

use crate::camera::CameraUniform;
use crate::constants::core::VOXELS_PER_WORLD;
use crate::gpu::uniforms::FrameUniform;
use naga::{AddressSpace, ArraySize, ScalarKind, ShaderStage, StorageAccess, TypeInner};
use std::mem::{offset_of, size_of};

// ============================================================================
// CONTRACT CONSTANTS
// ============================================================================

pub const BIND_GROUP: u32 = 0;

pub const VOXEL_BINDING: u32 = 0;
pub const FRAME_BINDING: u32 = 1;
pub const CAMERA_BINDING: u32 = 2;

pub const VOXEL_BUFFER_NAME: &str = "voxel_data";
pub const FRAME_UNIFORM_NAME: &str = "frame";
pub const CAMERA_UNIFORM_NAME: &str = "cam";

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Vertices drawn per frame (two triangles covering the screen)
pub const FULLSCREEN_VERTEX_COUNT: u32 = 6;

pub const VOXEL_BUFFER_WORDS: usize = VOXELS_PER_WORLD as usize;
pub const VOXEL_BUFFER_BYTES: u64 = (VOXEL_BUFFER_WORDS * size_of::<u32>()) as u64;

/// Frame uniform members in declaration order with their byte offsets
pub fn frame_members() -> [(&'static str, u32); 11] {
    [
        ("mouse", offset_of!(FrameUniform, mouse) as u32),
        ("resolution", offset_of!(FrameUniform, resolution) as u32),
        ("inv_resolution", offset_of!(FrameUniform, inv_resolution) as u32),
        ("world_size", offset_of!(FrameUniform, world_size) as u32),
        ("time", offset_of!(FrameUniform, time) as u32),
        ("voxel_size", offset_of!(FrameUniform, voxel_size) as u32),
        ("aspect", offset_of!(FrameUniform, aspect) as u32),
        ("pos00", offset_of!(FrameUniform, pos00) as u32),
        ("pos10", offset_of!(FrameUniform, pos10) as u32),
        ("pos01", offset_of!(FrameUniform, pos01) as u32),
        ("pos11", offset_of!(FrameUniform, pos11) as u32),
    ]
}

/// Camera uniform members in declaration order with their byte offsets
pub fn camera_members() -> [(&'static str, u32); 4] {
    [
        ("pos", offset_of!(CameraUniform, pos) as u32),
        ("view", offset_of!(CameraUniform, view) as u32),
        ("up", offset_of!(CameraUniform, up) as u32),
        ("right", offset_of!(CameraUniform, right) as u32),
    ]
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("Voxel buffer holds {actual} words, expected {expected}")]
    VoxelBufferLength { expected: usize, actual: usize },

    #[error("Shader failed to parse:\n{0}")]
    ShaderParse(String),

    #[error("Shader failed validation:\n{0}")]
    ShaderValidation(String),

    #[error("Shader does not declare '{name}'")]
    MissingGlobal { name: &'static str },

    #[error("'{name}' is bound at {found}, expected @group({group}) @binding({binding})")]
    WrongBinding {
        name: &'static str,
        group: u32,
        binding: u32,
        found: String,
    },

    #[error("'{name}' must be declared as {expected}")]
    WrongAddressSpace {
        name: &'static str,
        expected: &'static str,
    },

    #[error("'{name}' has the wrong type: {reason}")]
    WrongType { name: &'static str, reason: String },

    #[error("'{name}' member {index} is '{found}', expected '{expected}'")]
    WrongMember {
        name: &'static str,
        index: usize,
        expected: &'static str,
        found: String,
    },

    #[error("'{name}.{member}' sits at offset {found}, expected {expected}")]
    WrongOffset {
        name: &'static str,
        member: &'static str,
        expected: u32,
        found: u32,
    },

    #[error("Shader has no {stage} entry point '{name}'")]
    MissingEntryPoint {
        name: &'static str,
        stage: &'static str,
    },
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Check a voxel upload matches the bound buffer size
pub fn validate_voxel_buffer(words: &[u32]) -> Result<(), ContractError> {
    if words.len() != VOXEL_BUFFER_WORDS {
        return Err(ContractError::VoxelBufferLength {
            expected: VOXEL_BUFFER_WORDS,
            actual: words.len(),
        });
    }
    Ok(())
}

/// Parse and validate WGSL, then check it declares the expected interface
pub fn validate_shader_interface(source: &str) -> Result<(), ContractError> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| ContractError::ShaderParse(e.emit_to_string(source)))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| ContractError::ShaderValidation(e.emit_to_string(source)))?;

    check_voxel_buffer(&module)?;
    check_uniform(&module, FRAME_UNIFORM_NAME, FRAME_BINDING, &frame_members())?;
    check_uniform(&module, CAMERA_UNIFORM_NAME, CAMERA_BINDING, &camera_members())?;
    check_entry_point(&module, VERTEX_ENTRY, ShaderStage::Vertex, "vertex")?;
    check_entry_point(&module, FRAGMENT_ENTRY, ShaderStage::Fragment, "fragment")?;

    log::debug!("[Contract] Shader interface validated");
    Ok(())
}

fn find_global<'a>(
    module: &'a naga::Module,
    name: &'static str,
    binding: u32,
) -> Result<&'a naga::GlobalVariable, ContractError> {
    let (_, global) = module
        .global_variables
        .iter()
        .find(|(_, global)| global.name.as_deref() == Some(name))
        .ok_or(ContractError::MissingGlobal { name })?;

    match &global.binding {
        Some(rb) if rb.group == BIND_GROUP && rb.binding == binding => Ok(global),
        other => Err(ContractError::WrongBinding {
            name,
            group: BIND_GROUP,
            binding,
            found: match other {
                Some(rb) => format!("@group({}) @binding({})", rb.group, rb.binding),
                None => "no binding".to_string(),
            },
        }),
    }
}

fn check_voxel_buffer(module: &naga::Module) -> Result<(), ContractError> {
    let name = VOXEL_BUFFER_NAME;
    let global = find_global(module, name, VOXEL_BINDING)?;

    match global.space {
        AddressSpace::Storage { access } if !access.contains(StorageAccess::STORE) => {}
        _ => {
            return Err(ContractError::WrongAddressSpace {
                name,
                expected: "var<storage, read>",
            })
        }
    }

    let (base, size) = match module.types[global.ty].inner {
        TypeInner::Array { base, size, .. } => (base, size),
        _ => {
            return Err(ContractError::WrongType {
                name,
                reason: "expected an array of u32".to_string(),
            })
        }
    };
    match module.types[base].inner {
        TypeInner::Scalar(scalar) if scalar.kind == ScalarKind::Uint && scalar.width == 4 => {}
        _ => {
            return Err(ContractError::WrongType {
                name,
                reason: "array elements must be u32".to_string(),
            })
        }
    }
    if let ArraySize::Constant(len) = size {
        if len.get() as usize != VOXEL_BUFFER_WORDS {
            return Err(ContractError::WrongType {
                name,
                reason: format!("array holds {} words, expected {}", len, VOXEL_BUFFER_WORDS),
            });
        }
    }
    Ok(())
}

fn check_uniform(
    module: &naga::Module,
    name: &'static str,
    binding: u32,
    expected: &[(&'static str, u32)],
) -> Result<(), ContractError> {
    let global = find_global(module, name, binding)?;
    if global.space != AddressSpace::Uniform {
        return Err(ContractError::WrongAddressSpace {
            name,
            expected: "var<uniform>",
        });
    }

    let members = match &module.types[global.ty].inner {
        TypeInner::Struct { members, .. } => members,
        _ => {
            return Err(ContractError::WrongType {
                name,
                reason: "expected a struct".to_string(),
            })
        }
    };
    if members.len() != expected.len() {
        return Err(ContractError::WrongType {
            name,
            reason: format!("{} members, expected {}", members.len(), expected.len()),
        });
    }

    for (index, (member, &(expected_name, expected_offset))) in
        members.iter().zip(expected).enumerate()
    {
        let found = member.name.as_deref().unwrap_or("");
        if found != expected_name {
            return Err(ContractError::WrongMember {
                name,
                index,
                expected: expected_name,
                found: found.to_string(),
            });
        }
        if member.offset != expected_offset {
            return Err(ContractError::WrongOffset {
                name,
                member: expected_name,
                expected: expected_offset,
                found: member.offset,
            });
        }
    }
    Ok(())
}

fn check_entry_point(
    module: &naga::Module,
    name: &'static str,
    stage: ShaderStage,
    stage_name: &'static str,
) -> Result<(), ContractError> {
    if module
        .entry_points
        .iter()
        .any(|ep| ep.name == name && ep.stage == stage)
    {
        Ok(())
    } else {
        Err(ContractError::MissingEntryPoint {
            name,
            stage: stage_name,
        })
    }
}
