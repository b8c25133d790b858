//! Configuration data - Pure DOP
//!
//! NO METHODS beyond defaults. Parsing and validation live in
//! config_operations.rs

use crate::camera::CameraConfig;
use crate::constants::movement::{BOOST_FACTOR, MOVE_AMOUNT};
use crate::constants::scene::{DEFAULT_SEED, SPHERE_CENTER, SPHERE_RADIUS};
use crate::constants::window::{DEFAULT_HEIGHT, DEFAULT_SHADER_PATH, DEFAULT_WIDTH};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// Which fill rule populates the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FillKind {
    Sphere,
    Random,
    Noise,
}

/// Scene fill settings
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    pub kind: FillKind,
    pub sphere_center: [f32; 3],
    pub sphere_radius: f32,
    pub seed: u32,
    /// Occupancy probability for the random fill
    pub density: f64,
    pub noise_frequency: f64,
    pub noise_threshold: f64,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            kind: FillKind::Sphere,
            sphere_center: SPHERE_CENTER,
            sphere_radius: SPHERE_RADIUS,
            seed: DEFAULT_SEED,
            density: 0.25,
            noise_frequency: 0.12,
            noise_threshold: 0.1,
        }
    }
}

/// Application configuration
///
/// Built from defaults, then an optional TOML file, then command-line
/// overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub fullscreen: bool,
    pub silent: bool,
    /// Print usage and exit; command line only
    #[serde(skip)]
    pub help: bool,
    /// External WGSL traversal shader
    pub shader_path: PathBuf,
    pub fill: FillConfig,
    pub camera: CameraConfig,
    pub move_amount: f32,
    pub boost_factor: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_WIDTH,
            screen_height: DEFAULT_HEIGHT,
            fullscreen: false,
            silent: false,
            help: false,
            shader_path: PathBuf::from(DEFAULT_SHADER_PATH),
            fill: FillConfig::default(),
            camera: CameraConfig::default(),
            move_amount: MOVE_AMOUNT,
            boost_factor: BOOST_FACTOR,
        }
    }
}

/// Values given on the command line
///
/// `None` means "not given or unusable"; the lower layer keeps its value.
/// Numeric values and the fill name stay strings here so a malformed value
/// falls back with a warning instead of aborting the parse.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(
    name = "voxel-dda",
    about = "GPU voxel ray marcher",
    disable_help_flag = true,
    ignore_errors = true,
    after_help = "CONTROLS:\n    W/S forward/back, A/D sideways, Q/E down/up, Shift faster"
)]
pub struct CliArgs {
    /// Window width in pixels (default 1920)
    #[arg(long = "screenx", value_name = "N")]
    pub screen_width: Option<String>,

    /// Window height in pixels (default 1080)
    #[arg(long = "screeny", value_name = "N")]
    pub screen_height: Option<String>,

    /// Borderless fullscreen
    #[arg(long)]
    pub fullscreen: bool,

    /// Do not report frames per second
    #[arg(long)]
    pub silent: bool,

    /// Print this message
    #[arg(long, short = 'h')]
    pub help: bool,

    /// WGSL traversal shader
    #[arg(long = "shader", value_name = "PATH")]
    pub shader_path: Option<PathBuf>,

    /// TOML configuration file (command line wins)
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    /// Scene fill: sphere, random or noise
    #[arg(long = "fill", value_name = "KIND")]
    pub fill_kind: Option<String>,

    /// Seed for the random and noise fills
    #[arg(long, value_name = "N")]
    pub seed: Option<String>,
}
