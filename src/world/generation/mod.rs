//! Scene generation
//!
//! - fill_rule.rs: what a cell contains (`FillRule` and its implementations)
//! - scene_generator.rs: visiting every cell and writing the result

pub mod fill_rule;
pub mod scene_generator;

pub use fill_rule::{cell_box, fill_rule_from_config, FillRule, NoiseFill, RandomFill, SolidFill};
pub use scene_generator::{generate, generate_scene, generate_sequential, GenerationStats};
