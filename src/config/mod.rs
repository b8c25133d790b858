/// Configuration Module - DOP style
///
/// - config_data.rs: `AppConfig` and its parts, TOML-deserializable
/// - config_operations.rs: argument parsing, file loading, layering, validation

pub mod config_data;
pub mod config_operations;

pub use config_data::{AppConfig, CliArgs, FillConfig, FillKind};
pub use config_operations::{
    apply_cli_overrides, load_config, load_config_file, parse_args, parse_fill_kind,
    resolve_config, usage, validate_config,
};
