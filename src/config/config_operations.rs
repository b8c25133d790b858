//! Configuration operations
//!
//! Command-line parsing never fails: malformed values fall back to the
//! layer below with a warning. Only an explicitly requested config file that
//! cannot be read or parsed is an error.

use super::config_data::{AppConfig, CliArgs, FillKind};
use crate::constants::window::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, MIN_DIMENSION};
use crate::error::{EngineError, EngineResult, IoContext};
use clap::{CommandFactory, Parser, ValueEnum};
use std::path::Path;

// ============================================================================
// COMMAND LINE
// ============================================================================

/// Parse arguments (program name excluded)
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> CliArgs {
    log::debug!(
        "[Config] Arguments: {}",
        args.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(" ")
    );

    let kept = recognized_arguments(args);
    CliArgs::try_parse_from(kept).unwrap_or_else(|e| {
        log::warn!("[Config] Command line rejected, using defaults: {}", e);
        CliArgs::default()
    })
}

/// Drop what clap would stop on: unknown arguments and options missing a value
///
/// An option only takes the next token as its value if it is not itself a
/// `--` flag.
fn recognized_arguments<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    let mut command = CliArgs::command();
    command.build();

    let mut kept = vec![command.get_name().to_string()];
    let mut tokens = args.iter().map(AsRef::as_ref).peekable();

    while let Some(token) = tokens.next() {
        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) if token.starts_with("--") => (name, Some(value)),
            _ => (token, None),
        };
        let Some(arg) = command.get_arguments().find(|arg| matches_name(arg, name)) else {
            log::warn!("[Config] Ignoring unrecognized argument '{}'", token);
            continue;
        };

        if !arg.get_action().takes_values() {
            kept.push(name.to_string());
            continue;
        }
        let value = inline_value.or_else(|| tokens.next_if(|next| !next.starts_with("--")));
        match value {
            // `--opt=value` keeps values like "-5" from reading as flags
            Some(value) => kept.push(format!("{}={}", name, value)),
            None => log::warn!("[Config] {} given without a value, ignoring", name),
        }
    }

    kept
}

fn matches_name(arg: &clap::Arg, token: &str) -> bool {
    match token.strip_prefix("--") {
        Some(long) => arg.get_long() == Some(long),
        None => token
            .strip_prefix('-')
            .and_then(|short| {
                let mut chars = short.chars();
                chars.next().filter(|_| chars.next().is_none())
            })
            .map_or(false, |short| arg.get_short() == Some(short)),
    }
}

fn parse_dimension(option: &str, value: &str) -> Option<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            log::warn!("[Config] Malformed {} value '{}', using default", option, value);
            None
        }
    }
}

/// Parse a fill rule name (case-insensitive)
pub fn parse_fill_kind(name: &str) -> Option<FillKind> {
    <FillKind as ValueEnum>::from_str(name, true).ok()
}

// ============================================================================
// FILE
// ============================================================================

/// Load a TOML configuration file; missing keys keep their defaults
pub fn load_config_file(path: &Path) -> EngineResult<AppConfig> {
    let text = std::fs::read_to_string(path).with_path(path)?;
    let config: AppConfig = toml::from_str(&text).map_err(|e| EngineError::ConfigLoad {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    log::info!("[Config] Loaded {}", path.display());
    Ok(config)
}

// ============================================================================
// LAYERING
// ============================================================================

/// Apply command-line values on top of `config`
pub fn apply_cli_overrides(mut config: AppConfig, cli: &CliArgs) -> AppConfig {
    if let Some(width) = cli.screen_width.as_deref().and_then(|v| parse_dimension("--screenx", v)) {
        config.screen_width = width;
    }
    if let Some(height) = cli.screen_height.as_deref().and_then(|v| parse_dimension("--screeny", v)) {
        config.screen_height = height;
    }
    config.fullscreen |= cli.fullscreen;
    config.silent |= cli.silent;
    config.help |= cli.help;
    if let Some(path) = &cli.shader_path {
        config.shader_path = path.clone();
    }
    if let Some(name) = &cli.fill_kind {
        match parse_fill_kind(name) {
            Some(kind) => config.fill.kind = kind,
            None => log::warn!("[Config] Unknown fill rule '{}', keeping the configured one", name),
        }
    }
    if let Some(value) = &cli.seed {
        match value.parse::<u32>() {
            Ok(seed) => config.fill.seed = seed,
            Err(_) => log::warn!("[Config] Ignoring malformed --seed value '{}'", value),
        }
    }
    config
}

/// Replace zero screen dimensions from a file with the defaults
fn sanitize_dimensions(mut config: AppConfig) -> AppConfig {
    if config.screen_width == 0 {
        log::warn!("[Config] screen_width of 0, using {}", DEFAULT_WIDTH);
        config.screen_width = DEFAULT_WIDTH;
    }
    if config.screen_height == 0 {
        log::warn!("[Config] screen_height of 0, using {}", DEFAULT_HEIGHT);
        config.screen_height = DEFAULT_HEIGHT;
    }
    config
}

/// Defaults, then the `--config` file if given, then the command line
pub fn resolve_config(cli: &CliArgs) -> EngineResult<AppConfig> {
    let base = match &cli.config_path {
        Some(path) => load_config_file(path)?,
        None => AppConfig::default(),
    };
    Ok(apply_cli_overrides(sanitize_dimensions(base), cli))
}

/// Parse arguments and build the final configuration
pub fn load_config<S: AsRef<str>>(args: &[S]) -> EngineResult<AppConfig> {
    resolve_config(&parse_args(args))
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validate configuration parameters
pub fn validate_config(config: &AppConfig) -> EngineResult<()> {
    for (field, value) in [
        ("screen_width", config.screen_width),
        ("screen_height", config.screen_height),
    ] {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
            return Err(EngineError::invalid_config(
                field,
                value,
                &format!("must be within {}..={}", MIN_DIMENSION, MAX_DIMENSION),
            ));
        }
    }

    let fill = &config.fill;
    if !fill.sphere_radius.is_finite() || fill.sphere_radius < 0.0 {
        return Err(EngineError::invalid_config(
            "fill.sphere_radius",
            fill.sphere_radius,
            "must be finite and non-negative",
        ));
    }
    if !(0.0..=1.0).contains(&fill.density) {
        return Err(EngineError::invalid_config(
            "fill.density",
            fill.density,
            "must be within 0..=1",
        ));
    }
    if !fill.noise_frequency.is_finite() || fill.noise_frequency <= 0.0 {
        return Err(EngineError::invalid_config(
            "fill.noise_frequency",
            fill.noise_frequency,
            "must be finite and positive",
        ));
    }

    let camera = &config.camera;
    for (field, value) in [
        ("camera.eye", camera.eye),
        ("camera.target", camera.target),
        ("camera.up", camera.up),
    ] {
        if value.iter().any(|c| !c.is_finite()) {
            return Err(EngineError::invalid_config(
                field,
                format!("{:?}", value),
                "components must be finite",
            ));
        }
    }

    if !config.move_amount.is_finite() || config.move_amount < 0.0 {
        return Err(EngineError::invalid_config(
            "move_amount",
            config.move_amount,
            "must be finite and non-negative",
        ));
    }
    if !config.boost_factor.is_finite() || config.boost_factor < 1.0 {
        return Err(EngineError::invalid_config(
            "boost_factor",
            config.boost_factor,
            "must be finite and at least 1",
        ));
    }

    log::info!(
        "[Config] {}x{}{}, fill '{:?}', shader {}",
        config.screen_width,
        config.screen_height,
        if config.fullscreen { " fullscreen" } else { "" },
        fill.kind,
        config.shader_path.display()
    );
    Ok(())
}

/// Usage text for `--help`
pub fn usage() -> String {
    CliArgs::command().render_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FillConfig;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = load_config::<&str>(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!((config.screen_width, config.screen_height), (1920, 1080));
        assert!(!config.fullscreen && !config.silent && !config.help);
        assert_eq!(config.fill, FillConfig::default());
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_screen_size_and_flags() {
        let config = load_config(&["--screenx", "800", "--fullscreen", "--screeny", "600", "--silent"]).unwrap();
        assert_eq!((config.screen_width, config.screen_height), (800, 600));
        assert!(config.fullscreen);
        assert!(config.silent);
    }

    #[test]
    fn test_malformed_numbers_fall_back() {
        let config = load_config(&["--screenx", "wide", "--screeny", "0"]).unwrap();
        assert_eq!((config.screen_width, config.screen_height), (1920, 1080));
        let config = load_config(&["--screenx", "-5"]).unwrap();
        assert_eq!(config.screen_width, 1920);
    }

    #[test]
    fn test_missing_value_does_not_swallow_flag() {
        let cli = parse_args(&["--screenx", "--fullscreen"]);
        assert_eq!(cli.screen_width, None);
        assert!(cli.fullscreen);
        let cli = parse_args(&["--screeny"]);
        assert_eq!(cli.screen_height, None);
    }

    #[test]
    fn test_inline_and_hyphenated_values() {
        let cli = parse_args(&["--screenx=800", "--screeny", "-5", "--seed", "x"]);
        assert_eq!(cli.screen_width.as_deref(), Some("800"));
        assert_eq!(cli.screen_height.as_deref(), Some("-5"));
        assert_eq!(cli.seed.as_deref(), Some("x"));

        let config = resolve_config(&cli).unwrap();
        assert_eq!((config.screen_width, config.screen_height), (800, 1080));
        assert_eq!(config.fill.seed, FillConfig::default().seed);
    }

    #[test]
    fn test_help_flag() {
        assert!(parse_args(&["--help"]).help);
        assert!(parse_args(&["-h"]).help);
        assert!(parse_args(&["--screenx", "--help"]).help);
        assert!(!parse_args(&["--silent"]).help);
        assert!(usage().contains("--screenx"));
    }

    #[test]
    fn test_unknown_arguments_are_ignored() {
        let cli = parse_args(&["--bogus", "--silent", "stray"]);
        assert!(cli.silent);
        assert_eq!(cli, CliArgs { silent: true, ..CliArgs::default() });
    }

    #[test]
    fn test_fill_and_seed() {
        let config = load_config(&["--fill", "Noise", "--seed", "99"]).unwrap();
        assert_eq!(config.fill.kind, FillKind::Noise);
        assert_eq!(config.fill.seed, 99);

        let config = load_config(&["--fill", "cubes", "--seed", "x"]).unwrap();
        assert_eq!(config.fill.kind, FillKind::Sphere);
        assert_eq!(config.fill.seed, FillConfig::default().seed);
    }

    #[test]
    fn test_shader_path() {
        let config = load_config(&["--shader", "my/shader.wgsl"]).unwrap();
        assert_eq!(config.shader_path, PathBuf::from("my/shader.wgsl"));
    }

    #[test]
    fn test_config_file_with_cli_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
screen_width = 640
screen_height = 480
silent = true
move_amount = 4.0

[fill]
kind = "random"
density = 0.5

[camera]
eye = [0.0, 16.0, 40.0]
"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let config = load_config(&["--config", path, "--screenx", "1024"]).unwrap();
        assert_eq!(config.screen_width, 1024);
        assert_eq!(config.screen_height, 480);
        assert!(config.silent);
        assert_eq!(config.move_amount, 4.0);
        assert_eq!(config.fill.kind, FillKind::Random);
        assert_eq!(config.fill.density, 0.5);
        assert_eq!(config.fill.seed, FillConfig::default().seed);
        assert_eq!(config.camera.eye, [0.0, 16.0, 40.0]);
        assert_eq!(config.camera.target, [16.0, 16.0, 16.0]);
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_zero_dimension_in_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "screen_width = 0").unwrap();
        let config = resolve_config(&CliArgs {
            config_path: Some(file.path().to_path_buf()),
            ..CliArgs::default()
        })
        .unwrap();
        assert_eq!(config.screen_width, 1920);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = load_config(&["--config", missing.to_str().unwrap()]);
        assert!(matches!(result, Err(EngineError::IoError { .. })));
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "screen_width = \"wide\"").unwrap();
        let result = load_config_file(file.path());
        assert!(matches!(result, Err(EngineError::ConfigLoad { .. })));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.screen_width = MAX_DIMENSION + 1;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.fill.density = 1.5;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.fill.sphere_radius = f32::NAN;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.boost_factor = 0.5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite_camera() {
        let mut config = AppConfig::default();
        config.camera.up = [f32::INFINITY, 0.0, 0.0];
        assert!(matches!(
            validate_config(&config),
            Err(EngineError::InvalidConfig { ref field, .. }) if field == "camera.up"
        ));

        let mut config = AppConfig::default();
        config.camera.eye = [f32::NAN, 5.0, 24.0];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_non_finite_camera_from_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[camera]\ntarget = [nan, 16.0, inf]").unwrap();
        let config = load_config_file(file.path()).unwrap();
        assert!(config.camera.target[0].is_nan());
        assert!(validate_config(&config).is_err());
    }
}
