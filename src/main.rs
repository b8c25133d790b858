use anyhow::Result;
use voxel_dda::config::{load_config, usage, validate_config};
use voxel_dda::world::{fill_rule_from_config, generate_scene, log_grid_stats};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(&args)?;
    if config.help {
        println!("{}", usage());
        return Ok(());
    }
    validate_config(&config)?;

    let rule = fill_rule_from_config(&config.fill);
    let grid = generate_scene(rule.as_ref());
    log_grid_stats(&grid);

    voxel_dda::app::run(&config, &grid)
}
