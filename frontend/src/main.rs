use std::path::PathBuf;

use clap::Parser;

mod art_path;
mod config;
mod input;
mod run;
mod source;
mod video;

/// Intellivision keypad-workspace frontend.
///
/// Composites the console view, per-title overlay art, and the controller
/// base illustration into one window, highlighting the currently held
/// keypad button.
#[derive(Parser)]
#[command(name = "faceplate")]
struct Cli {
    /// Path to the game ROM; the overlay name is derived from its stem.
    rom: PathBuf,

    /// Art directory holding <title>.png/.jpg, controller_base.png and
    /// default.png (overrides the config file).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Publish the plain console frame without the workspace.
    #[arg(long)]
    plain: bool,

    /// Window scale factor.
    #[arg(long, default_value_t = 1)]
    scale: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let cfg = config::load();

    let asset_dir = cli
        .assets
        .or(cfg.asset_dir)
        .unwrap_or_else(config::default_asset_dir);
    let workspace_enabled = !cli.plain && cfg.workspace.unwrap_or(true);

    run::run(&cli.rom, &asset_dir, workspace_enabled, cli.scale);
}
