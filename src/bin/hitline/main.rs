//! hitline - four-lane rhythm game in the terminal
//!
//! Run with: cargo run -- --speed fast

mod app;
mod audio;
mod input;
mod ui;

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;

use app::App;
use hitline::{timing::GameSpeed, track::Track, GameConfig};

#[derive(Debug, Parser)]
#[command(name = "hitline", version, about = "Four-lane rhythm game")]
struct Args {
    /// TOML file with game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scroll speed: normal, fast or extreme (overrides the config file)
    #[arg(short, long)]
    speed: Option<GameSpeed>,

    /// Start in manual mode (advance the beat with `n`)
    #[arg(short, long)]
    manual: bool,

    /// Output volume, 0.0-1.0
    #[arg(long)]
    volume: Option<f32>,

    /// Play without opening an audio device
    #[arg(long)]
    mute: bool,

    /// Where to write the log; the terminal belongs to the game
    #[arg(long, default_value = "hitline.log")]
    log_file: PathBuf,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(&args.log_file)?;

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    if let Some(volume) = args.volume {
        config.volume = volume;
    }
    config.manual_mode |= args.manual;
    config.validate().wrap_err("invalid configuration")?;
    tracing::info!(?config, "starting");

    let mut app = App::new(config, Track::builtin(), !args.mute)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}

fn init_logging(path: &Path) -> EyreResult<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(path: &Path) -> EyreResult<GameConfig> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).wrap_err_with(|| format!("failed to parse config {}", path.display()))
}
