//! hexarea - headless hexagon grid painter
//!
//! Loads an optional background image, replays a JSON script of UI messages
//! into a grid session, prints every reply as a JSON line and optionally
//! writes the final frame as a PNG.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use hexgrid::{BackgroundImage, GridSession, RasterSurface};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod error;

use config::{AppConfig, Cli};
use error::AppError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(AppConfig::from_cli(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout carries only replies
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(config: AppConfig) -> Result<(), AppError> {
    let script = std::fs::read_to_string(&config.script)
        .map_err(|source| AppError::ReadScript {
            path: config.script.clone(),
            source,
        })?;
    let messages = hexarea_ipc::parse_script(&script)?;
    info!("Loaded {} messages from {}", messages.len(), config.script.display());

    let mut session = GridSession::new(config.viewport);

    if let Some(path) = &config.background {
        let image = image::open(path).map_err(|source| AppError::LoadBackground {
            path: path.clone(),
            source,
        })?;
        session.set_background(Some(BackgroundImage::from_dynamic(image)));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for msg in messages {
        if let Some(reply) = session.handle_message(msg) {
            writeln!(out, "{}", hexarea_ipc::to_json(&reply)?)?;
        }
    }
    out.flush()?;

    if let Some(path) = &config.output {
        let viewport = session.viewport();
        let mut surface = RasterSurface::new(viewport.width, viewport.height);
        let stats = session.render(&mut surface);
        surface
            .to_rgba_image()
            .save(path)
            .map_err(|source| AppError::WriteImage {
                path: path.clone(),
                source,
            })?;
        info!(
            "Wrote {} ({} grid cells, {} painted)",
            path.display(),
            stats.grid_cells,
            stats.painted_cells
        );
    }

    Ok(())
}
