mod app;
mod assets;
mod cli;
mod triggers;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use winit::dpi::LogicalSize;

use carriage_engine::device::GpuInit;
use carriage_engine::logging::{init_logging, LoggingConfig};
use carriage_engine::window::{Runtime, RuntimeConfig};
use carriage_scene::{RenderConfig, SessionDriver};

use app::{StudioApp, TITLE};
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let config = RenderConfig::default().with_speed(cli.speed);
    if config.speed() != cli.speed {
        log::warn!("speed {} out of range; using {} px/s", cli.speed, config.speed());
    }

    let assets = assets::load_assets(&cli.horse, cli.carriage.as_deref());
    let (width, height) = (config.canvas_width, config.canvas_height);

    let now = Instant::now();
    let mut driver = SessionDriver::new(config, assets, now).context("failed to set up the scene")?;
    if cli.run {
        driver.toggle_running(now);
    }

    log::info!(
        "starting {width}x{height} scene at {} px/s ({})",
        driver.speed(),
        if driver.is_running() { "running" } else { "stopped" }
    );

    Runtime::run(
        RuntimeConfig {
            title: TITLE.to_string(),
            initial_size: LogicalSize::new(width as f64, height as f64),
            ..RuntimeConfig::default()
        },
        GpuInit::default(),
        StudioApp::new(driver),
    )
}
