//! Demo runner.
//!
//! Run:
//! - `cargo run -p rayframe-demos --features raylib -- orbit`
//! - `RUST_LOG=debug cargo run -p rayframe-demos -- hello --headless 120`

mod cli;
mod config;
mod hello;
mod orbit;
mod runner;

use anyhow::Context as _;
use log::info;

use rayframe::{backend::HeadlessBackend, Backend};

use crate::{
    cli::{Cli, Demo, USAGE},
    config::DemoConfig,
};

fn main() -> anyhow::Result<()> {
    rayframe::logging::init("info");

    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    if cli.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => rayframe::config::load_toml::<DemoConfig>(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => match cli.demo {
            Demo::Hello => hello::default_config(),
            Demo::Orbit => orbit::default_config(),
        },
    };

    let frames = match cli.headless_frames {
        Some(limit) => {
            let backend = HeadlessBackend::new().close_after(limit);
            let log = backend.log();
            let frames = run(cli.demo, backend, config)?;
            info!("headless run recorded {} calls", log.len());
            frames
        }
        None => run_native(cli.demo, config)?,
    };

    info!("{} demo finished after {frames} frames", cli.demo);
    Ok(())
}

fn run<B: Backend>(demo: Demo, backend: B, config: DemoConfig) -> anyhow::Result<u64> {
    match demo {
        Demo::Hello => hello::run(backend, config),
        Demo::Orbit => orbit::run(backend, config),
    }
}

#[cfg(feature = "raylib")]
fn run_native(demo: Demo, config: DemoConfig) -> anyhow::Result<u64> {
    run(demo, rayframe::RaylibBackend::new(), config)
}

#[cfg(not(feature = "raylib"))]
fn run_native(_demo: Demo, _config: DemoConfig) -> anyhow::Result<u64> {
    anyhow::bail!("built without the `raylib` feature; pass --headless <frames> or rebuild with --features raylib")
}
