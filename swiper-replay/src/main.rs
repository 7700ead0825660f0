//! # Swiper Replay
//!
//! Replays scripted carousel gestures headlessly.

use std::io::Write;

use clap::Parser;
use swiper_replay::{replay, CliArgs, ReplayConfig, Script};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swiper_replay=info,swiper_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();
    let config = ReplayConfig::from(args);

    let script = match &config.script {
        Some(path) => {
            tracing::debug!("Loading script from {}", path.display());
            Script::from_path(path)?
        }
        None => {
            tracing::debug!("Reading script from stdin");
            Script::from_reader(std::io::stdin().lock())?
        }
    };

    let frames = replay(script, config.container_width)?;

    let mut out = std::io::stdout().lock();
    if config.summary {
        if let Some(last) = frames.last() {
            writeln!(out, "{}", serde_json::to_string(last)?)?;
        }
    } else {
        for frame in &frames {
            writeln!(out, "{}", serde_json::to_string(frame)?)?;
        }
    }

    tracing::info!("Replayed {} steps", frames.len());
    Ok(())
}
