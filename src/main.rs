mod replay;
mod script;

use std::path::PathBuf;

use clap::Parser;
use gesture::config::GestureConfig;
use tracing::info;

use crate::replay::ReplayError;
use crate::script::Script;

#[derive(Parser, Debug)]
#[command(name = "touchpan", about = "Replay a touch script through the gesture engine")]
struct Cli {
    /// JSON script with surface and image sizes and timed pointer events.
    script: PathBuf,

    /// Pace events and frames against the wall clock.
    #[arg(long)]
    realtime: bool,

    /// Frame period in milliseconds.
    #[arg(long, env = "TOUCHPAN_FRAME_MS", default_value_t = 16.0)]
    frame_ms: f64,
}

fn main() -> Result<(), ReplayError> {
    // Logs go to stderr; stdout carries one JSON snapshot per line.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = GestureConfig::from_env()?;
    let script = Script::load(&cli.script)?;
    info!(mode = ?script.mode, events = script.events.len(), realtime = cli.realtime, "replaying script");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stats = if cli.realtime {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build()?;
        runtime.block_on(replay::run_realtime(script, config, cli.frame_ms, &mut out))?
    } else {
        replay::run(script, config, cli.frame_ms, &mut out)?
    };

    info!(events = stats.events, frames = stats.frames, snapshots = stats.snapshots, "replay finished");
    Ok(())
}
