//! Terminal wireframe animation (default binary).
//!
//! Renders two orbiting cubes and a bobbing wedge until Ctrl-C, `q`, Esc or
//! SIGTERM; the terminal is restored on every one of these.
//! Takes no arguments; see `engine::config` for the environment variables.

use std::fs::OpenOptions;
use std::process;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};

use tui_wireframe::core::Scene;
use tui_wireframe::engine::{AnimationDriver, CancelToken, RunConfig};
use tui_wireframe::term::{DisplayDevice, TerminalRenderer};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(&config)?;

    let cancel = CancelToken::new();
    cancel.cancel_on_termination_signals()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut driver = AnimationDriver::new(Scene::demo(), &config);
    let result = driver.run(&mut term, &config.pacer(), &cancel);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Install a file-backed subscriber when `WIREFRAME_LOG_PATH` is set.
///
/// stdout belongs to the animation, so without a path nothing is logged.
fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))
}
