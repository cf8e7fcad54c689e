//! Headless desktop host: replays a scripted event log and prints the resulting shell state.

mod script;

use std::{io::Write, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use desktop_app_contract::WindowSize;
use desktop_runtime::{ConfigLoader, DesktopConfig, DesktopSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Replay desktop input events without a renderer")]
struct Cli {
    /// JSON file holding an array of input events.
    script: PathBuf,

    /// Path to a TOML desktop config (defaults apply when omitted).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Screen size, e.g. `1280x800`.
    #[arg(long, default_value = "1280x800", value_parser = parse_viewport)]
    viewport: WindowSize,

    /// Default log filter; `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
}

fn parse_viewport(raw: &str) -> Result<WindowSize> {
    let Some((width, height)) = raw.split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT, got `{raw}`");
    };
    let width: i32 = width.trim().parse().context("viewport width")?;
    let height: i32 = height.trim().parse().context("viewport height")?;
    if width <= 0 || height <= 0 {
        bail!("viewport must be positive, got {width}x{height}");
    }
    Ok(WindowSize::new(width, height))
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = match &cli.config {
        Some(path) => {
            let loader = ConfigLoader::new(path);
            loader
                .load()
                .with_context(|| format!("loading config {}", loader.path().display()))?
        }
        None => DesktopConfig::default(),
    };
    let events = script::load_script(&cli.script)?;
    info!(events = events.len(), script = %cli.script.display(), "replaying script");

    let mut session = DesktopSession::new(config, cli.viewport);
    let report = script::replay(&mut session, &events);

    let body = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("serializing report")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{body}").context("writing report")?;
    Ok(())
}
