use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use clap::Parser;
use stream_pretty_core::config::{LoggingConfig, DEFAULT_LOG_LEVEL};
use stream_pretty_core::{render_stream, RunStats};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;

use error::CliError;

fn main() {
    let exit = match real_main() {
        Ok(code) => code,
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("stdout closed, stopping");
            0
        }
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    };

    std::process::exit(exit);
}

fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let mut cfg = stream_pretty_core::config::load_default()?;
    if let Some(max) = args.tool_input_max {
        cfg.tool_input_max = max;
    }
    init_tracing(&cfg.logging)?;
    tracing::debug!(tool_input_max = cfg.tool_input_max, input = ?args.input, "config resolved");

    let out = std::io::stdout().lock();
    let stats: RunStats = match args.input_path() {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Input {
                path: path.display().to_string(),
                source,
            })?;
            render_stream(BufReader::new(file), out, &cfg)?
        }
        None => render_stream(std::io::stdin().lock(), out, &cfg)?,
    };

    tracing::info!(
        lines = stats.lines,
        rendered = stats.rendered,
        passthrough = stats.passthrough,
        "done"
    );
    Ok(0)
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    if !logging.enabled {
        return Ok(());
    }

    // A bad filter (often a global RUST_LOG meant for another tool) must not stop the run.
    let (filter, rejected) = match EnvFilter::try_new(&logging.level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(e)),
    };

    // stdout carries the rendered stream; logs must stay on stderr.
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init()
        .context("install tracing subscriber")?;

    if let Some(e) = rejected {
        tracing::warn!(
            filter = %logging.level,
            error = %e,
            "invalid log filter, falling back to {DEFAULT_LOG_LEVEL}"
        );
    }
    Ok(())
}
