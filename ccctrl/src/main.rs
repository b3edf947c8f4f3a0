use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use cast_control::ControlConfig;
use ccctrl::{Args, Chromecast, Config, CtlError};

/// Initialize tracing/logging with the specified log level
///
/// Diagnostics go to stderr; stdout carries the tool's own output.
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to install tracing subscriber")
}

/// Discover, filter and act, printing to stdout.
fn execute(config: &Config) -> ccctrl::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Scanning for Chromecast devices...")?;
    out.flush()?;

    let discovered = cast_discovery::try_get_with_timeout(config.discovery_timeout)?;
    info!("Discovered {} cast device(s)", discovered.len());

    let control = ControlConfig::default();
    let devices = discovered
        .into_iter()
        .map(|device| Chromecast::new(device, control.clone()))
        .collect();

    ccctrl::run(config, devices, &mut out)
}

fn report(err: &CtlError) -> ExitCode {
    error!("{:?}", err);
    println!("Error: {}", err);
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = args.validate() {
        return report(&e);
    }
    let config = Config::from(args);

    if let Err(e) = init_tracing(&config.log_level) {
        eprintln!("{:#}", e);
    }

    match execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}
