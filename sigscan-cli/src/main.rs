//! ## sigscan-cli
//! **External interface for the multi-pattern parallel matcher**
//!
//! Reads the `{length, text, K, {length, pattern}*K}` format from stdin
//! (spec.md §6), drives a [`sigscan_engine::MatchEngine`] over a
//! CPU [`sigscan_device::cpu::CpuDevice`], and writes `"<i> <C[i]>\n"`
//! lines to stdout.
//!
//! ### Expectations:
//! - A single diagnostic line on stderr and a non-zero exit on any
//!   failure; no partial stdout is flushed after an error.

mod error;
mod input;

use std::fmt::Write as _;
use std::io::{Read, Write};
use std::process::ExitCode;

use clap::Parser;

use error::CliError;
use sigscan_config::{DeviceBackend, MatchConfig};
use sigscan_device::cpu::CpuDevice;
use sigscan_engine::MatchEngine;
use sigscan_telemetry::{init_logging, MatchMetrics};

#[derive(Parser)]
#[command(version, about = "Counts occurrences of K patterns in a text T")]
struct Cli {
    /// Log level used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match MatchConfig::load() {
        Ok(c) => c,
        Err(e) => return fail(&e.to_string()),
    };
    config.log_level = cli.log_level;

    init_logging(&config.log_level);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e.to_string()),
    }
}

fn run(config: &MatchConfig) -> Result<(), CliError> {
    let mut raw = Vec::new();
    std::io::stdin().read_to_end(&mut raw)?;

    let (text, patterns) = input::parse(&raw)?;

    // Only the CPU backend ships today; `DeviceBackend` exists so a GPU
    // backend slots in here without touching the rest of the pipeline.
    let device = match config.device_backend {
        DeviceBackend::Cpu => {
            CpuDevice::new(config.worker_threads).map_err(sigscan_engine::EngineError::from)?
        }
    };
    let engine = MatchEngine::new(device, MatchMetrics::new());

    let counts = engine.count_all(&text, &patterns)?;

    // Render into one buffer first: a write failure partway through a
    // line-by-line stdout write would otherwise leak whatever already
    // made it out before the error.
    let mut rendered = String::new();
    for (i, count) in counts.iter().enumerate() {
        writeln!(rendered, "{} {}", i + 1, count).expect("writing to a String cannot fail");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn fail(message: &str) -> ExitCode {
    eprintln!("{message}");
    ExitCode::FAILURE
}
