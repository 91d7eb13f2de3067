//! StitchX CLI Video Stitcher
//!
//! A command-line tool that drives the external ffmpeg/ffprobe binaries to
//! concatenate recordings in the current directory and trim them down.
//!
//! # Usage
//!
//! ```bash
//! stitcher join --from 00:00:05 --trim-end 4
//! stitcher generate-config
//! stitcher process --keep-all-files
//! ```

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stitchx_cli::cli::{commands, Cli, Commands};
use stitchx_cli::error::StitchError;
use stitchx_cli::exec::{DryRunner, SystemRunner, ToolRunner};

/// Main entry point for the StitchX CLI application
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    info!("Running version {}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::from(exit_code_for(&err))
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the `--debug` default.
fn init_logging(debug: bool) {
    let fallback = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatch the parsed invocation in the current working directory.
fn run(cli: Cli) -> Result<()> {
    let dir: PathBuf = env::current_dir().context("Failed to resolve the working directory")?;

    let runner: Box<dyn ToolRunner> = if cli.dry_run {
        Box::new(DryRunner::new())
    } else {
        Box::new(SystemRunner)
    };

    match cli.command {
        Commands::Join(args) => commands::join(runner.as_ref(), &dir, args),
        Commands::GenerateConfig(args) => commands::generate_config(&dir, args),
        Commands::Process(args) => commands::process(runner.as_ref(), &dir, args),
    }
}

/// Process exit code for a failed run; a failing external tool's own exit
/// code passes through.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<StitchError>())
        .map_or(1, StitchError::exit_code)
}
