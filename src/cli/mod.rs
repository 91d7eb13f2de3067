//! CLI module for StitchX
//!
//! This module handles command-line argument parsing and command dispatch.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// StitchX CLI Video Stitcher
///
/// A command-line tool that drives ffmpeg to concatenate recordings and trim
/// them down, either by filename pattern or from a declarative config file.
#[derive(Parser)]
#[command(name = "stitcher")]
#[command(about = "StitchX CLI Video Stitcher - Join and trim recordings with ffmpeg")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print ffmpeg commands instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Concatenate files matching a pattern, optionally trimming the result
    Join(args::JoinArgs),
    /// Write a concat_config.yml skeleton for the matching files
    GenerateConfig(args::GenerateConfigArgs),
    /// Trim and concatenate files as described by concat_config.yml
    Process(args::ProcessArgs),
}
