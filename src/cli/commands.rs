//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::args::{GenerateConfigArgs, JoinArgs, ProcessArgs};
use crate::config::{ProcessingConfig, CONFIG_FILENAME};
use crate::discovery::{collect_files, FilePattern};
use crate::exec::ToolRunner;
use crate::ffmpeg::{EndBound, TrimSpec};
use crate::pipeline::{
    run_join, run_process, JoinOptions, JoinOutcome, ProcessOptions, CONCAT_OUTPUT,
};

/// Execute the join command
pub fn join(runner: &dyn ToolRunner, dir: &Path, args: JoinArgs) -> Result<()> {
    info!("Starting join in {}", dir.display());

    let pattern = FilePattern::new(&args.pattern)
        .with_context(|| format!("Invalid file pattern '{}'", args.pattern))?;

    // --trim-end without --from is rejected at parse time
    let end = args.trim_end.map(EndBound::SecondsFromEnd);
    let trim = args.from.map(|from| TrimSpec {
        start: Some(from),
        end,
    });

    let options = JoinOptions {
        pattern,
        profile: args.profile,
        trim,
        keep_all_files: args.keep_all_files,
    };

    match run_join(runner, dir, &options).context("Failed to join files")? {
        JoinOutcome::NoFiles => {}
        JoinOutcome::Completed { output, inputs } => {
            info!("Joined {} files into {}", inputs, output);
        }
    }

    Ok(())
}

/// Execute the generate-config command
pub fn generate_config(dir: &Path, args: GenerateConfigArgs) -> Result<()> {
    let pattern = FilePattern::new(&args.pattern)
        .with_context(|| format!("Invalid file pattern '{}'", args.pattern))?;

    let files = collect_files(dir, &pattern).context("Failed to scan the working directory")?;
    if files.is_empty() {
        warn!("No files matched the pattern; writing an empty config.");
    }

    let path = dir.join(CONFIG_FILENAME);
    ProcessingConfig::from_names(&files)
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} with {} entries", CONFIG_FILENAME, files.len());
    Ok(())
}

/// Execute the process command
pub fn process(runner: &dyn ToolRunner, dir: &Path, args: ProcessArgs) -> Result<()> {
    let path = dir.join(CONFIG_FILENAME);
    let config = ProcessingConfig::load(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    info!("Processing {} configured files", config.files.len());

    let options = ProcessOptions {
        keep_all_files: args.keep_all_files,
    };
    let outcome = run_process(runner, dir, &config, &options)
        .context("Failed to process the configured files")?;

    if outcome.concat_runs > 0 {
        info!("Joined {} files into {}", config.files.len(), CONCAT_OUTPUT);
    }

    Ok(())
}
