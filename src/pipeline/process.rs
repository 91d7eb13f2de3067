//! Config-driven pipeline: per-file trims, then concatenation.

use std::path::Path;

use tracing::{info, warn};

use crate::config::ProcessingConfig;
use crate::error::StitchResult;
use crate::exec::ToolRunner;
use crate::ffmpeg::{run_trim, trimmed_filename};
use crate::manifest::JoinManifest;

use super::{bookkeeper, concat_queue};

/// Options for [`run_process`].
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// Keep per-file trimmed intermediates after the concat.
    pub keep_all_files: bool,
}

/// Lifecycle of one configured entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryState {
    /// Not yet looked at.
    Pending,
    /// Trimmed into `output`; not yet queued.
    Trimmed { output: String },
    /// No bounds configured; queued as-is next.
    Untrimmed,
    /// In the concat queue under `queued_name`.
    Queued { queued_name: String },
}

/// What a process run did.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutcome {
    /// Final state of every entry, in configured order.
    pub states: Vec<EntryState>,
    /// How many times the concat step ran.
    pub concat_runs: usize,
}

/// Work through `config` entry by entry, in document order.
///
/// Entries with trim bounds are cut into `<stem>_trimmed.<ext>` first; every
/// entry then joins the queue under its final name. Whenever the queue holds
/// more than one name the whole queue is concatenated immediately, so a run
/// with N queued entries writes `output.mp4` N-1 times, each pass longer
/// than the last. A failed trim or concat aborts mid-run with the directory
/// left as it was at that point.
pub fn run_process(
    runner: &dyn ToolRunner,
    dir: &Path,
    config: &ProcessingConfig,
    options: &ProcessOptions,
) -> StitchResult<ProcessOutcome> {
    if config.files.is_empty() {
        warn!("No files were processed.");
    }

    let mut states = vec![EntryState::Pending; config.files.len()];
    let mut queue = JoinManifest::new();
    let mut trimmed_outputs = Vec::new();
    let mut concat_runs = 0;

    for (index, entry) in config.files.iter().enumerate() {
        let spec = entry.trim_spec();
        states[index] = if spec.is_empty() {
            EntryState::Untrimmed
        } else {
            let output = trimmed_filename(&entry.name);
            run_trim(runner, dir, &entry.name, &spec, &output)?;
            // two cuts of one source share a trimmed name; record it once
            if !trimmed_outputs.contains(&output) {
                trimmed_outputs.push(output.clone());
            }
            EntryState::Trimmed { output }
        };

        let queued_name = match &states[index] {
            EntryState::Trimmed { output } => output.clone(),
            _ => entry.name.clone(),
        };
        info!("Adding {} to the process queue.", queued_name);
        queue.push(queued_name.as_str());
        states[index] = EntryState::Queued { queued_name };

        if queue.len() > 1 {
            concat_queue(runner, dir, &queue, config.codec)?;
            concat_runs += 1;
        }
    }

    if !runner.is_dry() {
        let concat_ran = concat_runs > 0;
        bookkeeper::finalize_process(dir, &trimmed_outputs, concat_ran, options.keep_all_files)?;
    }

    Ok(ProcessOutcome {
        states,
        concat_runs,
    })
}
