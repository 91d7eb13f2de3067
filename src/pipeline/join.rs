//! Auto-discovery pipeline: match, concatenate, optionally trim.

use std::path::Path;

use tracing::{info, warn};

use crate::discovery::{collect_files, FilePattern};
use crate::error::StitchResult;
use crate::exec::ToolRunner;
use crate::ffmpeg::{run_trim, EncodingProfile, TrimSpec};
use crate::manifest::JoinManifest;

use super::{bookkeeper, concat_queue, CONCAT_OUTPUT, TRIMMED_OUTPUT};

/// Options for [`run_join`].
#[derive(Debug, Clone)]
pub struct JoinOptions {
    /// Which directory entries count as inputs.
    pub pattern: FilePattern,
    /// Encoding profile for the concat step.
    pub profile: EncodingProfile,
    /// Trim applied to the concatenated output, when bounds were given.
    pub trim: Option<TrimSpec>,
    /// Keep the untrimmed concat output next to its trimmed copy.
    pub keep_all_files: bool,
}

/// What a join run did.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinOutcome {
    /// Nothing in the directory matched the pattern.
    NoFiles,
    /// `output` was produced from `inputs` matching files.
    Completed { output: String, inputs: usize },
}

/// Concatenate every file in `dir` matching the pattern, in listing order,
/// then trim the result if bounds were given.
///
/// Matching nothing is a no-op, not an error. After a fully successful run
/// the inputs are renamed away and the manifest is deleted; on a dry run or
/// any failure the directory is left as found.
pub fn run_join(
    runner: &dyn ToolRunner,
    dir: &Path,
    options: &JoinOptions,
) -> StitchResult<JoinOutcome> {
    let files = collect_files(dir, &options.pattern)?;
    if files.is_empty() {
        warn!("No files were processed.");
        return Ok(JoinOutcome::NoFiles);
    }

    let mut queue = JoinManifest::new();
    for name in &files {
        info!("Adding {} to the process queue.", name);
        queue.push(name.as_str());
    }

    concat_queue(runner, dir, &queue, options.profile)?;

    let mut output = CONCAT_OUTPUT;
    let mut trimmed = false;
    if let Some(spec) = options.trim.as_ref().filter(|spec| !spec.is_empty()) {
        run_trim(runner, dir, CONCAT_OUTPUT, spec, TRIMMED_OUTPUT)?;
        output = TRIMMED_OUTPUT;
        trimmed = true;
    }

    if !runner.is_dry() {
        bookkeeper::finalize_join(dir, &files, trimmed, options.keep_all_files)?;
    }

    Ok(JoinOutcome::Completed {
        output: output.to_string(),
        inputs: files.len(),
    })
}
