//! Processing pipelines.
//!
//! [`join`] is the auto-discovery mode: match files by pattern, concatenate,
//! optionally trim the result. [`process`] is the config-driven mode: trim
//! individual files per `concat_config.yml`, then concatenate. Both share
//! the concat step here and hand cleanup to [`bookkeeper`] once everything
//! external has succeeded.

pub mod bookkeeper;
pub mod join;
pub mod process;

pub use join::{run_join, JoinOptions, JoinOutcome};
pub use process::{run_process, EntryState, ProcessOptions, ProcessOutcome};

use std::path::Path;

use tracing::debug;

use crate::error::StitchResult;
use crate::exec::{ensure_success, ToolRunner};
use crate::ffmpeg::{concat_request, EncodingProfile, FFMPEG};
use crate::manifest::JoinManifest;

/// Manifest consumed by the concat demuxer.
pub const JOIN_MANIFEST: &str = "join.txt";
/// Concatenated output.
pub const CONCAT_OUTPUT: &str = "output.mp4";
/// Trimmed concatenated output, auto-discovery mode only.
pub const TRIMMED_OUTPUT: &str = "output_trimmed.mp4";
/// Prefix marking an input as consumed by an earlier run.
pub const PROCESSED_PREFIX: &str = "processed_";

/// Write the queue to `join.txt` in `dir` and concatenate it into
/// `output.mp4` there. Re-running with a longer queue overwrites both.
fn concat_queue(
    runner: &dyn ToolRunner,
    dir: &Path,
    queue: &JoinManifest,
    profile: EncodingProfile,
) -> StitchResult<()> {
    debug!("Writing {} with {:?}", JOIN_MANIFEST, queue.entries());
    queue.write_to(&dir.join(JOIN_MANIFEST))?;

    let request = concat_request(Path::new(JOIN_MANIFEST), CONCAT_OUTPUT, profile).current_dir(dir);
    debug!("Concat command args: {}", request);

    let code = runner.status(&request)?;
    ensure_success(FFMPEG, code)
}
