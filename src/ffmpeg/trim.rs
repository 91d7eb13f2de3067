//! Trim invocation builder and trim output naming.

use std::path::Path;

use tracing::debug;

use crate::error::StitchResult;
use crate::exec::{ensure_success, ToolCommand, ToolRunner};

use super::probe::probe_duration;
use super::FFMPEG;

const TRIM_SUFFIX: &str = "_trimmed";

/// What to cut from a file.
///
/// Timestamps are free-form strings handed to ffmpeg unvalidated; a
/// malformed one fails the external invocation, not this tool's parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrimSpec {
    /// Content before this timestamp is cut.
    pub start: Option<String>,
    /// Where the kept range ends.
    pub end: Option<EndBound>,
}

/// The two ways of saying where a trim ends.
#[derive(Debug, Clone, PartialEq)]
pub enum EndBound {
    /// Absolute end timestamp.
    Timestamp(String),
    /// Cut this many seconds off the end; resolving it requires a duration
    /// probe of the source.
    SecondsFromEnd(f64),
}

impl TrimSpec {
    /// True when neither bound is set and no trim is needed.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Absolute end position, in seconds, when cutting `offset` seconds off a
/// source lasting `duration` seconds. Callers must keep `offset` below
/// `duration`; nothing here rejects a nonsensical result.
pub fn end_from_offset(duration: f64, offset: f64) -> f64 {
    duration - offset
}

/// Derived output name for a per-file trim: `clip.mp4` becomes
/// `clip_trimmed.mp4`. Names that already carry the suffix come back
/// unchanged, so re-deriving is harmless.
pub fn trimmed_filename(name: &str) -> String {
    let path = Path::new(name);
    let stem = match path.file_stem() {
        Some(stem) => stem.to_string_lossy(),
        None => return format!("{}{}", name, TRIM_SUFFIX),
    };
    if stem.ends_with(TRIM_SUFFIX) {
        return name.to_string();
    }
    match path.extension() {
        Some(ext) => format!("{}{}.{}", stem, TRIM_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, TRIM_SUFFIX),
    }
}

/// Build the stream-copy trim invocation for the `[start, end)` range of
/// `input`. The seek flags go before `-i`, so ffmpeg seeks on the input side.
pub fn trim_request(
    input: &str,
    start: Option<&str>,
    end: Option<&str>,
    output: &str,
) -> ToolCommand {
    let mut cmd = ToolCommand::new(FFMPEG).arg("-y");
    if let Some(start) = start {
        cmd = cmd.args(["-ss", start]);
    }
    if let Some(end) = end {
        cmd = cmd.args(["-to", end]);
    }
    cmd.args(["-i", input]).args(["-c", "copy"]).arg(output)
}

/// Trim `input` per `spec`, writing `output` next to it in `dir`.
///
/// An end-relative bound probes the source duration first and converts the
/// offset into an absolute `-to` position; the probe failing (or producing
/// garbage) aborts before any trim command is built.
pub fn run_trim(
    runner: &dyn ToolRunner,
    dir: &Path,
    input: &str,
    spec: &TrimSpec,
    output: &str,
) -> StitchResult<()> {
    let end = match &spec.end {
        Some(EndBound::Timestamp(ts)) => Some(ts.clone()),
        Some(EndBound::SecondsFromEnd(offset)) => {
            let duration = probe_duration(runner, dir, input)?;
            debug!(
                "Trimming last {} seconds from {} (originally {} seconds).",
                offset, input, duration
            );
            Some(end_from_offset(duration, *offset).to_string())
        }
        None => None,
    };

    let request =
        trim_request(input, spec.start.as_deref(), end.as_deref(), output).current_dir(dir);
    debug!("Trim command args: {}", request);

    let code = runner.status(&request)?;
    ensure_success(FFMPEG, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_offset_arithmetic() {
        assert_eq!(end_from_offset(125.4, 5.0), 120.4);
        assert_eq!(end_from_offset(125.4, 5.0).to_string(), "120.4");
    }

    #[test]
    fn test_trimmed_name_inserts_the_suffix_before_the_extension() {
        assert_eq!(trimmed_filename("clip.mp4"), "clip_trimmed.mp4");
        assert_eq!(trimmed_filename("a.b.mkv"), "a.b_trimmed.mkv");
        assert_eq!(trimmed_filename("noext"), "noext_trimmed");
    }

    #[test]
    fn test_trimmed_name_is_idempotent() {
        let once = trimmed_filename("clip.mp4");
        assert_eq!(trimmed_filename(&once), once);
    }

    #[test]
    fn test_request_with_both_bounds() {
        let cmd =
            trim_request("output.mp4", Some("00:00:10"), Some("120.4"), "output_trimmed.mp4");
        assert_eq!(
            cmd.args,
            vec![
                "-y",
                "-ss",
                "00:00:10",
                "-to",
                "120.4",
                "-i",
                "output.mp4",
                "-c",
                "copy",
                "output_trimmed.mp4",
            ]
        );
    }

    #[test]
    fn test_request_without_bounds_is_a_plain_copy() {
        let cmd = trim_request("in.mp4", None, None, "out.mp4");
        assert_eq!(cmd.args, vec!["-y", "-i", "in.mp4", "-c", "copy", "out.mp4"]);
    }
}
