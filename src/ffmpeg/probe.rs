//! Duration query via ffprobe.

use std::path::Path;

use tracing::debug;

use crate::error::{StitchError, StitchResult};
use crate::exec::{ensure_success, ToolCommand, ToolRunner};

use super::FFPROBE;

/// Build the format-duration query for `file`. The output format prints the
/// duration as a bare decimal on stdout and nothing else.
pub fn duration_request(file: &str) -> ToolCommand {
    ToolCommand::new(FFPROBE).args([
        "-v",
        "error",
        "-show_entries",
        "format=duration",
        "-of",
        "default=noprint_wrappers=1:nokey=1",
        file,
    ])
}

/// Total duration of `file` in seconds.
pub fn probe_duration(runner: &dyn ToolRunner, dir: &Path, file: &str) -> StitchResult<f64> {
    let output = runner.output(&duration_request(file).current_dir(dir))?;
    ensure_success(FFPROBE, output.code)?;

    let duration = parse_duration(&output.stdout)?;
    debug!("Probed duration of {}: {} seconds", file, duration);
    Ok(duration)
}

fn parse_duration(stdout: &str) -> StitchResult<f64> {
    let text = stdout.trim();
    text.parse::<f64>().map_err(|_| StitchError::DurationParse {
        output: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_targets_the_format_duration_entry() {
        let cmd = duration_request("output.mp4");
        assert_eq!(cmd.tool, "ffprobe");
        assert_eq!(
            cmd.args,
            vec![
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
                "output.mp4",
            ]
        );
    }

    #[test]
    fn test_parses_a_bare_decimal_with_trailing_newline() {
        assert_eq!(parse_duration("125.4\n").unwrap(), 125.4);
    }

    #[test]
    fn test_rejects_non_numeric_output() {
        let err = parse_duration("N/A\n").unwrap_err();
        assert!(matches!(err, StitchError::DurationParse { output } if output == "N/A"));
    }
}
