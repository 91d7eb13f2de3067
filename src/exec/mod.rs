//! External tool invocation boundary.
//!
//! Every ffmpeg/ffprobe call is described by a [`ToolCommand`] value built by
//! a pure function and executed through the [`ToolRunner`] trait. The only
//! place a process is actually spawned is [`SystemRunner`]; everything above
//! this seam can be exercised with a scripted runner.

use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{StitchError, StitchResult};

/// A fully described external tool invocation: program, ordered arguments,
/// and the directory to run it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub tool: &'static str,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

impl ToolCommand {
    /// Start a command for `tool` with no arguments.
    pub fn new(tool: &'static str) -> Self {
        Self {
            tool,
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a sequence of arguments in order.
    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the command from `dir` instead of the parent's working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a query-style invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Raw exit code; -1 when the process was terminated by a signal.
    pub code: i32,
    pub stdout: String,
}

/// Executes [`ToolCommand`]s.
///
/// `status` is for processing runs whose console output should reach the
/// user; `output` is for queries whose stdout the caller parses. Both block
/// until the child exits and return its exit code verbatim.
pub trait ToolRunner {
    /// Run to completion with inherited stdio, returning the raw exit code.
    fn status(&self, cmd: &ToolCommand) -> StitchResult<i32>;

    /// Run to completion capturing stdout.
    fn output(&self, cmd: &ToolCommand) -> StitchResult<ToolOutput>;

    /// True for runners that only pretend to execute, so pipelines skip
    /// renames and deletions that assume the tools really ran.
    fn is_dry(&self) -> bool {
        false
    }
}

/// Map a raw exit code to success or [`StitchError::ToolFailed`].
pub fn ensure_success(tool: &'static str, code: i32) -> StitchResult<()> {
    if code == 0 {
        Ok(())
    } else {
        Err(StitchError::ToolFailed { tool, code })
    }
}

/// Runner backed by real child processes.
pub struct SystemRunner;

impl SystemRunner {
    fn command(cmd: &ToolCommand) -> Command {
        let mut command = Command::new(cmd.tool);
        command.args(&cmd.args);
        if let Some(dir) = &cmd.current_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl ToolRunner for SystemRunner {
    fn status(&self, cmd: &ToolCommand) -> StitchResult<i32> {
        debug!("Running command: {}", cmd);
        let status = Self::command(cmd).status().map_err(|source| StitchError::Launch {
            tool: cmd.tool,
            source,
        })?;
        Ok(status.code().unwrap_or(-1))
    }

    fn output(&self, cmd: &ToolCommand) -> StitchResult<ToolOutput> {
        debug!("Running command: {}", cmd);
        let output = Self::command(cmd).output().map_err(|source| StitchError::Launch {
            tool: cmd.tool,
            source,
        })?;
        Ok(ToolOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Runner that prints processing commands instead of executing them.
///
/// Query-style invocations still run for real: they are read-only and their
/// results may be needed to build the commands being previewed.
pub struct DryRunner {
    inner: SystemRunner,
}

impl DryRunner {
    pub fn new() -> Self {
        Self {
            inner: SystemRunner,
        }
    }
}

impl Default for DryRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRunner for DryRunner {
    fn status(&self, cmd: &ToolCommand) -> StitchResult<i32> {
        info!("(dry run) {}", cmd);
        Ok(0)
    }

    fn output(&self, cmd: &ToolCommand) -> StitchResult<ToolOutput> {
        self.inner.output(cmd)
    }

    fn is_dry(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_argument_order() {
        let cmd = ToolCommand::new("ffmpeg")
            .arg("-y")
            .args(["-f", "concat"])
            .arg("output.mp4");

        assert_eq!(cmd.args, vec!["-y", "-f", "concat", "output.mp4"]);
    }

    #[test]
    fn test_display_renders_a_command_line() {
        let cmd = ToolCommand::new("ffprobe").args(["-v", "error", "clip.mp4"]);
        assert_eq!(cmd.to_string(), "ffprobe -v error clip.mp4");
    }

    #[test]
    fn test_ensure_success_accepts_only_zero() {
        assert!(ensure_success("ffmpeg", 0).is_ok());
        assert!(matches!(
            ensure_success("ffmpeg", 1),
            Err(StitchError::ToolFailed {
                tool: "ffmpeg",
                code: 1
            })
        ));
    }

    #[test]
    fn test_dry_runner_reports_success_without_running() {
        let runner = DryRunner::new();
        let cmd = ToolCommand::new("ffmpeg").arg("definitely-not-a-real-flag");
        assert_eq!(runner.status(&cmd).unwrap(), 0);
        assert!(runner.is_dry());
    }
}
