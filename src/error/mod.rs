//! Error handling module for StitchX

use thiserror::Error;

/// Main error type for StitchX operations
#[derive(Error, Debug)]
pub enum StitchError {
    /// An external tool ran to completion but reported failure
    #[error("{tool} exited with status {code}")]
    ToolFailed { tool: &'static str, code: i32 },

    /// An external tool could not be started at all
    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: &'static str,
        source: std::io::Error,
    },

    /// Duration probe produced output that is not a number
    #[error("could not parse ffprobe duration output: {output:?}")]
    DurationParse { output: String },

    /// Configuration document could not be read or written
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Discovery pattern is not a valid regular expression
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StitchError {
    /// Process exit code reported for this failure.
    ///
    /// A failing external tool's own exit code is passed through when it fits
    /// in the 1..=255 range the shell can see; everything else maps to 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            StitchError::ToolFailed { code, .. } => match u8::try_from(*code) {
                Ok(code) if code != 0 => code,
                _ => 1,
            },
            _ => 1,
        }
    }
}

/// Result type alias for StitchX operations
pub type StitchResult<T> = std::result::Result<T, StitchError>;
