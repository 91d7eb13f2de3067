//! Command-line argument definitions

use clap::Args;

use crate::discovery::DEFAULT_PATTERN;
use crate::ffmpeg::EncodingProfile;

/// Arguments for the join command
#[derive(Args, Debug)]
pub struct JoinArgs {
    /// Filename pattern, matched against the start of each name
    #[arg(long, default_value = DEFAULT_PATTERN, env = "STITCHER_PATTERN")]
    pub pattern: String,

    /// Encoding profile for the concatenation
    #[arg(long, value_enum, default_value_t = EncodingProfile::default())]
    pub profile: EncodingProfile,

    /// Trim start timestamp applied to the joined output
    #[arg(long)]
    pub from: Option<String>,

    /// Cut this many seconds off the end of the joined output
    #[arg(long, requires = "from")]
    pub trim_end: Option<f64>,

    /// Keep the untrimmed output next to the trimmed one
    #[arg(long)]
    pub keep_all_files: bool,
}

/// Arguments for the generate-config command
#[derive(Args, Debug)]
pub struct GenerateConfigArgs {
    /// Filename pattern, matched against the start of each name
    #[arg(long, default_value = DEFAULT_PATTERN, env = "STITCHER_PATTERN")]
    pub pattern: String,
}

/// Arguments for the process command
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Keep per-file trimmed intermediates after the join
    #[arg(long)]
    pub keep_all_files: bool,
}
