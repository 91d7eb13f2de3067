//! Builders for every ffmpeg/ffprobe invocation the tool makes.
//!
//! All functions here are pure: they produce [`crate::exec::ToolCommand`]
//! values and never touch a process themselves.

pub mod concat;
pub mod probe;
pub mod profile;
pub mod trim;

/// Program name of the processing tool, resolved via the search path.
pub const FFMPEG: &str = "ffmpeg";
/// Program name of the probing tool, resolved via the search path.
pub const FFPROBE: &str = "ffprobe";

pub use concat::concat_request;
pub use probe::{duration_request, probe_duration};
pub use profile::EncodingProfile;
pub use trim::{run_trim, trim_request, trimmed_filename, EndBound, TrimSpec};
