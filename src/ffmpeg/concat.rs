//! Concatenation invocation builder.

use std::path::Path;

use crate::exec::ToolCommand;

use super::profile::EncodingProfile;
use super::FFMPEG;

/// Build the demuxer-concat invocation reading `manifest` and writing
/// `output`.
///
/// `-safe 0` lets the demuxer accept the unrestricted filenames the manifest
/// may carry; `-y` overwrites a leftover output from an earlier run instead
/// of prompting.
pub fn concat_request(manifest: &Path, output: &str, profile: EncodingProfile) -> ToolCommand {
    ToolCommand::new(FFMPEG)
        .arg("-y")
        .args(["-f", "concat", "-safe", "0"])
        .args(["-i".to_string(), manifest.to_string_lossy().into_owned()])
        .args(profile.encoder_args().iter().copied())
        .arg(output)
}
