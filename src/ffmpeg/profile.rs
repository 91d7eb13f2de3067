//! Encoding profiles for the concatenation step.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the concatenated output is produced.
///
/// Stream copy is fast and lossless but requires inputs whose streams
/// concatenate cleanly; the transcode profile re-encodes everything through
/// NVENC HEVC with fixed quality settings and tolerates mismatched inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EncodingProfile {
    /// Copy compressed samples directly (`-c copy`).
    #[default]
    #[serde(alias = "copy")]
    #[value(alias = "copy")]
    StreamCopy,
    /// Re-encode with the fixed `hevc_nvenc` profile.
    #[serde(alias = "hevc", alias = "hevc_nvenc")]
    #[value(alias = "hevc", alias = "hevc_nvenc")]
    HevcTranscode,
}

impl EncodingProfile {
    /// The ffmpeg arguments selecting this profile.
    pub fn encoder_args(&self) -> &'static [&'static str] {
        match self {
            EncodingProfile::StreamCopy => &["-c", "copy"],
            EncodingProfile::HevcTranscode => &[
                "-vf",
                "select=concatdec_select",
                "-af",
                "aselect=concatdec_select,aresample=async=1",
                "-c:a",
                "aac",
                "-c:v",
                "hevc_nvenc",
                "-tag:v",
                "hvc1",
                "-cq",
                "0",
                "-profile:v",
                "main10",
                "-b:v",
                "50M",
                "-maxrate",
                "50M",
                "-bufsize",
                "100M",
            ],
        }
    }
}

impl fmt::Display for EncodingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EncodingProfile::StreamCopy => "stream-copy",
            EncodingProfile::HevcTranscode => "hevc-transcode",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_copy_is_a_plain_codec_copy() {
        assert_eq!(EncodingProfile::StreamCopy.encoder_args(), ["-c", "copy"]);
    }

    #[test]
    fn test_transcode_profile_pins_the_hevc_settings() {
        let args = EncodingProfile::HevcTranscode.encoder_args();
        assert!(args.windows(2).any(|w| w == ["-c:v", "hevc_nvenc"]));
        assert!(args.windows(2).any(|w| w == ["-b:v", "50M"]));
        assert!(args.windows(2).any(|w| w == ["-tag:v", "hvc1"]));
    }

    #[test]
    fn test_cli_spellings_and_aliases_parse() {
        for spelling in ["stream-copy", "copy"] {
            let parsed = <EncodingProfile as ValueEnum>::from_str(spelling, false).unwrap();
            assert_eq!(parsed, EncodingProfile::StreamCopy);
        }
        for spelling in ["hevc-transcode", "hevc", "hevc_nvenc"] {
            let parsed = <EncodingProfile as ValueEnum>::from_str(spelling, false).unwrap();
            assert_eq!(parsed, EncodingProfile::HevcTranscode);
        }

        assert!(<EncodingProfile as ValueEnum>::from_str("av1", false).is_err());
    }

    #[test]
    fn test_yaml_spellings_and_aliases_parse() {
        let copy: EncodingProfile = serde_yaml::from_str("stream-copy").unwrap();
        assert_eq!(copy, EncodingProfile::StreamCopy);

        let copy: EncodingProfile = serde_yaml::from_str("copy").unwrap();
        assert_eq!(copy, EncodingProfile::StreamCopy);

        let hevc: EncodingProfile = serde_yaml::from_str("hevc_nvenc").unwrap();
        assert_eq!(hevc, EncodingProfile::HevcTranscode);

        assert!(serde_yaml::from_str::<EncodingProfile>("av1").is_err());
    }
}
