//! StitchX CLI Video Stitcher Library
//!
//! A command-line tool that drives the external ffmpeg/ffprobe binaries to
//! concatenate recordings and trim them down, either by filename pattern or
//! from a declarative config file.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exec;
pub mod ffmpeg;
pub mod manifest;
pub mod pipeline;

// Re-export commonly used types
pub use error::{StitchError, StitchResult};
pub use exec::{DryRunner, SystemRunner, ToolCommand, ToolOutput, ToolRunner};
pub use manifest::JoinManifest;
