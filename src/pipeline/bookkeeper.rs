//! Post-run cleanup.
//!
//! Nothing here runs unless the whole pipeline succeeded, so a failed run
//! leaves every input, intermediate, and the manifest in place for
//! inspection and a retry.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::{CONCAT_OUTPUT, JOIN_MANIFEST, PROCESSED_PREFIX};

/// Cleanup after a successful auto-discovery run.
///
/// Every discovered input is renamed to `processed_<name>` so the next run's
/// pattern no longer matches it. The untrimmed `output.mp4` is dropped once
/// a trimmed copy supersedes it, unless `keep_all_files`.
pub fn finalize_join(
    dir: &Path,
    inputs: &[String],
    trimmed: bool,
    keep_all_files: bool,
) -> io::Result<()> {
    for name in inputs {
        let renamed = format!("{}{}", PROCESSED_PREFIX, name);
        debug!("Renaming {} to {}", name, renamed);
        fs::rename(dir.join(name), dir.join(renamed))?;
    }

    if trimmed && !keep_all_files {
        debug!("Removing {}", CONCAT_OUTPUT);
        fs::remove_file(dir.join(CONCAT_OUTPUT))?;
    }

    debug!("Removing {}", JOIN_MANIFEST);
    fs::remove_file(dir.join(JOIN_MANIFEST))
}

/// Cleanup after a successful config-driven run.
///
/// Configured inputs are named explicitly rather than discovered, so they
/// are never renamed. When no concat ran the trimmed files are the run's
/// products, not intermediates, and everything stays put.
pub fn finalize_process(
    dir: &Path,
    trimmed_outputs: &[String],
    concat_ran: bool,
    keep_all_files: bool,
) -> io::Result<()> {
    if !concat_ran {
        return Ok(());
    }

    if !keep_all_files {
        for name in trimmed_outputs {
            debug!("Removing {}", name);
            fs::remove_file(dir.join(name))?;
        }
    }

    debug!("Removing {}", JOIN_MANIFEST);
    fs::remove_file(dir.join(JOIN_MANIFEST))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_join_cleanup_renames_inputs_and_drops_the_manifest() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "join01__a.mp4");
        touch(dir.path(), "join02__b.mp4");
        touch(dir.path(), CONCAT_OUTPUT);
        touch(dir.path(), JOIN_MANIFEST);

        finalize_join(
            dir.path(),
            &["join01__a.mp4".into(), "join02__b.mp4".into()],
            false,
            false,
        )
        .unwrap();

        assert!(dir.path().join("processed_join01__a.mp4").exists());
        assert!(dir.path().join("processed_join02__b.mp4").exists());
        assert!(!dir.path().join("join01__a.mp4").exists());
        // no trim happened, the concat output is the product
        assert!(dir.path().join(CONCAT_OUTPUT).exists());
        assert!(!dir.path().join(JOIN_MANIFEST).exists());
    }

    #[test]
    fn test_join_cleanup_drops_the_superseded_output_after_a_trim() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "join01__a.mp4");
        touch(dir.path(), CONCAT_OUTPUT);
        touch(dir.path(), "output_trimmed.mp4");
        touch(dir.path(), JOIN_MANIFEST);

        finalize_join(dir.path(), &["join01__a.mp4".into()], true, false).unwrap();

        assert!(!dir.path().join(CONCAT_OUTPUT).exists());
        assert!(dir.path().join("output_trimmed.mp4").exists());
    }

    #[test]
    fn test_join_cleanup_keeps_everything_but_the_manifest_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "join01__a.mp4");
        touch(dir.path(), CONCAT_OUTPUT);
        touch(dir.path(), "output_trimmed.mp4");
        touch(dir.path(), JOIN_MANIFEST);

        finalize_join(dir.path(), &["join01__a.mp4".into()], true, true).unwrap();

        assert!(dir.path().join(CONCAT_OUTPUT).exists());
        assert!(!dir.path().join(JOIN_MANIFEST).exists());
    }

    #[test]
    fn test_process_cleanup_drops_intermediates_only_after_a_concat() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a_trimmed.mp4");
        touch(dir.path(), JOIN_MANIFEST);

        finalize_process(dir.path(), &["a_trimmed.mp4".into()], true, false).unwrap();
        assert!(!dir.path().join("a_trimmed.mp4").exists());
        assert!(!dir.path().join(JOIN_MANIFEST).exists());
    }

    #[test]
    fn test_process_cleanup_is_a_no_op_without_a_concat() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a_trimmed.mp4");

        finalize_process(dir.path(), &["a_trimmed.mp4".into()], false, false).unwrap();
        // the trimmed file is the product of this run
        assert!(dir.path().join("a_trimmed.mp4").exists());
    }

    #[test]
    fn test_process_cleanup_honors_keep_all_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a_trimmed.mp4");
        touch(dir.path(), JOIN_MANIFEST);

        finalize_process(dir.path(), &["a_trimmed.mp4".into()], true, true).unwrap();
        assert!(dir.path().join("a_trimmed.mp4").exists());
        assert!(!dir.path().join(JOIN_MANIFEST).exists());
    }
}
