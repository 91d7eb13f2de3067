//! File discovery: a flat directory scan with a name-pattern filter.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::error::StitchResult;

/// Pattern matched by files produced by the recording setup this tool was
/// written around: `join<digits>__<anything>.mp4`.
pub const DEFAULT_PATTERN: &str = r"join\d+__.*\.mp4";

/// Filename pattern with match-from-start semantics: the expression must
/// match at the beginning of the name, and trailing characters are ignored.
/// It is anchored at compile time so callers cannot accidentally search the
/// middle of a name.
#[derive(Debug, Clone)]
pub struct FilePattern {
    regex: Regex,
}

impl FilePattern {
    pub fn new(expr: &str) -> StitchResult<Self> {
        let regex = Regex::new(&format!("^(?:{})", expr))?;
        Ok(Self { regex })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Keep the names matching `pattern`, preserving the input order.
pub fn filter_names<I>(names: I, pattern: &FilePattern) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .filter(|name| pattern.matches(name))
        .collect()
}

/// List `dir` (no recursion) and return the entry names matching `pattern`.
///
/// Names come back in whatever order the directory listing yields them;
/// callers must not assume any particular order. Matching is purely by name,
/// so the entry type is not inspected.
pub fn collect_files(dir: &Path, pattern: &FilePattern) -> StitchResult<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    debug!("Found files in directory: {:?}", names);

    let matched = filter_names(names, pattern);
    debug!("Found files to join: {:?}", matched);
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_filter_keeps_matches_in_listing_order() {
        let pattern = FilePattern::new(DEFAULT_PATTERN).unwrap();
        let names = listing(&[
            "join02__second.mp4",
            "notes.txt",
            "join01__first.mp4",
            "processed_join03__old.mp4",
        ]);

        assert_eq!(
            filter_names(names, &pattern),
            listing(&["join02__second.mp4", "join01__first.mp4"])
        );
    }

    #[test]
    fn test_pattern_matches_from_the_start_only() {
        let pattern = FilePattern::new(DEFAULT_PATTERN).unwrap();

        // a trailing remainder is fine, a leading one is not
        assert!(pattern.matches("join01__clip.mp4.part"));
        assert!(!pattern.matches("xjoin01__clip.mp4"));
    }

    #[test]
    fn test_invalid_expression_is_rejected() {
        assert!(FilePattern::new("join[").is_err());
    }

    #[test]
    fn test_collect_files_scans_a_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("join01__a.mp4"), b"x").unwrap();
        fs::write(dir.path().join("join02__b.mp4"), b"x").unwrap();
        fs::write(dir.path().join("other.mp4"), b"x").unwrap();

        let pattern = FilePattern::new(DEFAULT_PATTERN).unwrap();
        let mut found = collect_files(dir.path(), &pattern).unwrap();
        found.sort();

        assert_eq!(found, listing(&["join01__a.mp4", "join02__b.mp4"]));
    }

    #[test]
    fn test_missing_directory_propagates_io_error() {
        let pattern = FilePattern::new(DEFAULT_PATTERN).unwrap();
        assert!(collect_files(Path::new("/no/such/directory"), &pattern).is_err());
    }
}
