//! Join manifest consumed by ffmpeg's concat demuxer.

use std::fs;
use std::io;
use std::path::Path;

/// Ordered list of filenames to concatenate.
///
/// Entry order is concatenation order. The on-disk form is one
/// `file '<name>'` record per line. Names are written verbatim: a single
/// quote inside a filename is not escaped and will break the demuxer's
/// parsing of the list. That limitation is inherent to how the list format
/// is used here and is not worked around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinManifest {
    entries: Vec<String>,
}

impl JoinManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filename to the end of the concatenation order.
    pub fn push(&mut self, name: impl Into<String>) {
        self.entries.push(name.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Render the manifest records.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for name in &self.entries {
            out.push_str("file '");
            out.push_str(name);
            out.push_str("'\n");
        }
        out
    }

    /// Write the manifest to `path`, overwriting any existing file there.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.render())
    }
}

impl<S: Into<String>> FromIterator<S> for JoinManifest {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}
