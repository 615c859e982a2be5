//! Streaming walk - emits lines as directories are read, O(depth) memory

use std::io;
use std::path::Path;

use crate::resolve::Root;

use super::entry::{EntryKind, read_entries};
use super::line::{Connector, Label, TreeLine};

/// Sink for lines produced by [`walk_streaming`].
pub trait StreamingOutput {
    fn output_line(&mut self, line: &TreeLine) -> io::Result<()>;
}

/// Collects lines in memory, mainly for tests.
impl StreamingOutput for Vec<TreeLine> {
    fn output_line(&mut self, line: &TreeLine) -> io::Result<()> {
        self.push(line.clone());
        Ok(())
    }
}

/// Counts of what a walk emitted. The root itself is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
    /// Directories whose contents were replaced by the permission-denied marker.
    pub denied: usize,
}

impl WalkSummary {
    /// Number of lines written, root line included.
    pub fn lines(&self) -> usize {
        1 + self.directories + self.files + self.denied
    }
}

/// Emit the root line and then the whole tree beneath it, depth first.
///
/// Errors come only from `output`. Unreadable directories degrade to a single
/// marker line and the walk carries on with their siblings.
pub fn walk_streaming<O: StreamingOutput>(root: &Root, output: &mut O) -> io::Result<WalkSummary> {
    let mut summary = WalkSummary::default();
    output.output_line(&TreeLine::root(root.name()))?;
    walk_dir(root.path(), "", output, &mut summary)?;
    tracing::debug!(
        root = %root.path().display(),
        directories = summary.directories,
        files = summary.files,
        denied = summary.denied,
        "walk finished"
    );
    Ok(summary)
}

fn walk_dir<O: StreamingOutput>(
    path: &Path,
    prefix: &str,
    output: &mut O,
    summary: &mut WalkSummary,
) -> io::Result<()> {
    let entries = match read_entries(path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cannot read directory");
            summary.denied += 1;
            return output.output_line(&TreeLine::denied(prefix));
        }
    };

    let total = entries.len();
    for (i, entry) in entries.into_iter().enumerate() {
        let connector = Connector::for_position(i, total);
        match entry.kind {
            EntryKind::Directory => {
                output.output_line(&TreeLine::entry(prefix, connector, Label::Dir(entry.name)))?;
                summary.directories += 1;
                walk_dir(&entry.path, &connector.child_prefix(prefix), output, summary)?;
            }
            EntryKind::File => {
                output.output_line(&TreeLine::entry(prefix, connector, Label::File(entry.name)))?;
                summary.files += 1;
            }
        }
    }

    Ok(())
}
