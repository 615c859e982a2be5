//! Buffered walk - builds the full tree in memory for JSON output

use std::path::Path;

use crate::resolve::Root;

use super::entry::{EntryKind, read_entries};
use super::json_types::TreeNode;

/// Read the whole tree under `root`, in the same order the streaming walk uses.
pub fn build_tree(root: &Root) -> TreeNode {
    build_dir(root.name().to_string(), root.path())
}

fn build_dir(name: String, path: &Path) -> TreeNode {
    let (children, error) = match read_entries(path) {
        Ok(entries) => {
            let children = entries
                .into_iter()
                .map(|entry| match entry.kind {
                    EntryKind::Directory => build_dir(entry.name, &entry.path),
                    EntryKind::File => TreeNode::File {
                        name: entry.name,
                        path: entry.path,
                    },
                })
                .collect();
            (children, None)
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cannot read directory");
            (Vec::new(), Some(e.to_string()))
        }
    };

    TreeNode::Dir {
        name,
        path: path.to_path_buf(),
        children,
        error,
    }
}
