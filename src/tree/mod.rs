//! Directory tree walking logic
//!
//! Two walkers share the same listing and ordering rules:
//!
//! - `walk_streaming`: emits [`TreeLine`]s as it goes, O(depth) memory, used for console output
//! - `build_tree`: builds a [`TreeNode`] in memory, required for JSON output

mod entry;
mod json_types;
mod line;
mod streaming;
mod walker;

pub use entry::{DirEntry, EntryKind, read_entries, sort_entries};
pub use json_types::TreeNode;
pub use line::{Connector, Label, PERMISSION_DENIED, TreeLine};
pub use streaming::{StreamingOutput, WalkSummary, walk_streaming};
pub use walker::build_tree;
