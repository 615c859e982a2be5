//! Arbor - print a directory as a deterministic ASCII tree

pub mod error;
pub mod output;
pub mod resolve;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::io;
use std::path::Path;

use termcolor::WriteColor;

pub use error::{Error, ResolveError, Result};
pub use output::{OutputConfig, StreamingFormatter, print_json, strip_ansi, write_json};
pub use resolve::{Root, resolve};
pub use tree::{
    DirEntry, EntryKind, StreamingOutput, TreeLine, TreeNode, WalkSummary, build_tree,
    walk_streaming,
};

/// Render the tree under `root` into `out`.
pub fn render_tree<W: WriteColor>(root: &Root, out: &mut W) -> io::Result<WalkSummary> {
    let mut formatter = StreamingFormatter::with_writer(out);
    walk_streaming(root, &mut formatter)
}

/// Validate `input` and print its tree to stdout.
pub fn print_tree<P: AsRef<Path>>(input: Option<P>, config: &OutputConfig) -> Result<WalkSummary> {
    let root = resolve(input)?;
    let mut formatter = StreamingFormatter::new(config);
    Ok(walk_streaming(&root, &mut formatter)?)
}

/// Validate `input` and print its tree to stdout as JSON.
pub fn print_json_tree<P: AsRef<Path>>(input: Option<P>) -> Result<()> {
    let root = resolve(input)?;
    print_json(&build_tree(&root))?;
    Ok(())
}
