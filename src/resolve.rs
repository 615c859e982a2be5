//! Root path validation
//!
//! Turns user input into a [`Root`]: an absolute, canonical path that existed and
//! was a directory at the time of the check. Nothing here touches the filesystem
//! beyond reading metadata.
//!
//! The directory may still disappear between validation and the first read. The
//! walker treats that like any other unreadable directory.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;

/// A validated directory to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    path: PathBuf,
    name: String,
}

impl Root {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name shown on the first line of the tree. Empty for a filesystem root.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Validate and canonicalize `input`.
///
/// `None`, empty and whitespace-only input is rejected before any filesystem access.
pub fn resolve<P: AsRef<Path>>(input: Option<P>) -> Result<Root, ResolveError> {
    let input: &Path = match input {
        Some(ref p) if !is_blank(p.as_ref()) => p.as_ref(),
        _ => return Err(ResolveError::EmptyPath),
    };

    let path = match std::fs::canonicalize(input) {
        Ok(path) => path,
        Err(e) if is_missing(&e) => {
            let shown = std::path::absolute(input).unwrap_or_else(|_| input.to_path_buf());
            return Err(ResolveError::NotFound(shown));
        }
        Err(source) => {
            return Err(ResolveError::ResolutionFailed {
                path: input.to_path_buf(),
                source,
            });
        }
    };

    if !path.is_dir() {
        return Err(ResolveError::NotADirectory(path));
    }

    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    tracing::debug!(root = %path.display(), "resolved root directory");
    Ok(Root { path, name })
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}

/// A path component that is missing, or a file used as if it were a directory.
fn is_missing(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}
