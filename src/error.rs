//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a user-supplied root path is rejected before traversal.
///
/// The `Display` text of each variant is the one-line diagnostic printed by the CLI.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid path.")]
    EmptyPath,
    #[error("Error processing path: {source}")]
    ResolutionFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_messages() {
        assert_eq!(ResolveError::EmptyPath.to_string(), "Invalid path.");
        assert_eq!(
            ResolveError::NotFound(PathBuf::from("/tmp/missing")).to_string(),
            "Path not found: /tmp/missing"
        );
        assert_eq!(
            ResolveError::NotADirectory(PathBuf::from("/tmp/file.txt")).to_string(),
            "Path is not a directory: /tmp/file.txt"
        );
    }

    #[test]
    fn test_resolution_failed_includes_cause() {
        let err = ResolveError::ResolutionFailed {
            path: PathBuf::from("bad"),
            source: io::Error::new(io::ErrorKind::InvalidInput, "nul byte in path"),
        };
        assert_eq!(err.to_string(), "Error processing path: nul byte in path");
    }

    #[test]
    fn test_crate_error_is_transparent_for_resolve() {
        let err: Error = ResolveError::EmptyPath.into();
        assert_eq!(err.to_string(), "Invalid path.");
    }
}
