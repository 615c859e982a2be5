//! Test utilities for building directory fixtures.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A named directory inside a temporary directory.
///
/// The extra level gives the rendered root line a predictable name. Everything is
/// removed when dropped.
pub struct TestDir {
    _tmp: TempDir,
    root: PathBuf,
}

impl TestDir {
    /// Create a new empty fixture named `fixture`.
    pub fn new() -> Self {
        Self::named("fixture")
    }

    /// Create a new empty fixture whose root directory is called `name`.
    pub fn named(name: &str) -> Self {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let root = tmp.path().join(name);
        fs::create_dir(&root).expect("Failed to create fixture root");
        Self { _tmp: tmp, root }
    }

    /// Get the path to the fixture root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Fill the fixture with a balanced tree: `width` directories and `width`
    /// files per level, `depth` levels deep.
    pub fn populate(&self, depth: usize, width: usize) {
        fn fill(dir: &Path, depth: usize, width: usize) {
            for i in 0..width {
                fs::write(dir.join(format!("file_{}.txt", i)), "").expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for i in 0..width {
                let sub = dir.join(format!("dir_{}", i));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, depth - 1, width);
            }
        }
        fill(&self.root, depth, width);
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes all permissions from a directory until dropped.
#[cfg(unix)]
pub struct Unreadable {
    path: PathBuf,
}

#[cfg(unix)]
impl Unreadable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let path = path.into();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000))
            .expect("Failed to set permissions");
        Self { path }
    }

    /// False when the process can list the directory anyway (e.g. running as root).
    pub fn is_enforced(&self) -> bool {
        fs::read_dir(&self.path).is_err()
    }
}

#[cfg(unix)]
impl Drop for Unreadable {
    fn drop(&mut self) {
        use std::os::unix::fs::PermissionsExt;

        // Restore so the temp dir can be cleaned up.
        let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o755));
    }
}
