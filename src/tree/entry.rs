//! Directory listing and entry ordering

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Directories sort ahead of files.
    fn rank(self) -> u8 {
        match self {
            EntryKind::Directory => 0,
            EntryKind::File => 1,
        }
    }
}

/// One child of a directory, read fresh from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
        }
    }

    /// Symlinks are followed, so a link to a directory counts as a directory.
    /// Everything that is not a directory (sockets, broken links, ...) is a file.
    fn from_std(entry: fs::DirEntry) -> Self {
        let path = entry.path();
        let kind = if path.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        Self {
            name: entry.file_name().to_string_lossy().to_string(),
            path,
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// List and sort the immediate children of `dir`.
///
/// Any error, whether opening the directory or reading one of its entries,
/// fails the whole listing.
pub fn read_entries(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(DirEntry::from_std))
        .collect::<io::Result<Vec<_>>>()?;
    sort_entries(&mut entries);
    Ok(entries)
}

/// Directories first, then case-insensitive by name. Names equal up to case
/// fall back to a byte comparison so the order is total.
pub fn sort_entries(entries: &mut [DirEntry]) {
    entries.sort_by_cached_key(|e| (e.kind.rank(), e.name.to_lowercase(), e.name.clone()));
}
