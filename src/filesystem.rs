//! Filesystem existence checks for path arguments.

use std::fs;

use camino::Utf8Path;

/// Filesystem queries needed by the path binders.
pub trait FileSystem {
    /// Returns true if `path` exists and is a file.
    fn file_exists(&self, path: &Utf8Path) -> bool;

    /// Returns true if `path` exists and is a directory.
    fn directory_exists(&self, path: &Utf8Path) -> bool;
}

/// [`FileSystem`] backed by `std::fs`.
///
/// Symlinks are followed. Metadata errors other than "not found" are logged
/// and reported as a missing path.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl RealFileSystem {
    fn metadata(path: &Utf8Path) -> Option<fs::Metadata> {
        match fs::metadata(path) {
            Ok(metadata) => Some(metadata),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::debug!(
                    path = %path,
                    error_kind = ?e.kind(),
                    "failed to read metadata: {}",
                    e,
                );
                None
            }
        }
    }
}

impl FileSystem for RealFileSystem {
    fn file_exists(&self, path: &Utf8Path) -> bool {
        Self::metadata(path).is_some_and(|m| m.is_file())
    }

    fn directory_exists(&self, path: &Utf8Path) -> bool {
        Self::metadata(path).is_some_and(|m| m.is_dir())
    }
}
