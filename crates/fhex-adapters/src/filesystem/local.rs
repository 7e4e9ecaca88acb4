//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use fhex_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{HubError, HubResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> HubResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> HubResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> HubResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> HubResult<Vec<PathBuf>> {
        let read_dir = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        let mut entries = read_dir
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| map_io_error(path, e, "read directory entry"))?;
        entries.sort();
        Ok(entries)
    }

    fn walk_files(&self, path: &Path, exclude: &str) -> HubResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in walk(path, exclude) {
            let entry = entry.map_err(|e| map_walk_error(path, e))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn copy_dir_all(&self, from: &Path, to: &Path, exclude: &str) -> HubResult<()> {
        for entry in walk(from, exclude) {
            let entry = entry.map_err(|e| map_walk_error(from, e))?;
            let relative = entry.path().strip_prefix(from).map_err(|e| HubError::Internal {
                message: format!("walked outside {}: {e}", from.display()),
            })?;
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                self.create_dir_all(&target)?;
            } else if entry.file_type().is_file() {
                std::fs::copy(entry.path(), &target)
                    .map_err(|e| map_io_error(&target, e, "copy file"))?;
            }
        }
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> HubResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }
}

/// Sorted walk that never descends into directories named `exclude`.
fn walk(root: &Path, exclude: &str) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    let exclude = exclude.to_string();
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| !(e.file_type().is_dir() && e.file_name() == exclude.as_str()))
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> HubError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

fn map_walk_error(root: &Path, e: walkdir::Error) -> HubError {
    let path = e.path().unwrap_or(root).to_path_buf();
    ApplicationError::FilesystemError {
        path,
        reason: format!("Failed to walk directory: {}", e),
    }
    .into()
}
