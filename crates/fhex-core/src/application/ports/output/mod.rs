//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `fhex-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{Category, ExampleSources};
use crate::error::HubResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `fhex_adapters::filesystem::LocalFilesystem` (production)
/// - `fhex_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Listing methods return full paths sorted by path, so every caller sees
/// the same order on every platform.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> HubResult<()>;

    /// Write content to a file, replacing it if present. Parents must exist.
    fn write_file(&self, path: &Path, content: &str) -> HubResult<()>;

    fn read_to_string(&self, path: &Path) -> HubResult<String>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Immediate children of a directory, files and directories alike.
    fn list_dir(&self, path: &Path) -> HubResult<Vec<PathBuf>>;

    /// Every file below `path`, skipping directories named `exclude`.
    fn walk_files(&self, path: &Path, exclude: &str) -> HubResult<Vec<PathBuf>>;

    /// Recursively copy a directory tree, skipping directories named
    /// `exclude`. `to` must not exist.
    fn copy_dir_all(&self, from: &Path, to: &Path, exclude: &str) -> HubResult<()>;

    fn remove_file(&self, path: &Path) -> HubResult<()>;
}

/// Port for starter sources used when `create` is given no contract or test.
///
/// Sources carry `{{VARIABLE}}` placeholders resolved by
/// [`RenderContext`](crate::domain::RenderContext).
///
/// Implemented by:
/// - `fhex_adapters::starters::BuiltinStarters`
#[cfg_attr(test, mockall::automock)]
pub trait StarterStore: Send + Sync {
    fn starter(&self, category: Category) -> HubResult<ExampleSources>;
}
