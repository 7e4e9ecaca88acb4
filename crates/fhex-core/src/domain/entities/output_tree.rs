use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// A set of files ready for materialization, keyed by path relative to a root.
///
/// This is the output of the docs renderer. It contains no business logic,
/// only data. Iteration order is the path order, so writing it is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTree {
    files: BTreeMap<PathBuf, String>,
}

impl OutputTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file. A later file at the same path replaces the earlier one.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.files.insert(path.into(), content);
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(path) = self.files.keys().find(|p| p.is_absolute()) {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files.iter().map(|(p, c)| (p.as_path(), c.as_str()))
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
