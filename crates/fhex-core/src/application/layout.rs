//! Hub directory layout.

use std::path::{Path, PathBuf};

use crate::domain::{ExampleName, METADATA_FILE};

pub const DEFAULT_TEMPLATE_DIR: &str = "base-template";
pub const DEFAULT_EXAMPLES_DIR: &str = "examples";
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Directories skipped by every tree walk.
pub const IGNORED_DIR: &str = "node_modules";

/// Resolved locations of the hub's three top-level directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubLayout {
    root: PathBuf,
    template_dir: String,
    examples_dir: String,
    docs_dir: String,
}

impl HubLayout {
    /// Layout with the default directory names.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            template_dir: DEFAULT_TEMPLATE_DIR.into(),
            examples_dir: DEFAULT_EXAMPLES_DIR.into(),
            docs_dir: DEFAULT_DOCS_DIR.into(),
        }
    }

    pub fn with_template_dir(mut self, dir: impl Into<String>) -> Self {
        self.template_dir = dir.into();
        self
    }

    pub fn with_examples_dir(mut self, dir: impl Into<String>) -> Self {
        self.examples_dir = dir.into();
        self
    }

    pub fn with_docs_dir(mut self, dir: impl Into<String>) -> Self {
        self.docs_dir = dir.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn template(&self) -> PathBuf {
        self.root.join(&self.template_dir)
    }

    pub fn examples(&self) -> PathBuf {
        self.root.join(&self.examples_dir)
    }

    pub fn docs(&self) -> PathBuf {
        self.root.join(&self.docs_dir)
    }

    pub fn example(&self, name: &ExampleName) -> PathBuf {
        self.examples().join(name.as_str())
    }

    pub fn metadata(&self, example_dir: &Path) -> PathBuf {
        example_dir.join(METADATA_FILE)
    }
}
