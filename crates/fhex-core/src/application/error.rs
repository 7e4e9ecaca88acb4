//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The hub has no base template to copy from.
    #[error("Base template not found at {path}")]
    TemplateMissing { path: PathBuf },

    /// The base template lacks the package manifest every example needs.
    #[error("Base template at {path} has no package.json")]
    TemplateIncomplete { path: PathBuf },

    /// An example directory with this name already exists.
    #[error("Example already exists at {path}")]
    ExampleExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Batch catalogue could not be read or parsed.
    #[error("Invalid catalogue {path}: {reason}")]
    CatalogError { path: PathBuf, reason: String },

    /// Shared state access failed (lock poisoned).
    #[error("Filesystem state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    pub fn filesystem(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::FilesystemError {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateMissing { path } => vec![
                format!("Expected a Hardhat project at {}", path.display()),
                "Run fhex from the hub root, or pass --root <dir>".into(),
                "The template directory name is configurable under [hub]".into(),
            ],
            Self::TemplateIncomplete { path } => vec![
                format!("Add a package.json to {}", path.display()),
                "Every example is validated against its own package.json".into(),
            ],
            Self::ExampleExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different example name".into(),
                "Existing examples are never overwritten".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
            ],
            Self::CatalogError { .. } => vec![
                "Each entry needs name, category and description".into(),
                "Example:\n  [[example]]\n  name = \"fhe-counter\"\n  category = \"basic\"\n  description = \"Encrypted counter\"".into(),
            ],
            Self::StoreLockError => vec!["Try again; this is a bug if it persists".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateMissing { .. } | Self::TemplateIncomplete { .. } => {
                ErrorCategory::NotFound
            }
            Self::ExampleExists { .. } | Self::CatalogError { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
