// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::Category;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid example name '{name}': {reason}")]
    InvalidExampleName { name: String, reason: String },

    #[error("Unknown category '{value}'")]
    UnknownCategory { value: String },

    #[error("Unknown difficulty '{value}'")]
    UnknownDifficulty { value: String },

    #[error("Invalid rewrite rule '{from}' -> '{to}': {reason}")]
    InvalidRewriteRule {
        from: String,
        to: String,
        reason: String,
    },

    // ========================================================================
    // Data Errors
    // ========================================================================
    #[error("Malformed metadata in {path}: {reason}")]
    MalformedMetadata { path: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidExampleName { .. } => vec![
                "Use lowercase letters, digits and single hyphens".into(),
                "Start with a letter or digit".into(),
                "Examples: fhe-counter, encrypt-single-value, acl-basics".into(),
            ],
            Self::UnknownCategory { value } => {
                let mut out = vec![format!("'{}' is not a known category", value)];
                out.push("Supported categories:".into());
                for category in Category::ALL {
                    out.push(format!("  • {:<15} - {}", category.as_str(), category.description()));
                }
                out
            }
            Self::UnknownDifficulty { .. } => vec![
                "Supported difficulties: beginner, intermediate, advanced".into(),
            ],
            Self::InvalidRewriteRule { .. } => vec![
                "A replacement must not contain the text it replaces".into(),
                "Check the [maintenance] section of your fhex.toml".into(),
            ],
            Self::MalformedMetadata { path, .. } => vec![
                format!("Fix or regenerate {}", path),
                "Expected fields: name, category, description, createdAt".into(),
            ],
            Self::AbsolutePathNotAllowed { .. } => {
                vec!["Generated paths must be relative to the hub".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidExampleName { .. }
            | Self::UnknownCategory { .. }
            | Self::UnknownDifficulty { .. }
            | Self::InvalidRewriteRule { .. } => ErrorCategory::Validation,
            Self::MalformedMetadata { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
