//! Domain value objects: Category, Difficulty.
//!
//! # Design
//!
//! These are pure value types: `Copy`, compared by value.
//! This file's only job is to define the types, their string
//! representations, their display metadata, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `title` and `description` arms and the `FromStr` arm
//! 3. Add it to `ALL` at the position it should appear in the docs

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Category ──────────────────────────────────────────────────────────────────

/// Closed set of example categories.
///
/// Used purely for grouping: the docs generator emits categories in the order
/// of [`Category::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Basic,
    Encryption,
    Decryption,
    AccessControl,
    AntiPatterns,
    Advanced,
}

impl Category {
    /// Every category, in documentation display order.
    pub const ALL: [Category; 6] = [
        Self::Basic,
        Self::Encryption,
        Self::Decryption,
        Self::AccessControl,
        Self::AntiPatterns,
        Self::Advanced,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Encryption => "encryption",
            Self::Decryption => "decryption",
            Self::AccessControl => "access-control",
            Self::AntiPatterns => "anti-patterns",
            Self::Advanced => "advanced",
        }
    }

    /// Heading used in generated documentation.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Encryption => "Encryption",
            Self::Decryption => "Decryption",
            Self::AccessControl => "Access Control",
            Self::AntiPatterns => "Anti-Patterns",
            Self::Advanced => "Advanced",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Basic => "Encrypted state and arithmetic on encrypted integers",
            Self::Encryption => "Accepting encrypted inputs from users",
            Self::Decryption => "User and public decryption through the gateway",
            Self::AccessControl => "Granting and checking permissions on ciphertexts",
            Self::AntiPatterns => "Common mistakes and how to avoid them",
            Self::Advanced => "Complete applications combining several patterns",
        }
    }

    /// Position in the documentation display order.
    pub fn display_order(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(Self::ALL.len())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownCategory {
                value: s.to_string(),
            })
    }
}

// ── Difficulty ────────────────────────────────────────────────────────────────

/// Difficulty label carried by `@custom:difficulty`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Short badge used next to links in the index pages.
    pub const fn badge(&self) -> &'static str {
        match self {
            Self::Beginner => "🟢 Beginner",
            Self::Intermediate => "🟡 Intermediate",
            Self::Advanced => "🔴 Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" | "basic" | "easy" => Ok(Self::Beginner),
            "intermediate" | "medium" => Ok(Self::Intermediate),
            "advanced" | "hard" => Ok(Self::Advanced),
            _ => Err(DomainError::UnknownDifficulty {
                value: s.to_string(),
            }),
        }
    }
}
