//! The example aggregate: name, metadata sidecar and source texts.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::render_context::to_pascal_case, error::DomainError, value_objects::Category,
};

/// Name of the metadata sidecar written next to every example.
pub const METADATA_FILE: &str = "example.json";

/// A validated example slug.
///
/// Invariant: non-empty, `[a-z0-9-]`, starts with a letter or digit, no
/// trailing `-`, no `--`. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExampleName(String);

impl ExampleName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let name = raw.into();
        let invalid = |reason: &str| DomainError::InvalidExampleName {
            name: name.clone(),
            reason: reason.into(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(invalid(&format!("character '{bad}' is not allowed")));
        }
        if name.starts_with('-') {
            return Err(invalid("name must start with a letter or digit"));
        }
        if name.ends_with('-') {
            return Err(invalid("name cannot end with '-'"));
        }
        if name.contains("--") {
            return Err(invalid("name cannot contain '--'"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Solidity contract identifier derived from the slug (`fhe-counter` → `FheCounter`).
    pub fn contract_name(&self) -> String {
        let pascal = to_pascal_case(&self.0);
        // Solidity identifiers cannot start with a digit.
        if pascal.starts_with(|c: char| c.is_ascii_digit()) {
            format!("Example{pascal}")
        } else {
            pascal
        }
    }

    /// `contracts/<Contract>.sol`
    pub fn contract_file(&self) -> String {
        format!("{}.sol", self.contract_name())
    }

    /// `test/<Contract>.ts`
    pub fn test_file(&self) -> String {
        format!("{}.ts", self.contract_name())
    }
}

impl fmt::Display for ExampleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExampleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Contents of `example.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleMetadata {
    pub name: String,
    pub category: Category,
    pub description: String,
    #[serde(rename = "createdAt", with = "rfc3339_seconds")]
    pub created_at: DateTime<Utc>,
}

impl ExampleMetadata {
    pub fn new(
        name: &ExampleName,
        category: Category,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.as_str().to_string(),
            category,
            description: description.into(),
            created_at,
        }
    }

    /// Serialize as pretty JSON with a trailing newline.
    pub fn to_json(&self) -> String {
        // Serializing a plain struct of strings cannot fail.
        let mut out = serde_json::to_string_pretty(self).unwrap_or_default();
        out.push('\n');
        out
    }

    /// Parse a metadata file. `origin` is only used in the error message.
    pub fn from_json(origin: &str, raw: &str) -> Result<Self, DomainError> {
        serde_json::from_str(raw).map_err(|e| DomainError::MalformedMetadata {
            path: origin.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Literal contract and test text spliced into a new example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleSources {
    pub contract: String,
    pub test: String,
}

impl ExampleSources {
    pub fn new(contract: impl Into<String>, test: impl Into<String>) -> Self {
        Self {
            contract: contract.into(),
            test: test.into(),
        }
    }
}

mod rfc3339_seconds {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Timestamp formatting shared with reports.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}
