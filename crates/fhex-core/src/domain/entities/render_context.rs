//! Placeholder substitution for starter sources.
//!
//! Starter contracts and tests carry `{{VARIABLE}}` placeholders which are
//! replaced at scaffold time:
//!
//! ```text
//! contract {{CONTRACT_NAME}} is SepoliaConfig { ... }
//!            └──────────────┘
//!            "FheCounter" for the slug "fhe-counter"
//! ```

use std::collections::BTreeMap;

use crate::domain::{
    entities::example::ExampleName,
    value_objects::{Category, Difficulty},
};

/// Variable set used to render a starter source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    /// Build the standard variables for one example.
    ///
    /// | Variable          | Example value          |
    /// |-------------------|------------------------|
    /// | `EXAMPLE_NAME`    | `fhe-counter`          |
    /// | `CONTRACT_NAME`   | `FheCounter`           |
    /// | `DESCRIPTION`     | free text              |
    /// | `CATEGORY`        | `access-control`       |
    /// | `CATEGORY_TITLE`  | `Access Control`       |
    /// | `DIFFICULTY`      | `beginner`             |
    pub fn new(
        name: &ExampleName,
        category: Category,
        difficulty: Difficulty,
        description: &str,
    ) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert("EXAMPLE_NAME".to_string(), name.as_str().to_string());
        variables.insert("CONTRACT_NAME".to_string(), name.contract_name());
        variables.insert("DESCRIPTION".to_string(), description.to_string());
        variables.insert("CATEGORY".to_string(), category.as_str().to_string());
        variables.insert("CATEGORY_TITLE".to_string(), category.title().to_string());
        variables.insert("DIFFICULTY".to_string(), difficulty.as_str().to_string());

        Self { variables }
    }

    /// Add a custom variable, consuming self and returning a new context.
    ///
    /// User-defined variables can override the standard ones.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
    /// - `{{A}}{{A}}` → both replaced
    /// - substituted values are never re-scanned for placeholders
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            match after_open.find("}}") {
                Some(end) => {
                    let key = &after_open[..end];
                    match self.variables.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after_open[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

/// Convert a string to PascalCase.
///
/// | Input | Output |
/// |-------|--------|
/// | "fhe-counter" | "FheCounter" |
/// | "HTTPRequest" | "HttpRequest" |
pub(crate) fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split a string into lowercase words.
///
/// 1. `_`, `-`, whitespace always split
/// 2. camelCase transition `aB` splits between `a` and `B`
/// 3. acronym boundary `HTTPRequest` splits between `P` and `R`
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
