use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Rewrite;

/// Desired version for one npm package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyPin {
    pub package: String,
    pub version: String,
}

impl DependencyPin {
    pub fn new(package: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            version: version.into(),
        }
    }
}

/// Pins package versions in `package.json` manifests.
///
/// Works on the text rather than re-serializing the JSON, so key order,
/// indentation and unrelated entries survive untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyPins {
    pins: Vec<DependencyPin>,
}

impl DependencyPins {
    pub fn new(pins: Vec<DependencyPin>) -> Self {
        Self { pins }
    }

    pub fn default_pins() -> Vec<DependencyPin> {
        vec![DependencyPin::new("@fhevm/solidity", "^0.8.0")]
    }

    pub fn with_defaults() -> Self {
        Self::new(Self::default_pins())
    }

    pub fn pins(&self) -> &[DependencyPin] {
        &self.pins
    }

    fn pin_one(content: &str, pin: &DependencyPin) -> String {
        let key = format!("\"{}\"", pin.package);
        let mut out = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(at) = rest.find(&key) {
            let after_key = at + key.len();
            out.push_str(&rest[..after_key]);
            rest = &rest[after_key..];

            if let Some((value_start, value_end)) = version_span(rest) {
                out.push_str(&rest[..value_start]);
                out.push_str(&pin.version);
                rest = &rest[value_end..];
            }
        }
        out.push_str(rest);
        out
    }
}

/// Byte span of the string value in `  : "<value>"`, quotes excluded.
fn version_span(s: &str) -> Option<(usize, usize)> {
    let after_ws = s.len() - s.trim_start().len();
    let colon = s[after_ws..].strip_prefix(':')?;
    let value = colon.trim_start();
    let quote = s.len() - value.len();
    value.strip_prefix('"')?;
    let start = quote + 1;
    let len = s[start..].find('"')?;
    Some((start, start + len))
}

impl Rewrite for DependencyPins {
    fn name(&self) -> &'static str {
        "update-dependencies"
    }

    fn applies_to(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|n| n == "package.json")
    }

    fn apply(&self, content: &str) -> String {
        self.pins
            .iter()
            .fold(content.to_string(), |acc, pin| Self::pin_one(&acc, pin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_version_and_keeps_layout() {
        let manifest = r#"{
  "dependencies": {
    "@fhevm/solidity": "^0.7.0",
    "ethers": "^6.0.0"
  }
}
"#;
        let out = DependencyPins::with_defaults().apply(manifest);
        assert!(out.contains(r#""@fhevm/solidity": "^0.8.0","#));
        assert!(out.contains(r#""ethers": "^6.0.0""#));
        assert_eq!(out.lines().count(), manifest.lines().count());
    }

    #[test]
    fn replaces_every_occurrence() {
        let manifest = r#"{"dependencies":{"@fhevm/solidity":"0.1"},"devDependencies":{"@fhevm/solidity" : "0.2"}}"#;
        let out = DependencyPins::with_defaults().apply(manifest);
        assert_eq!(out.matches("^0.8.0").count(), 2);
    }

    #[test]
    fn key_without_string_value_is_untouched() {
        let manifest = r#"{"@fhevm/solidity": 1}"#;
        assert_eq!(DependencyPins::with_defaults().apply(manifest), manifest);
    }

    #[test]
    fn prefix_package_names_do_not_match() {
        let manifest = r#"{"@fhevm/solidity-extra": "1.0.0"}"#;
        assert_eq!(DependencyPins::with_defaults().apply(manifest), manifest);
    }

    #[test]
    fn only_manifests() {
        let pins = DependencyPins::with_defaults();
        assert!(pins.applies_to(Path::new("examples/a/package.json")));
        assert!(!pins.applies_to(Path::new("examples/a/package-lock.json")));
    }
}
