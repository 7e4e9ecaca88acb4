//! Structural checks run by `validate`.
//!
//! Five fixed existence conditions per example. Findings are data, never
//! errors: a failing example is reported and the run continues.

use std::fmt;

use serde::{Serialize, Serializer};

/// One of the five existence checks, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExampleCheck {
    /// `contracts/` holds at least one `.sol` file.
    ContractSource,
    /// `test/` holds at least one `.ts` file.
    TestSource,
    Readme,
    Metadata,
    PackageManifest,
}

impl ExampleCheck {
    pub const ALL: [ExampleCheck; 5] = [
        Self::ContractSource,
        Self::TestSource,
        Self::Readme,
        Self::Metadata,
        Self::PackageManifest,
    ];

    /// Path pattern the check looks for, relative to the example directory.
    pub const fn target(&self) -> &'static str {
        match self {
            Self::ContractSource => "contracts/*.sol",
            Self::TestSource => "test/*.ts",
            Self::Readme => "README.md",
            Self::Metadata => "example.json",
            Self::PackageManifest => "package.json",
        }
    }

    pub fn missing_reason(&self) -> String {
        format!("Missing {}", self.target())
    }
}

impl fmt::Display for ExampleCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target())
    }
}

impl Serialize for ExampleCheck {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.target())
    }
}

/// Outcome for a single example directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleReport {
    pub name: String,
    pub failures: Vec<ExampleCheck>,
}

impl ExampleReport {
    pub fn new(name: impl Into<String>, failures: Vec<ExampleCheck>) -> Self {
        Self {
            name: name.into(),
            failures,
        }
    }

    pub fn total(&self) -> usize {
        ExampleCheck::ALL.len()
    }

    pub fn passed(&self) -> usize {
        self.total() - self.failures.len()
    }

    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// `"5/5 checks passed"` or `"4/5 checks passed — Missing README.md"`.
    pub fn summary(&self) -> String {
        let mut line = format!("{}/{} checks passed", self.passed(), self.total());
        if !self.is_ok() {
            let reasons: Vec<String> = self.failures.iter().map(|c| c.missing_reason()).collect();
            line.push_str(" — ");
            line.push_str(&reasons.join(", "));
        }
        line
    }
}

/// Aggregate over every example in the hub.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub examples: Vec<ExampleReport>,
}

impl ValidationReport {
    pub fn examples_passed(&self) -> usize {
        self.examples.iter().filter(|e| e.is_ok()).count()
    }

    pub fn examples_failed(&self) -> usize {
        self.examples.len() - self.examples_passed()
    }

    pub fn checks_passed(&self) -> usize {
        self.examples.iter().map(ExampleReport::passed).sum()
    }

    pub fn checks_total(&self) -> usize {
        self.examples.iter().map(ExampleReport::total).sum()
    }

    pub fn get(&self, name: &str) -> Option<&ExampleReport> {
        self.examples.iter().find(|e| e.name == name)
    }
}
