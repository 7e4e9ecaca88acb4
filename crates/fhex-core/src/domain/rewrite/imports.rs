use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Rewrite, has_extension};
use crate::domain::error::DomainError;

/// A literal `from → to` import path replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRule {
    pub from: String,
    pub to: String,
}

impl ImportRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.from.is_empty() {
            return Err(self.invalid("source path is empty".into()));
        }
        Ok(())
    }

    /// Checks that applying `self` can never produce an occurrence of
    /// `other.from`, whether inside the replacement or across its edges.
    fn check_against(&self, other: &ImportRule) -> Result<(), DomainError> {
        let from = other.from.as_str();
        let to = self.to.as_str();
        let reason = if to.contains(from) {
            format!("replacement contains the source path '{from}'")
        } else if from.contains(to) {
            format!("source path '{from}' contains the replacement")
        } else if edge_overlap(to, from) {
            format!("replacement overlaps the source path '{from}' at its edge")
        } else {
            return Ok(());
        };
        Err(self.invalid(format!("{reason}, so the rewrite would not converge")))
    }

    fn invalid(&self, reason: String) -> DomainError {
        DomainError::InvalidRewriteRule {
            from: self.from.clone(),
            to: self.to.clone(),
            reason,
        }
    }
}

/// A non-empty proper suffix of `to` starts `from`, or a proper prefix of `to` ends it.
fn edge_overlap(to: &str, from: &str) -> bool {
    (1..to.len()).filter(|&i| to.is_char_boundary(i)).any(|i| {
        from.starts_with(&to[i..]) || from.ends_with(&to[..i])
    })
}

/// Rewrites legacy import paths in Solidity sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportMigration {
    rules: Vec<ImportRule>,
}

impl ImportMigration {
    pub fn new(rules: Vec<ImportRule>) -> Result<Self, DomainError> {
        for rule in &rules {
            rule.validate()?;
        }
        for rule in &rules {
            for other in &rules {
                rule.check_against(other)?;
            }
        }
        Ok(Self { rules })
    }

    pub fn default_rules() -> Vec<ImportRule> {
        vec![
            ImportRule::new("fhevm/lib/TFHE.sol", "@fhevm/solidity/lib/FHE.sol"),
            ImportRule::new(
                "fhevm/config/ZamaFHEVMConfig.sol",
                "@fhevm/solidity/config/ZamaConfig.sol",
            ),
        ]
    }

    pub fn with_defaults() -> Self {
        Self {
            rules: Self::default_rules(),
        }
    }

    pub fn rules(&self) -> &[ImportRule] {
        &self.rules
    }
}

impl Rewrite for ImportMigration {
    fn name(&self) -> &'static str {
        "migrate-imports"
    }

    fn applies_to(&self, path: &Path) -> bool {
        has_extension(path, "sol")
    }

    fn apply(&self, content: &str) -> String {
        self.rules
            .iter()
            .fold(content.to_string(), |acc, rule| acc.replace(&rule.from, &rule.to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_legacy_imports() {
        let src = "import \"fhevm/lib/TFHE.sol\";\n";
        let out = ImportMigration::with_defaults().apply(src);
        assert_eq!(out, "import \"@fhevm/solidity/lib/FHE.sol\";\n");
    }

    #[test]
    fn leaves_other_text_alone() {
        let src = "import \"@openzeppelin/contracts/access/Ownable.sol\";\n";
        assert_eq!(ImportMigration::with_defaults().apply(src), src);
    }

    #[test]
    fn rejects_self_containing_rule() {
        let err = ImportMigration::new(vec![ImportRule::new("lib/A.sol", "new/lib/A.sol")])
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidRewriteRule { .. }));
    }

    #[test]
    fn rejects_chained_rules() {
        let err = ImportMigration::new(vec![
            ImportRule::new("@old/B.sol", "@pkg/C.sol"),
            ImportRule::new("@old/A.sol", "@old/B.sol"),
        ])
        .unwrap_err();
        assert!(
            matches!(err, DomainError::InvalidRewriteRule { ref from, .. } if from == "@old/A.sol")
        );
    }

    #[test]
    fn rejects_rule_that_recreates_its_source() {
        // `aabb` -> `aab` -> `aa`
        assert!(ImportMigration::new(vec![ImportRule::new("ab", "a")]).is_err());
        assert!(ImportMigration::new(vec![ImportRule::new("ab", "b")]).is_err());
        // `xxy` -> `xyx` -> `yxx`
        assert!(ImportMigration::new(vec![ImportRule::new("xy", "yx")]).is_err());
        assert!(ImportMigration::new(vec![ImportRule::new("lib/A.sol", "")]).is_err());
    }

    #[test]
    fn default_rules_are_accepted_and_converge() {
        let migration = ImportMigration::new(ImportMigration::default_rules()).unwrap();
        let src = "import \"fhevm/lib/TFHE.sol\";\nimport \"fhevm/config/ZamaFHEVMConfig.sol\";\n";
        let once = migration.apply(src);
        assert_eq!(migration.apply(&once), once);
    }

    #[test]
    fn independent_rules_are_accepted() {
        let migration = ImportMigration::new(vec![
            ImportRule::new("@old/A.sol", "@pkg/A.sol"),
            ImportRule::new("@old/B.sol", "@pkg/B.sol"),
        ])
        .unwrap();
        let once = migration.apply("import \"@old/A.sol\";\nimport \"@old/B.sol\";\n");
        assert_eq!(once, "import \"@pkg/A.sol\";\nimport \"@pkg/B.sol\";\n");
        assert_eq!(migration.apply(&once), once);
    }

    #[test]
    fn rejects_empty_source() {
        assert!(ImportMigration::new(vec![ImportRule::new("", "x")]).is_err());
    }

    #[test]
    fn only_solidity_files() {
        let m = ImportMigration::with_defaults();
        assert!(m.applies_to(Path::new("contracts/A.sol")));
        assert!(!m.applies_to(Path::new("test/A.ts")));
    }
}
