//! Maintenance rewrites.
//!
//! Each rewrite is a pure, idempotent text transformation. The maintenance
//! service decides which files to visit and whether to write; a rewrite only
//! says which files it cares about and what their new content is.

mod allow;
mod imports;
mod pins;

pub use allow::AllowRewrite;
pub use imports::{ImportMigration, ImportRule};
pub use pins::{DependencyPin, DependencyPins};

use std::path::Path;

/// A content transformation applied during hub maintenance.
pub trait Rewrite {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    fn applies_to(&self, path: &Path) -> bool;

    /// Return the rewritten content. Applying twice must equal applying once.
    fn apply(&self, content: &str) -> String;
}

pub(crate) fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_idempotent(rewrite: &dyn Rewrite, input: &str) {
        let once = rewrite.apply(input);
        let twice = rewrite.apply(&once);
        assert_eq!(once, twice, "{} is not idempotent", rewrite.name());
    }

    #[test]
    fn default_rewrites_are_idempotent() {
        let sol = r#"import "fhevm/lib/TFHE.sol";
import {SepoliaZamaConfig} from "fhevm/config/ZamaFHEVMConfig.sol";
contract C {
    function f() external {
        FHE.allowThis(FHE.add(a, FHE.asEuint32(1)));
        FHE.allowThis(b);
    }
}
"#;
        assert_idempotent(&ImportMigration::with_defaults(), sol);
        assert_idempotent(&AllowRewrite, sol);

        let manifest = r#"{ "dependencies": { "@fhevm/solidity": "^0.7.0" } }"#;
        assert_idempotent(&DependencyPins::with_defaults(), manifest);
    }
}
