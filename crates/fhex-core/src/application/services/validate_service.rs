//! Validate Service - structural checks over every example.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{layout::HubLayout, ports::Filesystem},
    domain::{ExampleCheck, ExampleReport, ValidationReport},
    error::HubResult,
};

use super::scaffold_service::dir_name;

pub struct ValidateService {
    filesystem: Box<dyn Filesystem>,
    layout: HubLayout,
}

impl ValidateService {
    pub fn new(filesystem: Box<dyn Filesystem>, layout: HubLayout) -> Self {
        Self { filesystem, layout }
    }

    /// Check every immediate subdirectory of the examples directory.
    ///
    /// Findings are never errors. Only a failure to read the tree is.
    #[instrument(skip(self))]
    pub fn validate(&self) -> HubResult<ValidationReport> {
        let examples = self.layout.examples();
        if !self.filesystem.is_dir(&examples) {
            warn!(path = %examples.display(), "Examples directory not found");
            return Ok(ValidationReport::default());
        }

        let mut report = ValidationReport::default();
        for dir in self.filesystem.list_dir(&examples)? {
            if !self.filesystem.is_dir(&dir) {
                continue;
            }
            let example = ExampleReport::new(dir_name(&dir), self.check_example(&dir)?);
            debug!(example = %example.name, passed = example.passed(), "Checked example");
            report.examples.push(example);
        }

        info!(
            passed = report.examples_passed(),
            failed = report.examples_failed(),
            "Validation finished"
        );
        Ok(report)
    }

    /// Failed checks for one example directory, in evaluation order.
    pub fn check_example(&self, dir: &Path) -> HubResult<Vec<ExampleCheck>> {
        let mut failures = Vec::new();
        for check in ExampleCheck::ALL {
            let ok = match check {
                ExampleCheck::ContractSource => self.has_file_with_ext(&dir.join("contracts"), "sol")?,
                ExampleCheck::TestSource => self.has_file_with_ext(&dir.join("test"), "ts")?,
                ExampleCheck::Readme
                | ExampleCheck::Metadata
                | ExampleCheck::PackageManifest => self.filesystem.exists(&dir.join(check.target())),
            };
            if !ok {
                failures.push(check);
            }
        }
        Ok(failures)
    }

    fn has_file_with_ext(&self, dir: &Path, ext: &str) -> HubResult<bool> {
        if !self.filesystem.is_dir(dir) {
            return Ok(false);
        }
        Ok(self
            .filesystem
            .list_dir(dir)?
            .iter()
            .any(|p| p.extension().is_some_and(|e| e == ext) && !self.filesystem.is_dir(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;

    #[test]
    fn missing_examples_dir_is_an_empty_report() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_list_dir().times(0);

        let report = ValidateService::new(Box::new(fs), HubLayout::new("/hub"))
            .validate()
            .unwrap();
        assert!(report.examples.is_empty());
    }

    #[test]
    fn empty_contracts_dir_fails_contract_check() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_list_dir().returning(|_| Ok(vec![]));
        fs.expect_exists().return_const(true);

        let service = ValidateService::new(Box::new(fs), HubLayout::new("/hub"));
        let failures = service.check_example(Path::new("/hub/examples/demo")).unwrap();
        assert_eq!(
            failures,
            vec![ExampleCheck::ContractSource, ExampleCheck::TestSource]
        );
    }
}
