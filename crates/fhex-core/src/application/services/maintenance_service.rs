//! Maintenance Service - applies rewrites across the hub.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        layout::{HubLayout, IGNORED_DIR},
        ports::Filesystem,
    },
    domain::Rewrite,
    error::HubResult,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaintenanceReport {
    pub rewrite: String,
    /// Files the rewrite applied to.
    pub scanned: usize,
    /// Files whose content changed (written unless `dry_run`).
    pub changed: Vec<PathBuf>,
    pub dry_run: bool,
}

pub struct MaintenanceService {
    filesystem: Box<dyn Filesystem>,
    layout: HubLayout,
}

impl MaintenanceService {
    pub fn new(filesystem: Box<dyn Filesystem>, layout: HubLayout) -> Self {
        Self { filesystem, layout }
    }

    /// Apply `rewrite` to every matching file under the examples and template
    /// directories. Unchanged files are never written.
    #[instrument(skip_all, fields(rewrite = rewrite.name(), dry_run = dry_run))]
    pub fn run(&self, rewrite: &dyn Rewrite, dry_run: bool) -> HubResult<MaintenanceReport> {
        let mut report = MaintenanceReport {
            rewrite: rewrite.name().to_string(),
            dry_run,
            ..MaintenanceReport::default()
        };

        for root in [self.layout.examples(), self.layout.template()] {
            if !self.filesystem.is_dir(&root) {
                debug!(path = %root.display(), "Skipping missing directory");
                continue;
            }
            for path in self.filesystem.walk_files(&root, IGNORED_DIR)? {
                if !rewrite.applies_to(&path) {
                    continue;
                }
                report.scanned += 1;

                let original = self.filesystem.read_to_string(&path)?;
                let updated = rewrite.apply(&original);
                if updated == original {
                    continue;
                }

                if !dry_run {
                    self.filesystem.write_file(&path, &updated)?;
                }
                info!(path = %path.display(), "Rewrote file");
                report.changed.push(path);
            }
        }

        info!(
            scanned = report.scanned,
            changed = report.changed.len(),
            "Maintenance finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::AllowRewrite;

    #[test]
    fn dry_run_reports_without_writing() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .returning(|p| p.ends_with("examples"));
        fs.expect_walk_files().returning(|root, _| {
            Ok(vec![
                root.join("demo/contracts/Demo.sol"),
                root.join("demo/README.md"),
            ])
        });
        fs.expect_read_to_string()
            .returning(|_| Ok("FHE.allowThis(x);".into()));
        fs.expect_write_file().times(0);

        let report = MaintenanceService::new(Box::new(fs), HubLayout::new("/hub"))
            .run(&AllowRewrite, true)
            .unwrap();

        assert_eq!(report.scanned, 1);
        assert_eq!(
            report.changed,
            vec![PathBuf::from("/hub/examples/demo/contracts/Demo.sol")]
        );
        assert!(report.dry_run);
    }

    #[test]
    fn unchanged_files_are_not_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_walk_files()
            .returning(|root, _| Ok(vec![root.join("contracts/A.sol")]));
        fs.expect_read_to_string()
            .returning(|_| Ok("FHE.allow(x, address(this));".into()));
        fs.expect_write_file().times(0);

        let report = MaintenanceService::new(Box::new(fs), HubLayout::new("/hub"))
            .run(&AllowRewrite, false)
            .unwrap();
        assert_eq!(report.scanned, 2);
        assert!(report.changed.is_empty());
    }
}
