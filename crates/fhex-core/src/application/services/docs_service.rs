//! Docs Service - renders the GitBook documentation tree.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{layout::HubLayout, ports::Filesystem},
    domain::{
        ContractDoc, DocEntry, ExampleMetadata,
        docs::render_docs,
    },
    error::HubResult,
};

use super::scaffold_service::dir_name;

/// An example left out of the documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedExample {
    pub name: String,
    pub reason: String,
}

/// An annotation tag that was absent and replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultedTag {
    pub example: String,
    pub tag: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocsReport {
    pub documented: Vec<String>,
    pub skipped: Vec<SkippedExample>,
    pub defaulted: Vec<DefaultedTag>,
    /// Files whose content changed (or were created).
    pub written: Vec<PathBuf>,
    /// Files already up to date.
    pub unchanged: usize,
}

pub struct DocsService {
    filesystem: Box<dyn Filesystem>,
    layout: HubLayout,
}

impl DocsService {
    pub fn new(filesystem: Box<dyn Filesystem>, layout: HubLayout) -> Self {
        Self { filesystem, layout }
    }

    /// Render and write the docs tree. Pages of removed examples are left in place.
    #[instrument(skip(self))]
    pub fn generate(&self) -> HubResult<DocsReport> {
        let mut report = DocsReport::default();
        let entries = self.collect_entries(&mut report)?;

        let tree = render_docs(&entries);
        tree.validate()?;

        let docs_root = self.layout.docs();
        for (relative, content) in tree.files() {
            let path = docs_root.join(relative);
            if self.is_current(&path, content) {
                report.unchanged += 1;
                continue;
            }
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, content)?;
            debug!(path = %path.display(), "Wrote page");
            report.written.push(path);
        }

        info!(
            documented = report.documented.len(),
            skipped = report.skipped.len(),
            written = report.written.len(),
            "Documentation generated"
        );
        Ok(report)
    }

    fn collect_entries(&self, report: &mut DocsReport) -> HubResult<Vec<DocEntry>> {
        let examples = self.layout.examples();
        if !self.filesystem.is_dir(&examples) {
            warn!(path = %examples.display(), "Examples directory not found");
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for dir in self.filesystem.list_dir(&examples)? {
            if !self.filesystem.is_dir(&dir) {
                continue;
            }
            let name = dir_name(&dir);
            match self.load_entry(&dir)? {
                Ok(entry) => {
                    for &tag in &entry.defaulted {
                        warn!(example = %name, tag, "Annotation missing, default applied");
                        report.defaulted.push(DefaultedTag {
                            example: name.clone(),
                            tag,
                        });
                    }
                    if entry.category_mismatch() {
                        warn!(
                            example = %name,
                            metadata = %entry.category,
                            "@custom:category disagrees with example.json, using example.json"
                        );
                    }
                    report.documented.push(name);
                    entries.push(entry);
                }
                Err(reason) => {
                    warn!(example = %name, %reason, "Skipping example");
                    report.skipped.push(SkippedExample { name, reason });
                }
            }
        }
        Ok(entries)
    }

    /// Outer error: the tree could not be read. Inner error: skip reason.
    fn load_entry(&self, dir: &Path) -> HubResult<Result<DocEntry, String>> {
        let metadata_path = self.layout.metadata(dir);
        if !self.filesystem.exists(&metadata_path) {
            return Ok(Err("missing example.json".into()));
        }
        let raw = self.filesystem.read_to_string(&metadata_path)?;
        let metadata = match ExampleMetadata::from_json(&metadata_path.display().to_string(), &raw)
        {
            Ok(m) => m,
            Err(e) => return Ok(Err(e.to_string())),
        };

        let Some(contract_path) = self.first_with_ext(&dir.join("contracts"), "sol")? else {
            return Ok(Err("no .sol file in contracts/".into()));
        };
        let contract_source = self.filesystem.read_to_string(&contract_path)?;
        let doc = ContractDoc::parse(&contract_source);

        let mut entry =
            DocEntry::resolve(&metadata, doc, dir_name(&contract_path), contract_source);

        if let Some(test_path) = self.first_with_ext(&dir.join("test"), "ts")? {
            let test_source = self.filesystem.read_to_string(&test_path)?;
            entry = entry.with_test(dir_name(&test_path), test_source);
        }

        Ok(Ok(entry))
    }

    fn first_with_ext(&self, dir: &Path, ext: &str) -> HubResult<Option<PathBuf>> {
        if !self.filesystem.is_dir(dir) {
            return Ok(None);
        }
        Ok(self
            .filesystem
            .list_dir(dir)?
            .into_iter()
            .find(|p| p.extension().is_some_and(|e| e == ext)))
    }

    fn is_current(&self, path: &Path, content: &str) -> bool {
        self.filesystem.exists(path)
            && self
                .filesystem
                .read_to_string(path)
                .is_ok_and(|existing| existing == content)
    }
}
