//! Scaffold Service - creates new examples from the base template.
//!
//! This service coordinates the `create` workflow:
//! 1. Validate name and category
//! 2. Check the template is present and the target is free
//! 3. Copy the template and splice in contract, test, metadata and README
//!
//! It also lists existing examples and drives batch creation.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        layout::{HubLayout, IGNORED_DIR},
        ports::{Filesystem, StarterStore},
    },
    domain::{
        Category, Difficulty, ExampleMetadata, ExampleName, RenderContext, docs::example_readme,
    },
    error::HubResult,
};

const CONTRACTS_DIR: &str = "contracts";
const TEST_DIR: &str = "test";
const PACKAGE_MANIFEST: &str = "package.json";

/// Input for one `create` call.
///
/// Name and category arrive as raw strings and are validated by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldRequest {
    pub name: String,
    pub category: String,
    pub description: String,
    /// Literal contract text. `None` renders the category starter.
    pub contract: Option<String>,
    /// Literal test text. `None` renders the category starter.
    pub test: Option<String>,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
}

impl ScaffoldRequest {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: description.into(),
            contract: None,
            test: None,
            difficulty: Difficulty::default(),
            created_at: Utc::now(),
        }
    }

    pub fn with_contract(mut self, contract: impl Into<String>) -> Self {
        self.contract = Some(contract.into());
        self
    }

    pub fn with_test(mut self, test: impl Into<String>) -> Self {
        self.test = Some(test.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Result of a successful `create`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedExample {
    pub metadata: ExampleMetadata,
    pub path: PathBuf,
    /// Files written after the template copy, in write order.
    pub files: Vec<PathBuf>,
}

/// One row of `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleSummary {
    pub name: String,
    /// `None` when `example.json` is missing or malformed.
    pub category: Option<Category>,
    pub description: String,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ExampleSummary {
    pub fn category_label(&self) -> &str {
        self.category.map_or("unknown", |c| c.as_str())
    }
}

/// Outcome of `batch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}

/// Per-entry progress notification for `batch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchProgress {
    Created,
    Skipped,
}

/// Example scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    starters: Box<dyn StarterStore>,
    layout: HubLayout,
}

impl ScaffoldService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        starters: Box<dyn StarterStore>,
        layout: HubLayout,
    ) -> Self {
        Self {
            filesystem,
            starters,
            layout,
        }
    }

    /// Create one example.
    ///
    /// Not atomic: a failure part-way leaves whatever was already written.
    #[instrument(skip_all, fields(name = %request.name, category = %request.category))]
    pub fn create(&self, request: ScaffoldRequest) -> HubResult<CreatedExample> {
        let name = ExampleName::parse(&request.name)?;
        let category: Category = request.category.parse()?;

        let template = self.layout.template();
        if !self.filesystem.is_dir(&template) {
            return Err(ApplicationError::TemplateMissing { path: template }.into());
        }

        let dest = self.layout.example(&name);
        if self.filesystem.exists(&dest) {
            return Err(ApplicationError::ExampleExists { path: dest }.into());
        }

        if !self.filesystem.exists(&template.join(PACKAGE_MANIFEST)) {
            return Err(ApplicationError::TemplateIncomplete { path: template }.into());
        }

        info!(dest = %dest.display(), "Copying base template");
        self.filesystem
            .copy_dir_all(&template, &dest, IGNORED_DIR)?;

        let contracts = dest.join(CONTRACTS_DIR);
        let tests = dest.join(TEST_DIR);
        self.clear_placeholders(&contracts)?;
        self.clear_placeholders(&tests)?;

        let (contract, test) = self.resolve_sources(&request, &name, category)?;
        let metadata =
            ExampleMetadata::new(&name, category, &request.description, request.created_at);

        let files = vec![
            (contracts.join(name.contract_file()), contract),
            (tests.join(name.test_file()), test),
            (self.layout.metadata(&dest), metadata.to_json()),
            (
                dest.join("README.md"),
                example_readme(&name, &metadata, request.difficulty),
            ),
        ];

        let mut written = Vec::with_capacity(files.len());
        for (path, content) in files {
            self.filesystem.write_file(&path, &content)?;
            debug!(path = %path.display(), "Wrote file");
            written.push(path);
        }

        info!("Example created");
        Ok(CreatedExample {
            metadata,
            path: dest,
            files: written,
        })
    }

    /// Create every request in order.
    ///
    /// Existing examples are skipped; any other error stops the batch.
    #[instrument(skip_all, fields(entries = requests.len()))]
    pub fn batch(
        &self,
        requests: Vec<ScaffoldRequest>,
        mut on_progress: impl FnMut(&str, BatchProgress),
    ) -> HubResult<BatchReport> {
        let mut report = BatchReport::default();

        for request in requests {
            let name = request.name.clone();
            match self.create(request) {
                Ok(_) => {
                    on_progress(&name, BatchProgress::Created);
                    report.created.push(name);
                }
                Err(e) if e.is_example_exists() => {
                    warn!(example = %name, "Example already exists, skipping");
                    on_progress(&name, BatchProgress::Skipped);
                    report.skipped.push(name);
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            "Batch finished"
        );
        Ok(report)
    }

    /// Summaries of every example, ordered by category then name.
    #[instrument(skip(self))]
    pub fn list(&self, category: Option<Category>) -> HubResult<Vec<ExampleSummary>> {
        let examples = self.layout.examples();
        if !self.filesystem.is_dir(&examples) {
            warn!(path = %examples.display(), "Examples directory not found");
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        for dir in self.filesystem.list_dir(&examples)? {
            if !self.filesystem.is_dir(&dir) {
                continue;
            }
            summaries.push(self.summarize(&dir));
        }

        if let Some(wanted) = category {
            summaries.retain(|s| s.category == Some(wanted));
        }

        summaries.sort_by(|a, b| {
            let order = |s: &ExampleSummary| {
                s.category
                    .map_or(Category::ALL.len(), |c| c.display_order())
            };
            order(a).cmp(&order(b)).then_with(|| a.name.cmp(&b.name))
        });

        Ok(summaries)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn summarize(&self, dir: &Path) -> ExampleSummary {
        let name = dir_name(dir);
        let metadata_path = self.layout.metadata(dir);

        let parsed = self
            .filesystem
            .read_to_string(&metadata_path)
            .and_then(|raw| {
                Ok(ExampleMetadata::from_json(
                    &metadata_path.display().to_string(),
                    &raw,
                )?)
            });

        match parsed {
            Ok(meta) => ExampleSummary {
                name,
                category: Some(meta.category),
                description: meta.description,
                created_at: Some(crate::domain::entities::example::format_timestamp(
                    &meta.created_at,
                )),
            },
            Err(e) => {
                warn!(example = %name, error = %e, "Unreadable example metadata");
                ExampleSummary {
                    name,
                    category: None,
                    description: String::new(),
                    created_at: None,
                }
            }
        }
    }

    /// Delete every file directly inside `dir`, creating `dir` if absent.
    fn clear_placeholders(&self, dir: &Path) -> HubResult<()> {
        if !self.filesystem.is_dir(dir) {
            return self.filesystem.create_dir_all(dir);
        }
        for entry in self.filesystem.list_dir(dir)? {
            if !self.filesystem.is_dir(&entry) {
                debug!(path = %entry.display(), "Removing placeholder");
                self.filesystem.remove_file(&entry)?;
            }
        }
        Ok(())
    }

    fn resolve_sources(
        &self,
        request: &ScaffoldRequest,
        name: &ExampleName,
        category: Category,
    ) -> HubResult<(String, String)> {
        if let (Some(contract), Some(test)) = (&request.contract, &request.test) {
            return Ok((contract.clone(), test.clone()));
        }

        let starter = self.starters.starter(category)?;
        let context =
            RenderContext::new(name, category, request.difficulty, &request.description);

        let contract = request
            .contract
            .clone()
            .unwrap_or_else(|| context.render(&starter.contract));
        let test = request
            .test
            .clone()
            .unwrap_or_else(|| context.render(&starter.test));
        Ok((contract, test))
    }
}

pub(crate) fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockStarterStore};
    use crate::domain::DomainError;
    use crate::error::HubError;

    fn service(fs: MockFilesystem) -> ScaffoldService {
        ScaffoldService::new(
            Box::new(fs),
            Box::new(MockStarterStore::new()),
            HubLayout::new("/hub"),
        )
    }

    #[test]
    fn invalid_name_touches_nothing() {
        let fs = MockFilesystem::new();
        let err = service(fs)
            .create(ScaffoldRequest::new("Bad Name", "basic", "x"))
            .unwrap_err();
        assert!(matches!(
            err,
            HubError::Domain(DomainError::InvalidExampleName { .. })
        ));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = service(MockFilesystem::new())
            .create(ScaffoldRequest::new("demo", "misc", "x"))
            .unwrap_err();
        assert!(matches!(
            err,
            HubError::Domain(DomainError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn missing_template_fails_before_copy() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .withf(|p| p.ends_with("base-template"))
            .return_const(false);
        fs.expect_copy_dir_all().times(0);

        let err = service(fs)
            .create(ScaffoldRequest::new("demo", "basic", "x"))
            .unwrap_err();
        assert!(matches!(
            err,
            HubError::Application(ApplicationError::TemplateMissing { .. })
        ));
    }

    #[test]
    fn template_without_manifest_fails_before_copy() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_exists().returning(|_| false);
        fs.expect_copy_dir_all().times(0);
        fs.expect_write_file().times(0);

        let err = service(fs)
            .create(ScaffoldRequest::new("demo", "basic", "x"))
            .unwrap_err();
        assert!(matches!(
            err,
            HubError::Application(ApplicationError::TemplateIncomplete { .. })
        ));
    }

    #[test]
    fn existing_example_is_never_touched() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_exists()
            .withf(|p| p.ends_with("examples/demo"))
            .return_const(true);
        fs.expect_copy_dir_all().times(0);
        fs.expect_write_file().times(0);
        fs.expect_remove_file().times(0);

        let err = service(fs)
            .create(ScaffoldRequest::new("demo", "basic", "x"))
            .unwrap_err();
        assert!(err.is_example_exists());
    }

    #[test]
    fn starter_is_used_only_when_a_source_is_missing() {
        let mut starters = MockStarterStore::new();
        starters.expect_starter().times(0);
        let service = ScaffoldService::new(
            Box::new(MockFilesystem::new()),
            Box::new(starters),
            HubLayout::new("/hub"),
        );
        let request = ScaffoldRequest::new("demo", "basic", "x")
            .with_contract("contract Demo {}")
            .with_test("it()");
        let name = ExampleName::parse("demo").unwrap();

        let (contract, test) = service
            .resolve_sources(&request, &name, Category::Basic)
            .unwrap();
        assert_eq!(contract, "contract Demo {}");
        assert_eq!(test, "it()");
    }

    #[test]
    fn starter_placeholders_are_rendered() {
        let mut starters = MockStarterStore::new();
        starters.expect_starter().returning(|_| {
            Ok(crate::domain::ExampleSources::new(
                "contract {{CONTRACT_NAME}} {}",
                "// {{EXAMPLE_NAME}} in {{CATEGORY_TITLE}}",
            ))
        });
        let service = ScaffoldService::new(
            Box::new(MockFilesystem::new()),
            Box::new(starters),
            HubLayout::new("/hub"),
        );
        let request = ScaffoldRequest::new("acl-demo", "access-control", "x")
            .with_test("literal {{KEPT}}");
        let name = ExampleName::parse("acl-demo").unwrap();

        let (contract, test) = service
            .resolve_sources(&request, &name, Category::AccessControl)
            .unwrap();
        assert_eq!(contract, "contract AclDemo {}");
        assert_eq!(test, "literal {{KEPT}}");
    }

    #[test]
    fn list_without_examples_dir_is_empty() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        assert!(service(fs).list(None).unwrap().is_empty());
    }

    #[test]
    fn unknown_label_for_missing_category() {
        let summary = ExampleSummary {
            name: "x".into(),
            category: None,
            description: String::new(),
            created_at: None,
        };
        assert_eq!(summary.category_label(), "unknown");
    }
}
