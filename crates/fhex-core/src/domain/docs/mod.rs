//! GitBook documentation rendering.
//!
//! Pure functions from resolved [`DocEntry`] values to an [`OutputTree`]
//! rooted at the docs directory:
//!
//! ```text
//! README.md                         hub index
//! SUMMARY.md                        GitBook navigation
//! examples/<category>/README.md     one per non-empty category
//! examples/<category>/<name>.md     one per example
//! ```
//!
//! Nothing rendered here depends on time or environment, so the same entries
//! always produce byte-identical output.

mod index;
mod page;
mod readme;
mod summary;

pub use index::{HUB_TITLE, category_readme, root_readme};
pub use page::example_page;
pub use readme::example_readme;
pub use summary::summary;

use std::path::PathBuf;

use crate::domain::{
    entities::{
        annotation::{ContractDoc, TAG_DIFFICULTY, TAG_NOTICE, TAG_TITLE},
        example::ExampleMetadata,
        output_tree::OutputTree,
    },
    value_objects::{Category, Difficulty},
};

/// One example, with annotation defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub title: String,
    pub notice: String,
    pub difficulty: Difficulty,
    pub dev: Option<String>,
    pub dev_bullets: Vec<String>,
    pub contract_file: String,
    pub contract_source: String,
    pub test: Option<(String, String)>,
    /// Category claimed by `@custom:category`, when present.
    pub tagged_category: Option<Category>,
    /// Tags that were absent and replaced by a default.
    pub defaulted: Vec<&'static str>,
}

impl DocEntry {
    /// Apply the documented defaults and record every tag that needed one.
    ///
    /// | Tag                   | Default                |
    /// |-----------------------|------------------------|
    /// | `@title`              | example name           |
    /// | `@notice`             | metadata description   |
    /// | `@custom:difficulty`  | `beginner`             |
    pub fn resolve(
        metadata: &ExampleMetadata,
        doc: ContractDoc,
        contract_file: impl Into<String>,
        contract_source: impl Into<String>,
    ) -> Self {
        let mut defaulted = Vec::new();

        let title = doc.title.unwrap_or_else(|| {
            defaulted.push(TAG_TITLE);
            metadata.name.clone()
        });
        let notice = doc.notice.unwrap_or_else(|| {
            defaulted.push(TAG_NOTICE);
            metadata.description.clone()
        });
        let difficulty = doc.difficulty.unwrap_or_else(|| {
            defaulted.push(TAG_DIFFICULTY);
            Difficulty::default()
        });

        Self {
            name: metadata.name.clone(),
            category: metadata.category,
            description: metadata.description.clone(),
            title,
            notice,
            difficulty,
            dev: doc.dev,
            dev_bullets: doc.dev_bullets,
            contract_file: contract_file.into(),
            contract_source: contract_source.into(),
            test: None,
            tagged_category: doc.category,
            defaulted,
        }
    }

    pub fn with_test(mut self, file: impl Into<String>, source: impl Into<String>) -> Self {
        self.test = Some((file.into(), source.into()));
        self
    }

    /// `@custom:category` disagrees with `example.json`.
    pub fn category_mismatch(&self) -> bool {
        self.tagged_category.is_some_and(|c| c != self.category)
    }

    /// Page path relative to the docs root.
    pub fn page_path(&self) -> PathBuf {
        category_dir(self.category).join(format!("{}.md", self.name))
    }
}

/// Entries of one category, sorted by name.
pub type CategoryGroup<'a> = (Category, Vec<&'a DocEntry>);

/// Group entries by category in display order, dropping empty categories.
pub fn group_by_category(entries: &[DocEntry]) -> Vec<CategoryGroup<'_>> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let mut members: Vec<&DocEntry> =
                entries.iter().filter(|e| e.category == category).collect();
            if members.is_empty() {
                return None;
            }
            members.sort_by(|a, b| a.name.cmp(&b.name));
            Some((category, members))
        })
        .collect()
}

/// `examples/<category>` relative to the docs root.
pub fn category_dir(category: Category) -> PathBuf {
    PathBuf::from("examples").join(category.as_str())
}

/// Render the complete documentation tree.
pub fn render_docs(entries: &[DocEntry]) -> OutputTree {
    let groups = group_by_category(entries);
    let mut tree = OutputTree::new();

    tree.add_file("README.md", root_readme(&groups));
    tree.add_file("SUMMARY.md", summary(&groups));

    for (category, members) in &groups {
        tree.add_file(
            category_dir(*category).join("README.md"),
            category_readme(*category, members),
        );
        for entry in members {
            tree.add_file(entry.page_path(), example_page(entry));
        }
    }

    tree
}

/// Link-safe table cell text.
pub(crate) fn escape_pipe(s: &str) -> String {
    s.replace('|', "\\|")
}

/// Escape text placed between `[` and `]` of a markdown link.
pub(crate) fn link_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('[', "\\[")
        .replace(']', "\\]")
}

/// A backtick fence longer than any backtick run inside `source`.
pub(crate) fn fence_for(source: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in source.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::entities::example::ExampleName;

    pub(crate) fn entry(name: &str, category: Category, title: &str) -> DocEntry {
        let meta = ExampleMetadata::new(
            &ExampleName::parse(name).unwrap(),
            category,
            format!("About {name}"),
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        );
        let doc = ContractDoc {
            title: Some(title.to_string()),
            notice: Some(format!("{title} notice")),
            difficulty: Some(Difficulty::Intermediate),
            dev_bullets: vec!["first idea".into()],
            ..ContractDoc::default()
        };
        DocEntry::resolve(&meta, doc, "Demo.sol", "contract Demo {}\n")
    }

    #[test]
    fn resolve_flags_defaulted_tags() {
        let meta = ExampleMetadata::new(
            &ExampleName::parse("bare").unwrap(),
            Category::Basic,
            "Bare example",
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        );
        let entry = DocEntry::resolve(&meta, ContractDoc::default(), "Bare.sol", "");

        assert_eq!(entry.title, "bare");
        assert_eq!(entry.notice, "Bare example");
        assert_eq!(entry.difficulty, Difficulty::Beginner);
        assert_eq!(entry.defaulted, vec![TAG_TITLE, TAG_NOTICE, TAG_DIFFICULTY]);
    }

    #[test]
    fn groups_follow_display_order_and_skip_empty() {
        let entries = vec![
            entry("zeta", Category::Advanced, "Zeta"),
            entry("beta", Category::Basic, "Beta"),
            entry("alpha", Category::Basic, "Alpha"),
        ];
        let groups = group_by_category(&entries);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Category::Basic);
        assert_eq!(groups[0].1[0].name, "alpha");
        assert_eq!(groups[0].1[1].name, "beta");
        assert_eq!(groups[1].0, Category::Advanced);
    }

    #[test]
    fn render_docs_emits_every_page() {
        let entries = vec![
            entry("alpha", Category::Basic, "Alpha"),
            entry("gamma", Category::Decryption, "Gamma"),
        ];
        let tree = render_docs(&entries);

        for path in [
            "README.md",
            "SUMMARY.md",
            "examples/basic/README.md",
            "examples/basic/alpha.md",
            "examples/decryption/README.md",
            "examples/decryption/gamma.md",
        ] {
            assert!(tree.get(path).is_some(), "missing {path}");
        }
        assert_eq!(tree.file_count(), 6);
    }

    #[test]
    fn render_docs_is_order_independent() {
        let a = vec![
            entry("alpha", Category::Basic, "Alpha"),
            entry("beta", Category::Basic, "Beta"),
        ];
        let b = vec![a[1].clone(), a[0].clone()];
        assert_eq!(render_docs(&a), render_docs(&b));
    }

    #[test]
    fn fence_outgrows_embedded_backticks() {
        assert_eq!(fence_for("plain"), "```");
        assert_eq!(fence_for("has ``` inside"), "````");
    }

    #[test]
    fn mismatch_detected() {
        let mut e = entry("alpha", Category::Basic, "Alpha");
        assert!(!e.category_mismatch());
        e.tagged_category = Some(Category::Advanced);
        assert!(e.category_mismatch());
    }
}
