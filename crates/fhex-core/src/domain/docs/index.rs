use std::fmt::Write;

use super::{CategoryGroup, DocEntry, category_dir, escape_pipe, link_text};
use crate::domain::value_objects::Category;

pub const HUB_TITLE: &str = "FHEVM Examples";

/// Render the docs root `README.md`.
pub fn root_readme(groups: &[CategoryGroup<'_>]) -> String {
    let mut out = String::new();
    let total: usize = groups.iter().map(|(_, m)| m.len()).sum();

    let _ = writeln!(out, "# {HUB_TITLE}\n");
    let _ = writeln!(
        out,
        "Standalone examples for building confidential smart contracts with FHEVM."
    );
    let _ = writeln!(
        out,
        "Each example is a self-contained Hardhat project with a contract, tests and a README.\n"
    );
    let _ = writeln!(
        out,
        "**{total}** examples across **{}** categories.\n",
        groups.len()
    );

    let _ = writeln!(out, "| Category | Examples |");
    let _ = writeln!(out, "|---|---|");
    for (category, members) in groups {
        let _ = writeln!(
            out,
            "| [{}]({}/README.md) | {} |",
            category.title(),
            category_dir(*category).display(),
            members.len()
        );
    }

    for (category, members) in groups {
        let _ = writeln!(out, "\n## {}\n", category.title());
        let _ = writeln!(out, "{}\n", category.description());
        for entry in members {
            let _ = writeln!(
                out,
                "- [{}]({}) - {} ({})",
                link_text(&entry.title),
                entry.page_path().display(),
                entry.notice,
                entry.difficulty.badge()
            );
        }
    }

    out
}

/// Render `examples/<category>/README.md`. Links are relative to that directory.
pub fn category_readme(category: Category, members: &[&DocEntry]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}\n", category.title());
    let _ = writeln!(out, "{}\n", category.description());

    let _ = writeln!(out, "| Example | Difficulty | Description |");
    let _ = writeln!(out, "|---|---|---|");
    for entry in members {
        let _ = writeln!(
            out,
            "| [{}]({}.md) | {} | {} |",
            escape_pipe(&link_text(&entry.title)),
            entry.name,
            entry.difficulty.badge(),
            escape_pipe(&entry.notice)
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::docs::{group_by_category, tests::entry};

    #[test]
    fn root_readme_links_categories_and_pages() {
        let entries = vec![
            entry("alpha", Category::Basic, "Alpha"),
            entry("omega", Category::AntiPatterns, "Omega"),
        ];
        let readme = root_readme(&group_by_category(&entries));

        assert!(readme.starts_with("# FHEVM Examples\n"));
        assert!(readme.contains("**2** examples across **2** categories."));
        assert!(readme.contains("| [Basic](examples/basic/README.md) | 1 |"));
        assert!(readme.contains("- [Alpha](examples/basic/alpha.md) - Alpha notice"));
        assert!(readme.contains("(examples/anti-patterns/omega.md)"));
        assert!(readme.find("## Basic").unwrap() < readme.find("## Anti").unwrap());
    }

    #[test]
    fn category_readme_escapes_table_cells() {
        let e = entry("alpha", Category::Basic, "A | B");
        let readme = category_readme(Category::Basic, &[&e]);
        assert!(readme.contains("| [A \\| B](alpha.md) |"));
    }

    #[test]
    fn brackets_in_titles_are_escaped() {
        let e = entry("arr", Category::Basic, "Array [uint8]");
        let groups = group_by_category(std::slice::from_ref(&e));
        assert!(root_readme(&groups).contains("- [Array \\[uint8\\]](examples/basic/arr.md)"));
        assert!(category_readme(Category::Basic, &[&e]).contains("| [Array \\[uint8\\]](arr.md) |"));
    }
}
