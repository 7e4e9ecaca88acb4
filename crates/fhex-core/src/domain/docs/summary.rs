use std::fmt::Write;

use super::{CategoryGroup, category_dir, link_text};

/// Render GitBook's `SUMMARY.md`.
pub fn summary(groups: &[CategoryGroup<'_>]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Summary\n");
    let _ = writeln!(out, "* [Introduction](README.md)");

    for (category, members) in groups {
        let dir = category_dir(*category);
        let _ = writeln!(out, "\n## {}\n", category.title());
        let _ = writeln!(
            out,
            "* [{}]({}/README.md)",
            category.title(),
            dir.display()
        );
        for entry in members {
            let _ = writeln!(
                out,
                "  * [{}]({})",
                link_text(&entry.title),
                entry.page_path().display()
            );
        }
    }

    out
}
