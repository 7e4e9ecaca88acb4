use std::fmt::Write;

use super::{DocEntry, escape_pipe, fence_for};

/// Render `examples/<category>/<name>.md`.
pub fn example_page(entry: &DocEntry) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}\n", entry.title);
    let _ = writeln!(out, "> {}\n", entry.notice);

    let _ = writeln!(out, "| | |");
    let _ = writeln!(out, "|---|---|");
    let _ = writeln!(
        out,
        "| **Category** | [{}](README.md) |",
        entry.category.title()
    );
    let _ = writeln!(out, "| **Difficulty** | {} |", entry.difficulty.badge());
    let _ = writeln!(out, "| **Example** | `{}` |", escape_pipe(&entry.name));
    out.push('\n');

    let _ = writeln!(out, "## Description\n");
    let _ = writeln!(out, "{}\n", entry.description);
    if let Some(dev) = &entry.dev {
        let _ = writeln!(out, "{dev}\n");
    }

    if !entry.dev_bullets.is_empty() {
        let _ = writeln!(out, "## Key Concepts\n");
        for bullet in &entry.dev_bullets {
            let _ = writeln!(out, "- {bullet}");
        }
        out.push('\n');
    }

    let _ = writeln!(out, "## Contract\n");
    let _ = writeln!(out, "`contracts/{}`\n", entry.contract_file);
    push_fenced(&mut out, "solidity", &entry.contract_source);

    if let Some((file, source)) = &entry.test {
        let _ = writeln!(out, "\n## Tests\n");
        let _ = writeln!(out, "`test/{file}`\n");
        push_fenced(&mut out, "typescript", source);
    }

    let _ = writeln!(out, "\n## Running\n");
    let _ = writeln!(out, "```bash");
    let _ = writeln!(out, "cd examples/{}", entry.name);
    let _ = writeln!(out, "npm install");
    let _ = writeln!(out, "npm run compile");
    let _ = writeln!(out, "npm run test");
    let _ = writeln!(out, "```");

    out
}

fn push_fenced(out: &mut String, lang: &str, source: &str) {
    let fence = fence_for(source);
    let _ = writeln!(out, "{fence}{lang}");
    let _ = writeln!(out, "{}", source.trim_end());
    let _ = writeln!(out, "{fence}");
}
