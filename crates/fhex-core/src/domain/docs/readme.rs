use std::fmt::Write;

use crate::domain::{
    entities::example::{ExampleMetadata, ExampleName, METADATA_FILE},
    value_objects::Difficulty,
};

/// Render the `README.md` written into a freshly scaffolded example.
pub fn example_readme(
    name: &ExampleName,
    metadata: &ExampleMetadata,
    difficulty: Difficulty,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}\n", name.contract_name());
    let _ = writeln!(out, "{}\n", metadata.description);
    let _ = writeln!(
        out,
        "- **Category:** {} (`{}`)",
        metadata.category.title(),
        metadata.category
    );
    let _ = writeln!(out, "- **Difficulty:** {}\n", difficulty.badge());

    let _ = writeln!(out, "## Quick Start\n");
    let _ = writeln!(out, "```bash");
    let _ = writeln!(out, "npm install");
    let _ = writeln!(out, "npm run compile");
    let _ = writeln!(out, "npm run test");
    let _ = writeln!(out, "```\n");

    let _ = writeln!(out, "## Files\n");
    let _ = writeln!(
        out,
        "- `contracts/{}` - the example contract",
        name.contract_file()
    );
    let _ = writeln!(out, "- `test/{}` - its test suite", name.test_file());
    let _ = writeln!(out, "- `{METADATA_FILE}` - example metadata");

    out
}
