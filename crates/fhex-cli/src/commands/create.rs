//! Implementation of the `fhex create` command.
//!
//! Responsibility: read any user-supplied sources, build a
//! [`ScaffoldRequest`], call the core scaffold service, and display results.

use std::path::Path;

use tracing::{debug, instrument};

use fhex_core::application::ScaffoldRequest;

use crate::{
    cli::{CreateArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `fhex create` command.
#[instrument(skip_all, fields(example = %args.name))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut request = ScaffoldRequest::new(&args.name, &args.category, &args.description)
        .with_difficulty(args.difficulty);
    if let Some(path) = &args.contract {
        request = request.with_contract(read_source(path)?);
    }
    if let Some(path) = &args.test {
        request = request.with_test(read_source(path)?);
    }

    let service = super::scaffold_service(config.layout(&global));
    let created = service.create(request)?;

    if output.is_json() {
        output.json(&created)?;
        return Ok(());
    }

    output.success(&format!(
        "Created example '{}' ({}) at {}",
        created.metadata.name,
        created.metadata.category,
        created.path.display(),
    ))?;
    for file in &created.files {
        let shown = file.strip_prefix(&created.path).unwrap_or(file);
        output.print(&format!("  {}", shown.display()))?;
    }

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", created.path.display()))?;
        output.print("  npm install")?;
        output.print("  npm run compile && npm run test")?;
    }

    Ok(())
}

/// Contents of a `--contract`/`--test` file.
fn read_source(path: &Path) -> CliResult<String> {
    if !path.is_file() {
        return Err(CliError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "Reading source file");
    std::fs::read_to_string(path).with_cli_context(|| format!("reading {}", path.display()))
}
