//! Implementation of the `fhex batch` command.

use tracing::instrument;

use fhex_adapters::CatalogLoader;
use fhex_core::application::BatchProgress;

use crate::{
    cli::{BatchArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Create every catalogue entry, skipping examples that already exist.
#[instrument(skip_all, fields(catalog = %args.catalog.display()))]
pub fn execute(
    args: BatchArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    if !args.catalog.is_file() {
        return Err(CliError::FileNotFound { path: args.catalog });
    }
    let requests = CatalogLoader::new(&args.catalog).load()?;
    let service = super::scaffold_service(config.layout(&global));

    let bar = output.progress(requests.len() as u64);
    let result = service.batch(requests, |name, progress| {
        let status = match progress {
            BatchProgress::Created => "created",
            BatchProgress::Skipped => "skipped",
        };
        bar.set_message(format!("{name} ({status})"));
        bar.inc(1);
    });
    bar.finish_and_clear();
    let report = result?;

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    for name in &report.skipped {
        output.warning(&format!("Skipped '{name}': example already exists"))?;
    }
    for name in &report.created {
        output.print(&format!("  + {name}"))?;
    }
    output.success(&format!(
        "Batch finished: {} created, {} skipped",
        report.created.len(),
        report.skipped.len()
    ))?;

    Ok(())
}
