//! Implementation of the `fhex generate-docs` command.

use fhex_adapters::LocalFilesystem;
use fhex_core::application::DocsService;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let layout = config.layout(&global);
    let service = DocsService::new(Box::new(LocalFilesystem::new()), layout.clone());
    let report = service.generate()?;

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    for skipped in &report.skipped {
        output.warning(&format!("Skipped {}: {}", skipped.name, skipped.reason))?;
    }
    for defaulted in &report.defaulted {
        output.warning(&format!(
            "{}: no {} annotation, default used",
            defaulted.example, defaulted.tag
        ))?;
    }

    output.success(&format!(
        "Documented {} example(s) in {}",
        report.documented.len(),
        layout.docs().display()
    ))?;
    output.print(&format!(
        "  {} file(s) written, {} unchanged",
        report.written.len(),
        report.unchanged
    ))?;

    Ok(())
}
