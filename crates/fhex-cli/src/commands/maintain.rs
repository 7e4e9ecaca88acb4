//! `fhex update-dependencies`, `fhex migrate-imports` and `fhex rewrite-allow`.
//!
//! The three commands differ only in the rewrite they hand to the
//! maintenance service.

use tracing::instrument;

use fhex_adapters::LocalFilesystem;
use fhex_core::{
    application::MaintenanceService,
    domain::{AllowRewrite, Rewrite},
};

use crate::{
    cli::{GlobalArgs, RewriteArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Which maintenance rewrite to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteKind {
    UpdateDependencies,
    MigrateImports,
    RewriteAllow,
}

impl RewriteKind {
    /// Build the rewrite from the configured rules.
    fn build(self, config: &AppConfig) -> CliResult<Box<dyn Rewrite>> {
        let rewrite: Box<dyn Rewrite> = match self {
            Self::UpdateDependencies => Box::new(config.dependency_pins()),
            Self::MigrateImports => Box::new(config.import_migration()?),
            Self::RewriteAllow => Box::new(AllowRewrite),
        };
        Ok(rewrite)
    }
}

#[instrument(skip_all, fields(kind = ?kind, dry_run = args.dry_run))]
pub fn execute(
    kind: RewriteKind,
    args: RewriteArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let rewrite = kind.build(&config)?;
    let layout = config.layout(&global);
    let service = MaintenanceService::new(Box::new(LocalFilesystem::new()), layout.clone());
    let report = service.run(rewrite.as_ref(), args.dry_run)?;

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    let verb = if report.dry_run { "Would update" } else { "Updated" };
    for path in &report.changed {
        let shown = path.strip_prefix(layout.root()).unwrap_or(path);
        output.print(&format!("  {verb} {}", shown.display()))?;
    }

    let summary = format!(
        "{}: {} of {} file(s) {}",
        report.rewrite,
        report.changed.len(),
        report.scanned,
        if report.dry_run { "need changes" } else { "changed" }
    );
    if report.dry_run {
        output.info(&format!("{summary} (dry run, nothing written)"))?;
    } else {
        output.success(&summary)?;
    }

    Ok(())
}
