//! Implementation of the `fhex validate` command.
//!
//! Findings never fail the command: the exit code is 0 whatever the report
//! says. Only I/O failures while walking the tree are errors.

use fhex_adapters::LocalFilesystem;
use fhex_core::{
    application::ValidateService,
    domain::{ExampleCheck, ValidationReport},
};

use crate::{
    cli::{GlobalArgs, ValidateArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ValidateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let layout = config.layout(&global);
    let service = ValidateService::new(Box::new(LocalFilesystem::new()), layout.clone());
    let report = service.validate()?;

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    if report.examples.is_empty() {
        output.warning(&format!(
            "No examples found under {}",
            layout.examples().display()
        ))?;
        return Ok(());
    }

    output.header("Validating examples:")?;
    for example in &report.examples {
        let line = format!("{}: {}", example.name, example.summary());
        if example.is_ok() {
            output.success(&line)?;
        } else {
            output.error(&line)?;
        }
        if global.verbose > 0 {
            for check in ExampleCheck::ALL {
                let mark = if example.failures.contains(&check) {
                    "\u{2717}"
                } else {
                    "\u{2713}"
                };
                output.print(&format!("    {mark} {check}"))?;
            }
        }
    }

    output.print("")?;
    output.print(&totals(&report))?;
    for note in toolchain_notes(&args) {
        output.info(note)?;
    }

    Ok(())
}

fn totals(report: &ValidationReport) -> String {
    format!(
        "{} passed, {} failed ({}/{} checks)",
        report.examples_passed(),
        report.examples_failed(),
        report.checks_passed(),
        report.checks_total(),
    )
}

/// Reminders about the steps this command does not run.
fn toolchain_notes(args: &ValidateArgs) -> Vec<&'static str> {
    let mut notes = Vec::new();
    if !args.skip_compile {
        notes.push("Structure only: compile each example with `npm run compile`");
    }
    if !args.skip_tests {
        notes.push("Structure only: run each example's tests with `npm run test`");
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    use fhex_core::domain::ExampleReport;

    #[test]
    fn totals_line() {
        let report = ValidationReport {
            examples: vec![
                ExampleReport::new("a", vec![]),
                ExampleReport::new("b", vec![ExampleCheck::Readme]),
            ],
        };
        assert_eq!(totals(&report), "1 passed, 1 failed (9/10 checks)");
    }

    #[test]
    fn skip_flags_drop_notes() {
        let all = ValidateArgs {
            skip_compile: false,
            skip_tests: false,
        };
        assert_eq!(toolchain_notes(&all).len(), 2);

        let none = ValidateArgs {
            skip_compile: true,
            skip_tests: true,
        };
        assert!(toolchain_notes(&none).is_empty());
    }
}
