//! Implementation of the `fhex list` command.

use fhex_core::{application::ExampleSummary, domain::Category};

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::scaffold_service(config.layout(&global));
    let examples = service.list(args.category)?;

    // `--output-format json` wins over the per-command format.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            if examples.is_empty() {
                output.info("No examples found")?;
                return Ok(());
            }
            for (heading, members) in group(&examples) {
                output.header(&format!("{heading}:"))?;
                for example in members {
                    output.print(&format!("  {:<28} {}", example.name, example.description))?;
                }
            }
            output.print("")?;
            output.print(&format!("{} example(s)", examples.len()))?;
        }

        // JSON and CSV are data: written to stdout even with --quiet.
        ListFormat::Json => output.json(&examples)?,

        ListFormat::List => {
            for example in &examples {
                output.print(&example.name)?;
            }
        }

        ListFormat::Csv => {
            println!("name,category,description");
            for example in &examples {
                println!(
                    "{},{},{}",
                    csv_field(&example.name),
                    example.category_label(),
                    csv_field(&example.description)
                );
            }
        }
    }

    Ok(())
}

/// Consecutive runs of the same category, titled for display.
fn group(examples: &[ExampleSummary]) -> Vec<(&'static str, Vec<&ExampleSummary>)> {
    let mut groups: Vec<(Option<Category>, Vec<&ExampleSummary>)> = Vec::new();
    for example in examples {
        let continues = groups.last().is_some_and(|(c, _)| *c == example.category);
        if !continues {
            groups.push((example.category, Vec::new()));
        }
        if let Some((_, members)) = groups.last_mut() {
            members.push(example);
        }
    }
    groups
        .into_iter()
        .map(|(category, members)| (category.map_or("Unknown", |c| c.title()), members))
        .collect()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
