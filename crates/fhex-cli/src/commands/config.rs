//! `fhex config` - inspect configuration values.

use serde_json::Value;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
                return Ok(());
            }
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).with_cli_context(|| "Failed to serialise config")?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => match &config.source {
            Some(path) => output.print(&path.display().to_string())?,
            None => output.print("(built-in defaults)")?,
        },
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `hub.examples_dir`. Strings print bare,
/// everything else as JSON.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let unknown = || CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    };

    let tree = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    let pointer = format!("/{}", key.replace('.', "/"));
    match tree.pointer(&pointer).ok_or_else(unknown)? {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        other => Ok(other.to_string()),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "hub.examples_dir").unwrap(), "examples");
        assert_eq!(get_config_value(&cfg, "hub.template_dir").unwrap(), "base-template");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        let err = get_config_value(&cfg, "does.not.exist").unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn unset_root_is_empty() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "hub.root").unwrap(), "");
    }

    #[test]
    fn structured_values_print_as_json() {
        let cfg = AppConfig::default();
        let pins = get_config_value(&cfg, "maintenance.dependencies").unwrap();
        assert!(pins.starts_with('['));
        assert!(pins.contains("@fhevm/solidity"));
    }
}
