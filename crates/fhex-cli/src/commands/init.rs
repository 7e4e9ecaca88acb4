//! `fhex init` - create a default configuration file.

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the built-in defaults as TOML, to `fhex.toml` in the hub root or
/// to the global location with `--global`.
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let config_path = if args.global {
        AppConfig::global_path().ok_or_else(|| CliError::ConfigError {
            message: "no home directory to hold the global configuration".into(),
            source: None,
        })?
    } else {
        config.root(&global).join(LOCAL_CONFIG_FILE)
    };

    if config_path.exists() && !args.force {
        return Err(CliError::ConfigExists { path: config_path });
    }

    let toml = toml::to_string_pretty(&AppConfig::default())
        .with_cli_context(|| "Failed to serialise default config")?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}
