//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the [`HubLayout`] and
//! rewrite rules derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--root`, `--no-color`; handled at the call-site)
//! 2. Environment variables: `FHEX_HUB__EXAMPLES_DIR=samples`, etc.
//! 3. Config file: `--config <file>`, else `./fhex.toml` under the hub root,
//!    else the platform config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use fhex_core::{
    application::{
        HubLayout,
        layout::{DEFAULT_DOCS_DIR, DEFAULT_EXAMPLES_DIR, DEFAULT_TEMPLATE_DIR},
    },
    domain::{DependencyPin, DependencyPins, DomainError, ImportMigration, ImportRule},
};

use crate::cli::GlobalArgs;

/// File name looked up in the hub root.
pub const LOCAL_CONFIG_FILE: &str = "fhex.toml";

const ENV_PREFIX: &str = "FHEX";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the hub lives and how its directories are named.
    pub hub: HubConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Rules for the maintenance rewrites.
    pub maintenance: MaintenanceConfig,

    /// File the values were read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub root: Option<PathBuf>,
    pub template_dir: String,
    pub examples_dir: String,
    pub docs_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceConfig {
    /// `migrate-imports` replacements.
    pub imports: Vec<ImportRule>,
    /// `update-dependencies` pins.
    pub dependencies: Vec<DependencyPin>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            root: None,
            template_dir: DEFAULT_TEMPLATE_DIR.into(),
            examples_dir: DEFAULT_EXAMPLES_DIR.into(),
            docs_dir: DEFAULT_DOCS_DIR.into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            imports: ImportMigration::default_rules(),
            dependencies: DependencyPins::default_pins(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the file chosen by [`Self::locate`] layered
    /// under `FHEX_*` environment variables.
    ///
    /// A file named with `--config` must exist; the implicit locations are
    /// optional.
    pub fn load(args: &GlobalArgs) -> anyhow::Result<Self> {
        let path = Self::locate(args);
        let required = args.config.is_some();

        let mut builder = Config::builder();
        if let Some(path) = &path {
            debug!(path = %path.display(), required, "Reading configuration file");
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let mut config: AppConfig = builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        config.source = path.filter(|p| p.is_file());
        Ok(config)
    }

    /// Pick the configuration file: `--config`, else `fhex.toml` in the hub
    /// root, else the global file when it exists.
    pub fn locate(args: &GlobalArgs) -> Option<PathBuf> {
        if let Some(explicit) = &args.config {
            return Some(explicit.clone());
        }
        let local = args
            .root
            .as_deref()
            .unwrap_or_else(|| Path::new("."))
            .join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        Self::global_path().filter(|p| p.is_file())
    }

    /// Path to the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn global_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "fhex", "fhex")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Hub root: `--root`/`FHEX_ROOT`, then `hub.root`, then the current directory.
    pub fn root(&self, args: &GlobalArgs) -> PathBuf {
        args.root
            .clone()
            .or_else(|| self.hub.root.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn layout(&self, args: &GlobalArgs) -> HubLayout {
        HubLayout::new(self.root(args))
            .with_template_dir(&self.hub.template_dir)
            .with_examples_dir(&self.hub.examples_dir)
            .with_docs_dir(&self.hub.docs_dir)
    }

    /// Configured import rules; rejected when a rule cannot converge.
    pub fn import_migration(&self) -> Result<ImportMigration, DomainError> {
        ImportMigration::new(self.maintenance.imports.clone())
    }

    pub fn dependency_pins(&self) -> DependencyPins {
        DependencyPins::new(self.maintenance.dependencies.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn args_in(root: &Path) -> GlobalArgs {
        GlobalArgs {
            root: Some(root.to_path_buf()),
            ..GlobalArgs::default()
        }
    }

    #[test]
    fn defaults_match_hub_layout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.hub.template_dir, "base-template");
        assert_eq!(cfg.hub.examples_dir, "examples");
        assert_eq!(cfg.hub.docs_dir, "docs");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn default_rules_are_valid() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.import_migration().unwrap().rules().len(), 2);
        assert_eq!(cfg.dependency_pins().pins()[0].package, "@fhevm/solidity");
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = AppConfig::load(&args_in(dir.path())).unwrap();
        assert_eq!(cfg.hub.examples_dir, "examples");
        assert_eq!(cfg.root(&args_in(dir.path())), dir.path());
    }

    #[test]
    fn local_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(LOCAL_CONFIG_FILE),
            "[hub]\nexamples_dir = \"samples\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let args = args_in(dir.path());
        let cfg = AppConfig::load(&args).unwrap();
        assert_eq!(cfg.hub.examples_dir, "samples");
        assert_eq!(cfg.hub.docs_dir, "docs");
        assert!(cfg.output.no_color);
        assert_eq!(cfg.source, Some(dir.path().join(LOCAL_CONFIG_FILE)));
        assert_eq!(cfg.layout(&args).examples(), dir.path().join("samples"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let args = GlobalArgs {
            config: Some(dir.path().join("absent.toml")),
            ..GlobalArgs::default()
        };
        assert!(AppConfig::load(&args).is_err());
    }

    #[test]
    fn configured_rules_are_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[[maintenance.imports]]\nfrom = \"@old/Lib.sol\"\nto = \"@new/Lib.sol\"\n",
        )
        .unwrap();

        let args = GlobalArgs {
            config: Some(path),
            ..GlobalArgs::default()
        };
        let cfg = AppConfig::load(&args).unwrap();
        let migration = cfg.import_migration().unwrap();
        assert_eq!(
            migration.rules(),
            &[ImportRule::new("@old/Lib.sol", "@new/Lib.sol")]
        );
        assert_eq!(cfg.dependency_pins(), DependencyPins::with_defaults());
    }

    #[test]
    fn non_converging_rule_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.maintenance.imports = vec![ImportRule::new("Lib.sol", "new/Lib.sol")];
        assert!(matches!(
            cfg.import_migration(),
            Err(DomainError::InvalidRewriteRule { .. })
        ));
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.hub.examples_dir, "examples");
        assert_eq!(back.maintenance.imports.len(), 2);
    }
}
