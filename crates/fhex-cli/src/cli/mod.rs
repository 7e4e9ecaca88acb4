//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use fhex_core::domain::{Category, Difficulty};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "fhex",
    bin_name = "fhex",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold, validate and document FHEVM example hubs",
    long_about = "fhex creates standalone FHEVM examples from a base Hardhat template, \
                  checks their structure, renders GitBook documentation from their \
                  NatSpec comments and applies bulk maintenance rewrites.",
    after_help = "EXAMPLES:\n\
        \x20 fhex create -n fhe-counter -c basic -d \"Encrypted counter\"\n\
        \x20 fhex validate\n\
        \x20 fhex generate-docs\n\
        \x20 fhex migrate-imports --dry-run\n\
        \x20 fhex completions bash > /usr/share/bash-completion/completions/fhex",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new example from the base template.
    #[command(
        visible_alias = "new",
        about = "Create a new example",
        after_help = "EXAMPLES:\n\
            \x20 fhex create -n fhe-counter -c basic -d \"Encrypted counter\"\n\
            \x20 fhex create -n sealed-bid -c advanced -d \"Sealed bid auction\" --difficulty advanced\n\
            \x20 fhex create -n my-vault -c access-control -d \"Vault\" --contract Vault.sol --test Vault.ts"
    )]
    Create(CreateArgs),

    /// List existing examples.
    #[command(
        visible_alias = "ls",
        about = "List existing examples",
        after_help = "EXAMPLES:\n\
            \x20 fhex list\n\
            \x20 fhex list --category decryption\n\
            \x20 fhex list --format json"
    )]
    List(ListArgs),

    /// Check every example for its required files.
    #[command(
        about = "Validate example structure",
        after_help = "EXAMPLES:\n\
            \x20 fhex validate\n\
            \x20 fhex validate --verbose\n\
            \x20 fhex --output-format json validate"
    )]
    Validate(ValidateArgs),

    /// Render the GitBook documentation tree.
    #[command(about = "Generate documentation from contract annotations")]
    GenerateDocs,

    /// Pin package versions in every package.json.
    #[command(about = "Update pinned dependency versions")]
    UpdateDependencies(RewriteArgs),

    /// Rewrite legacy Solidity import paths.
    #[command(about = "Migrate Solidity imports to current paths")]
    MigrateImports(RewriteArgs),

    /// Replace `allowThis(x)` with `allow(x, address(this))`.
    #[command(about = "Rewrite allowThis calls to allow(.., address(this))")]
    RewriteAllow(RewriteArgs),

    /// Create many examples from a TOML catalogue.
    #[command(
        about = "Create examples from a catalogue",
        after_help = "CATALOGUE FORMAT:\n\
            \x20 [[example]]\n\
            \x20 name = \"fhe-counter\"\n\
            \x20 category = \"basic\"\n\
            \x20 description = \"Encrypted counter\"\n\
            \x20 contract = \"sources/FheCounter.sol\"   # optional\n\
            \x20 test = \"sources/FheCounter.ts\"        # optional\n\
            \x20 difficulty = \"beginner\"               # optional"
    )]
    Batch(BatchArgs),

    /// Initialise an fhex configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 fhex init           # ./fhex.toml in the hub root\n\
            \x20 fhex init --global  # user configuration directory\n\
            \x20 fhex init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Inspect the fhex configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 fhex config get hub.examples_dir\n\
            \x20 fhex config list\n\
            \x20 fhex config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 fhex completions bash > ~/.local/share/bash-completion/completions/fhex\n\
            \x20 fhex completions zsh  > ~/.zfunc/_fhex\n\
            \x20 fhex completions fish > ~/.config/fish/completions/fhex.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `fhex create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Example slug, e.g. `fhe-counter`.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Example name")]
    pub name: String,

    /// Category; validated by the core so unknown values get suggestions.
    #[arg(
        short = 'c',
        long = "category",
        value_name = "CATEGORY",
        help = "basic | encryption | decryption | access-control | anti-patterns | advanced"
    )]
    pub category: String,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "One-line description"
    )]
    pub description: String,

    /// Contract source to copy instead of the built-in starter.
    #[arg(long = "contract", value_name = "FILE", help = "Contract source file")]
    pub contract: Option<PathBuf>,

    /// Test source to copy instead of the built-in starter.
    #[arg(long = "test", value_name = "FILE", help = "Test source file")]
    pub test: Option<PathBuf>,

    #[arg(
        long = "difficulty",
        value_name = "LEVEL",
        value_parser = parse_difficulty,
        default_value = "beginner",
        help = "beginner | intermediate | advanced"
    )]
    pub difficulty: Difficulty,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `fhex list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by category.
    #[arg(
        long = "category",
        value_name = "CATEGORY",
        value_parser = parse_category,
        help = "Only list this category"
    )]
    pub category: Option<Category>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Grouped by category.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `fhex validate`.
///
/// Nothing is compiled or run either way; the flags only change the note
/// about the external toolchain.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long = "skip-compile", help = "Do not suggest compiling the contracts")]
    pub skip_compile: bool,

    #[arg(long = "skip-tests", help = "Do not suggest running the test suites")]
    pub skip_tests: bool,
}

// ── maintenance ───────────────────────────────────────────────────────────────

/// Arguments shared by the rewrite commands.
#[derive(Debug, Args)]
pub struct RewriteArgs {
    /// Report what would change without writing.
    #[arg(long = "dry-run", help = "Show what would change without writing")]
    pub dry_run: bool,
}

// ── batch ─────────────────────────────────────────────────────────────────────

/// Arguments for `fhex batch`.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// TOML catalogue with one `[[example]]` table per example.
    #[arg(value_name = "CATALOG", help = "Catalogue file")]
    pub catalog: PathBuf,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `fhex init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `fhex completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `fhex config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `hub.examples_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value parsers ─────────────────────────────────────────────────────────────

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|e: fhex_core::domain::DomainError| e.to_string())
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    s.parse().map_err(|e: fhex_core::domain::DomainError| e.to_string())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from([
            "fhex",
            "create",
            "-n",
            "fhe-counter",
            "-c",
            "basic",
            "-d",
            "Encrypted counter",
        ]);
        let Commands::Create(args) = cli.command else {
            panic!("expected Create command");
        };
        assert_eq!(args.name, "fhe-counter");
        assert_eq!(args.category, "basic");
        assert_eq!(args.difficulty, Difficulty::Beginner);
        assert!(args.contract.is_none());
    }

    #[test]
    fn difficulty_is_parsed() {
        let cli = Cli::parse_from([
            "fhex",
            "create",
            "-n",
            "x",
            "-c",
            "basic",
            "-d",
            "y",
            "--difficulty",
            "advanced",
        ]);
        let Commands::Create(args) = cli.command else {
            panic!("expected Create command");
        };
        assert_eq!(args.difficulty, Difficulty::Advanced);
    }

    #[test]
    fn unknown_list_category_is_rejected() {
        let result = Cli::try_parse_from(["fhex", "list", "--category", "mystery"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_category_accepts_underscore() {
        let cli = Cli::parse_from(["fhex", "list", "--category", "access_control"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.category, Some(Category::AccessControl));
    }

    #[test]
    fn verbose_after_validate_is_global() {
        let cli = Cli::parse_from(["fhex", "validate", "--verbose"]);
        assert_eq!(cli.global.verbose, 1);
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn rewrite_commands_take_dry_run() {
        let cli = Cli::parse_from(["fhex", "migrate-imports", "--dry-run"]);
        let Commands::MigrateImports(args) = cli.command else {
            panic!("expected MigrateImports command");
        };
        assert!(args.dry_run);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["fhex", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
