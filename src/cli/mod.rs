//! CLI module - argument parsing and command dispatch

pub mod commands;
pub mod table;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "fq",
    version,
    about = "Quoting and estimation tool for fire-protection contractors"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Args, Debug)]
pub struct GlobalOpts {
    /// Resource catalog CSV to load instead of the built-in seed
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Labor-role CSV to load instead of the built-in seed
    #[arg(long, global = true, value_name = "FILE")]
    pub roles: Option<PathBuf>,

    /// Branding config file (default: the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for list commands
    #[arg(long, short = 'f', global = true, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive quoting session (the default)
    Session,

    /// Inspect or export the active catalog
    #[command(subcommand)]
    Catalog(commands::catalog::CatalogCommands),

    /// List labor roles and their hourly rates
    Roles(commands::roles::RolesArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// CSV in the catalog grid format
    Csv,
    Json,
    Yaml,
}
