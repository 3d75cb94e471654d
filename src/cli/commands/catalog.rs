//! `fq catalog` command - catalog inspection and grid export

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::catalog::{csv, CatalogEntry, ResourceKind};
use crate::cli::{table, GlobalOpts, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List catalog entries with filtering
    List(ListArgs),

    /// List the distinct category tags
    Categories,

    /// Write the active catalog to CSV files for spreadsheet editing
    Export(ExportArgs),
}

/// Resource kind filter
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum KindFilter {
    Equipment,
    Material,
    Tool,
    Service,
    /// All kinds
    #[default]
    All,
}

impl KindFilter {
    fn as_kind(self) -> Option<ResourceKind> {
        match self {
            KindFilter::Equipment => Some(ResourceKind::Equipment),
            KindFilter::Material => Some(ResourceKind::Material),
            KindFilter::Tool => Some(ResourceKind::Tool),
            KindFilter::Service => Some(ResourceKind::Service),
            KindFilter::All => None,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by resource kind
    #[arg(long, short = 'k', default_value = "all")]
    pub kind: KindFilter,

    /// Filter by category tag
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Search in entry names
    #[arg(long)]
    pub search: Option<String>,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Destination for the resource table
    #[arg(long, default_value = "resources.csv", value_name = "FILE")]
    pub resources: PathBuf,

    /// Destination for the labor-role table
    #[arg(long, default_value = "roles.csv", value_name = "FILE")]
    pub roles: PathBuf,
}

/// Run a catalog subcommand
pub fn run(cmd: CatalogCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CatalogCommands::List(args) => run_list(args, global),
        CatalogCommands::Categories => run_categories(global),
        CatalogCommands::Export(args) => run_export(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let store = super::load_store(global)?;

    let mut entries: Vec<&CatalogEntry> =
        store.entries(args.kind.as_kind(), args.category.as_deref());

    if let Some(search) = &args.search {
        let needle = search.to_lowercase();
        entries.retain(|e| e.name.to_lowercase().contains(&needle));
    }

    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if args.count {
        println!("{}", entries.len());
        return Ok(());
    }

    if entries.is_empty() {
        println!("No catalog entries found.");
        return Ok(());
    }

    match global.format {
        OutputFormat::Table => {
            println!("{}", table::catalog_table(entries.iter().copied()));
        }
        OutputFormat::Csv => {
            let owned: Vec<CatalogEntry> = entries.into_iter().cloned().collect();
            csv::write_entries(std::io::stdout(), &owned).into_diagnostic()?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&entries).into_diagnostic()?;
            print!("{}", yaml);
        }
    }

    Ok(())
}

fn run_categories(global: &GlobalOpts) -> Result<()> {
    let store = super::load_store(global)?;
    let categories = store.categories();

    match global.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&categories).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&categories).into_diagnostic()?;
            print!("{}", yaml);
        }
        _ => {
            for category in categories {
                println!("{}", category);
            }
        }
    }

    Ok(())
}

fn run_export(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let store = super::load_store(global)?;

    csv::write_entries_file(&args.resources, store.all_entries()).into_diagnostic()?;
    csv::write_roles_file(&args.roles, store.roles()).into_diagnostic()?;

    println!(
        "Wrote {} resource rows to {}",
        store.all_entries().len(),
        style(args.resources.display().to_string()).yellow()
    );
    println!(
        "Wrote {} labor roles to {}",
        store.roles().len(),
        style(args.roles.display().to_string()).yellow()
    );
    println!("Edit the files in any spreadsheet and load them back with --catalog / --roles.");

    Ok(())
}
