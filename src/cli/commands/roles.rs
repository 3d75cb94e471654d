//! `fq roles` command - labor-rate table inspection

use miette::{IntoDiagnostic, Result};

use crate::catalog::csv;
use crate::cli::{table, GlobalOpts, OutputFormat};

#[derive(clap::Args, Debug)]
pub struct RolesArgs {
    /// Show only count
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: RolesArgs, global: &GlobalOpts) -> Result<()> {
    let store = super::load_store(global)?;
    let roles = store.roles();

    if args.count {
        println!("{}", roles.len());
        return Ok(());
    }

    if roles.is_empty() {
        println!("No labor roles found.");
        return Ok(());
    }

    match global.format {
        OutputFormat::Table => {
            println!("{}", table::roles_table(roles));
        }
        OutputFormat::Csv => {
            csv::write_roles(std::io::stdout(), roles).into_diagnostic()?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(roles).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(roles).into_diagnostic()?;
            print!("{}", yaml);
        }
    }

    Ok(())
}
