//! CLI command implementations

pub mod catalog;
pub mod completions;
pub mod roles;
pub mod session;

use miette::{IntoDiagnostic, Result};

use crate::catalog::{csv, CatalogStore};
use crate::cli::GlobalOpts;

/// Build the session catalog: the embedded seed, overridden by any CSV
/// tables named on the command line.
pub(crate) fn load_store(global: &GlobalOpts) -> Result<CatalogStore> {
    let mut store = CatalogStore::seeded().into_diagnostic()?;
    if let Some(path) = &global.catalog {
        store.replace_entries(csv::read_entries_file(path).into_diagnostic()?);
    }
    if let Some(path) = &global.roles {
        store.replace_roles(csv::read_roles_file(path).into_diagnostic()?);
    }
    Ok(store)
}
