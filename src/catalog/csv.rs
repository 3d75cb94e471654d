//! CSV import/export - the catalog's grid-editing surface.
//!
//! Both tables round-trip through plain CSV so users can edit prices in any
//! spreadsheet and load the result back, replacing the table wholesale.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use thiserror::Error;

use crate::catalog::entry::{CatalogEntry, LaborRole};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed catalog row: {0}")]
    Csv(#[from] csv::Error),

    #[error("embedded seed asset missing: {0}")]
    Seed(&'static str),
}

/// Read resource rows from CSV with an `id,name,kind,category,unit,unit_cost`
/// header.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<CatalogEntry>, CatalogError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let entries = rdr.deserialize().collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

pub fn read_entries_file(path: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    read_entries(File::open(path)?)
}

/// Read labor-role rows from CSV with a `title,hourly_cost` header.
pub fn read_roles<R: Read>(reader: R) -> Result<Vec<LaborRole>, CatalogError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let roles = rdr.deserialize().collect::<Result<Vec<_>, _>>()?;
    Ok(roles)
}

pub fn read_roles_file(path: &Path) -> Result<Vec<LaborRole>, CatalogError> {
    read_roles(File::open(path)?)
}

pub fn write_entries<W: Write>(writer: W, entries: &[CatalogEntry]) -> Result<(), CatalogError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for entry in entries {
        wtr.serialize(entry)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_entries_file(path: &Path, entries: &[CatalogEntry]) -> Result<(), CatalogError> {
    write_entries(File::create(path)?, entries)
}

pub fn write_roles<W: Write>(writer: W, roles: &[LaborRole]) -> Result<(), CatalogError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for role in roles {
        wtr.serialize(role)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_roles_file(path: &Path, roles: &[LaborRole]) -> Result<(), CatalogError> {
    write_roles(File::create(path)?, roles)
}
