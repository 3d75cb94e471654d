//! Built-in starter catalog, embedded in the binary.
//!
//! The seed covers the three fire-protection subsystems (detection, water,
//! pump) with representative equipment, materials, and rental tooling, plus
//! a minimal crew of labor roles. It is a starting point for editing, not a
//! price list anyone should ship quotes from unreviewed.

use rust_embed::Embed;

use crate::catalog::csv;
use crate::catalog::csv::CatalogError;
use crate::catalog::entry::{CatalogEntry, LaborRole};

#[derive(Embed)]
#[folder = "seed/"]
struct SeedData;

fn seed_bytes(name: &'static str) -> Result<Vec<u8>, CatalogError> {
    SeedData::get(name)
        .map(|f| f.data.into_owned())
        .ok_or(CatalogError::Seed(name))
}

/// The built-in resource table.
pub fn entries() -> Result<Vec<CatalogEntry>, CatalogError> {
    csv::read_entries(seed_bytes("resources.csv")?.as_slice())
}

/// The built-in labor-role table.
pub fn roles() -> Result<Vec<LaborRole>, CatalogError> {
    csv::read_roles(seed_bytes("roles.csv")?.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::ResourceKind;

    #[test]
    fn seed_resources_parse() {
        let entries = entries().unwrap();
        assert!(entries.len() >= 15);
        // Every subsystem ships at least one rental tool
        for category in ["detection", "water", "pump"] {
            assert!(entries
                .iter()
                .any(|e| e.category == category && e.kind == ResourceKind::Tool));
        }
    }

    #[test]
    fn seed_roles_parse() {
        let roles = roles().unwrap();
        assert_eq!(roles.len(), 3);
        assert!(roles.iter().all(|r| r.hourly_cost.is_sign_positive()));
    }
}
