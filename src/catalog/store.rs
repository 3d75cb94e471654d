//! In-memory catalog store.
//!
//! One store per session, owned by the session and passed explicitly to
//! whatever needs price lookups. Edits replace whole tables (grid
//! semantics) and only affect future lookups; lines already in a cart keep
//! their snapshot prices.

use crate::catalog::csv::CatalogError;
use crate::catalog::entry::{CatalogEntry, LaborRole, ResourceKind};
use crate::catalog::seed;

/// Mutable collections of priced resources and labor roles.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    entries: Vec<CatalogEntry>,
    roles: Vec<LaborRole>,
}

impl CatalogStore {
    pub fn new(entries: Vec<CatalogEntry>, roles: Vec<LaborRole>) -> Self {
        Self { entries, roles }
    }

    /// A store loaded with the built-in fire-protection starter catalog.
    pub fn seeded() -> Result<Self, CatalogError> {
        Ok(Self::new(seed::entries()?, seed::roles()?))
    }

    /// Entries matching the optional kind and category filters, in storage
    /// order.
    pub fn entries(
        &self,
        kind: Option<ResourceKind>,
        category: Option<&str>,
    ) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| kind.is_none_or(|k| e.kind == k))
            .filter(|e| category.is_none_or(|c| e.category == c))
            .collect()
    }

    pub fn all_entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn roles(&self) -> &[LaborRole] {
        &self.roles
    }

    /// First entry with the given id, if any. Duplicate ids are tolerated;
    /// the earliest row wins.
    pub fn entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// First role with the given title, if any.
    pub fn role(&self, title: &str) -> Option<&LaborRole> {
        self.roles.iter().find(|r| r.title == title)
    }

    /// Distinct category tags in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category) {
                seen.push(entry.category.clone());
            }
        }
        seen
    }

    /// Replace the whole resource table. Rows are accepted as-is; the grid
    /// surface is deliberately permissive.
    pub fn replace_entries(&mut self, entries: Vec<CatalogEntry>) {
        self.entries = entries;
    }

    /// Replace the whole labor-role table.
    pub fn replace_roles(&mut self, roles: Vec<LaborRole>) {
        self.roles = roles;
    }
}
