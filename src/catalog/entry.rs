//! Catalog record types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a catalog resource is; drives grouping in views and documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ResourceKind {
    /// Fixed assets supplied to the client (panels, pumps, cabinets)
    Equipment,
    /// Consumables priced per unit installed
    #[default]
    Material,
    /// Rented or owned tooling billed per day of use
    Tool,
    /// Subcontracted or flat-fee services
    Service,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Equipment,
        ResourceKind::Material,
        ResourceKind::Tool,
        ResourceKind::Service,
    ];

    /// Plural heading used in tables and document sections
    pub fn plural_label(&self) -> &'static str {
        match self {
            ResourceKind::Equipment => "Equipment",
            ResourceKind::Material => "Materials",
            ResourceKind::Tool => "Tools",
            ResourceKind::Service => "Services",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Equipment => write!(f, "equipment"),
            ResourceKind::Material => write!(f, "material"),
            ResourceKind::Tool => write!(f, "tool"),
            ResourceKind::Service => write!(f, "service"),
        }
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "equipment" => Ok(ResourceKind::Equipment),
            "material" => Ok(ResourceKind::Material),
            "tool" => Ok(ResourceKind::Tool),
            "service" => Ok(ResourceKind::Service),
            _ => Err(format!(
                "Invalid resource kind: {}. Use equipment, material, tool, or service",
                s
            )),
        }
    }
}

/// A priced resource in the catalog.
///
/// Identifiers are expected to be unique but nothing enforces it; the grid
/// surface accepts whatever the user typed, including empty names and
/// negative costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub kind: ResourceKind,
    /// Free-text grouping tag, e.g. "detection", "water", "pump"
    pub category: String,
    /// Unit of measure shown next to quantities, e.g. "ea", "roll", "day"
    pub unit: String,
    pub unit_cost: Decimal,
}

/// A labor role with its hourly rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborRole {
    pub title: String,
    pub hourly_cost: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        for kind in ResourceKind::ALL {
            let parsed: ResourceKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("widget".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_kind_serde_uses_lowercase() {
        let json = serde_json::to_string(&ResourceKind::Equipment).unwrap();
        assert_eq!(json, "\"equipment\"");
    }
}
