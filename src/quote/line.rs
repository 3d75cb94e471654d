//! Quote line items - immutable price snapshots.
//!
//! A line item copies the catalog fields it was built from, so later catalog
//! edits never change a quote that has already been priced. Lines carry a
//! stable [`LineId`] so removal survives any amount of list reshuffling in
//! the views.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::ResourceKind;

/// Stable per-session identifier for a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub(crate) u64);

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A priced resource added to the cart.
///
/// `subtotal` is `unit_cost x quantity`, rounded to currency precision at
/// the moment of addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub id: LineId,
    pub name: String,
    pub kind: ResourceKind,
    pub category: String,
    pub unit: String,
    pub unit_cost: Decimal,
    pub quantity: Decimal,
    pub subtotal: Decimal,
}

/// A labor role added to the cart.
///
/// `subtotal` is `hourly_cost x people x hours`, rounded to currency
/// precision at the moment of addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborLine {
    pub id: LineId,
    pub role: String,
    pub hourly_cost: Decimal,
    pub people: u32,
    pub hours: Decimal,
    pub subtotal: Decimal,
}
