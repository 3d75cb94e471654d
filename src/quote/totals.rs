//! Aggregate quote figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::quote::line::{LaborLine, MaterialLine};
use crate::quote::money::round_currency;

/// Derived totals for the current cart.
///
/// Always recomputed from the line items on request; nothing here is cached
/// between mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub materials_cost: Decimal,
    pub labor_cost: Decimal,
    pub direct_cost: Decimal,
    pub sale_price: Decimal,
    pub profit: Decimal,
}

impl Totals {
    /// Compute totals over the given lines and financial knobs.
    ///
    /// `direct_cost = materials + labor + general expenses` and
    /// `profit = sale_price - direct_cost` hold exactly; only the sale price
    /// itself is rounded to currency precision.
    pub fn compute(
        materials: &[MaterialLine],
        labor: &[LaborLine],
        general_expenses: Decimal,
        margin_percent: u8,
    ) -> Self {
        let materials_cost: Decimal = materials.iter().map(|l| l.subtotal).sum();
        let labor_cost: Decimal = labor.iter().map(|l| l.subtotal).sum();
        let direct_cost = materials_cost + labor_cost + general_expenses;

        let margin = Decimal::from(margin_percent) / Decimal::from(100);
        let sale_price = round_currency(direct_cost * (Decimal::ONE + margin));

        Self {
            materials_cost,
            labor_cost,
            direct_cost,
            sale_price,
            profit: sale_price - direct_cost,
        }
    }
}

/// One slice of the cost breakdown behind the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownSlice {
    pub label: String,
    pub amount: Decimal,
}

impl BreakdownSlice {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}
