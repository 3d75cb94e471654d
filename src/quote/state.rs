//! The session cart - ordered line items plus the financial knobs.
//!
//! `QuoteState` is a plain value owned by whoever runs the session; every
//! mutation is an explicit method call and every read recomputes from
//! current state. Rejected input (non-positive quantities, zero people)
//! leaves the state untouched and returns `None` instead of an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogEntry, LaborRole, ResourceKind};
use crate::quote::line::{LaborLine, LineId, MaterialLine};
use crate::quote::money::round_currency;
use crate::quote::project::ProjectInfo;
use crate::quote::reference::QuoteRef;
use crate::quote::totals::{BreakdownSlice, Totals};

/// Everything one quoting session accumulates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteState {
    pub reference: QuoteRef,
    pub project: ProjectInfo,
    materials: Vec<MaterialLine>,
    labor: Vec<LaborLine>,
    general_expenses: Decimal,
    margin_percent: u8,
    next_line: u64,
}

impl QuoteState {
    /// A fresh cart: no lines, no expenses, zero margin.
    pub fn new() -> Self {
        Self {
            reference: QuoteRef::new(),
            project: ProjectInfo::default(),
            materials: Vec::new(),
            labor: Vec::new(),
            general_expenses: Decimal::ZERO,
            margin_percent: 0,
            next_line: 1,
        }
    }

    fn next_line_id(&mut self) -> LineId {
        let id = LineId(self.next_line);
        self.next_line += 1;
        id
    }

    /// Append a resource line priced at the entry's current unit cost.
    ///
    /// Returns `None` without touching the cart when `quantity <= 0`. The
    /// entry's fields are copied into the line, so later catalog edits do
    /// not reprice it.
    pub fn add_material(&mut self, entry: &CatalogEntry, quantity: Decimal) -> Option<LineId> {
        if quantity <= Decimal::ZERO {
            return None;
        }
        let id = self.next_line_id();
        self.materials.push(MaterialLine {
            id,
            name: entry.name.clone(),
            kind: entry.kind,
            category: entry.category.clone(),
            unit: entry.unit.clone(),
            unit_cost: entry.unit_cost,
            quantity,
            subtotal: round_currency(entry.unit_cost * quantity),
        });
        Some(id)
    }

    /// Append a labor line priced at the role's current hourly cost.
    ///
    /// Returns `None` without touching the cart when `people == 0` or
    /// `hours <= 0`.
    pub fn add_labor(&mut self, role: &LaborRole, people: u32, hours: Decimal) -> Option<LineId> {
        if people == 0 || hours <= Decimal::ZERO {
            return None;
        }
        let id = self.next_line_id();
        self.labor.push(LaborLine {
            id,
            role: role.title.clone(),
            hourly_cost: role.hourly_cost,
            people,
            hours,
            subtotal: round_currency(role.hourly_cost * Decimal::from(people) * hours),
        });
        Some(id)
    }

    /// Remove a resource line by its stable id. Returns false if no line
    /// carries that id.
    pub fn remove_material(&mut self, id: LineId) -> bool {
        match self.materials.iter().position(|l| l.id == id) {
            Some(pos) => {
                self.materials.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove a labor line by its stable id. Returns false if no line
    /// carries that id.
    pub fn remove_labor(&mut self, id: LineId) -> bool {
        match self.labor.iter().position(|l| l.id == id) {
            Some(pos) => {
                self.labor.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Empty both line lists. General expenses and margin keep their values.
    pub fn clear_lines(&mut self) {
        self.materials.clear();
        self.labor.clear();
    }

    pub fn materials(&self) -> &[MaterialLine] {
        &self.materials
    }

    pub fn labor(&self) -> &[LaborLine] {
        &self.labor
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty() && self.labor.is_empty()
    }

    /// Set general expenses, clamped below at zero.
    pub fn set_general_expenses(&mut self, amount: Decimal) {
        self.general_expenses = amount.max(Decimal::ZERO);
    }

    pub fn general_expenses(&self) -> Decimal {
        self.general_expenses
    }

    /// Set the markup percentage, clamped to 0..=100.
    pub fn set_margin(&mut self, percent: i64) {
        self.margin_percent = percent.clamp(0, 100) as u8;
    }

    pub fn margin_percent(&self) -> u8 {
        self.margin_percent
    }

    /// Current totals, recomputed from scratch.
    pub fn totals(&self) -> Totals {
        Totals::compute(
            &self.materials,
            &self.labor,
            self.general_expenses,
            self.margin_percent,
        )
    }

    /// Sum of resource subtotals for one kind.
    pub fn kind_total(&self, kind: ResourceKind) -> Decimal {
        self.materials
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| l.subtotal)
            .sum()
    }

    /// Where the sale price goes: one slice per resource kind with lines in
    /// the cart, then labor, general expenses, and profit.
    pub fn cost_breakdown(&self) -> Vec<BreakdownSlice> {
        let totals = self.totals();
        let mut slices = Vec::new();
        for kind in ResourceKind::ALL {
            let amount = self.kind_total(kind);
            if !amount.is_zero() {
                slices.push(BreakdownSlice::new(kind.plural_label(), amount));
            }
        }
        slices.push(BreakdownSlice::new("Labor", totals.labor_cost));
        slices.push(BreakdownSlice::new("General expenses", self.general_expenses));
        slices.push(BreakdownSlice::new("Profit", totals.profit));
        slices
    }
}

impl Default for QuoteState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn entry(cost: Decimal) -> CatalogEntry {
        CatalogEntry {
            id: "det-smoke".to_string(),
            name: "Smoke Detector".to_string(),
            kind: ResourceKind::Equipment,
            category: "detection".to_string(),
            unit: "ea".to_string(),
            unit_cost: cost,
        }
    }

    fn role(hourly: Decimal) -> LaborRole {
        LaborRole {
            title: "Lead Technician".to_string(),
            hourly_cost: hourly,
        }
    }

    #[test]
    fn add_material_snapshots_price_and_rounds_subtotal() {
        let mut state = QuoteState::new();
        let id = state.add_material(&entry(dec!(45.0)), dec!(3)).unwrap();

        let line = &state.materials()[0];
        assert_eq!(line.id, id);
        assert_eq!(line.subtotal, dec!(135.00));
        assert_eq!(line.unit_cost, dec!(45.0));
    }

    #[test]
    fn add_material_rejects_non_positive_quantity() {
        let mut state = QuoteState::new();
        assert_eq!(state.add_material(&entry(dec!(45.0)), dec!(0)), None);
        assert_eq!(state.add_material(&entry(dec!(45.0)), dec!(-2)), None);
        assert!(state.materials().is_empty());
        assert!(state.labor().is_empty());
    }

    #[test]
    fn add_labor_computes_people_times_hours() {
        let mut state = QuoteState::new();
        state.add_labor(&role(dec!(22.0)), 2, dec!(4)).unwrap();

        assert_eq!(state.labor()[0].subtotal, dec!(176.00));
    }

    #[test]
    fn add_labor_rejects_zero_people_and_non_positive_hours() {
        let mut state = QuoteState::new();
        assert_eq!(state.add_labor(&role(dec!(22.0)), 0, dec!(4)), None);
        assert_eq!(state.add_labor(&role(dec!(22.0)), 2, dec!(0)), None);
        assert_eq!(state.add_labor(&role(dec!(22.0)), 2, dec!(-1)), None);
        assert!(state.labor().is_empty());
    }

    #[test]
    fn later_catalog_edits_do_not_reprice_existing_lines() {
        let mut state = QuoteState::new();
        let mut e = entry(dec!(45.0));
        state.add_material(&e, dec!(3));

        e.unit_cost = dec!(99.0);
        state.add_material(&e, dec!(1));

        assert_eq!(state.materials()[0].subtotal, dec!(135.00));
        assert_eq!(state.materials()[1].subtotal, dec!(99.00));
    }

    #[test]
    fn remove_by_id_preserves_other_lines_and_their_ids() {
        let mut state = QuoteState::new();
        let a = state.add_material(&entry(dec!(10)), dec!(1)).unwrap();
        let b = state.add_material(&entry(dec!(20)), dec!(1)).unwrap();
        let c = state.add_material(&entry(dec!(30)), dec!(1)).unwrap();

        assert!(state.remove_material(b));
        let ids: Vec<LineId> = state.materials().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(state.materials()[0].subtotal, dec!(10.00));
        assert_eq!(state.materials()[1].subtotal, dec!(30.00));

        // A second removal of the same id is a no-op
        assert!(!state.remove_material(b));
        assert_eq!(state.materials().len(), 2);
    }

    #[test]
    fn line_ids_are_never_reused_within_a_session() {
        let mut state = QuoteState::new();
        let a = state.add_material(&entry(dec!(10)), dec!(1)).unwrap();
        state.remove_material(a);
        let b = state.add_material(&entry(dec!(10)), dec!(1)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn totals_match_the_reference_scenario() {
        let mut state = QuoteState::new();
        state.add_material(&entry(dec!(45.0)), dec!(3));
        state.set_margin(20);
        state.set_general_expenses(dec!(0));

        let totals = state.totals();
        assert_eq!(totals.materials_cost, dec!(135.00));
        assert_eq!(totals.labor_cost, dec!(0));
        assert_eq!(totals.direct_cost, dec!(135.00));
        assert_eq!(totals.sale_price, dec!(162.00));
        assert_eq!(totals.profit, dec!(27.00));
    }

    #[test]
    fn totals_include_general_expenses_in_direct_cost() {
        let mut state = QuoteState::new();
        state.add_material(&entry(dec!(45.0)), dec!(2));
        state.add_labor(&role(dec!(20.0)), 1, dec!(5));
        state.set_general_expenses(dec!(10));
        state.set_margin(0);

        let totals = state.totals();
        assert_eq!(totals.direct_cost, dec!(200.00));
        assert_eq!(totals.sale_price, dec!(200.00));
        assert_eq!(totals.profit, dec!(0.00));
    }

    #[test]
    fn clear_lines_keeps_expenses_and_margin() {
        let mut state = QuoteState::new();
        state.add_material(&entry(dec!(45.0)), dec!(3));
        state.add_labor(&role(dec!(22.0)), 2, dec!(4));
        state.set_general_expenses(dec!(50));
        state.set_margin(30);

        state.clear_lines();

        assert!(state.is_empty());
        assert_eq!(state.general_expenses(), dec!(50));
        assert_eq!(state.margin_percent(), 30);

        let totals = state.totals();
        assert_eq!(totals.materials_cost, dec!(0));
        assert_eq!(totals.labor_cost, dec!(0));
        assert_eq!(totals.direct_cost, dec!(50));
        assert_eq!(totals.sale_price, dec!(65.00));
    }

    #[test]
    fn setters_clamp_out_of_range_values() {
        let mut state = QuoteState::new();
        state.set_general_expenses(dec!(-10));
        assert_eq!(state.general_expenses(), dec!(0));

        state.set_margin(150);
        assert_eq!(state.margin_percent(), 100);
        state.set_margin(-5);
        assert_eq!(state.margin_percent(), 0);
    }

    #[test]
    fn breakdown_covers_the_sale_price() {
        let mut state = QuoteState::new();
        state.add_material(&entry(dec!(45.0)), dec!(3));
        state.add_labor(&role(dec!(22.0)), 2, dec!(4));
        state.set_general_expenses(dec!(50));
        state.set_margin(30);

        let total: Decimal = state.cost_breakdown().iter().map(|s| s.amount).sum();
        assert_eq!(total, state.totals().sale_price);
    }
}
