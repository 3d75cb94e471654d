//! Terminal rendering for catalog, cart, and totals views.
//!
//! Row structs carry pre-formatted strings so every money column goes
//! through the one currency formatter.

use console::style;
use rust_decimal::prelude::ToPrimitive;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::catalog::{CatalogEntry, LaborRole};
use crate::config::Branding;
use crate::quote::money::{format_amount, format_currency};
use crate::quote::totals::BreakdownSlice;
use crate::quote::{LaborLine, MaterialLine, QuoteState, Totals};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "KIND")]
    kind: String,
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "UNIT")]
    unit: String,
    #[tabled(rename = "UNIT COST")]
    unit_cost: String,
}

pub fn catalog_table<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let rows: Vec<EntryRow> = entries
        .into_iter()
        .map(|e| EntryRow {
            id: e.id.clone(),
            name: e.name.clone(),
            kind: e.kind.to_string(),
            category: e.category.clone(),
            unit: e.unit.clone(),
            unit_cost: format_amount(e.unit_cost),
        })
        .collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

#[derive(Tabled)]
struct RoleRow {
    #[tabled(rename = "TITLE")]
    title: String,
    #[tabled(rename = "HOURLY COST")]
    hourly_cost: String,
}

pub fn roles_table(roles: &[LaborRole]) -> String {
    let rows: Vec<RoleRow> = roles
        .iter()
        .map(|r| RoleRow {
            title: r.title.clone(),
            hourly_cost: format_amount(r.hourly_cost),
        })
        .collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

#[derive(Tabled)]
struct MaterialLineRow {
    #[tabled(rename = "LINE")]
    line: String,
    #[tabled(rename = "KIND")]
    kind: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "QTY")]
    quantity: String,
    #[tabled(rename = "UNIT COST")]
    unit_cost: String,
    #[tabled(rename = "SUBTOTAL")]
    subtotal: String,
}

pub fn materials_table(lines: &[MaterialLine]) -> String {
    let rows: Vec<MaterialLineRow> = lines
        .iter()
        .map(|l| MaterialLineRow {
            line: l.id.to_string(),
            kind: l.kind.to_string(),
            description: l.name.clone(),
            quantity: format!("{} {}", l.quantity, l.unit),
            unit_cost: format_amount(l.unit_cost),
            subtotal: format_amount(l.subtotal),
        })
        .collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

#[derive(Tabled)]
struct LaborLineRow {
    #[tabled(rename = "LINE")]
    line: String,
    #[tabled(rename = "ROLE")]
    role: String,
    #[tabled(rename = "PEOPLE")]
    people: String,
    #[tabled(rename = "HOURS")]
    hours: String,
    #[tabled(rename = "SUBTOTAL")]
    subtotal: String,
}

pub fn labor_table(lines: &[LaborLine]) -> String {
    let rows: Vec<LaborLineRow> = lines
        .iter()
        .map(|l| LaborLineRow {
            line: l.id.to_string(),
            role: l.role.clone(),
            people: l.people.to_string(),
            hours: l.hours.to_string(),
            subtotal: format_amount(l.subtotal),
        })
        .collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

/// One-line cart status shown between session actions.
pub fn status_line(state: &QuoteState, branding: &Branding) -> String {
    let totals = state.totals();
    let prefix = branding.currency_prefix.as_str();
    format!(
        "{} resource lines | {} labor lines | Direct {} | Sale {} ({}% margin)",
        state.materials().len(),
        state.labor().len(),
        format_currency(totals.direct_cost, prefix),
        style(format_currency(totals.sale_price, prefix)).cyan().bold(),
        state.margin_percent(),
    )
}

/// Multi-line totals summary for the review view.
pub fn totals_block(state: &QuoteState, totals: &Totals, branding: &Branding) -> String {
    let prefix = branding.currency_prefix.as_str();
    let mut out = String::new();
    out.push_str(&format!(
        "Materials:        {}\n",
        format_currency(totals.materials_cost, prefix)
    ));
    out.push_str(&format!(
        "Labor:            {}\n",
        format_currency(totals.labor_cost, prefix)
    ));
    out.push_str(&format!(
        "General expenses: {}\n",
        format_currency(state.general_expenses(), prefix)
    ));
    out.push_str(&format!(
        "Direct cost:      {}\n",
        format_currency(totals.direct_cost, prefix)
    ));
    out.push_str(&format!(
        "Sale price:       {}  ({}% margin)\n",
        style(format_currency(totals.sale_price, prefix)).cyan().bold(),
        state.margin_percent()
    ));
    out.push_str(&format!(
        "Profit:           {}",
        style(format_currency(totals.profit, prefix)).green()
    ));
    out
}

/// Per-line cost bars for the top-costs view, largest subtotal first.
pub fn top_costs_bar(lines: &[MaterialLine], branding: &Branding) -> String {
    const BAR_WIDTH: f64 = 36.0;
    let prefix = branding.currency_prefix.as_str();

    let mut ranked: Vec<&MaterialLine> = lines.iter().collect();
    ranked.sort_by(|a, b| b.subtotal.cmp(&a.subtotal));
    let largest = ranked.first().map(|l| l.subtotal).unwrap_or_default();

    let mut out = String::new();
    for line in ranked {
        let share = if largest.is_zero() {
            0.0
        } else {
            (line.subtotal / largest).to_f64().unwrap_or(0.0)
        };
        let filled = (share * BAR_WIDTH).round().max(0.0) as usize;
        let label: String = line.name.chars().take(24).collect();
        out.push_str(&format!(
            "{:<24} {:<36} {}\n",
            label,
            "#".repeat(filled.min(BAR_WIDTH as usize)),
            format_currency(line.subtotal, prefix)
        ));
    }
    out.trim_end().to_string()
}

/// Proportion bars for the cost breakdown view.
pub fn breakdown_bar(slices: &[BreakdownSlice], branding: &Branding) -> String {
    const BAR_WIDTH: f64 = 36.0;
    let prefix = branding.currency_prefix.as_str();
    let total: rust_decimal::Decimal = slices.iter().map(|s| s.amount).sum();

    let mut out = String::new();
    for slice in slices {
        let share = if total.is_zero() {
            0.0
        } else {
            (slice.amount / total).to_f64().unwrap_or(0.0)
        };
        let filled = (share * BAR_WIDTH).round().max(0.0) as usize;
        out.push_str(&format!(
            "{:<18} {:<36} {}\n",
            slice.label,
            "#".repeat(filled.min(BAR_WIDTH as usize)),
            format_currency(slice.amount, prefix)
        ));
    }
    out.trim_end().to_string()
}
