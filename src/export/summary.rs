//! Plain-text quote summary rendered from an embedded template.
//!
//! The summary is the copy-paste surface: deterministic for identical
//! input, no color codes, one line per cart item.

use rust_embed::Embed;
use serde::Serialize;
use tera::Tera;

use crate::config::Branding;
use crate::export::ExportError;
use crate::quote::money::format_currency;
use crate::quote::{QuoteState, Totals};

#[derive(Embed)]
#[folder = "templates/"]
struct Templates;

const SUMMARY_TEMPLATE: &str = "summary.txt.tera";

#[derive(Serialize)]
struct MaterialRow {
    kind: String,
    name: String,
    quantity: String,
    unit: String,
    unit_cost: String,
    subtotal: String,
}

#[derive(Serialize)]
struct LaborRow {
    role: String,
    people: u32,
    hours: String,
    hourly_cost: String,
    subtotal: String,
}

/// Render the quote as plain text.
pub fn summary_text(
    state: &QuoteState,
    totals: &Totals,
    branding: &Branding,
) -> Result<String, ExportError> {
    let raw = Templates::get(SUMMARY_TEMPLATE)
        .ok_or(ExportError::TemplateMissing(SUMMARY_TEMPLATE))?;
    let template = String::from_utf8_lossy(&raw.data);

    let mut tera = Tera::default();
    tera.add_raw_template(SUMMARY_TEMPLATE, &template)?;

    let prefix = branding.currency_prefix.as_str();
    let money = |amount| format_currency(amount, prefix);

    let materials: Vec<MaterialRow> = state
        .materials()
        .iter()
        .map(|l| MaterialRow {
            kind: l.kind.to_string(),
            name: l.name.clone(),
            quantity: l.quantity.to_string(),
            unit: l.unit.clone(),
            unit_cost: money(l.unit_cost),
            subtotal: money(l.subtotal),
        })
        .collect();

    let labor: Vec<LaborRow> = state
        .labor()
        .iter()
        .map(|l| LaborRow {
            role: l.role.clone(),
            people: l.people,
            hours: l.hours.to_string(),
            hourly_cost: money(l.hourly_cost),
            subtotal: money(l.subtotal),
        })
        .collect();

    let mut ctx = tera::Context::new();
    ctx.insert("company", &branding.company);
    ctx.insert("tagline", &branding.tagline);
    ctx.insert("reference", state.reference.as_str());
    ctx.insert("client", &state.project.client);
    ctx.insert("date", &state.project.date.format("%Y-%m-%d").to_string());
    ctx.insert("service", &state.project.service.to_string());
    ctx.insert("area", &state.project.area.to_string());
    ctx.insert("materials", &materials);
    ctx.insert("labor", &labor);
    ctx.insert("general_expenses", &money(state.general_expenses()));
    ctx.insert("margin_percent", &state.margin_percent());
    ctx.insert("direct_cost", &money(totals.direct_cost));
    ctx.insert("sale_price", &money(totals.sale_price));
    ctx.insert("profit", &money(totals.profit));

    Ok(tera.render(SUMMARY_TEMPLATE, &ctx)?)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::catalog::{CatalogEntry, LaborRole, ResourceKind};

    fn sample_state() -> QuoteState {
        let mut state = QuoteState::new();
        state.project.client = "ACME".to_string();
        state.add_material(
            &CatalogEntry {
                id: "det-smoke".into(),
                name: "Smoke Detector".into(),
                kind: ResourceKind::Equipment,
                category: "detection".into(),
                unit: "ea".into(),
                unit_cost: dec!(45.0),
            },
            dec!(3),
        );
        state.add_labor(
            &LaborRole {
                title: "Lead Technician".into(),
                hourly_cost: dec!(22.0),
            },
            2,
            dec!(4),
        );
        state.set_margin(20);
        state
    }

    #[test]
    fn summary_carries_every_line_and_total() {
        let state = sample_state();
        let totals = state.totals();
        let text = summary_text(&state, &totals, &Branding::default()).unwrap();

        assert!(text.contains("Client:    ACME"));
        assert!(text.contains("[equipment] Smoke Detector - 3 ea @ S/. 45.00 = S/. 135.00"));
        assert!(text.contains("[labor] Lead Technician - 2 people x 4 h @ S/. 22.00 = S/. 176.00"));
        assert!(text.contains("Margin:           20%"));
        assert!(text.contains("Direct cost:      S/. 311.00"));
        assert!(text.contains("SALE PRICE:       S/. 373.20"));
    }

    #[test]
    fn summary_is_deterministic() {
        let state = sample_state();
        let totals = state.totals();
        let branding = Branding::default();

        let first = summary_text(&state, &totals, &branding).unwrap();
        let second = summary_text(&state, &totals, &branding).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_sections_produce_no_item_lines() {
        let mut state = QuoteState::new();
        state.add_labor(
            &LaborRole {
                title: "Helper".into(),
                hourly_cost: dec!(15.0),
            },
            1,
            dec!(2),
        );
        let totals = state.totals();
        let text = summary_text(&state, &totals, &Branding::default()).unwrap();

        assert!(!text.contains("[equipment]"));
        assert!(!text.contains("[material]"));
        assert!(text.contains("[labor] Helper"));
    }
}
