//! Integration tests for quote building against the seeded catalog

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use firequote::catalog::{CatalogEntry, CatalogStore, ResourceKind};
use firequote::quote::QuoteState;

#[test]
fn seeded_catalog_prices_a_full_quote() {
    let store = CatalogStore::seeded().unwrap();
    let mut state = QuoteState::new();

    let panel = store.entry("det-panel-4z").unwrap();
    let detector = store.entry("det-smoke").unwrap();
    let lead = store.role("Lead Technician").unwrap();

    state.add_material(panel, dec!(1));
    state.add_material(detector, dec!(6));
    state.add_labor(lead, 2, dec!(8));
    state.set_general_expenses(dec!(50));
    state.set_margin(30);

    let totals = state.totals();
    assert_eq!(totals.materials_cost, dec!(1470.00));
    assert_eq!(totals.labor_cost, dec!(560.00));
    assert_eq!(totals.direct_cost, dec!(2080.00));
    assert_eq!(totals.sale_price, dec!(2704.00));
    assert_eq!(totals.profit, dec!(624.00));
}

#[test]
fn totals_are_insertion_order_independent() {
    let store = CatalogStore::seeded().unwrap();
    let ids = ["det-panel-4z", "wat-sprinkler", "pmp-jockey", "det-emt-34"];

    let mut forward = QuoteState::new();
    for id in ids {
        forward.add_material(store.entry(id).unwrap(), dec!(2));
    }

    let mut backward = QuoteState::new();
    for id in ids.iter().rev() {
        backward.add_material(store.entry(id).unwrap(), dec!(2));
    }

    assert_eq!(forward.totals(), backward.totals());

    // Display order still matches insertion order
    let names: Vec<&str> = forward.materials().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "4-Zone Alarm Panel",
            "Sprinkler Head K5.6",
            "Jockey Pump 5 HP",
            "EMT Conduit 3/4\""
        ]
    );
}

#[test]
fn fractional_quantities_round_to_currency_precision() {
    let store = CatalogStore::seeded().unwrap();
    let conduit = store.entry("det-emt-34").unwrap();
    assert_eq!(conduit.unit_cost, dec!(6.20));

    let mut state = QuoteState::new();
    state.add_material(conduit, dec!(2.5));
    state.add_material(conduit, dec!(0.333));

    assert_eq!(state.materials()[0].subtotal, dec!(15.50));
    // 6.20 x 0.333 = 2.0646, half-up to 2.06
    assert_eq!(state.materials()[1].subtotal, dec!(2.06));
}

#[test]
fn catalog_replacement_does_not_touch_the_cart() {
    let mut store = CatalogStore::seeded().unwrap();
    let mut state = QuoteState::new();
    state.add_material(store.entry("det-smoke").unwrap(), dec!(4));

    // Wipe the catalog entirely; the quoted line keeps its snapshot
    store.replace_entries(Vec::new());
    assert!(store.all_entries().is_empty());

    assert_eq!(state.materials().len(), 1);
    assert_eq!(state.materials()[0].subtotal, dec!(180.00));
    assert_eq!(state.totals().materials_cost, dec!(180.00));
}

#[test]
fn rejected_adds_leave_no_partial_state() {
    let store = CatalogStore::seeded().unwrap();
    let mut state = QuoteState::new();
    let entry = store.entry("wat-cabinet").unwrap();
    let role = store.role("Welder").unwrap();

    assert!(state.add_material(entry, dec!(0)).is_none());
    assert!(state.add_material(entry, dec!(-3)).is_none());
    assert!(state.add_labor(role, 0, dec!(4)).is_none());
    assert!(state.add_labor(role, 3, dec!(-0.5)).is_none());

    assert!(state.is_empty());
    assert_eq!(state.totals().direct_cost, dec!(0));
}

#[test]
fn permissive_catalog_rows_still_price_lines() {
    // The grid surface accepts odd rows; pricing follows them verbatim
    let entry = CatalogEntry {
        id: "odd".into(),
        name: String::new(),
        kind: ResourceKind::Service,
        category: "misc".into(),
        unit: "ea".into(),
        unit_cost: dec!(-12.50),
    };
    let mut state = QuoteState::new();
    state.add_material(&entry, dec!(2));

    assert_eq!(state.materials()[0].subtotal, dec!(-25.00));
    assert_eq!(state.totals().direct_cost, dec!(-25.00));
}
