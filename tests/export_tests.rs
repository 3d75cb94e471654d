//! Integration tests for the export surfaces

use rust_decimal_macros::dec;

use firequote::catalog::CatalogStore;
use firequote::config::Branding;
use firequote::export;
use firequote::quote::QuoteState;

fn full_quote() -> QuoteState {
    let store = CatalogStore::seeded().unwrap();
    let mut state = QuoteState::new();
    state.project.client = "ACME Warehouse".to_string();

    // One line of every kind the seed carries, plus labor
    state.add_material(store.entry("det-panel-4z").unwrap(), dec!(1));
    state.add_material(store.entry("wat-sprinkler").unwrap(), dec!(24));
    state.add_material(store.entry("pmp-laser").unwrap(), dec!(2));
    state.add_labor(store.role("Lead Technician").unwrap(), 2, dec!(8));
    state.add_labor(store.role("Helper").unwrap(), 1, dec!(8));

    state.set_general_expenses(dec!(50));
    state.set_margin(30);
    state
}

#[test]
fn summary_itemizes_the_whole_cart() {
    let state = full_quote();
    let totals = state.totals();
    let text = export::summary_text(&state, &totals, &Branding::default()).unwrap();

    assert!(text.contains("Client:    ACME Warehouse"));
    assert!(text.contains("[equipment] 4-Zone Alarm Panel"));
    assert!(text.contains("[material] Sprinkler Head K5.6"));
    assert!(text.contains("[tool] Laser Shaft Aligner"));
    assert!(text.contains("[labor] Lead Technician"));
    assert!(text.contains("[labor] Helper"));
    assert!(text.contains("General expenses: S/. 50.00"));
    assert!(text.contains("Margin:           30%"));
}

#[test]
fn summary_totals_agree_with_the_builder() {
    let state = full_quote();
    let totals = state.totals();
    let text = export::summary_text(&state, &totals, &Branding::default()).unwrap();

    // 1200 + 432 + 300 = 1932 materials; 560 + 120 = 680 labor; +50 = 2662
    assert!(text.contains("Direct cost:      S/. 2,662.00"));
    assert!(text.contains("SALE PRICE:       S/. 3,460.60"));
    assert!(text.contains("Profit:           S/. 798.60"));
}

#[test]
fn pdf_renders_all_sections_for_a_full_cart() {
    let state = full_quote();
    let totals = state.totals();
    let bytes = export::render_pdf(&state, &totals, &Branding::default()).unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1000);
}

#[test]
fn pdf_renders_for_a_labor_only_cart() {
    let store = CatalogStore::seeded().unwrap();
    let mut state = QuoteState::new();
    state.add_labor(store.role("Welder").unwrap(), 1, dec!(6));
    let totals = state.totals();

    let with_labor = export::render_pdf(&state, &totals, &Branding::default()).unwrap();
    assert!(with_labor.starts_with(b"%PDF"));
}

#[test]
fn whatsapp_link_carries_client_and_total() {
    let state = full_quote();
    let totals = state.totals();
    let link = export::whatsapp_link(
        &Branding::default(),
        &state.project.client,
        "+51 999 888 777",
        totals.sale_price,
    );

    assert!(link.starts_with("https://wa.me/51999888777?text="));
    assert!(link.contains("ACME%20Warehouse"));
    assert!(link.contains("3%2C460.60"));
}
