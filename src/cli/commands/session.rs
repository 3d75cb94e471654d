//! `fq session` command - the interactive quoting session
//!
//! One run of this command is one quoting session: the catalog and the cart
//! live in memory and are dropped on exit. Every menu action mutates state
//! through an explicit `QuoteState` method, then the loop re-renders the
//! status line from current state; nothing is recomputed implicitly.

use std::fs;
use std::io::IsTerminal;
use std::path::Path;
use std::str::FromStr;

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;

use crate::catalog::{csv, CatalogStore, ResourceKind};
use crate::cli::{table, GlobalOpts};
use crate::config::Branding;
use crate::export;
use crate::quote::money::format_currency;
use crate::quote::{LineId, ProjectInfo, QuoteState, ServiceType, SystemArea};

const MENU: &[&str] = &[
    "Project info",
    "Add resource",
    "Add labor",
    "Review cart",
    "Remove line",
    "Cost breakdown",
    "Set general expenses",
    "Set margin",
    "Edit catalog",
    "Export quote",
    "Clear cart",
    "Quit",
];

pub fn run(global: &GlobalOpts) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        return Err(miette::miette!(
            "the quoting session is interactive; run `fq` from a terminal"
        ));
    }

    let branding = Branding::load(global.config.as_deref()).into_diagnostic()?;
    let mut store = super::load_store(global)?;

    let mut state = QuoteState::new();
    state.set_general_expenses(branding.default_general_expenses);
    state.set_margin(i64::from(branding.default_margin_percent));

    println!(
        "{}",
        style(format!("{} - quoting session", branding.company))
            .cyan()
            .bold()
    );
    println!("{}", style(format!("Quote {}", state.reference)).dim());

    let theme = ColorfulTheme::default();
    loop {
        println!();
        println!("{}", table::status_line(&state, &branding));

        let action = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(MENU)
            .default(0)
            .interact()
            .into_diagnostic()?;

        match action {
            0 => edit_project(&mut state.project, &theme)?,
            1 => add_resource(&store, &mut state, &branding, &theme)?,
            2 => add_labor(&store, &mut state, &branding, &theme)?,
            3 => review(&state, &branding),
            4 => remove_line(&mut state, &theme)?,
            5 => breakdown(&state, &branding),
            6 => set_expenses(&mut state, &branding, &theme)?,
            7 => set_margin(&mut state, &theme)?,
            8 => edit_catalog(&mut store, &theme)?,
            9 => export_menu(&state, &branding, &theme)?,
            10 => clear_cart(&mut state, &theme)?,
            _ => break,
        }
    }

    println!("{}", style("Session closed; nothing was persisted.").dim());
    Ok(())
}

fn prompt_decimal(theme: &ColorfulTheme, prompt: &str, default: &str) -> Result<Decimal> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(|s: &String| {
            Decimal::from_str(s.trim()).map(|_| ()).map_err(|_| "enter a number")
        })
        .interact_text()
        .into_diagnostic()?;
    Decimal::from_str(raw.trim()).into_diagnostic()
}

fn edit_project(project: &mut ProjectInfo, theme: &ColorfulTheme) -> Result<()> {
    project.client = Input::with_theme(theme)
        .with_prompt("Client")
        .default(project.client.clone())
        .interact_text()
        .into_diagnostic()?;

    project.contact_phone = Input::with_theme(theme)
        .with_prompt("Contact phone (digits, country code first)")
        .default(project.contact_phone.clone())
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()?;

    let date_str: String = Input::with_theme(theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(project.date.format("%Y-%m-%d").to_string())
        .validate_with(|s: &String| {
            chrono::NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| "use YYYY-MM-DD")
        })
        .interact_text()
        .into_diagnostic()?;
    project.date =
        chrono::NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").into_diagnostic()?;

    let area_idx = Select::with_theme(theme)
        .with_prompt("System")
        .items(&SystemArea::ALL)
        .default(
            SystemArea::ALL
                .iter()
                .position(|a| *a == project.area)
                .unwrap_or(0),
        )
        .interact()
        .into_diagnostic()?;
    project.area = SystemArea::ALL[area_idx];

    let service_idx = Select::with_theme(theme)
        .with_prompt("Service")
        .items(&ServiceType::ALL)
        .default(
            ServiceType::ALL
                .iter()
                .position(|s| *s == project.service)
                .unwrap_or(0),
        )
        .interact()
        .into_diagnostic()?;
    project.service = ServiceType::ALL[service_idx];

    Ok(())
}

fn add_resource(
    store: &CatalogStore,
    state: &mut QuoteState,
    branding: &Branding,
    theme: &ColorfulTheme,
) -> Result<()> {
    let categories = store.categories();
    if categories.is_empty() {
        println!("{}", style("The catalog is empty.").yellow());
        return Ok(());
    }

    let cat_idx = Select::with_theme(theme)
        .with_prompt("Subsystem")
        .items(&categories)
        .default(0)
        .interact()
        .into_diagnostic()?;
    let category = categories[cat_idx].as_str();

    let kinds: Vec<ResourceKind> = ResourceKind::ALL
        .into_iter()
        .filter(|k| !store.entries(Some(*k), Some(category)).is_empty())
        .collect();
    let kind_labels: Vec<&str> = kinds.iter().map(|k| k.plural_label()).collect();
    let kind_idx = Select::with_theme(theme)
        .with_prompt("Kind")
        .items(&kind_labels)
        .default(0)
        .interact()
        .into_diagnostic()?;
    let kind = kinds[kind_idx];

    let entries = store.entries(Some(kind), Some(category));
    let labels: Vec<String> = entries
        .iter()
        .map(|e| {
            format!(
                "{} ({} / {})",
                e.name,
                format_currency(e.unit_cost, &branding.currency_prefix),
                e.unit
            )
        })
        .collect();
    let entry_idx = Select::with_theme(theme)
        .with_prompt("Item")
        .items(&labels)
        .default(0)
        .interact()
        .into_diagnostic()?;
    let entry = entries[entry_idx];

    let quantity = prompt_decimal(theme, "Quantity", "1")?;
    match state.add_material(entry, quantity) {
        Some(id) => println!(
            "{}",
            style(format!("Added {} as line {}", entry.name, id)).green()
        ),
        None => println!(
            "{}",
            style("Nothing added: quantity must be positive.").yellow()
        ),
    }
    Ok(())
}

fn add_labor(
    store: &CatalogStore,
    state: &mut QuoteState,
    branding: &Branding,
    theme: &ColorfulTheme,
) -> Result<()> {
    let roles = store.roles();
    if roles.is_empty() {
        println!("{}", style("No labor roles in the catalog.").yellow());
        return Ok(());
    }

    let labels: Vec<String> = roles
        .iter()
        .map(|r| {
            format!(
                "{} ({}/h)",
                r.title,
                format_currency(r.hourly_cost, &branding.currency_prefix)
            )
        })
        .collect();
    let role_idx = Select::with_theme(theme)
        .with_prompt("Role")
        .items(&labels)
        .default(0)
        .interact()
        .into_diagnostic()?;
    let role = &roles[role_idx];

    let people_str: String = Input::with_theme(theme)
        .with_prompt("People")
        .default("1".to_string())
        .validate_with(|s: &String| {
            s.trim().parse::<u32>().map(|_| ()).map_err(|_| "enter a whole number")
        })
        .interact_text()
        .into_diagnostic()?;
    let people: u32 = people_str.trim().parse().into_diagnostic()?;

    let hours = prompt_decimal(theme, "Hours", "4")?;
    match state.add_labor(role, people, hours) {
        Some(id) => println!(
            "{}",
            style(format!("Added {} as line {}", role.title, id)).green()
        ),
        None => println!(
            "{}",
            style("Nothing added: people and hours must be positive.").yellow()
        ),
    }
    Ok(())
}

fn review(state: &QuoteState, branding: &Branding) {
    if state.materials().is_empty() && state.labor().is_empty() {
        println!("{}", style("The cart is empty.").yellow());
        return;
    }
    if !state.materials().is_empty() {
        println!("{}", table::materials_table(state.materials()));
    }
    if !state.labor().is_empty() {
        println!("{}", table::labor_table(state.labor()));
    }
    let totals = state.totals();
    println!("{}", table::totals_block(state, &totals, branding));
}

enum LineTarget {
    Material(LineId),
    Labor(LineId),
}

fn remove_line(state: &mut QuoteState, theme: &ColorfulTheme) -> Result<()> {
    if state.is_empty() {
        println!("{}", style("The cart is already empty.").yellow());
        return Ok(());
    }

    let mut labels = Vec::new();
    let mut targets = Vec::new();
    for line in state.materials() {
        labels.push(format!("{} [{}] {}", line.id, line.kind, line.name));
        targets.push(LineTarget::Material(line.id));
    }
    for line in state.labor() {
        labels.push(format!("{} [labor] {}", line.id, line.role));
        targets.push(LineTarget::Labor(line.id));
    }
    labels.push("Cancel".to_string());

    let idx = Select::with_theme(theme)
        .with_prompt("Remove which line?")
        .items(&labels)
        .default(0)
        .interact()
        .into_diagnostic()?;
    if idx == targets.len() {
        return Ok(());
    }

    let removed = match targets[idx] {
        LineTarget::Material(id) => state.remove_material(id),
        LineTarget::Labor(id) => state.remove_labor(id),
    };
    if removed {
        println!("{}", style("Line removed.").green());
    } else {
        println!("{}", style("That line is already gone.").yellow());
    }
    Ok(())
}

fn breakdown(state: &QuoteState, branding: &Branding) {
    println!("{}", table::breakdown_bar(&state.cost_breakdown(), branding));
    if !state.materials().is_empty() {
        println!();
        println!("{}", style("Top costs").bold());
        println!("{}", table::top_costs_bar(state.materials(), branding));
    }
}

fn set_expenses(
    state: &mut QuoteState,
    branding: &Branding,
    theme: &ColorfulTheme,
) -> Result<()> {
    let current = state.general_expenses().to_string();
    let amount = prompt_decimal(theme, "General expenses", &current)?;
    state.set_general_expenses(amount);
    println!(
        "General expenses set to {}",
        format_currency(state.general_expenses(), &branding.currency_prefix)
    );
    Ok(())
}

fn set_margin(state: &mut QuoteState, theme: &ColorfulTheme) -> Result<()> {
    let raw: String = Input::with_theme(theme)
        .with_prompt("Margin % (0-100)")
        .default(state.margin_percent().to_string())
        .validate_with(|s: &String| {
            s.trim().parse::<i64>().map(|_| ()).map_err(|_| "enter a whole number")
        })
        .interact_text()
        .into_diagnostic()?;
    let percent: i64 = raw.trim().parse().into_diagnostic()?;
    state.set_margin(percent);
    println!("Margin set to {}%", state.margin_percent());
    Ok(())
}

fn edit_catalog(store: &mut CatalogStore, theme: &ColorfulTheme) -> Result<()> {
    const ITEMS: &[&str] = &[
        "Show resources",
        "Show roles",
        "Import resources CSV",
        "Import roles CSV",
        "Export tables to CSV",
        "Back",
    ];
    let choice = Select::with_theme(theme)
        .with_prompt("Catalog")
        .items(ITEMS)
        .default(0)
        .interact()
        .into_diagnostic()?;

    match choice {
        0 => println!("{}", table::catalog_table(store.all_entries().iter())),
        1 => println!("{}", table::roles_table(store.roles())),
        2 => {
            let path: String = Input::with_theme(theme)
                .with_prompt("Resources CSV path")
                .interact_text()
                .into_diagnostic()?;
            match csv::read_entries_file(Path::new(path.trim())) {
                Ok(rows) => {
                    let n = rows.len();
                    store.replace_entries(rows);
                    println!("{}", style(format!("Loaded {} resource rows.", n)).green());
                }
                Err(e) => println!("{}", style(format!("Import failed: {}", e)).red()),
            }
        }
        3 => {
            let path: String = Input::with_theme(theme)
                .with_prompt("Roles CSV path")
                .interact_text()
                .into_diagnostic()?;
            match csv::read_roles_file(Path::new(path.trim())) {
                Ok(rows) => {
                    let n = rows.len();
                    store.replace_roles(rows);
                    println!("{}", style(format!("Loaded {} labor roles.", n)).green());
                }
                Err(e) => println!("{}", style(format!("Import failed: {}", e)).red()),
            }
        }
        4 => {
            let result = csv::write_entries_file(Path::new("resources.csv"), store.all_entries())
                .and_then(|_| csv::write_roles_file(Path::new("roles.csv"), store.roles()));
            match result {
                Ok(()) => println!(
                    "{}",
                    style("Wrote resources.csv and roles.csv to the current directory.").green()
                ),
                Err(e) => println!("{}", style(format!("Export failed: {}", e)).red()),
            }
        }
        _ => {}
    }
    Ok(())
}

fn export_menu(state: &QuoteState, branding: &Branding, theme: &ColorfulTheme) -> Result<()> {
    if state.is_empty() {
        println!(
            "{}",
            style("The cart is empty; add at least one line before exporting.").yellow()
        );
        return Ok(());
    }

    let totals = state.totals();
    const ITEMS: &[&str] = &["Save PDF", "Print text summary", "WhatsApp link", "Back"];
    let choice = Select::with_theme(theme)
        .with_prompt("Export")
        .items(ITEMS)
        .default(0)
        .interact()
        .into_diagnostic()?;

    match choice {
        0 => {
            let path: String = Input::with_theme(theme)
                .with_prompt("Output file")
                .default(format!("{}.pdf", state.reference))
                .interact_text()
                .into_diagnostic()?;
            let result = export::render_pdf(state, &totals, branding)
                .and_then(|bytes| fs::write(path.trim(), bytes).map_err(Into::into));
            match result {
                Ok(()) => println!("{}", style(format!("Wrote {}", path.trim())).green()),
                // The cart is untouched; the user can retry with another path
                Err(e) => println!("{}", style(format!("Export failed: {}", e)).red()),
            }
        }
        1 => match export::summary_text(state, &totals, branding) {
            Ok(text) => println!("\n{}", text),
            Err(e) => println!("{}", style(format!("Export failed: {}", e)).red()),
        },
        2 => {
            let phone: String = Input::with_theme(theme)
                .with_prompt("WhatsApp number (digits, country code first)")
                .default(state.project.contact_phone.clone())
                .allow_empty(true)
                .interact_text()
                .into_diagnostic()?;
            println!(
                "{}",
                export::whatsapp_link(branding, &state.project.client, &phone, totals.sale_price)
            );
        }
        _ => {}
    }
    Ok(())
}

fn clear_cart(state: &mut QuoteState, theme: &ColorfulTheme) -> Result<()> {
    if state.is_empty() {
        println!("{}", style("The cart is already empty.").yellow());
        return Ok(());
    }
    let confirmed = Confirm::with_theme(theme)
        .with_prompt("Remove all lines from the cart?")
        .default(false)
        .interact()
        .into_diagnostic()?;
    if confirmed {
        state.clear_lines();
        println!("{}", style("Cart cleared.").green());
    }
    Ok(())
}
