//! Paginated PDF quote document.
//!
//! Fixed A4 layout drawn with printpdf's built-in Helvetica faces: a
//! branded header and footer on every page, one table section per resource
//! kind present in the cart, a labor section, and a closing sale-price
//! block. Rendering is pure in-memory work; only the caller's file write
//! can fail with I/O.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Polygon, Rgb,
};
use rust_decimal::Decimal;

use crate::catalog::ResourceKind;
use crate::config::Branding;
use crate::export::ExportError;
use crate::quote::money::format_currency;
use crate::quote::{LaborLine, MaterialLine, QuoteState, Totals};

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN_LEFT: f64 = 10.0;
const CONTENT_TOP: f64 = 258.0;
const CONTENT_BOTTOM: f64 = 22.0;
const ROW_HEIGHT: f64 = 8.0;
const LOGO_WIDTH: f64 = 25.0;

/// Description, quantity, unit price, subtotal
const COL_WIDTHS: [f64; 4] = [100.0, 30.0, 30.0, 30.0];
const TABLE_WIDTH: f64 = 190.0;

/// Descriptions longer than this are cut to keep the column grid intact
const DESC_MAX_CHARS: usize = 60;

fn accent() -> Rgb {
    Rgb::new(0.0, 0.78, 0.89, None)
}

fn border() -> Rgb {
    Rgb::new(0.25, 0.25, 0.25, None)
}

fn black() -> Rgb {
    Rgb::new(0.0, 0.0, 0.0, None)
}

/// Light header tint per section, matching the on-screen grouping colors
fn section_tint(kind: Option<ResourceKind>) -> Rgb {
    match kind {
        Some(ResourceKind::Equipment) => Rgb::new(0.86, 0.94, 1.0, None),
        Some(ResourceKind::Material) => Rgb::new(0.92, 1.0, 0.92, None),
        Some(ResourceKind::Tool) => Rgb::new(1.0, 0.98, 0.90, None),
        Some(ResourceKind::Service) => Rgb::new(0.95, 0.92, 1.0, None),
        // Labor
        None => Rgb::new(1.0, 0.94, 0.94, None),
    }
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

/// Approximate Helvetica advance width in millimetres.
///
/// Built-in PDF fonts carry no metrics at this layer; this is close enough
/// to center headings and right-align numeric columns on a fixed grid.
fn text_width_mm(text: &str, size_pt: f64) -> f64 {
    let em: f64 = text
        .chars()
        .map(|c| match c {
            '.' | ',' | ':' | ';' | '\'' | '!' | '|' | 'i' | 'j' | 'l' => 0.28,
            ' ' | 'f' | 't' | 'r' | 'I' | '(' | ')' | '/' => 0.33,
            'm' | 'w' | 'M' | 'W' | '@' => 0.85,
            c if c.is_ascii_uppercase() => 0.69,
            _ => 0.54,
        })
        .sum();
    em * size_pt * 0.352_778
}

fn truncate_desc(s: &str) -> String {
    if s.chars().count() <= DESC_MAX_CHARS {
        s.to_string()
    } else {
        s.chars().take(DESC_MAX_CHARS).collect()
    }
}

struct Painter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    cursor: f64,
    page_no: u32,
}

impl Painter {
    fn new(branding: &Branding, title: &str) -> Result<Self, ExportError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let italic = doc.add_builtin_font(BuiltinFont::HelveticaOblique)?;
        let layer = doc.get_page(page).get_layer(layer);

        let mut painter = Self {
            doc,
            layer,
            regular,
            bold,
            italic,
            cursor: CONTENT_TOP,
            page_no: 1,
        };
        painter.draw_header(branding);
        painter.draw_footer(branding);
        Ok(painter)
    }

    fn start_page(&mut self, branding: &Branding) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.page_no += 1;
        self.cursor = CONTENT_TOP;
        self.draw_header(branding);
        self.draw_footer(branding);
    }

    /// Break to a new page unless `needed` millimetres fit above the footer.
    fn ensure_room(&mut self, needed: f64, branding: &Branding) {
        if self.cursor - needed < CONTENT_BOTTOM {
            self.start_page(branding);
        }
    }

    fn text(&self, s: &str, size: f64, x: f64, y: f64, font: &IndirectFontRef) {
        self.layer.set_fill_color(Color::Rgb(black()));
        self.layer.use_text(s, size, Mm(x), Mm(y), font);
    }

    fn text_centered(&self, s: &str, size: f64, y: f64, font: &IndirectFontRef) {
        let x = (PAGE_WIDTH - text_width_mm(s, size)) / 2.0;
        self.text(s, size, x, y, font);
    }

    fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: Rgb, thickness: f64) {
        self.layer.set_outline_color(Color::Rgb(color));
        self.layer.set_outline_thickness(thickness);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(from.0), Mm(from.1)), false),
                (Point::new(Mm(to.0), Mm(to.1)), false),
            ],
            is_closed: false,
        });
    }

    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        self.layer.set_fill_color(Color::Rgb(color));
        self.layer.add_polygon(Polygon {
            rings: vec![vec![
                (Point::new(Mm(x), Mm(y)), false),
                (Point::new(Mm(x + w), Mm(y)), false),
                (Point::new(Mm(x + w), Mm(y + h)), false),
                (Point::new(Mm(x), Mm(y + h)), false),
            ]],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    /// Header: logo when one is configured and readable, otherwise the
    /// company name alone, then the accent rule.
    fn draw_header(&mut self, branding: &Branding) {
        let drew_logo = branding
            .logo_path
            .as_deref()
            .is_some_and(|path| self.try_draw_logo(path).is_some());

        if drew_logo {
            self.text(&branding.company, 13.0, 40.0, 283.0, &self.bold);
            self.text(&branding.tagline, 8.0, 40.0, 278.0, &self.italic);
            if !branding.contact_phone.is_empty() {
                let contact = format!("Contact: {}", branding.contact_phone);
                self.text(&contact, 8.0, 40.0, 273.5, &self.bold);
            }
        } else {
            self.text_centered(&branding.company, 15.0, 281.0, &self.bold);
            self.text_centered(&branding.tagline, 9.0, 275.0, &self.italic);
        }

        self.stroke_line((MARGIN_LEFT, 266.0), (200.0, 266.0), accent(), 1.2);
    }

    /// Best-effort logo embedding. Any failure (missing file, bad PNG)
    /// returns None and the caller falls back to text.
    fn try_draw_logo(&self, path: &Path) -> Option<()> {
        let file = File::open(path).ok()?;
        let decoder = PngDecoder::new(BufReader::new(file)).ok()?;
        let image = Image::try_from(decoder).ok()?;

        // Scale to a fixed header width; images without an explicit dpi are
        // placed at 300
        let width_px = image.image.width.0 as f64;
        if width_px <= 0.0 {
            return None;
        }
        let natural_mm = width_px * 25.4 / 300.0;
        let scale = LOGO_WIDTH / natural_mm;

        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(MARGIN_LEFT)),
                translate_y: Some(Mm(271.0)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                ..Default::default()
            },
        );
        Some(())
    }

    fn draw_footer(&self, branding: &Branding) {
        let note = format!("Page {} - Generated by {}", self.page_no, branding.company);
        self.text_centered(&note, 8.0, 12.0, &self.italic);
    }

    /// Client, date, and reference lines under the header.
    fn project_block(&mut self, state: &QuoteState, branding: &Branding) {
        let lines = [
            format!("Client: {}", state.project.client),
            format!("Date: {}", state.project.date.format("%Y-%m-%d")),
            format!(
                "Reference: {} - {} ({})",
                state.project.service, state.project.area, state.reference
            ),
        ];
        for line in lines {
            self.ensure_room(6.0, branding);
            let y = self.cursor - 4.5;
            self.text(&line, 11.0, MARGIN_LEFT, y, &self.regular);
            self.cursor -= 6.0;
        }
        self.cursor -= 4.0;
    }

    fn section_title(&mut self, title: &str, branding: &Branding) {
        // Keep the title attached to at least the column header and one row
        self.ensure_room(10.0 + 2.0 * ROW_HEIGHT, branding);
        let y = self.cursor - 6.5;
        self.text(title, 10.0, MARGIN_LEFT, y, &self.bold);
        self.cursor -= 10.0;
    }

    fn table_row(
        &mut self,
        cells: [(&str, Align); 4],
        font: &IndirectFontRef,
        size: f64,
        tint: Option<Rgb>,
        branding: &Branding,
    ) {
        self.ensure_room(ROW_HEIGHT, branding);
        let y = self.cursor - ROW_HEIGHT;

        if let Some(color) = tint {
            self.fill_rect(MARGIN_LEFT, y, TABLE_WIDTH, ROW_HEIGHT, color);
        }

        // Cell grid: top edge, bottom edge, and the column boundaries
        let right = MARGIN_LEFT + TABLE_WIDTH;
        self.stroke_line((MARGIN_LEFT, y + ROW_HEIGHT), (right, y + ROW_HEIGHT), border(), 0.4);
        self.stroke_line((MARGIN_LEFT, y), (right, y), border(), 0.4);
        let mut x = MARGIN_LEFT;
        self.stroke_line((x, y), (x, y + ROW_HEIGHT), border(), 0.4);
        for width in COL_WIDTHS {
            x += width;
            self.stroke_line((x, y), (x, y + ROW_HEIGHT), border(), 0.4);
        }

        let mut x = MARGIN_LEFT;
        for (i, (content, align)) in cells.iter().enumerate() {
            let width = COL_WIDTHS[i];
            let tx = match align {
                Align::Left => x + 2.0,
                Align::Center => x + (width - text_width_mm(content, size)) / 2.0,
                Align::Right => x + width - text_width_mm(content, size) - 2.0,
            };
            self.text(content, size, tx, y + 2.8, font);
            x += width;
        }

        self.cursor = y;
    }

    fn column_header(&mut self, labels: [&str; 4], tint: Rgb, branding: &Branding) {
        let bold = self.bold.clone();
        self.table_row(
            [
                (labels[0], Align::Center),
                (labels[1], Align::Center),
                (labels[2], Align::Center),
                (labels[3], Align::Center),
            ],
            &bold,
            9.0,
            Some(tint),
            branding,
        );
    }

    fn resource_section(
        &mut self,
        number: usize,
        kind: ResourceKind,
        rows: &[&MaterialLine],
        branding: &Branding,
    ) {
        let title = match kind {
            ResourceKind::Equipment => format!("{}. EQUIPMENT SUPPLY", number),
            ResourceKind::Material => format!("{}. MATERIALS SUPPLY", number),
            ResourceKind::Tool => format!("{}. TOOLS & MINOR EQUIPMENT", number),
            ResourceKind::Service => format!("{}. SERVICES", number),
        };
        self.section_title(&title, branding);
        self.column_header(
            ["Description", "Qty", "Unit price", "Total"],
            section_tint(Some(kind)),
            branding,
        );

        let font = self.regular.clone();
        for line in rows {
            let desc = truncate_desc(&line.name);
            let qty = format!("{} {}", line.quantity, line.unit);
            let unit_cost = format!("{:.2}", line.unit_cost);
            let subtotal = format!("{:.2}", line.subtotal);
            self.table_row(
                [
                    (desc.as_str(), Align::Left),
                    (qty.as_str(), Align::Center),
                    (unit_cost.as_str(), Align::Right),
                    (subtotal.as_str(), Align::Right),
                ],
                &font,
                9.0,
                None,
                branding,
            );
        }
        self.cursor -= 5.0;
    }

    fn labor_section(&mut self, number: usize, rows: &[LaborLine], branding: &Branding) {
        self.section_title(&format!("{}. SPECIALIZED LABOR", number), branding);
        self.column_header(
            ["Role", "People", "Hours", "Total"],
            section_tint(None),
            branding,
        );

        let font = self.regular.clone();
        for line in rows {
            let desc = truncate_desc(&line.role);
            let people = line.people.to_string();
            let hours = line.hours.to_string();
            let subtotal = format!("{:.2}", line.subtotal);
            self.table_row(
                [
                    (desc.as_str(), Align::Left),
                    (people.as_str(), Align::Center),
                    (hours.as_str(), Align::Center),
                    (subtotal.as_str(), Align::Right),
                ],
                &font,
                9.0,
                None,
                branding,
            );
        }
        self.cursor -= 5.0;
    }

    fn total_block(&mut self, sale_price: Decimal, branding: &Branding) {
        self.ensure_room(16.0, branding);
        let amount = format_currency(sale_price, &branding.currency_prefix);
        let label = "TOTAL SALE:";
        let right_edge = MARGIN_LEFT + TABLE_WIDTH;
        let amount_x = right_edge - text_width_mm(&amount, 12.0);
        let label_x = amount_x - text_width_mm(label, 12.0) - 4.0;
        let y = self.cursor - 10.0;

        self.stroke_line(
            (110.0, self.cursor - 2.0),
            (right_edge, self.cursor - 2.0),
            accent(),
            0.8,
        );
        self.text(label, 12.0, label_x, y, &self.bold);
        self.text(&amount, 12.0, amount_x, y, &self.bold);
        self.cursor = y - 4.0;
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        Ok(self.doc.save_to_bytes()?)
    }
}

/// Render the quote as a paginated PDF, returned as bytes for the caller
/// to write wherever it wants.
pub fn render_pdf(
    state: &QuoteState,
    totals: &Totals,
    branding: &Branding,
) -> Result<Vec<u8>, ExportError> {
    let title = format!("Quotation {}", state.reference);
    let mut painter = Painter::new(branding, &title)?;
    painter.project_block(state, branding);

    let mut section_no = 0;
    for kind in ResourceKind::ALL {
        let rows: Vec<&MaterialLine> = state
            .materials()
            .iter()
            .filter(|l| l.kind == kind)
            .collect();
        if rows.is_empty() {
            continue;
        }
        section_no += 1;
        painter.resource_section(section_no, kind, &rows, branding);
    }

    if !state.labor().is_empty() {
        section_no += 1;
        painter.labor_section(section_no, state.labor(), branding);
    }

    painter.total_block(totals.sale_price, branding);
    painter.finish()
}
