//! Pre-filled WhatsApp share links.

use rust_decimal::Decimal;

use crate::config::Branding;
use crate::quote::money::format_currency;

/// Build a `wa.me` link that opens a chat with the client pre-filled with
/// the company name and the quoted total.
///
/// The phone number is reduced to its digits (wa.me rejects `+`, spaces,
/// and dashes); the message body is URL-encoded.
pub fn whatsapp_link(branding: &Branding, client: &str, phone: &str, sale_price: Decimal) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let message = format!(
        "*{}*\nClient: {}\nTotal: {}",
        branding.company,
        client,
        format_currency(sale_price, &branding.currency_prefix)
    );
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(&message))
}
