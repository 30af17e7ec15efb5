//! Currency formatting for BRL amounts.

use rust_decimal::Decimal;

/// Format an amount with two decimal places and a dot separator: `160.00`.
///
/// This is the form embedded in the outbound order message.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", value)
}

/// Format an amount for on-screen display: `R$ 160,00` (comma separator).
pub fn format_brl_display(value: Decimal) -> String {
    format!("R$ {}", format_amount(value).replace('.', ","))
}
