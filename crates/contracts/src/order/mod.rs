//! Order formatting and the WhatsApp checkout link.
//!
//! The rendered message is the externally observable contract of the whole
//! storefront: label text, field order and number formatting must not drift.

use std::fmt;

use crate::domain::Cart;
use crate::shared::money::format_amount;

/// WhatsApp number that receives orders (country code + DDD + number).
pub const WHATSAPP_NUMBER: &str = "5591986453823";

const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Why a checkout attempt was rejected. Surfaced inline in the UI, never
/// thrown; the checkout button stays disabled while one of these holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    EmptyCart,
    MissingCustomerName,
    MissingCustomerPhone,
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            OrderError::EmptyCart => "Seu carrinho está vazio",
            OrderError::MissingCustomerName => "Informe seu nome",
            OrderError::MissingCustomerPhone => "Informe seu WhatsApp de contato",
        };
        write!(f, "{message}")
    }
}

impl std::error::Error for OrderError {}

fn validate(cart: &Cart, customer_name: &str, customer_phone: &str) -> Result<(), OrderError> {
    if cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }
    if customer_name.trim().is_empty() {
        return Err(OrderError::MissingCustomerName);
    }
    if customer_phone.trim().is_empty() {
        return Err(OrderError::MissingCustomerPhone);
    }
    Ok(())
}

/// Render the order summary sent over WhatsApp.
///
/// Lines appear in cart order; amounts use two decimals with a dot separator.
pub fn order_message(
    cart: &Cart,
    customer_name: &str,
    customer_phone: &str,
) -> Result<String, OrderError> {
    validate(cart, customer_name, customer_phone)?;

    let items = cart
        .lines()
        .iter()
        .map(|line| {
            format!(
                "• {}x {} ({}cm) - R$ {}",
                line.quantity,
                line.product.name,
                line.product.size,
                format_amount(line.subtotal())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        "*NOVO PEDIDO - ARTESANATO SAGRADO*\n\n\
         *CLIENTE:* {customer_name}\n\
         *CONTATO:* {customer_phone}\n\n\
         *ITENS:*\n{items}\n\n\
         *TOTAL DO PEDIDO: R$ {}*",
        format_amount(cart.total_price())
    ))
}

/// Build the deep link that hands the order off to WhatsApp: the message from
/// [`order_message`], percent-encoded into the `text` query parameter.
pub fn order_link(
    cart: &Cart,
    customer_name: &str,
    customer_phone: &str,
) -> Result<String, OrderError> {
    let message = order_message(cart, customer_name, customer_phone)?;
    Ok(format!(
        "{WHATSAPP_BASE_URL}/{WHATSAPP_NUMBER}?text={}",
        urlencoding::encode(&message)
    ))
}
