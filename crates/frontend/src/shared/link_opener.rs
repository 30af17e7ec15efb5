//! Checkout handoff: building the WhatsApp link and opening it.
//!
//! Opening an external URI is the one side effect of checkout, so it sits
//! behind a single-method trait and the handler takes the opener as a
//! parameter. Tests pass a recording fake instead of touching the browser.

use contracts::domain::Cart;
use contracts::order::{order_link, OrderError};

pub trait LinkOpener {
    fn open(&self, url: &str);
}

/// Opens the link in a new browsing context via `window.open`.
pub struct WindowLinkOpener;

impl LinkOpener for WindowLinkOpener {
    fn open(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            log::error!("failed to open checkout link: {err:?}");
        }
    }
}

/// Build the order deep link for the cart and dispatch it through `opener`.
///
/// Fire-and-forget: nothing observes the opened conversation. On a validation
/// error no link is built and nothing is opened.
pub fn submit_order(
    cart: &Cart,
    customer_name: &str,
    customer_phone: &str,
    opener: &impl LinkOpener,
) -> Result<(), OrderError> {
    let url = order_link(cart, customer_name, customer_phone)?;
    opener.open(&url);
    Ok(())
}
