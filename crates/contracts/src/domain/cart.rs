//! Session-scoped shopping cart.
//!
//! The cart keeps one line per product, in the order products were first
//! added. That order is observable: the order message lists lines in it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::{Product, ProductId};

/// One product in the cart together with the selected quantity.
///
/// Invariant: `quantity >= 1`. A line whose quantity would drop to zero is
/// removed from the cart instead of being kept around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// The cart: a mapping from product id to a line, unique per id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Add one unit of `product`. Increments the existing line if the product
    /// is already in the cart, otherwise appends a new line with quantity 1.
    pub fn add(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            }),
        }
    }

    /// Change the quantity of the line for `id` by `delta`, clamping at zero.
    /// Reaching zero removes the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: ProductId, delta: i32) {
        let Some(index) = self.lines.iter().position(|l| l.product.id == id) else {
            return;
        };
        let new_quantity = (i64::from(self.lines[index].quantity) + i64::from(delta)).max(0);
        if new_quantity == 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = new_quantity as u32;
        }
    }

    /// Remove the line for `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|l| l.product.id != id);
    }

    /// Total number of units across all lines.
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `price * quantity` over all lines, decimal-exact.
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(|l| l.subtotal()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, name: &str, price: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            size: "30".to_string(),
            price: price.parse().unwrap(),
            image_url: None,
        }
    }

    #[test]
    fn test_add_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        let p = product(1, "São Jorge", "120.00");
        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product(2, "Oxum", "80.00"));
        cart.add(&product(1, "São Jorge", "120.00"));
        cart.add(&product(2, "Oxum", "80.00"));

        let names: Vec<&str> = cart.lines().iter().map(|l| l.product.name.as_str()).collect();
        assert_eq!(names, vec!["Oxum", "São Jorge"]);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, "São Jorge", "120.00"));
        cart.update_quantity(1, -1);

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_quantity_never_goes_negative() {
        let mut cart = Cart::new();
        cart.add(&product(1, "São Jorge", "120.00"));
        cart.update_quantity(1, -5);
        assert!(cart.is_empty());

        cart.add(&product(1, "São Jorge", "120.00"));
        cart.update_quantity(1, 3);
        cart.update_quantity(1, -2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, "São Jorge", "120.00"));
        cart.update_quantity(99, 1);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add(&product(1, "São Jorge", "120.00"));
        cart.add(&product(2, "Oxum", "80.00"));

        cart.remove(1);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].product.id, 2);

        // Unknown id is ignored.
        cart.remove(99);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        assert_eq!(cart.total_price(), Decimal::ZERO);
        assert_eq!(cart.total_items(), 0);

        cart.add(&product(1, "São Jorge", "120.00"));
        cart.add(&product(2, "Oxum", "80.00"));
        cart.update_quantity(2, 1);

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), "280.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_subtotal_is_exact() {
        // 0.10 * 3 must be exactly 0.30, not a float approximation.
        let mut cart = Cart::new();
        cart.add(&product(1, "Miniatura", "0.10"));
        cart.update_quantity(1, 2);
        assert_eq!(cart.total_price(), "0.30".parse::<Decimal>().unwrap());
    }
}
