use contracts::catalog::{catalog, filter_products};
use contracts::domain::{Cart, CategoryFilter, Product, ProductId};
use leptos::logging::log;
use leptos::prelude::*;

/// Application-wide UI state: the filter criteria, the cart, and whether the
/// cart drawer is open. One instance is provided at the root; every mutation
/// goes through the methods below, synchronously, on the UI thread.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub search_term: RwSignal<String>,
    pub active_category: RwSignal<CategoryFilter>,
    pub cart: RwSignal<Cart>,
    pub cart_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            search_term: RwSignal::new(String::new()),
            active_category: RwSignal::new(CategoryFilter::Todos),
            cart: RwSignal::new(Cart::new()),
            cart_open: RwSignal::new(false),
        }
    }

    /// The visible subset of the catalog for the current search term and
    /// category. Recomputed whenever either signal changes; cheap at catalog
    /// scale, so no memoization.
    pub fn filtered_products(&self) -> Vec<Product> {
        filter_products(
            catalog(),
            &self.search_term.get(),
            self.active_category.get(),
        )
    }

    pub fn set_search_term(&self, term: String) {
        self.search_term.set(term);
    }

    pub fn set_category(&self, category: CategoryFilter) {
        self.active_category.set(category);
    }

    pub fn reset_filters(&self) {
        self.search_term.set(String::new());
        self.active_category.set(CategoryFilter::Todos);
    }

    pub fn add_to_cart(&self, product: &Product) {
        log!("add to cart: '{}' (id {})", product.name, product.id);
        self.cart.update(|cart| cart.add(product));
    }

    pub fn update_quantity(&self, id: ProductId, delta: i32) {
        self.cart.update(|cart| cart.update_quantity(id, delta));
    }

    pub fn remove_item(&self, id: ProductId) {
        log!("remove from cart: id {}", id);
        self.cart.update(|cart| cart.remove(id));
    }

    pub fn total_cart_items(&self) -> u32 {
        self.cart.with(|cart| cart.total_items())
    }

    pub fn open_cart(&self) {
        self.cart_open.set(true);
    }

    pub fn close_cart(&self) {
        self.cart_open.set(false);
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
